//! Prerequisite-ordered semester placement.
//!
//! # Algorithm
//!
//! 1. Drop completed and locked courses from the required set.
//! 2. Build the in-set prerequisite graph and reject cycles.
//! 3. Order courses topologically (prerequisites first, input order on ties).
//! 4. Reserve capacity for locked items in their semesters.
//! 5. Place each course in the earliest semester that is not the study-abroad
//!    term, comes strictly after all of its placed prerequisites, matches its
//!    term offering, and still has room.
//!
//! Courses that fit nowhere are reported in [`GeneratedPlan::unplaced`];
//! generation continues with the rest. A prerequisite cycle is the only
//! fatal error.
//!
//! # Complexity
//! O(n · s · p) where n = courses, s = semesters in the horizon,
//! p = prerequisites per course.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

use super::graph::DependencyGraph;
use super::summary::PlanSummary;
use crate::error::PlanError;
use crate::models::{semester_sequence, Course, CourseLookup, PlanItem, Semester};

/// Scheduler settings fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Maximum courses per semester, locked items included (default: 4).
    pub max_courses_per_semester: usize,
    /// Minimum planning horizon in years (default: 4).
    pub horizon_years: u32,
    /// Upper bound on the horizon, graduation year included (default: 12).
    pub max_horizon_years: u32,
    /// Also keep each semester's credits within the request's credit cap
    /// (default: false; the course count is the only hard bound).
    pub enforce_credit_cap: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_courses_per_semester: 4,
            horizon_years: 4,
            max_horizon_years: 12,
            enforce_credit_cap: false,
        }
    }
}

impl SchedulerConfig {
    /// Sets the per-semester course limit.
    pub fn with_max_courses(mut self, max_courses: usize) -> Self {
        self.max_courses_per_semester = max_courses;
        self
    }

    /// Sets the minimum horizon.
    pub fn with_horizon_years(mut self, years: u32) -> Self {
        self.horizon_years = years;
        self
    }

    /// Sets the horizon bound.
    pub fn with_max_horizon_years(mut self, years: u32) -> Self {
        self.max_horizon_years = years;
        self
    }

    /// Enables the credit cap as a hard placement bound.
    pub fn with_credit_cap_enforced(mut self, enforce: bool) -> Self {
        self.enforce_credit_cap = enforce;
        self
    }
}

/// Student planning preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanPreferences {
    /// Courses already completed; never scheduled and always satisfied
    /// as prerequisites.
    pub completed_courses: Vec<String>,
    /// Target graduation year; extends the horizon through its Spring term.
    pub graduation_year: Option<i32>,
    /// Semester that receives no newly scheduled courses.
    pub study_abroad: Option<Semester>,
}

impl PlanPreferences {
    /// Creates empty preferences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds completed course codes.
    pub fn with_completed<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.completed_courses.extend(codes.into_iter().map(Into::into));
        self
    }

    /// Sets the target graduation year.
    pub fn with_graduation_year(mut self, year: i32) -> Self {
        self.graduation_year = Some(year);
        self
    }

    /// Sets the study-abroad semester.
    pub fn with_study_abroad(mut self, semester: Semester) -> Self {
        self.study_abroad = Some(semester);
        self
    }
}

/// Input for one plan generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Course codes to schedule.
    pub required_courses: Vec<String>,
    /// Items already recorded for the student; locked ones are kept as-is.
    #[serde(default)]
    pub existing_plan: Vec<PlanItem>,
    /// Planning preferences.
    #[serde(default)]
    pub preferences: PlanPreferences,
    /// Advisory per-semester credit maximum (default: 18).
    #[serde(default = "default_credit_cap")]
    pub credit_cap: f64,
    /// Advisory per-semester credit minimum (default: 12).
    #[serde(default = "default_credit_min")]
    pub credit_min: f64,
    /// First planned year; the plan starts in its Fall term.
    pub start_year: i32,
}

fn default_credit_cap() -> f64 {
    18.0
}

fn default_credit_min() -> f64 {
    12.0
}

impl PlanRequest {
    /// Creates a request with default credit bounds and no existing plan.
    pub fn new<I, S>(required_courses: I, start_year: i32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required_courses: required_courses.into_iter().map(Into::into).collect(),
            existing_plan: Vec::new(),
            preferences: PlanPreferences::default(),
            credit_cap: default_credit_cap(),
            credit_min: default_credit_min(),
            start_year,
        }
    }

    /// Sets the existing plan.
    pub fn with_existing_plan(mut self, items: Vec<PlanItem>) -> Self {
        self.existing_plan = items;
        self
    }

    /// Sets the preferences.
    pub fn with_preferences(mut self, preferences: PlanPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Sets the credit bounds.
    pub fn with_credit_bounds(mut self, credit_min: f64, credit_cap: f64) -> Self {
        self.credit_min = credit_min;
        self.credit_cap = credit_cap;
        self
    }
}

/// Why a course could not be placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum UnplacedReason {
    /// Prerequisites were unplaced themselves, or land too late in the
    /// horizon to leave a later semester.
    PrerequisitesUnmet { missing: Vec<String> },
    /// No remaining semester matches the course's term offering.
    TermNotOffered { term_offered: String },
    /// Every otherwise eligible semester was full.
    NoCapacity,
    /// The horizon has no usable semester at all.
    NoEligibleSemester,
}

/// A required course left out of the generated plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnplacedCourse {
    /// Course code.
    pub course_code: String,
    /// Blocking constraint.
    #[serde(flatten)]
    pub reason: UnplacedReason,
}

/// Result of plan generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    /// Locked input items followed by newly placed courses.
    pub items: Vec<PlanItem>,
    /// Required courses that fit nowhere in the horizon.
    pub unplaced: Vec<UnplacedCourse>,
    /// Load indicators over `items`.
    pub summary: PlanSummary,
}

impl GeneratedPlan {
    /// Whether every required course was placed.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Semester of a course in the plan.
    pub fn semester_of(&self, code: &str) -> Option<Semester> {
        self.items
            .iter()
            .find(|item| item.course_code == code)
            .map(|item| item.semester)
    }

    /// Items scheduled in a semester.
    pub fn items_in(&self, semester: Semester) -> Vec<&PlanItem> {
        self.items
            .iter()
            .filter(|item| item.semester == semester)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct SemesterLoad {
    courses: usize,
    credits: f64,
}

/// First failing check for a candidate semester, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Blocker {
    StudyAbroad,
    Prerequisite,
    Term,
    Capacity,
}

/// Per-call placement state.
struct Placement<'r> {
    completed: HashSet<&'r str>,
    placed_in: HashMap<String, Semester>,
    load: HashMap<Semester, SemesterLoad>,
}

impl Placement<'_> {
    fn reserve(&mut self, code: &str, semester: Semester, credits: f64) {
        let load = self.load.entry(semester).or_default();
        load.courses += 1;
        load.credits += credits;
        self.placed_in
            .entry(code.to_string())
            .and_modify(|existing| *existing = (*existing).min(semester))
            .or_insert(semester);
    }

    fn load_of(&self, semester: Semester) -> SemesterLoad {
        self.load.get(&semester).copied().unwrap_or_default()
    }
}

/// Degree plan generator.
///
/// Holds a read-only catalog and fixed settings; every call works on its
/// own state, so one scheduler can serve concurrent requests.
///
/// # Example
///
/// ```
/// use u_curriculum::models::{Catalog, Course, Semester};
/// use u_curriculum::scheduler::{PlanRequest, Scheduler};
///
/// let catalog = Catalog::from_courses(vec![
///     Course::new("MATH151", 4.0),
///     Course::new("MATH152", 4.0).with_prerequisite("MATH151"),
/// ]);
/// let scheduler = Scheduler::new(catalog);
///
/// let plan = scheduler
///     .generate_plan(&PlanRequest::new(["MATH152", "MATH151"], 2024))
///     .unwrap();
/// assert_eq!(plan.semester_of("MATH151"), Some(Semester::fall(2024)));
/// assert_eq!(plan.semester_of("MATH152"), Some(Semester::spring(2025)));
/// ```
#[derive(Debug, Clone)]
pub struct Scheduler<C> {
    catalog: C,
    config: SchedulerConfig,
}

impl<C: CourseLookup> Scheduler<C> {
    /// Creates a scheduler with default settings.
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            config: SchedulerConfig::default(),
        }
    }

    /// Replaces the settings.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Current settings.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Generates a semester plan.
    ///
    /// Unlocked items of `existing_plan` are ignored; their courses are
    /// rescheduled if required. Catalog gaps are scheduled as 1-credit
    /// placeholders.
    ///
    /// # Errors
    /// [`PlanError::PrerequisiteCycle`] when the courses to schedule require
    /// each other in a loop. No partial plan is returned.
    pub fn generate_plan(&self, request: &PlanRequest) -> Result<GeneratedPlan, PlanError> {
        let completed: HashSet<&str> = request
            .preferences
            .completed_courses
            .iter()
            .map(String::as_str)
            .collect();
        let locked: Vec<&PlanItem> = request
            .existing_plan
            .iter()
            .filter(|item| item.is_locked)
            .collect();
        let locked_codes: HashSet<&str> =
            locked.iter().map(|item| item.course_code.as_str()).collect();

        let mut seen: HashSet<&str> = HashSet::new();
        let mut to_schedule: Vec<String> = Vec::new();
        for code in &request.required_courses {
            let code = code.as_str();
            if completed.contains(code) || locked_codes.contains(code) || !seen.insert(code) {
                continue;
            }
            to_schedule.push(code.to_string());
        }

        let graph = DependencyGraph::build(&to_schedule, &self.catalog);
        let order = graph.topological_order().inspect_err(|err| {
            warn!(error = %err, "plan generation aborted");
        })?;

        let semesters = self.horizon(request);

        let mut state = Placement {
            completed,
            placed_in: HashMap::new(),
            load: HashMap::new(),
        };
        let mut items: Vec<PlanItem> = Vec::with_capacity(locked.len() + order.len());
        for item in &locked {
            state.reserve(&item.course_code, item.semester, item.credits);
            items.push((*item).clone());
        }

        let mut unplaced = Vec::new();
        for code in &order {
            let placeholder;
            let course: &Course = match self.catalog.course(code) {
                Some(course) => course,
                None => {
                    debug!(course = %code, "not in catalog, scheduling placeholder");
                    placeholder = Course::placeholder(code.as_str());
                    &placeholder
                }
            };

            match self.place(course, &graph, &semesters, request, &state) {
                Ok(semester) => {
                    debug!(course = %code, semester = %semester, "placed");
                    state.reserve(code, semester, course.credits);
                    items.push(PlanItem::new(code.as_str(), semester, course.credits));
                }
                Err(reason) => {
                    warn!(course = %code, reason = ?reason, "course could not be placed");
                    unplaced.push(UnplacedCourse {
                        course_code: code.clone(),
                        reason,
                    });
                }
            }
        }

        let summary = PlanSummary::calculate(&items, request.credit_cap, request.credit_min);
        info!(
            locked = locked.len(),
            placed = items.len() - locked.len(),
            unplaced = unplaced.len(),
            semesters = summary.semester_count,
            "plan generated"
        );

        Ok(GeneratedPlan {
            items,
            unplaced,
            summary,
        })
    }

    /// Candidate semesters, bounded by `max_horizon_years`.
    fn horizon(&self, request: &PlanRequest) -> Vec<Semester> {
        let max_years = self.config.max_horizon_years;
        let latest = request
            .start_year
            .saturating_add(i32::try_from(max_years).unwrap_or(i32::MAX));
        let graduation_year = request.preferences.graduation_year.map(|year| {
            if year > latest {
                debug!(graduation_year = year, latest, "graduation year beyond horizon bound");
            }
            year.min(latest)
        });
        semester_sequence(
            request.start_year,
            self.config.horizon_years.min(max_years),
            graduation_year,
        )
    }

    /// Finds the earliest semester for `course`.
    fn place(
        &self,
        course: &Course,
        graph: &DependencyGraph,
        semesters: &[Semester],
        request: &PlanRequest,
        state: &Placement<'_>,
    ) -> Result<Semester, UnplacedReason> {
        // An in-set prerequisite that is still unplaced was itself rejected
        // earlier in topological order.
        let mut blocked_by: Vec<String> = Vec::new();
        let mut placed_prereqs: Vec<(&str, Semester)> = Vec::new();
        for prereq in &course.prerequisites {
            if state.completed.contains(prereq.as_str()) {
                continue;
            }
            match state.placed_in.get(prereq) {
                Some(&semester) => placed_prereqs.push((prereq.as_str(), semester)),
                None if graph.contains(prereq) => blocked_by.push(prereq.clone()),
                None => {
                    debug!(
                        course = %course.code,
                        prerequisite = %prereq,
                        "prerequisite outside the plan, assumed satisfied"
                    );
                }
            }
        }
        if !blocked_by.is_empty() {
            return Err(UnplacedReason::PrerequisitesUnmet {
                missing: blocked_by,
            });
        }

        let mut furthest: Option<Blocker> = None;
        for &semester in semesters {
            let blocker = self.check_semester(course, semester, &placed_prereqs, request, state);
            match blocker {
                None => return Ok(semester),
                Some(b) => furthest = furthest.max(Some(b)),
            }
        }

        Err(match furthest {
            Some(Blocker::Capacity) => UnplacedReason::NoCapacity,
            Some(Blocker::Term) => UnplacedReason::TermNotOffered {
                term_offered: course.term_offered.clone().unwrap_or_default(),
            },
            Some(Blocker::Prerequisite) => {
                // Measured against the last semester open for placement; a
                // trailing study-abroad term would hide the late prerequisite.
                let last = semesters
                    .iter()
                    .rev()
                    .copied()
                    .find(|&semester| request.preferences.study_abroad != Some(semester))
                    .unwrap_or(Semester::Prior);
                UnplacedReason::PrerequisitesUnmet {
                    missing: placed_prereqs
                        .iter()
                        .filter(|(_, semester)| *semester >= last)
                        .map(|(code, _)| code.to_string())
                        .collect(),
                }
            }
            Some(Blocker::StudyAbroad) | None => UnplacedReason::NoEligibleSemester,
        })
    }

    /// Returns the first constraint `semester` fails for `course`.
    fn check_semester(
        &self,
        course: &Course,
        semester: Semester,
        placed_prereqs: &[(&str, Semester)],
        request: &PlanRequest,
        state: &Placement<'_>,
    ) -> Option<Blocker> {
        if request.preferences.study_abroad == Some(semester) {
            return Some(Blocker::StudyAbroad);
        }
        if placed_prereqs.iter().any(|(_, placed)| *placed >= semester) {
            return Some(Blocker::Prerequisite);
        }
        match semester.season() {
            Some(season) if course.is_offered_in(season) => {}
            _ => return Some(Blocker::Term),
        }

        let load = state.load_of(semester);
        if load.courses >= self.config.max_courses_per_semester {
            return Some(Blocker::Capacity);
        }
        if self.config.enforce_credit_cap && load.credits + course.credits > request.credit_cap {
            return Some(Blocker::Capacity);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Catalog;

    fn chain_catalog(len: usize) -> Catalog {
        (1..=len)
            .map(|i| {
                let course = Course::new(format!("C{i}"), 3.0);
                if i > 1 {
                    course.with_prerequisite(format!("C{}", i - 1))
                } else {
                    course
                }
            })
            .collect()
    }

    fn independent(count: usize) -> (Catalog, Vec<String>) {
        let codes: Vec<String> = (0..count).map(|i| format!("IND{i:02}")).collect();
        let catalog = codes.iter().map(|c| Course::new(c.as_str(), 3.0)).collect();
        (catalog, codes)
    }

    #[test]
    fn test_prerequisite_placed_earlier() {
        let catalog = Catalog::from_courses(vec![
            Course::new("MATH151", 4.0),
            Course::new("MATH152", 4.0).with_prerequisite("MATH151"),
        ]);
        let scheduler = Scheduler::new(catalog);
        let plan = scheduler
            .generate_plan(&PlanRequest::new(["MATH152", "MATH151"], 2024))
            .unwrap();

        assert_eq!(plan.semester_of("MATH151"), Some(Semester::fall(2024)));
        assert_eq!(plan.semester_of("MATH152"), Some(Semester::spring(2025)));
        assert!(plan.is_complete());
        assert_eq!(plan.items[0].credits, 4.0);
    }

    #[test]
    fn test_completed_courses_skipped_and_satisfied() {
        let catalog = Catalog::from_courses(vec![
            Course::new("MATH151", 4.0),
            Course::new("MATH152", 4.0).with_prerequisite("MATH151"),
        ]);
        let scheduler = Scheduler::new(catalog);
        let request = PlanRequest::new(["MATH151", "MATH152"], 2024)
            .with_preferences(PlanPreferences::new().with_completed(["MATH151"]));
        let plan = scheduler.generate_plan(&request).unwrap();

        assert_eq!(plan.semester_of("MATH151"), None);
        assert_eq!(plan.semester_of("MATH152"), Some(Semester::fall(2024)));
    }

    #[test]
    fn test_capacity_limit() {
        let (catalog, codes) = independent(10);
        let scheduler = Scheduler::new(catalog);
        let plan = scheduler
            .generate_plan(&PlanRequest::new(codes, 2024))
            .unwrap();

        assert_eq!(plan.items_in(Semester::fall(2024)).len(), 4);
        assert_eq!(plan.items_in(Semester::spring(2025)).len(), 4);
        assert_eq!(plan.items_in(Semester::fall(2025)).len(), 2);
    }

    #[test]
    fn test_custom_capacity() {
        let (catalog, codes) = independent(5);
        let scheduler =
            Scheduler::new(catalog).with_config(SchedulerConfig::default().with_max_courses(5));
        let plan = scheduler
            .generate_plan(&PlanRequest::new(codes, 2024))
            .unwrap();
        assert_eq!(plan.items_in(Semester::fall(2024)).len(), 5);
    }

    #[test]
    fn test_locked_items_reserve_capacity() {
        let (catalog, codes) = independent(4);
        let existing = vec![
            PlanItem::locked("LOCK1", Semester::fall(2024), 3.0),
            PlanItem::locked("LOCK2", Semester::fall(2024), 3.0),
            PlanItem::new("IND00", Semester::fall(2026), 3.0),
        ];
        let scheduler = Scheduler::new(catalog);
        let request = PlanRequest::new(codes, 2024).with_existing_plan(existing);
        let plan = scheduler.generate_plan(&request).unwrap();

        // Two locked + two new in Fall; unlocked IND00 is rescheduled.
        assert_eq!(plan.items_in(Semester::fall(2024)).len(), 4);
        assert_eq!(plan.items_in(Semester::spring(2025)).len(), 2);
        assert_eq!(plan.semester_of("IND00"), Some(Semester::fall(2024)));
        assert!(plan.items[0].is_locked && plan.items[1].is_locked);
        assert_eq!(plan.items.len(), 6);
    }

    #[test]
    fn test_locked_required_course_not_rescheduled() {
        let catalog = Catalog::from_courses(vec![
            Course::new("A", 3.0),
            Course::new("B", 3.0).with_prerequisite("A"),
        ]);
        let existing = vec![PlanItem::locked("A", Semester::spring(2025), 3.0)];
        let scheduler = Scheduler::new(catalog);
        let request = PlanRequest::new(["A", "B"], 2024).with_existing_plan(existing);
        let plan = scheduler.generate_plan(&request).unwrap();

        let a_items: Vec<_> = plan.items.iter().filter(|i| i.course_code == "A").collect();
        assert_eq!(a_items.len(), 1);
        assert!(a_items[0].is_locked);
        // B must follow the locked A
        assert_eq!(plan.semester_of("B"), Some(Semester::fall(2025)));
    }

    #[test]
    fn test_prior_bucket_satisfies_prerequisites() {
        let catalog = Catalog::from_courses(vec![
            Course::new("A", 3.0),
            Course::new("B", 3.0).with_prerequisite("A"),
        ]);
        let existing = vec![PlanItem::locked("A", Semester::Prior, 3.0)];
        let scheduler = Scheduler::new(catalog);
        let request = PlanRequest::new(["A", "B"], 2024).with_existing_plan(existing);
        let plan = scheduler.generate_plan(&request).unwrap();
        assert_eq!(plan.semester_of("B"), Some(Semester::fall(2024)));
    }

    #[test]
    fn test_term_offering_respected() {
        let catalog = Catalog::from_courses(vec![
            Course::new("SPR", 3.0).with_term_offered("Spring"),
            Course::new("FAL", 3.0).with_term_offered("Fall only"),
        ]);
        let scheduler = Scheduler::new(catalog);
        let plan = scheduler
            .generate_plan(&PlanRequest::new(["SPR", "FAL"], 2024))
            .unwrap();
        assert_eq!(plan.semester_of("SPR"), Some(Semester::spring(2025)));
        assert_eq!(plan.semester_of("FAL"), Some(Semester::fall(2024)));
    }

    #[test]
    fn test_study_abroad_semester_empty() {
        let (catalog, codes) = independent(12);
        let abroad = Semester::fall(2025);
        let scheduler = Scheduler::new(catalog);
        let request = PlanRequest::new(codes, 2024)
            .with_preferences(PlanPreferences::new().with_study_abroad(abroad));
        let plan = scheduler.generate_plan(&request).unwrap();

        assert!(plan.items_in(abroad).is_empty());
        assert_eq!(plan.items_in(Semester::spring(2026)).len(), 4);
    }

    #[test]
    fn test_cycle_is_fatal() {
        let catalog = Catalog::from_courses(vec![
            Course::new("A", 3.0).with_prerequisite("B"),
            Course::new("B", 3.0).with_prerequisite("C"),
            Course::new("C", 3.0).with_prerequisite("A"),
        ]);
        let scheduler = Scheduler::new(catalog);
        let err = scheduler
            .generate_plan(&PlanRequest::new(["A", "B", "C"], 2024))
            .unwrap_err();
        assert!(matches!(err, PlanError::PrerequisiteCycle { ref cycle } if cycle.len() == 4));
    }

    #[test]
    fn test_missing_catalog_course_placeholder() {
        let scheduler = Scheduler::new(Catalog::default());
        let plan = scheduler
            .generate_plan(&PlanRequest::new(["GHOST 101"], 2024))
            .unwrap();
        assert_eq!(plan.items.len(), 1);
        assert_eq!(plan.items[0].credits, 1.0);
        assert_eq!(plan.items[0].semester, Semester::fall(2024));
    }

    #[test]
    fn test_external_prerequisite_lenient() {
        let catalog =
            Catalog::from_courses(vec![Course::new("B", 3.0).with_prerequisite("NOT_REQUIRED")]);
        let scheduler = Scheduler::new(catalog);
        let plan = scheduler
            .generate_plan(&PlanRequest::new(["B"], 2024))
            .unwrap();
        assert_eq!(plan.semester_of("B"), Some(Semester::fall(2024)));
    }

    #[test]
    fn test_chain_longer_than_horizon() {
        // 10 chained courses, 8 semesters: C9 and C10 cannot fit.
        let catalog = chain_catalog(10);
        let codes: Vec<String> = (1..=10).map(|i| format!("C{i}")).collect();
        let scheduler = Scheduler::new(catalog);
        let plan = scheduler
            .generate_plan(&PlanRequest::new(codes, 2024))
            .unwrap();

        assert_eq!(plan.semester_of("C8"), Some(Semester::spring(2028)));
        assert_eq!(plan.unplaced.len(), 2);
        assert_eq!(
            plan.unplaced[0],
            UnplacedCourse {
                course_code: "C9".into(),
                reason: UnplacedReason::PrerequisitesUnmet {
                    missing: vec!["C8".into()]
                },
            }
        );
        assert_eq!(
            plan.unplaced[1].reason,
            UnplacedReason::PrerequisitesUnmet {
                missing: vec!["C9".into()]
            }
        );
    }

    #[test]
    fn test_chain_blocked_by_trailing_study_abroad() {
        // C7 lands in 2027 Fall; the only later term is abroad.
        let catalog = chain_catalog(8);
        let codes: Vec<String> = (1..=8).map(|i| format!("C{i}")).collect();
        let scheduler = Scheduler::new(catalog);
        let request = PlanRequest::new(codes, 2024).with_preferences(
            PlanPreferences::new().with_study_abroad(Semester::spring(2028)),
        );
        let plan = scheduler.generate_plan(&request).unwrap();

        assert_eq!(plan.semester_of("C7"), Some(Semester::fall(2027)));
        assert_eq!(
            plan.unplaced,
            vec![UnplacedCourse {
                course_code: "C8".into(),
                reason: UnplacedReason::PrerequisitesUnmet {
                    missing: vec!["C7".into()]
                },
            }]
        );
    }

    #[test]
    fn test_extreme_graduation_year_is_bounded() {
        let (catalog, codes) = independent(2);
        let scheduler = Scheduler::new(catalog)
            .with_config(SchedulerConfig::default().with_max_horizon_years(6));

        for year in [i32::MIN, i32::MAX] {
            let request = PlanRequest::new(codes.clone(), 2024)
                .with_preferences(PlanPreferences::new().with_graduation_year(year));
            let plan = scheduler.generate_plan(&request).unwrap();
            assert!(plan.is_complete());
            assert!(plan.items.iter().all(|i| i.semester <= Semester::spring(2030)));
        }

        let request = PlanRequest::new(codes, i32::MAX);
        let plan = scheduler.generate_plan(&request).unwrap();
        assert_eq!(plan.semester_of("IND00"), Some(Semester::fall(i32::MAX)));
        assert_eq!(plan.summary.semester_count, 1);
    }

    #[test]
    fn test_graduation_year_extends_horizon() {
        let catalog = chain_catalog(10);
        let codes: Vec<String> = (1..=10).map(|i| format!("C{i}")).collect();
        let scheduler = Scheduler::new(catalog);
        let request = PlanRequest::new(codes, 2024)
            .with_preferences(PlanPreferences::new().with_graduation_year(2029));
        let plan = scheduler.generate_plan(&request).unwrap();

        assert!(plan.is_complete());
        assert_eq!(plan.semester_of("C10"), Some(Semester::spring(2029)));
    }

    #[test]
    fn test_no_capacity_reason() {
        let (catalog, codes) = independent(33);
        let scheduler = Scheduler::new(catalog);
        let plan = scheduler
            .generate_plan(&PlanRequest::new(codes, 2024))
            .unwrap();
        assert_eq!(plan.unplaced.len(), 1);
        assert_eq!(plan.unplaced[0].course_code, "IND32");
        assert_eq!(plan.unplaced[0].reason, UnplacedReason::NoCapacity);
    }

    #[test]
    fn test_term_not_offered_reason() {
        let catalog = Catalog::from_courses(vec![Course::new("SUM", 3.0).with_term_offered("Summer")]);
        let scheduler = Scheduler::new(catalog);
        let plan = scheduler
            .generate_plan(&PlanRequest::new(["SUM"], 2024))
            .unwrap();
        assert_eq!(
            plan.unplaced[0].reason,
            UnplacedReason::TermNotOffered {
                term_offered: "Summer".into()
            }
        );
    }

    #[test]
    fn test_credit_cap_enforced_when_enabled() {
        let catalog = Catalog::from_courses(vec![
            Course::new("BIG1", 6.0),
            Course::new("BIG2", 6.0),
            Course::new("BIG3", 6.0),
        ]);
        let scheduler = Scheduler::new(catalog)
            .with_config(SchedulerConfig::default().with_credit_cap_enforced(true));
        let request = PlanRequest::new(["BIG1", "BIG2", "BIG3"], 2024).with_credit_bounds(0.0, 12.0);
        let plan = scheduler.generate_plan(&request).unwrap();

        assert_eq!(plan.items_in(Semester::fall(2024)).len(), 2);
        assert_eq!(plan.semester_of("BIG3"), Some(Semester::spring(2025)));
    }

    #[test]
    fn test_deterministic() {
        let catalog = Catalog::from_courses(vec![
            Course::new("A", 3.0),
            Course::new("B", 3.0).with_prerequisite("A"),
            Course::new("C", 4.0).with_term_offered("Spring"),
            Course::new("D", 3.0).with_prerequisite("B").with_prerequisite("C"),
            Course::new("E", 1.0),
        ]);
        let scheduler = Scheduler::new(catalog);
        let request = PlanRequest::new(["D", "E", "C", "B", "A"], 2024);

        let first = scheduler.generate_plan(&request).unwrap();
        let second = scheduler.generate_plan(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_summary_attached() {
        let (catalog, codes) = independent(2);
        let scheduler = Scheduler::new(catalog);
        let plan = scheduler
            .generate_plan(&PlanRequest::new(codes, 2024))
            .unwrap();
        assert!((plan.summary.total_credits - 6.0).abs() < 1e-10);
        assert_eq!(plan.summary.underloaded, vec![Semester::fall(2024)]);
    }

    #[test]
    fn test_config_deserialize_defaults() {
        let config: SchedulerConfig = serde_json::from_str(r#"{"horizon_years": 5}"#).unwrap();
        assert_eq!(config.horizon_years, 5);
        assert_eq!(config.max_courses_per_semester, 4);
        assert_eq!(config.max_horizon_years, 12);
        assert!(!config.enforce_credit_cap);
    }

    #[test]
    fn test_request_deserialize() {
        let request: PlanRequest = serde_json::from_str(
            r#"{
                "required_courses": ["A"],
                "start_year": 2024,
                "preferences": {"study_abroad": "2025 Fall"}
            }"#,
        )
        .unwrap();
        assert_eq!(request.credit_cap, 18.0);
        assert_eq!(request.credit_min, 12.0);
        assert_eq!(request.preferences.study_abroad, Some(Semester::fall(2025)));
    }
}
