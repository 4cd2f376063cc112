//! Whole-plan validation.
//!
//! Checks, per semester in calendar order:
//! 1. Duplicate codes inside the semester
//! 2. Prerequisites completed in an earlier semester or before the plan
//! 3. Term offering matches the semester
//! 4. Semester credits within the cap (and above the minimum, if configured)
//!
//! Then, across the plan, codes placed in more than one semester.
//!
//! Single-course checks for interactive edits live in `addition`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

use super::{PlanWarning, RequirementsProgress};
use crate::models::{group_by_semester, Course, CourseLookup, PlanItem, RequirementGroup, Semester};

/// Outcome of validating a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// `true` iff no warning has `Error` severity.
    pub is_valid: bool,
    /// All findings, semester checks first, plan-wide duplicates last.
    pub warnings: Vec<PlanWarning>,
    /// Requirement coverage, when requirement groups were supplied.
    pub requirements_progress: Option<RequirementsProgress>,
}

impl ValidationReport {
    /// Error-severity warnings.
    pub fn errors(&self) -> impl Iterator<Item = &PlanWarning> {
        self.warnings.iter().filter(|w| w.is_error())
    }

    /// Warnings with the given tag (e.g., "credit_cap").
    pub fn with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a PlanWarning> + 'a {
        self.warnings.iter().filter(move |w| w.kind.tag() == tag)
    }
}

/// Plan validator over a read-only catalog.
///
/// # Example
///
/// ```
/// use u_curriculum::models::{Catalog, Course, PlanItem, Semester};
/// use u_curriculum::validation::PlanValidator;
///
/// let catalog = Catalog::from_courses(vec![
///     Course::new("A", 3.0),
///     Course::new("B", 3.0).with_prerequisite("A"),
/// ]);
/// let validator = PlanValidator::new(catalog);
///
/// let plan = vec![
///     PlanItem::new("B", Semester::fall(2024), 3.0),
///     PlanItem::new("A", Semester::spring(2025), 3.0),
/// ];
/// let report = validator.validate_plan(&plan, None, &[], 18.0);
/// assert!(!report.is_valid);
/// ```
#[derive(Debug, Clone)]
pub struct PlanValidator<C> {
    pub(super) catalog: C,
    credit_min: Option<f64>,
}

impl<C: CourseLookup> PlanValidator<C> {
    /// Creates a validator.
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            credit_min: None,
        }
    }

    /// Also flag dated semesters below `credit_min` credits.
    pub fn with_credit_min(mut self, credit_min: f64) -> Self {
        self.credit_min = Some(credit_min);
        self
    }

    /// Validates a full plan.
    ///
    /// Never fails: unknown courses and rule violations all become warnings.
    /// The `Prior` bucket is exempt from term and credit checks.
    pub fn validate_plan(
        &self,
        items: &[PlanItem],
        requirement_groups: Option<&[RequirementGroup]>,
        prior_completed: &[String],
        credit_cap: f64,
    ) -> ValidationReport {
        let mut warnings = Vec::new();
        let mut completed: HashSet<&str> = prior_completed.iter().map(String::as_str).collect();

        let grouped = group_by_semester(items);
        for (&semester, semester_items) in &grouped {
            let mut seen: HashSet<&str> = HashSet::new();
            let mut reported: HashSet<&str> = HashSet::new();
            let mut total_credits = 0.0;

            for item in semester_items {
                let code = item.course_code.as_str();
                total_credits += self.item_credits(item);
                if !seen.insert(code) {
                    // Repeats count toward load but are checked once.
                    if reported.insert(code) {
                        warnings.push(PlanWarning::duplicate_in_semester(code, semester));
                    }
                    continue;
                }

                let Some(course) = self.catalog.course(code) else {
                    warnings.push(PlanWarning::unknown_course(code, semester));
                    continue;
                };

                let missing = missing_prerequisites(course, &completed);
                if !missing.is_empty() {
                    warnings.push(PlanWarning::missing_prerequisites(code, semester, missing));
                }
                if let Some(warning) = term_warning(course, semester) {
                    warnings.push(warning);
                }
            }

            if !semester.is_prior() {
                if total_credits > credit_cap {
                    warnings.push(PlanWarning::credit_cap(semester, total_credits, credit_cap));
                }
                if let Some(min) = self.credit_min {
                    if total_credits < min {
                        warnings.push(PlanWarning::credit_min(semester, total_credits, min));
                    }
                }
            }

            completed.extend(semester_items.iter().map(|i| i.course_code.as_str()));
        }

        warnings.extend(cross_semester_duplicates(&grouped));

        let is_valid = !warnings.iter().any(PlanWarning::is_error);
        let requirements_progress = requirement_groups
            .map(|groups| RequirementsProgress::compute(groups, prior_completed, items));

        debug!(
            items = items.len(),
            warnings = warnings.len(),
            is_valid,
            "plan validated"
        );

        ValidationReport {
            is_valid,
            warnings,
            requirements_progress,
        }
    }

    /// Catalog credits, falling back to the credits recorded on the item.
    pub(super) fn item_credits(&self, item: &PlanItem) -> f64 {
        self.catalog
            .course(&item.course_code)
            .map_or(item.credits, |course| course.credits)
    }
}

pub(super) fn missing_prerequisites(course: &Course, completed: &HashSet<&str>) -> Vec<String> {
    course
        .prerequisites
        .iter()
        .filter(|p| !completed.contains(p.as_str()))
        .cloned()
        .collect()
}

pub(super) fn term_warning(course: &Course, semester: Semester) -> Option<PlanWarning> {
    let season = semester.season()?;
    if course.is_offered_in(season) {
        return None;
    }
    let offered = course.term_offered.as_deref().unwrap_or_default();
    Some(PlanWarning::term_mismatch(&course.code, semester, offered))
}

/// Codes that appear in more than one semester, in order of first sight.
fn cross_semester_duplicates(
    grouped: &BTreeMap<Semester, Vec<&PlanItem>>,
) -> Vec<PlanWarning> {
    let mut order: Vec<&str> = Vec::new();
    let mut semesters_of: HashMap<&str, Vec<Semester>> = HashMap::new();

    for (&semester, items) in grouped {
        for item in items {
            let code = item.course_code.as_str();
            let semesters = semesters_of.entry(code).or_insert_with(|| {
                order.push(code);
                Vec::new()
            });
            if semesters.last() != Some(&semester) {
                semesters.push(semester);
            }
        }
    }

    order
        .into_iter()
        .filter_map(|code| {
            let semesters = semesters_of.remove(code)?;
            (semesters.len() > 1).then(|| PlanWarning::duplicate_across(code, semesters))
        })
        .collect()
}
