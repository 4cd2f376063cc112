//! Plan warnings.
//!
//! Every rule violation found by the validator becomes a [`PlanWarning`].
//! `Error` severity marks a plan as invalid; `Warning` severity is advisory.

use serde::{Deserialize, Serialize};

use crate::models::Semester;

/// How serious a warning is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Plan is invalid (e.g., block saving).
    Error,
    /// Advisory only.
    Warning,
}

/// What rule a warning is about, with its details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WarningKind {
    /// Course placed more than once.
    Duplicate { semesters: Vec<Semester> },
    /// Prerequisites not completed before the course's semester.
    Prerequisite { missing: Vec<String> },
    /// Course not offered in the semester's term.
    TermOffered { term_offered: String },
    /// Semester credits above the cap.
    CreditCap { total_credits: f64, cap: f64 },
    /// Semester credits below the minimum.
    CreditMin { total_credits: f64, min: f64 },
    /// Course code not in the catalog.
    UnknownCourse,
}

impl WarningKind {
    /// Short tag, matching the serialized `type` field.
    pub fn tag(&self) -> &'static str {
        match self {
            WarningKind::Duplicate { .. } => "duplicate",
            WarningKind::Prerequisite { .. } => "prerequisite",
            WarningKind::TermOffered { .. } => "term_offered",
            WarningKind::CreditCap { .. } => "credit_cap",
            WarningKind::CreditMin { .. } => "credit_min",
            WarningKind::UnknownCourse => "unknown_course",
        }
    }
}

/// A localized plan violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanWarning {
    /// Rule and details.
    #[serde(flatten)]
    pub kind: WarningKind,
    /// Error or advisory.
    pub severity: Severity,
    /// Offending course; `None` for semester-level warnings.
    pub course_code: Option<String>,
    /// Semester the warning points at.
    pub semester: Option<Semester>,
    /// Human-readable description.
    pub message: String,
}

impl PlanWarning {
    /// Course repeated inside one semester.
    pub fn duplicate_in_semester(code: &str, semester: Semester) -> Self {
        Self {
            kind: WarningKind::Duplicate {
                semesters: vec![semester],
            },
            severity: Severity::Error,
            course_code: Some(code.to_string()),
            semester: Some(semester),
            message: format!("{code} is listed more than once in {semester}"),
        }
    }

    /// Course placed in several semesters.
    ///
    /// Points at the first repeat so a UI can jump to the redundant entry.
    pub fn duplicate_across(code: &str, semesters: Vec<Semester>) -> Self {
        let listed = join_semesters(&semesters);
        Self {
            semester: semesters.get(1).or(semesters.first()).copied(),
            kind: WarningKind::Duplicate { semesters },
            severity: Severity::Error,
            course_code: Some(code.to_string()),
            message: format!("{code} is planned in multiple semesters: {listed}"),
        }
    }

    /// Course already present in the plan being edited.
    pub fn already_planned(code: &str, target: Semester, existing: Vec<Semester>) -> Self {
        let listed = join_semesters(&existing);
        Self {
            kind: WarningKind::Duplicate {
                semesters: existing,
            },
            severity: Severity::Error,
            course_code: Some(code.to_string()),
            semester: Some(target),
            message: format!("{code} is already planned in {listed}"),
        }
    }

    /// Prerequisites missing before `semester`.
    pub fn missing_prerequisites(code: &str, semester: Semester, missing: Vec<String>) -> Self {
        let message = format!(
            "{code} in {semester} is missing prerequisites: {}",
            missing.join(", ")
        );
        Self {
            kind: WarningKind::Prerequisite { missing },
            severity: Severity::Error,
            course_code: Some(code.to_string()),
            semester: Some(semester),
            message,
        }
    }

    /// Course not offered in the semester's term.
    pub fn term_mismatch(code: &str, semester: Semester, term_offered: &str) -> Self {
        Self {
            kind: WarningKind::TermOffered {
                term_offered: term_offered.to_string(),
            },
            severity: Severity::Warning,
            course_code: Some(code.to_string()),
            semester: Some(semester),
            message: format!("{code} is typically offered {term_offered}, not in {semester}"),
        }
    }

    /// Semester credits above `cap`.
    pub fn credit_cap(semester: Semester, total_credits: f64, cap: f64) -> Self {
        Self {
            kind: WarningKind::CreditCap { total_credits, cap },
            severity: Severity::Warning,
            course_code: None,
            semester: Some(semester),
            message: format!("{semester} has {total_credits} credits, above the limit of {cap}"),
        }
    }

    /// Adding `code` would push the semester above `cap`.
    pub fn credit_cap_for(code: &str, semester: Semester, total_credits: f64, cap: f64) -> Self {
        Self {
            course_code: Some(code.to_string()),
            message: format!(
                "adding {code} brings {semester} to {total_credits} credits, above the limit of {cap}"
            ),
            ..Self::credit_cap(semester, total_credits, cap)
        }
    }

    /// Semester credits below `min`.
    pub fn credit_min(semester: Semester, total_credits: f64, min: f64) -> Self {
        Self {
            kind: WarningKind::CreditMin { total_credits, min },
            severity: Severity::Warning,
            course_code: None,
            semester: Some(semester),
            message: format!("{semester} has {total_credits} credits, below the minimum of {min}"),
        }
    }

    /// Course code not in the catalog.
    pub fn unknown_course(code: &str, semester: Semester) -> Self {
        Self {
            kind: WarningKind::UnknownCourse,
            severity: Severity::Warning,
            course_code: Some(code.to_string()),
            semester: Some(semester),
            message: format!("{code} was not found in the course catalog"),
        }
    }

    /// Whether this warning invalidates the plan.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

fn join_semesters(semesters: &[Semester]) -> String {
    semesters
        .iter()
        .map(Semester::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
