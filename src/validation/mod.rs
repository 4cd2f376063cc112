//! Degree plan validation.
//!
//! Checks an arbitrary plan, generated or hand-edited, against the same
//! rules the scheduler follows and reports every violation as a localized
//! [`PlanWarning`]:
//! - Duplicate placements (within a semester and across semesters)
//! - Prerequisites not completed strictly earlier
//! - Term-offering mismatches
//! - Semester credit overload (and, optionally, underload)
//! - Course codes missing from the catalog
//!
//! Validation never fails; callers decide how to present `Error` versus
//! `Warning` severities.

mod addition;
mod plan;
mod progress;
mod warning;

pub use plan::{PlanValidator, ValidationReport};
pub use progress::{GroupProgress, RequirementsProgress};
pub use warning::{PlanWarning, Severity, WarningKind};
