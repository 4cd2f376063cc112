//! Fatal planning errors.

use thiserror::Error;

/// Errors that abort plan generation.
///
/// Everything else the engine meets (unplaceable courses, catalog gaps,
/// rule violations) is reported in the result instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The courses to schedule require each other in a loop.
    ///
    /// `cycle` starts and ends on the same course code.
    #[error(
        "prerequisite cycle detected: {} (these courses require each other; fix the catalog prerequisites)",
        .cycle.join(" -> ")
    )]
    PrerequisiteCycle { cycle: Vec<String> },
}
