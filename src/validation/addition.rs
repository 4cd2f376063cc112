//! Single-addition validation.
//!
//! Used when a student adds or moves one course interactively. Only the
//! new course is checked against the existing plan; the rest of the plan
//! is assumed to have been validated already.

use std::collections::HashSet;
use tracing::debug;

use super::plan::{missing_prerequisites, term_warning, PlanValidator};
use super::PlanWarning;
use crate::models::{CourseLookup, PlanItem, Semester};

impl<C: CourseLookup> PlanValidator<C> {
    /// Validates adding one course to an existing plan.
    ///
    /// Checks, in order: already planned (error), unknown course (warning,
    /// stops further checks), missing prerequisites (error), semester credit
    /// cap (warning, not applied to `Prior`), term offering (warning).
    pub fn validate_course_addition(
        &self,
        code: &str,
        semester: Semester,
        existing_plan: &[PlanItem],
        prior_completed: &[String],
        credit_cap: f64,
    ) -> Vec<PlanWarning> {
        let mut warnings = Vec::new();

        let mut existing: Vec<Semester> = existing_plan
            .iter()
            .filter(|item| item.course_code == code)
            .map(|item| item.semester)
            .collect();
        if !existing.is_empty() {
            existing.sort();
            existing.dedup();
            warnings.push(PlanWarning::already_planned(code, semester, existing));
        }

        let Some(course) = self.catalog.course(code) else {
            warnings.push(PlanWarning::unknown_course(code, semester));
            return warnings;
        };

        let completed: HashSet<&str> = prior_completed
            .iter()
            .map(String::as_str)
            .chain(
                existing_plan
                    .iter()
                    .filter(|item| item.semester < semester)
                    .map(|item| item.course_code.as_str()),
            )
            .collect();
        let missing = missing_prerequisites(course, &completed);
        if !missing.is_empty() {
            warnings.push(PlanWarning::missing_prerequisites(code, semester, missing));
        }

        if !semester.is_prior() {
            let current: f64 = existing_plan
                .iter()
                .filter(|item| item.semester == semester)
                .map(|item| self.item_credits(item))
                .sum();
            let total_credits = current + course.credits;
            if total_credits > credit_cap {
                warnings.push(PlanWarning::credit_cap_for(
                    code,
                    semester,
                    total_credits,
                    credit_cap,
                ));
            }
        }

        if let Some(warning) = term_warning(course, semester) {
            warnings.push(warning);
        }

        debug!(course = %code, semester = %semester, warnings = warnings.len(), "addition validated");
        warnings
    }
}
