//! Plan load summary.
//!
//! Aggregate load indicators for a plan, used to show students how their
//! work is spread over the planning horizon.
//!
//! | Indicator | Definition |
//! |-----------|-----------|
//! | Total credits | Sum over every item, prior work included |
//! | Final semester | Latest dated semester with a course (expected graduation) |
//! | Overloaded | Dated semesters whose credits exceed the cap |
//! | Underloaded | Non-empty dated semesters below the minimum |
//! | Average credits | Mean credits over dated semesters in use |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{PlanItem, Semester};

/// Load indicators for a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Sum of credits across all items.
    pub total_credits: f64,
    /// Number of items.
    pub course_count: usize,
    /// Number of dated semesters holding at least one course.
    pub semester_count: usize,
    /// Credits per semester, chronological.
    pub credits_by_semester: BTreeMap<Semester, f64>,
    /// Latest dated semester holding a course.
    pub final_semester: Option<Semester>,
    /// Semesters above the credit cap.
    pub overloaded: Vec<Semester>,
    /// Semesters below the credit minimum.
    pub underloaded: Vec<Semester>,
    /// Mean credits per dated semester in use.
    pub average_credits: f64,
}

impl PlanSummary {
    /// Computes the summary from plan items.
    ///
    /// The `Prior` bucket counts toward totals but not toward per-term load.
    pub fn calculate(items: &[PlanItem], credit_cap: f64, credit_min: f64) -> Self {
        let mut credits_by_semester: BTreeMap<Semester, f64> = BTreeMap::new();
        for item in items {
            *credits_by_semester.entry(item.semester).or_insert(0.0) += item.credits;
        }

        let total_credits: f64 = credits_by_semester.values().sum();
        let dated: Vec<(Semester, f64)> = credits_by_semester
            .iter()
            .filter(|(sem, _)| !sem.is_prior())
            .map(|(sem, credits)| (*sem, *credits))
            .collect();

        let overloaded = dated
            .iter()
            .filter(|(_, credits)| *credits > credit_cap)
            .map(|(sem, _)| *sem)
            .collect();
        let underloaded = dated
            .iter()
            .filter(|(_, credits)| *credits < credit_min)
            .map(|(sem, _)| *sem)
            .collect();

        let average_credits = if dated.is_empty() {
            0.0
        } else {
            dated.iter().map(|(_, c)| c).sum::<f64>() / dated.len() as f64
        };

        Self {
            total_credits,
            course_count: items.len(),
            semester_count: dated.len(),
            final_semester: dated.last().map(|(sem, _)| *sem),
            credits_by_semester,
            overloaded,
            underloaded,
            average_credits,
        }
    }

    /// Whether every dated semester sits within `[credit_min, credit_cap]`.
    pub fn is_balanced(&self) -> bool {
        self.overloaded.is_empty() && self.underloaded.is_empty()
    }
}
