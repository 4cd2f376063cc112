//! Requirement progress.
//!
//! Partitions each requirement group's courses into completed (prior
//! work), planned (in the plan, not prior work) and remaining (neither),
//! then aggregates how many groups are satisfied.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{GroupKind, PlanItem, RequirementGroup};

/// Progress on one requirement group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupProgress {
    /// Group name.
    pub name: String,
    /// Satisfaction rule.
    pub kind: GroupKind,
    /// Courses finished before the plan.
    pub completed: Vec<String>,
    /// Courses in the plan that are not prior work.
    pub planned: Vec<String>,
    /// Courses neither completed nor planned.
    pub remaining: Vec<String>,
    /// Whether the group's rule is satisfied.
    pub is_complete: bool,
    /// Share of the group covered (0.0..=1.0).
    pub fraction: f64,
}

impl GroupProgress {
    fn compute(group: &RequirementGroup, prior: &HashSet<&str>, planned: &HashSet<&str>) -> Self {
        let mut done = Vec::new();
        let mut in_plan = Vec::new();
        let mut remaining = Vec::new();

        for code in &group.courses {
            if prior.contains(code.as_str()) {
                done.push(code.clone());
            } else if planned.contains(code.as_str()) {
                in_plan.push(code.clone());
            } else {
                remaining.push(code.clone());
            }
        }

        let covered = done.len() + in_plan.len();
        let (is_complete, fraction) = match group.kind {
            GroupKind::All => {
                let fraction = if group.courses.is_empty() {
                    1.0
                } else {
                    covered as f64 / group.courses.len() as f64
                };
                (remaining.is_empty(), fraction)
            }
            GroupKind::Choice => (covered > 0, if covered > 0 { 1.0 } else { 0.0 }),
        };

        Self {
            name: group.name.clone(),
            kind: group.kind,
            completed: done,
            planned: in_plan,
            remaining,
            is_complete,
            fraction,
        }
    }
}

/// Progress across all requirement groups of a program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementsProgress {
    /// Per-group detail, in input order.
    pub groups: Vec<GroupProgress>,
    /// Number of groups.
    pub total_groups: usize,
    /// Groups whose rule is satisfied.
    pub complete_groups: usize,
    /// Incomplete groups with at least one planned course.
    pub in_progress_groups: usize,
    /// All other groups.
    pub remaining_groups: usize,
    /// `complete_groups / total_groups × 100`, rounded; 0 with no groups.
    pub percentage: u32,
}

impl RequirementsProgress {
    /// Computes progress of `groups` against prior work and a plan.
    ///
    /// # Example
    ///
    /// ```
    /// use u_curriculum::models::{PlanItem, RequirementGroup, Semester};
    /// use u_curriculum::validation::RequirementsProgress;
    ///
    /// let groups = vec![RequirementGroup::all("Core", &["A", "B", "C"])];
    /// let plan = vec![PlanItem::new("B", Semester::fall(2024), 3.0)];
    /// let progress = RequirementsProgress::compute(&groups, &["A".to_string()], &plan);
    ///
    /// assert_eq!(progress.groups[0].remaining, vec!["C"]);
    /// assert_eq!(progress.percentage, 0);
    /// ```
    pub fn compute(groups: &[RequirementGroup], prior_completed: &[String], items: &[PlanItem]) -> Self {
        let prior: HashSet<&str> = prior_completed.iter().map(String::as_str).collect();
        let planned: HashSet<&str> = items.iter().map(|i| i.course_code.as_str()).collect();

        let groups: Vec<GroupProgress> = groups
            .iter()
            .map(|group| GroupProgress::compute(group, &prior, &planned))
            .collect();

        let total_groups = groups.len();
        let complete_groups = groups.iter().filter(|g| g.is_complete).count();
        let in_progress_groups = groups
            .iter()
            .filter(|g| !g.is_complete && !g.planned.is_empty())
            .count();
        let percentage = if total_groups == 0 {
            0
        } else {
            (complete_groups as f64 / total_groups as f64 * 100.0).round() as u32
        };

        Self {
            total_groups,
            complete_groups,
            in_progress_groups,
            remaining_groups: total_groups - complete_groups - in_progress_groups,
            percentage,
            groups,
        }
    }

    /// Whether every group is satisfied.
    pub fn is_complete(&self) -> bool {
        self.complete_groups == self.total_groups
    }
}
