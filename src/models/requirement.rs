//! Program requirement model.
//!
//! A program is an ordered list of requirement groups. Each group names
//! course codes and a rule for when the group counts as satisfied.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How a requirement group is satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    /// Every listed course must be completed or planned.
    All,
    /// At least one listed course must be completed or planned.
    #[serde(alias = "any")]
    Choice,
}

/// A named set of courses with a satisfaction rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementGroup {
    /// Group name (e.g., "Core", "Upper Division Electives").
    pub name: String,
    /// Satisfaction rule.
    #[serde(rename = "type")]
    pub kind: GroupKind,
    /// Course codes in this group.
    pub courses: Vec<String>,
}

impl RequirementGroup {
    /// Creates an empty group.
    pub fn new(name: impl Into<String>, kind: GroupKind) -> Self {
        Self {
            name: name.into(),
            kind,
            courses: Vec::new(),
        }
    }

    /// Group where every course is required.
    pub fn all(name: impl Into<String>, courses: &[&str]) -> Self {
        Self::new(name, GroupKind::All).with_courses(courses)
    }

    /// Group where any one course suffices.
    pub fn choice(name: impl Into<String>, courses: &[&str]) -> Self {
        Self::new(name, GroupKind::Choice).with_courses(courses)
    }

    /// Appends course codes.
    pub fn with_courses(mut self, courses: &[&str]) -> Self {
        self.courses.extend(courses.iter().map(|c| c.to_string()));
        self
    }
}

/// A degree program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Program name.
    pub name: String,
    /// Requirement groups in catalog order.
    pub groups: Vec<RequirementGroup>,
}

impl Program {
    /// Creates a program with no groups.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            groups: Vec::new(),
        }
    }

    /// Adds a requirement group.
    pub fn with_group(mut self, group: RequirementGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Flattens the groups into the course set handed to the scheduler.
    ///
    /// `All` groups contribute every course. A `Choice` group contributes
    /// nothing when one of its courses is already in the list, and its first
    /// course otherwise. Order follows the groups; codes are deduplicated.
    pub fn required_courses(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut out = Vec::new();

        for group in &self.groups {
            match group.kind {
                GroupKind::All => {
                    for code in &group.courses {
                        if seen.insert(code.as_str()) {
                            out.push(code.clone());
                        }
                    }
                }
                GroupKind::Choice => {
                    if group.courses.iter().any(|c| seen.contains(c.as_str())) {
                        continue;
                    }
                    if let Some(first) = group.courses.first() {
                        seen.insert(first.as_str());
                        out.push(first.clone());
                    }
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_builders() {
        let core = RequirementGroup::all("Core", &["A", "B"]);
        assert_eq!(core.kind, GroupKind::All);
        assert_eq!(core.courses, vec!["A", "B"]);

        let elective = RequirementGroup::choice("Elective", &["X"]);
        assert_eq!(elective.kind, GroupKind::Choice);
    }

    #[test]
    fn test_required_courses_flattening() {
        let program = Program::new("BS Computer Science")
            .with_group(RequirementGroup::all("Core", &["A", "B", "C"]))
            .with_group(RequirementGroup::all("Math", &["M1", "A"]))
            .with_group(RequirementGroup::choice("Elective 1", &["E1", "E2"]))
            .with_group(RequirementGroup::choice("Elective 2", &["E3", "B"]))
            .with_group(RequirementGroup::choice("Empty", &[]));

        assert_eq!(program.required_courses(), vec!["A", "B", "C", "M1", "E1"]);
    }

    #[test]
    fn test_group_kind_serde_aliases() {
        let any: GroupKind = serde_json::from_str("\"any\"").unwrap();
        let choice: GroupKind = serde_json::from_str("\"choice\"").unwrap();
        let all: GroupKind = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(any, GroupKind::Choice);
        assert_eq!(choice, GroupKind::Choice);
        assert_eq!(all, GroupKind::All);

        let group: RequirementGroup =
            serde_json::from_str(r#"{"name": "Core", "type": "all", "courses": ["A"]}"#).unwrap();
        assert_eq!(group.kind, GroupKind::All);
    }
}
