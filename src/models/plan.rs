//! Plan item model.
//!
//! A degree plan is a flat list of [`PlanItem`]s. Grouping by semester is
//! derived on demand; the list itself carries no ordering guarantee.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Semester;

/// A course placed in a semester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanItem {
    /// Course code.
    pub course_code: String,
    /// Semester the course is taken in.
    pub semester: Semester,
    /// Credit weight recorded with the placement.
    pub credits: f64,
    /// Committed by the user; the scheduler never moves it.
    #[serde(default)]
    pub is_locked: bool,
}

impl PlanItem {
    /// Creates an unlocked plan item.
    pub fn new(course_code: impl Into<String>, semester: Semester, credits: f64) -> Self {
        Self {
            course_code: course_code.into(),
            semester,
            credits,
            is_locked: false,
        }
    }

    /// Creates a locked plan item.
    pub fn locked(course_code: impl Into<String>, semester: Semester, credits: f64) -> Self {
        Self::new(course_code, semester, credits).with_locked(true)
    }

    /// Sets the locked flag.
    pub fn with_locked(mut self, is_locked: bool) -> Self {
        self.is_locked = is_locked;
        self
    }
}

/// Groups items by semester in calendar order.
///
/// Items keep their input order within a semester.
pub fn group_by_semester(items: &[PlanItem]) -> BTreeMap<Semester, Vec<&PlanItem>> {
    let mut grouped: BTreeMap<Semester, Vec<&PlanItem>> = BTreeMap::new();
    for item in items {
        grouped.entry(item.semester).or_default().push(item);
    }
    grouped
}

/// Finds the first item for a course code.
pub fn find_course<'a>(items: &'a [PlanItem], code: &str) -> Option<&'a PlanItem> {
    items.iter().find(|item| item.course_code == code)
}

/// Sum of recorded credits in a semester.
pub fn recorded_credits(items: &[PlanItem], semester: Semester) -> f64 {
    items
        .iter()
        .filter(|item| item.semester == semester)
        .map(|item| item.credits)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<PlanItem> {
        vec![
            PlanItem::new("B", Semester::spring(2025), 3.0),
            PlanItem::locked("A", Semester::fall(2024), 4.0),
            PlanItem::new("C", Semester::spring(2025), 4.0),
            PlanItem::new("T", Semester::Prior, 3.0),
        ]
    }

    #[test]
    fn test_plan_item_builders() {
        let item = PlanItem::new("CSC121", Semester::fall(2024), 3.0);
        assert!(!item.is_locked);
        let locked = PlanItem::locked("CSC121", Semester::fall(2024), 3.0);
        assert!(locked.is_locked);
    }

    #[test]
    fn test_group_by_semester_chronological() {
        let items = sample_items();
        let grouped = group_by_semester(&items);
        let keys: Vec<Semester> = grouped.keys().copied().collect();
        assert_eq!(
            keys,
            vec![Semester::Prior, Semester::fall(2024), Semester::spring(2025)]
        );

        let spring: Vec<&str> = grouped[&Semester::spring(2025)]
            .iter()
            .map(|i| i.course_code.as_str())
            .collect();
        assert_eq!(spring, vec!["B", "C"]);
    }

    #[test]
    fn test_find_and_credits() {
        let items = sample_items();
        assert_eq!(find_course(&items, "A").map(|i| i.is_locked), Some(true));
        assert!(find_course(&items, "Z").is_none());
        assert!((recorded_credits(&items, Semester::spring(2025)) - 7.0).abs() < 1e-10);
        assert_eq!(recorded_credits(&items, Semester::fall(2030)), 0.0);
    }

    #[test]
    fn test_plan_item_json_shape() {
        let item = PlanItem::new("MATH151", Semester::fall(2024), 4.0);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["semester"], "2024 Fall");
        assert_eq!(json["course_code"], "MATH151");

        let parsed: PlanItem = serde_json::from_str(
            r#"{"course_code": "X", "semester": "Spring 2025", "credits": 3}"#,
        )
        .unwrap();
        assert_eq!(parsed.semester, Semester::spring(2025));
        assert!(!parsed.is_locked);
    }
}
