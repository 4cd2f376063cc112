//! Course catalog model.
//!
//! A course is the smallest schedulable unit of a degree plan. The catalog
//! is owned by the host application; the engine only reads it through
//! [`CourseLookup`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use super::Season;

/// A catalog course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course code (e.g., "CSC 340").
    pub code: String,
    /// Catalog title.
    #[serde(default)]
    pub title: String,
    /// Credit weight (positive).
    pub credits: f64,
    /// Codes of courses that must be completed first.
    ///
    /// May reference courses that are not part of the plan being built.
    #[serde(default)]
    pub prerequisites: Vec<String>,
    /// Free-text term descriptor (e.g., "Fall", "Fall, Spring").
    /// `None` = offered every term.
    #[serde(default)]
    pub term_offered: Option<String>,
}

impl Course {
    /// Creates a course with no prerequisites, offered every term.
    pub fn new(code: impl Into<String>, credits: f64) -> Self {
        Self {
            code: code.into(),
            title: String::new(),
            credits,
            prerequisites: Vec::new(),
            term_offered: None,
        }
    }

    /// Stand-in for a code the catalog does not know: 1 credit,
    /// no prerequisites, every term.
    pub fn placeholder(code: impl Into<String>) -> Self {
        Self::new(code, 1.0)
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Adds a prerequisite course code.
    pub fn with_prerequisite(mut self, code: impl Into<String>) -> Self {
        self.prerequisites.push(code.into());
        self
    }

    /// Sets the term-offering descriptor.
    pub fn with_term_offered(mut self, term_offered: impl Into<String>) -> Self {
        self.term_offered = Some(term_offered.into());
        self
    }

    /// Whether the course may be taken in a `season` term.
    ///
    /// Matches the season name as a case-insensitive substring of
    /// `term_offered`. Missing or blank term data is always compatible.
    pub fn is_offered_in(&self, season: Season) -> bool {
        match self.term_offered.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(text) => text
                .to_ascii_lowercase()
                .contains(&season.name().to_ascii_lowercase()),
        }
    }
}

/// Read-only course lookup consumed by the scheduler and the validator.
pub trait CourseLookup {
    /// Returns the catalog entry for `code`, if any.
    fn course(&self, code: &str) -> Option<&Course>;

    /// Whether the catalog knows `code`.
    fn contains(&self, code: &str) -> bool {
        self.course(code).is_some()
    }
}

impl<T: CourseLookup + ?Sized> CourseLookup for &T {
    fn course(&self, code: &str) -> Option<&Course> {
        (**self).course(code)
    }
}

impl<T: CourseLookup + ?Sized> CourseLookup for Arc<T> {
    fn course(&self, code: &str) -> Option<&Course> {
        (**self).course(code)
    }
}

impl CourseLookup for HashMap<String, Course> {
    fn course(&self, code: &str) -> Option<&Course> {
        self.get(code)
    }
}

/// Immutable in-memory course catalog.
///
/// Populated once from externally supplied course data. When the input
/// repeats a code, the later entry wins.
///
/// # Example
///
/// ```
/// use u_curriculum::models::{Catalog, Course, CourseLookup};
///
/// let catalog = Catalog::from_courses(vec![
///     Course::new("MATH151", 4.0),
///     Course::new("MATH152", 4.0).with_prerequisite("MATH151"),
/// ]);
/// assert_eq!(catalog.len(), 2);
/// assert!(catalog.contains("MATH152"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    courses: HashMap<String, Course>,
}

impl Catalog {
    /// Builds a catalog from a list of courses.
    pub fn from_courses(courses: impl IntoIterator<Item = Course>) -> Self {
        courses.into_iter().collect()
    }

    /// Number of distinct course codes.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Iterates over all courses in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }
}

impl FromIterator<Course> for Catalog {
    fn from_iter<I: IntoIterator<Item = Course>>(iter: I) -> Self {
        let courses = iter
            .into_iter()
            .map(|course| (course.code.clone(), course))
            .collect();
        Self { courses }
    }
}

impl CourseLookup for Catalog {
    fn course(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }
}
