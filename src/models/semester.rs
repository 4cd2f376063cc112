//! Academic calendar model.
//!
//! # Ordering
//! Semesters compare as `(year, season rank)` pairs, where the rank follows
//! calendar order inside a year: Winter < Spring < Summer < Fall. So
//! "2024 Fall" < "2025 Spring" < "2025 Fall" regardless of how the names
//! sort as text.
//!
//! The [`Semester::Prior`] bucket holds externally completed or transfer
//! work and precedes every dated semester.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Season of an academic term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// Ordinal position within a calendar year.
    pub fn rank(self) -> u8 {
        match self {
            Season::Winter => 0,
            Season::Spring => 1,
            Season::Summer => 2,
            Season::Fall => 3,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Season {
    type Err = SemesterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "winter" => Ok(Season::Winter),
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" | "autumn" => Ok(Season::Fall),
            _ => Err(SemesterParseError::UnknownSeason(s.trim().to_string())),
        }
    }
}

/// Errors from parsing a semester label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemesterParseError {
    #[error("unknown season {0:?} (expected Winter, Spring, Summer, or Fall)")]
    UnknownSeason(String),

    #[error("invalid semester label {0:?} (expected \"<year> <season>\")")]
    InvalidLabel(String),
}

/// A point on the academic calendar.
///
/// Ordering is derived from variant order first (`Prior` before any term),
/// then `year`, then `season` rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Semester {
    /// Work completed before the plan starts (transfer, AP, prior terms).
    Prior,
    /// A dated term.
    Term { year: i32, season: Season },
}

impl Semester {
    /// Creates a dated semester.
    pub fn new(year: i32, season: Season) -> Self {
        Semester::Term { year, season }
    }

    /// Fall term of `year`.
    pub fn fall(year: i32) -> Self {
        Self::new(year, Season::Fall)
    }

    /// Spring term of `year`.
    pub fn spring(year: i32) -> Self {
        Self::new(year, Season::Spring)
    }

    /// Season of a dated semester; `None` for [`Semester::Prior`].
    pub fn season(&self) -> Option<Season> {
        match self {
            Semester::Prior => None,
            Semester::Term { season, .. } => Some(*season),
        }
    }

    /// Year of a dated semester; `None` for [`Semester::Prior`].
    pub fn year(&self) -> Option<i32> {
        match self {
            Semester::Prior => None,
            Semester::Term { year, .. } => Some(*year),
        }
    }

    /// Whether this is the pseudo "already done" bucket.
    pub fn is_prior(&self) -> bool {
        matches!(self, Semester::Prior)
    }

    /// The following regular (Fall/Spring) semester.
    ///
    /// Fall Y → Spring Y+1, Spring Y → Fall Y. Winter steps to Spring of the
    /// same year and Summer to Fall. `Prior` and Fall of `i32::MAX` have no
    /// successor on the calendar and are returned unchanged.
    pub fn next_regular(&self) -> Semester {
        match *self {
            Semester::Prior => Semester::Prior,
            Semester::Term { year, season } => match season {
                Season::Fall => match year.checked_add(1) {
                    Some(next) => Semester::spring(next),
                    None => *self,
                },
                Season::Winter => Semester::spring(year),
                Season::Spring | Season::Summer => Semester::fall(year),
            },
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Semester::Prior => f.write_str("Prior"),
            Semester::Term { year, season } => write!(f, "{year} {season}"),
        }
    }
}

impl FromStr for Semester {
    type Err = SemesterParseError;

    /// Parses `"2024 Fall"`, `"Fall 2024"`, or a prior-work bucket label
    /// (`"Prior"`, `"Transfer"`, `"Completed"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "prior" | "transfer" | "completed" => return Ok(Semester::Prior),
            _ => {}
        }

        let mut parts = trimmed.split_whitespace();
        let (first, second) = match (parts.next(), parts.next(), parts.next()) {
            (Some(a), Some(b), None) => (a, b),
            _ => return Err(SemesterParseError::InvalidLabel(trimmed.to_string())),
        };

        if let Ok(year) = first.parse::<i32>() {
            return Ok(Semester::new(year, second.parse()?));
        }
        if let Ok(year) = second.parse::<i32>() {
            return Ok(Semester::new(year, first.parse()?));
        }
        Err(SemesterParseError::InvalidLabel(trimmed.to_string()))
    }
}

impl TryFrom<String> for Semester {
    type Error = SemesterParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Semester> for String {
    fn from(semester: Semester) -> Self {
        semester.to_string()
    }
}

/// Longest horizon [`semester_sequence`] will produce, in years.
pub const MAX_SEQUENCE_YEARS: u32 = 100;

/// Generates the planning horizon.
///
/// Starts at Fall of `start_year` and alternates Fall/Spring. The sequence
/// covers at least `horizon_years` years, or runs through Spring of
/// `graduation_year` when that is longer. Both are capped at
/// [`MAX_SEQUENCE_YEARS`], and the sequence ends early at the last
/// representable year.
///
/// # Example
///
/// ```
/// use u_curriculum::models::{semester_sequence, Semester};
///
/// let terms = semester_sequence(2024, 4, None);
/// assert_eq!(terms.len(), 8);
/// assert_eq!(terms[0], Semester::fall(2024));
/// assert_eq!(terms[1], Semester::spring(2025));
/// assert_eq!(terms[7], Semester::spring(2028));
/// ```
pub fn semester_sequence(
    start_year: i32,
    horizon_years: u32,
    graduation_year: Option<i32>,
) -> Vec<Semester> {
    let cap = i64::from(MAX_SEQUENCE_YEARS);
    let to_graduation = graduation_year
        .map(|year| (i64::from(year) - i64::from(start_year)).clamp(0, cap))
        .unwrap_or(0);
    let years = i64::from(horizon_years).min(cap).max(to_graduation);
    let count = years as usize * 2;

    let mut terms = Vec::with_capacity(count);
    let mut current = Semester::fall(start_year);
    for _ in 0..count {
        terms.push(current);
        let next = current.next_regular();
        if next <= current {
            break;
        }
        current = next;
    }
    terms
}
