//! Degree planning domain models.
//!
//! Plain data types shared by the scheduler and the validator. All of them
//! derive serde traits so the host application can store or transmit them;
//! this crate owns no wire format.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Course` | Catalog entry: credits, prerequisites, term offering |
//! | `Catalog` | Immutable code → course map (`CourseLookup`) |
//! | `Semester` | Calendar-ordered term label |
//! | `PlanItem` | A course placed in a semester |
//! | `RequirementGroup` | Named course set with an all/choice rule |

mod course;
mod plan;
mod requirement;
mod semester;

pub use course::{Catalog, Course, CourseLookup};
pub use plan::{find_course, group_by_semester, recorded_credits, PlanItem};
pub use requirement::{GroupKind, Program, RequirementGroup};
pub use semester::{
    semester_sequence, Season, Semester, SemesterParseError, MAX_SEQUENCE_YEARS,
};
