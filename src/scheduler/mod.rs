//! Degree plan generation.
//!
//! Places required courses into semesters so that prerequisites come
//! strictly earlier, term offerings match, and no semester exceeds its
//! course limit.
//!
//! # Algorithm
//!
//! `Scheduler` builds a prerequisite DAG over the courses to schedule,
//! orders it topologically, and assigns each course greedily to the
//! earliest feasible semester. Greedy earliest-fit is not optimal in
//! semester count, but it is deterministic and linear in the horizon.
//!
//! # Summary
//!
//! `PlanSummary` reports credit load per semester and flags semesters
//! outside the requested credit bounds.

mod graph;
mod planner;
mod summary;

pub use graph::{DependencyGraph, Node};
pub use planner::{
    GeneratedPlan, PlanPreferences, PlanRequest, Scheduler, SchedulerConfig, UnplacedCourse,
    UnplacedReason,
};
pub use summary::PlanSummary;
