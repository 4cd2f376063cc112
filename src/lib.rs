//! Degree plan scheduling for the U-Engine ecosystem.
//!
//! Generates semester-by-semester course plans that respect prerequisite
//! ordering, term offerings, and per-semester load, and validates any plan
//! (generated or edited by hand) against the same rules.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `Catalog`, `Semester`, `PlanItem`,
//!   `RequirementGroup`, `Program`
//! - **`scheduler`**: Prerequisite DAG, topological ordering, greedy
//!   earliest-semester placement, load summary
//! - **`validation`**: Whole-plan and single-addition checks, requirement
//!   progress
//!
//! # Architecture
//!
//! Both components are pure functions of their inputs. The catalog is read
//! through the `CourseLookup` trait and never mutated; all per-call state
//! is local, so scheduler and validator instances can be shared across
//! threads.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::PlanError;
