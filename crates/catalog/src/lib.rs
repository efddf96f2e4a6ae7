//! Courses domain module.
//!
//! This crate contains the business rules for the courses catalog, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod course;

pub use course::{Course, NewCourse, TITLE_MIN_LEN};
