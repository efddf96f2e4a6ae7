//! Infrastructure layer: course storage adapters.

pub mod store;

pub use store::{CourseStore, InMemoryCourseStore, PostgresCourseStore, StoreError};
