//! The Course Store capability.
//!
//! One trait, two interchangeable implementations: an in-memory store for
//! tests/dev and a PostgreSQL store for deployment. The HTTP layer holds an
//! `Arc<dyn CourseStore>` and never knows which one it got.

use async_trait::async_trait;
use thiserror::Error;

use coursely_catalog::{Course, NewCourse};
use coursely_core::{CourseId, DomainError};

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryCourseStore;
pub use postgres::PostgresCourseStore;

/// Storage-layer error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint (duplicate title) was violated.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The backing store is unreachable or a query failed.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<StoreError> for DomainError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Conflict(msg) => DomainError::Conflict(msg),
            StoreError::Storage(msg) => DomainError::Storage(msg),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::Conflict(db.message().to_string())
            }
            _ => Self::Storage(e.to_string()),
        }
    }
}

/// Persistence contract for course records.
///
/// The store owns identifier assignment: `insert` takes a validated
/// [`NewCourse`] and returns the stored record with its fresh id.
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// All courses, in insertion order (or any stable order for a persisted
    /// implementation). Empty when no courses exist.
    async fn list(&self) -> Result<Vec<Course>, StoreError>;

    /// The course with the given id, compared for exact equality, or `None`.
    async fn get_by_id(&self, id: &CourseId) -> Result<Option<Course>, StoreError>;

    /// Store a new course under a freshly generated unique id.
    async fn insert(&self, new_course: NewCourse) -> Result<Course, StoreError>;
}
