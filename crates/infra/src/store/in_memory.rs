use std::sync::RwLock;

use async_trait::async_trait;

use coursely_catalog::{Course, NewCourse};
use coursely_core::CourseId;

use super::{CourseStore, StoreError};

/// In-memory course store.
///
/// Intended for tests/dev. Keeps insertion order and rejects duplicate titles
/// to mirror the relational uniqueness constraint.
#[derive(Debug, Default)]
pub struct InMemoryCourseStore {
    courses: RwLock<Vec<Course>>,
}

impl InMemoryCourseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CourseStore for InMemoryCourseStore {
    async fn list(&self) -> Result<Vec<Course>, StoreError> {
        let courses = self
            .courses
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".to_string()))?;
        Ok(courses.clone())
    }

    async fn get_by_id(&self, id: &CourseId) -> Result<Option<Course>, StoreError> {
        let courses = self
            .courses
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".to_string()))?;
        Ok(courses.iter().find(|c| c.id == *id).cloned())
    }

    async fn insert(&self, new_course: NewCourse) -> Result<Course, StoreError> {
        let mut courses = self
            .courses
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".to_string()))?;

        if courses.iter().any(|c| c.title == new_course.title()) {
            return Err(StoreError::Conflict(format!(
                "course title '{}' already exists",
                new_course.title()
            )));
        }

        let course = new_course.into_course(CourseId::new());
        courses.push(course.clone());
        Ok(course)
    }
}
