//! The resource service: list/get/create over an injected course store.
//!
//! Returns typed outcomes (`DomainResult`) and never touches HTTP status
//! codes; that translation lives in `errors.rs`.

use std::sync::Arc;

use coursely_catalog::{Course, NewCourse};
use coursely_core::{CourseId, DomainError, DomainResult};
use coursely_infra::CourseStore;

pub struct AppServices {
    store: Arc<dyn CourseStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn CourseStore>) -> Self {
        Self { store }
    }

    /// All courses; delegates directly to the store.
    pub async fn list_courses(&self) -> DomainResult<Vec<Course>> {
        Ok(self.store.list().await?)
    }

    /// The course with the given id, or `NotFound`.
    ///
    /// The id is an opaque string compared for exact equality: a string that
    /// does not even parse as a UUID can never match a stored record, so it
    /// maps to `NotFound` rather than a validation failure.
    pub async fn get_course(&self, id: &str) -> DomainResult<Course> {
        let Ok(id) = id.parse::<CourseId>() else {
            return Err(DomainError::NotFound);
        };

        match self.store.get_by_id(&id).await? {
            Some(course) => Ok(course),
            None => Err(DomainError::NotFound),
        }
    }

    /// Validate the title and create the course, returning its new id.
    ///
    /// A missing or too-short title fails with `Validation` and leaves the
    /// store untouched.
    pub async fn create_course(&self, title: Option<String>) -> DomainResult<CourseId> {
        let title = title.unwrap_or_default();
        let new_course = NewCourse::new(title, None)?;
        let course = self.store.insert(new_course).await?;

        tracing::info!(course_id = %course.id, "course created");
        Ok(course.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use coursely_infra::{InMemoryCourseStore, StoreError};

    fn services() -> AppServices {
        AppServices::new(Arc::new(InMemoryCourseStore::new()))
    }

    /// Store double for the unreachable-database path.
    struct FailingCourseStore;

    #[async_trait]
    impl CourseStore for FailingCourseStore {
        async fn list(&self) -> Result<Vec<Course>, StoreError> {
            Err(StoreError::Storage("connection refused".to_string()))
        }

        async fn get_by_id(&self, _id: &CourseId) -> Result<Option<Course>, StoreError> {
            Err(StoreError::Storage("connection refused".to_string()))
        }

        async fn insert(&self, _new_course: NewCourse) -> Result<Course, StoreError> {
            Err(StoreError::Storage("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn created_course_is_retrievable_with_matching_title() {
        let svc = services();
        let id = svc
            .create_course(Some("Node.js Course".to_string()))
            .await
            .unwrap();

        let course = svc.get_course(&id.to_string()).await.unwrap();
        assert_eq!(course.id, id);
        assert_eq!(course.title, "Node.js Course");
    }

    #[tokio::test]
    async fn short_title_fails_validation_and_adds_nothing() {
        let svc = services();
        let err = svc.create_course(Some("abc".to_string())).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(svc.list_courses().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_title_fails_validation() {
        let svc = services();
        let err = svc.create_course(None).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let svc = services();
        let err = svc
            .get_course(&CourseId::new().to_string())
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[tokio::test]
    async fn malformed_id_is_not_found() {
        let svc = services();
        let err = svc.get_course("does-not-exist").await.unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[tokio::test]
    async fn list_returns_one_record_per_create_with_unique_ids() {
        let svc = services();
        for i in 0..5 {
            svc.create_course(Some(format!("Course number {i}")))
                .await
                .unwrap();
        }

        let courses = svc.list_courses().await.unwrap();
        assert_eq!(courses.len(), 5);

        let mut ids: Vec<_> = courses.iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[tokio::test]
    async fn list_is_idempotent_without_intervening_writes() {
        let svc = services();
        svc.create_course(Some("Course A!".to_string())).await.unwrap();
        svc.create_course(Some("Course B!".to_string())).await.unwrap();

        let first = svc.list_courses().await.unwrap();
        let second = svc.list_courses().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_storage_error() {
        let svc = AppServices::new(Arc::new(FailingCourseStore));

        let err = svc.list_courses().await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));

        let err = svc
            .get_course(&CourseId::new().to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));

        let err = svc
            .create_course(Some("Node.js Course".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
    }

    #[tokio::test]
    async fn duplicate_title_surfaces_conflict() {
        let svc = services();
        svc.create_course(Some("Course A!".to_string())).await.unwrap();

        let err = svc
            .create_course(Some("Course A!".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }
}
