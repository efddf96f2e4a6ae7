//! Postgres-backed course store.
//!
//! Uses a SQLx connection pool (thread-safe, `Arc` internally). Uniqueness of
//! course titles is enforced by the database constraint; this store wraps no
//! multi-statement transactions of its own.

use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use coursely_catalog::{Course, NewCourse};
use coursely_core::CourseId;

use super::{CourseStore, StoreError};

/// The course and user tables from the original schema. `users` carries no
/// operations anywhere in this service; it exists in schema only.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id uuid PRIMARY KEY,
    name text NOT NULL,
    email text NOT NULL UNIQUE,
    added_at timestamptz DEFAULT now(),
    updated_at timestamptz NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS courses (
    id uuid PRIMARY KEY,
    title text NOT NULL UNIQUE,
    description text
);
"#;

pub struct PostgresCourseStore {
    pool: PgPool,
}

impl PostgresCourseStore {
    /// Connect to the database and bootstrap the schema.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Wrap an existing connection pool (no schema bootstrap).
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        tracing::debug!("course schema ensured");
        Ok(())
    }

    fn row_to_course(row: &PgRow) -> Course {
        Course {
            id: CourseId::from_uuid(row.get::<Uuid, _>("id")),
            title: row.get("title"),
            description: row.get("description"),
        }
    }
}

#[async_trait]
impl CourseStore for PostgresCourseStore {
    async fn list(&self) -> Result<Vec<Course>, StoreError> {
        // UUIDv7 ids are time-ordered, so this is stable and tracks
        // insertion order.
        let rows = sqlx::query("SELECT id, title, description FROM courses ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(Self::row_to_course).collect())
    }

    async fn get_by_id(&self, id: &CourseId) -> Result<Option<Course>, StoreError> {
        let row = sqlx::query("SELECT id, title, description FROM courses WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(Self::row_to_course))
    }

    async fn insert(&self, new_course: NewCourse) -> Result<Course, StoreError> {
        let course = new_course.into_course(CourseId::new());
        sqlx::query("INSERT INTO courses (id, title, description) VALUES ($1, $2, $3)")
            .bind(course.id.as_uuid())
            .bind(&course.title)
            .bind(&course.description)
            .execute(&self.pool)
            .await?;
        Ok(course)
    }
}
