use serde::{Deserialize, Serialize};

use coursely_core::{CourseId, DomainError, DomainResult};

/// Minimum accepted title length, in characters.
pub const TITLE_MIN_LEN: usize = 6;

/// A course record.
///
/// The identifier is assigned by the store at insertion time and never changes
/// afterwards; title and description are fixed for the record's lifetime (no
/// update or delete operation exists in scope).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: Option<String>,
}

/// Validated input for creating a course.
///
/// Construction is the validation boundary: a `NewCourse` can only exist with
/// a title that passed the constraints, so stores accept it without
/// re-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    title: String,
    description: Option<String>,
}

impl NewCourse {
    /// Validate a raw title (and optional description) into a `NewCourse`.
    ///
    /// The title must be non-empty and at least [`TITLE_MIN_LEN`] characters
    /// long. Surrounding whitespace counts toward the length; the title is
    /// stored exactly as given.
    pub fn new(title: impl Into<String>, description: Option<String>) -> DomainResult<Self> {
        let title = title.into();
        if title.is_empty() {
            return Err(DomainError::validation("title required"));
        }
        if title.chars().count() < TITLE_MIN_LEN {
            return Err(DomainError::validation(format!(
                "title must be at least {TITLE_MIN_LEN} characters long"
            )));
        }
        Ok(Self { title, description })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Materialize the course record under a store-assigned identifier.
    pub fn into_course(self, id: CourseId) -> Course {
        Course {
            id,
            title: self.title,
            description: self.description,
        }
    }
}
