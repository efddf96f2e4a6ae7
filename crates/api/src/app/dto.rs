use serde::{Deserialize, Serialize};

use coursely_catalog::Course;
use coursely_core::CourseId;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    /// Absence is handled by the service as a validation failure, not by the
    /// JSON extractor.
    pub title: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

/// The wire shape of a course: id and title only, description stays internal.
#[derive(Debug, Serialize)]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
}

impl From<&Course> for CourseSummary {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.to_string(),
            title: course.title.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListCoursesResponse {
    pub courses: Vec<CourseSummary>,
    /// Constant page marker; no pagination exists beyond it.
    pub page: u32,
}

impl ListCoursesResponse {
    pub fn new(courses: &[Course]) -> Self {
        Self {
            courses: courses.iter().map(CourseSummary::from).collect(),
            page: 1,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetCourseResponse {
    pub course: CourseSummary,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseResponse {
    pub course_id: String,
}

impl CreateCourseResponse {
    pub fn new(id: CourseId) -> Self {
        Self {
            course_id: id.to_string(),
        }
    }
}
