use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_course).get(list_courses))
        .route("/:id", get(get_course))
}

pub async fn list_courses(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.list_courses().await {
        Ok(courses) => (
            StatusCode::OK,
            Json(dto::ListCoursesResponse::new(&courses)),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_course(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.get_course(&id).await {
        Ok(course) => (
            StatusCode::OK,
            Json(dto::GetCourseResponse {
                course: (&course).into(),
            }),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_course(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateCourseRequest>,
) -> axum::response::Response {
    match services.create_course(body.title).await {
        Ok(id) => (
            StatusCode::CREATED,
            Json(dto::CreateCourseResponse::new(id)),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
