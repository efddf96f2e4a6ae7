use axum::{routing::get, Router};

pub mod courses;
pub mod system;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/courses", courses::router())
}
