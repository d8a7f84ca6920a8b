//! Canvas passthrough endpoints

pub mod courses;

use axum::{routing::get, Json, Router};
use serde::Serialize;

use super::state::AppState;

pub const ROOT_MESSAGE: &str =
    "Canvas gateway is running. Visit /courses?token=<your Canvas token> to see your courses.";

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE,
    })
}

/// Create the Canvas router
pub fn create_canvas_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/courses", get(courses::list_courses))
        .route(
            "/courses/{course_id}/assignments",
            get(courses::list_assignments),
        )
        .route(
            "/courses/{course_id}/submissions",
            get(courses::list_submissions),
        )
}
