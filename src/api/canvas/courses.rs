//! Course, assignment and submission passthrough handlers

use axum::extract::{Path, State};
use tracing::debug;

use crate::api::middleware::CanvasToken;
use crate::api::state::AppState;
use crate::api::types::{ApiError, UpstreamJson};
use crate::domain::CourseId;

/// GET /courses
pub async fn list_courses(
    State(state): State<AppState>,
    CanvasToken(token): CanvasToken,
) -> Result<UpstreamJson, ApiError> {
    debug!("Listing courses");

    let body = state.canvas_service.list_courses(&token).await?;

    Ok(UpstreamJson(body))
}

/// GET /courses/{course_id}/assignments
pub async fn list_assignments(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    CanvasToken(token): CanvasToken,
) -> Result<UpstreamJson, ApiError> {
    let course_id: CourseId = course_id.parse()?;
    debug!(course_id = %course_id, "Listing assignments");

    let body = state
        .canvas_service
        .list_assignments(course_id, &token)
        .await?;

    Ok(UpstreamJson(body))
}

/// GET /courses/{course_id}/submissions
pub async fn list_submissions(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    CanvasToken(token): CanvasToken,
) -> Result<UpstreamJson, ApiError> {
    let course_id: CourseId = course_id.parse()?;
    debug!(course_id = %course_id, "Listing own submissions");

    let body = state
        .canvas_service
        .list_submissions(course_id, &token)
        .await?;

    Ok(UpstreamJson(body))
}
