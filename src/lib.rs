//! Canvas Gateway
//!
//! A thin passthrough proxy in front of the Canvas LMS REST API:
//! - Courses, assignments and own submissions, relayed verbatim
//! - Per-request Canvas token supplied by the caller
//! - Single-origin CORS for the front-end

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::DomainError;
use infrastructure::canvas::{CanvasHttpClient, CanvasService};

/// Build application state from configuration
pub fn create_app_state(config: &AppConfig) -> Result<AppState, DomainError> {
    let client = CanvasHttpClient::new(
        config.canvas.normalized_base_url(),
        config.canvas.timeout(),
    )?;

    tracing::info!(
        base_url = %client.base_url(),
        timeout_secs = config.canvas.timeout_secs,
        "Canvas client configured"
    );

    let service = CanvasService::new(Arc::new(client), config.canvas.active_enrollments_only);

    Ok(AppState::new(service))
}
