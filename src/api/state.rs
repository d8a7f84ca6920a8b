//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::canvas::CanvasService;

/// Immutable state shared by every request
#[derive(Clone)]
pub struct AppState {
    pub canvas_service: Arc<CanvasService>,
}

impl AppState {
    pub fn new(canvas_service: CanvasService) -> Self {
        Self {
            canvas_service: Arc::new(canvas_service),
        }
    }
}
