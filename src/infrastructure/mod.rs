//! Infrastructure layer - Canvas HTTP client, logging and metrics

pub mod canvas;
pub mod logging;
pub mod observability;
