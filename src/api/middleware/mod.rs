//! API middleware components

pub mod auth;
pub mod cors;
pub mod logging;
pub mod metrics;
pub mod security;

pub use auth::CanvasToken;
pub use cors::cors_layer;
pub use logging::logging_middleware;
pub use metrics::metrics_middleware;
pub use security::security_headers_middleware;
