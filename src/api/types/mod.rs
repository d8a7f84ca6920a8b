//! HTTP response types

pub mod error;
pub mod passthrough;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use passthrough::UpstreamJson;
