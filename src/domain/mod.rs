//! Domain layer - Canvas request values, errors and the client seam

pub mod canvas;
pub mod error;

pub use canvas::{
    AccessToken, CanvasClient, CourseId, TransportFailure, UpstreamBody, UpstreamError,
    UpstreamRequest,
};
pub use error::DomainError;
