//! Canvas LMS domain types

mod client;
mod entity;
mod error;

pub use client::CanvasClient;
pub use entity::{AccessToken, CourseId, UpstreamBody, UpstreamRequest};
pub use error::{TransportFailure, UpstreamError};
