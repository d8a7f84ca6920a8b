//! Canvas API client and passthrough service

pub mod http_client;
mod service;

pub use http_client::CanvasHttpClient;
pub use service::CanvasService;
