//! Canvas API client trait

use async_trait::async_trait;

use super::entity::{AccessToken, UpstreamBody, UpstreamRequest};
use super::error::UpstreamError;

/// Issues read-only calls against the Canvas REST API.
///
/// Implementations perform exactly one HTTP exchange per call and never
/// retry.
#[async_trait]
pub trait CanvasClient: Send + Sync + std::fmt::Debug {
    async fn get_json(
        &self,
        request: &UpstreamRequest,
        token: &AccessToken,
    ) -> Result<UpstreamBody, UpstreamError>;
}
