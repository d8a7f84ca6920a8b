//! Per-request Canvas credential extraction

use axum::{
    extract::{FromRequestParts, Query},
    http::{request::Parts, Uri},
};
use serde::Deserialize;

use crate::api::types::ApiError;
use crate::domain::AccessToken;

/// Name of the query parameter carrying the caller's Canvas token
pub const TOKEN_QUERY_PARAM: &str = "token";

#[derive(Debug, Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// Extractor that requires a Canvas access token in the `token` query parameter.
///
/// The token is never stored; it lives only as long as the request.
#[derive(Debug, Clone)]
pub struct CanvasToken(pub AccessToken);

impl<S> FromRequestParts<S> for CanvasToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_token_from_uri(&parts.uri)?;

        Ok(CanvasToken(token))
    }
}

fn extract_token_from_uri(uri: &Uri) -> Result<AccessToken, ApiError> {
    let Query(query) = Query::<TokenQuery>::try_from_uri(uri)
        .map_err(|_| ApiError::bad_request("Malformed query string"))?;

    let raw = query.token.ok_or_else(|| {
        ApiError::unauthorized(
            "Canvas token required. Provide it via the 'token' query parameter",
        )
        .with_param(TOKEN_QUERY_PARAM)
    })?;

    AccessToken::new(raw).map_err(ApiError::from)
}
