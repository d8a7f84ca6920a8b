//! Gateway error types
//!
//! Errors produced by the gateway itself use a JSON envelope. Errors produced
//! by Canvas are relayed with their original status and body.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, TransportFailure, UpstreamError};

/// Gateway error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    AuthenticationError,
    UpstreamError,
    UpstreamTimeoutError,
    ServerError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::AuthenticationError => write!(f, "authentication_error"),
            Self::UpstreamError => write!(f, "upstream_error"),
            Self::UpstreamTimeoutError => write!(f, "upstream_timeout_error"),
            Self::ServerError => write!(f, "server_error"),
        }
    }
}

/// Error envelope for gateway-generated errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Set for upstream transport failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retryable: Option<bool>,
}

#[derive(Debug)]
pub enum ApiErrorBody {
    Gateway(ApiErrorResponse),
    /// Canvas error body, relayed byte for byte
    Upstream {
        bytes: Bytes,
        content_type: Option<String>,
    },
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ApiErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody::Gateway(ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                    param: None,
                    code: None,
                    retryable: None,
                },
            }),
        }
    }

    /// Relay a Canvas error response unchanged
    pub fn passthrough(status: u16, bytes: Bytes, content_type: Option<String>) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            body: ApiErrorBody::Upstream {
                bytes,
                content_type,
            },
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        if let ApiErrorBody::Gateway(response) = &mut self.body {
            response.error.param = Some(param.into());
        }
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        if let ApiErrorBody::Gateway(response) = &mut self.body {
            response.error.code = Some(code.into());
        }
        self
    }

    pub fn with_retryable(mut self, retryable: bool) -> Self {
        if let ApiErrorBody::Gateway(response) = &mut self.body {
            response.error.retryable = Some(retryable);
        }
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorType::InvalidRequestError, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, ApiErrorType::AuthenticationError, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, ApiErrorType::UpstreamError, message)
    }

    pub fn gateway_timeout(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::GATEWAY_TIMEOUT,
            ApiErrorType::UpstreamTimeoutError,
            message,
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ApiErrorType::ServerError, message)
    }

    /// Gateway error detail, `None` for relayed Canvas errors
    pub fn detail(&self) -> Option<&ApiErrorDetail> {
        match &self.body {
            ApiErrorBody::Gateway(response) => Some(&response.error),
            ApiErrorBody::Upstream { .. } => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.body {
            ApiErrorBody::Gateway(response) => (self.status, Json(response)).into_response(),
            ApiErrorBody::Upstream {
                bytes,
                content_type,
            } => {
                let content_type = content_type
                    .and_then(|ct| HeaderValue::from_str(&ct).ok())
                    .unwrap_or_else(|| HeaderValue::from_static("application/json"));

                (self.status, [(header::CONTENT_TYPE, content_type)], bytes).into_response()
            }
        }
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        let retryable = err.is_retryable();

        match err {
            UpstreamError::Status {
                status,
                body,
                content_type,
            } => Self::passthrough(status, body, content_type),
            UpstreamError::Transport { kind, message } => {
                let error = match kind {
                    TransportFailure::Timeout => {
                        Self::gateway_timeout(format!("Canvas did not respond in time: {}", message))
                            .with_code("upstream_timeout")
                    }
                    TransportFailure::Connect => {
                        Self::bad_gateway(format!("Could not reach Canvas: {}", message))
                            .with_code("upstream_unreachable")
                    }
                    TransportFailure::Other => {
                        Self::bad_gateway(format!("Canvas request failed: {}", message))
                            .with_code("upstream_transport_error")
                    }
                };
                error.with_retryable(retryable)
            }
            UpstreamError::InvalidBody { message } => Self::bad_gateway(message)
                .with_code("upstream_invalid_body")
                .with_retryable(retryable),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidId { message } => Self::bad_request(message).with_param("course_id"),
            DomainError::Credential { message } => Self::unauthorized(message).with_param("token"),
            DomainError::Configuration { message } => Self::internal(message),
            DomainError::Upstream(err) => err.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.body {
            ApiErrorBody::Gateway(response) => write!(
                f,
                "{}: {}",
                response.error.error_type, response.error.message
            ),
            ApiErrorBody::Upstream { .. } => write!(f, "upstream responded with {}", self.status),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_bytes(response: Response) -> Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap()
    }

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("Invalid course");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let detail = err.detail().unwrap();
        assert_eq!(detail.error_type, ApiErrorType::InvalidRequestError);
        assert_eq!(detail.message, "Invalid course");
    }

    #[test]
    fn test_domain_error_conversion() {
        let api_err: ApiError = DomainError::invalid_id("bad id").into();
        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_err.detail().unwrap().param.as_deref(), Some("course_id"));

        let api_err: ApiError = DomainError::credential("missing").into();
        assert_eq!(api_err.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_transport_errors_are_classified() {
        let timeout: ApiError = UpstreamError::transport(TransportFailure::Timeout, "slow").into();
        assert_eq!(timeout.status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(timeout.detail().unwrap().retryable, Some(true));

        let connect: ApiError = UpstreamError::transport(TransportFailure::Connect, "refused").into();
        assert_eq!(connect.status, StatusCode::BAD_GATEWAY);
        assert_eq!(connect.detail().unwrap().code.as_deref(), Some("upstream_unreachable"));
        assert_eq!(connect.detail().unwrap().retryable, Some(true));

        let other: ApiError = UpstreamError::transport(TransportFailure::Other, "reset").into();
        assert_eq!(other.status, StatusCode::BAD_GATEWAY);
        assert_eq!(other.detail().unwrap().retryable, Some(false));
    }

    #[tokio::test]
    async fn test_upstream_status_passthrough_response() {
        let err: ApiError =
            UpstreamError::status(401, r#"{"error":"bad token"}"#, Some("application/json".into()))
                .into();
        assert!(err.detail().is_none());

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(&body_bytes(response).await[..], br#"{"error":"bad token"}"#);
    }

    #[tokio::test]
    async fn test_passthrough_keeps_non_json_content_type() {
        let response =
            ApiError::passthrough(503, Bytes::from_static(b"down"), Some("text/plain".into()))
                .into_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(&body_bytes(response).await[..], b"down");
    }

    #[tokio::test]
    async fn test_gateway_error_serialization() {
        let response = ApiError::gateway_timeout("slow")
            .with_code("upstream_timeout")
            .with_retryable(true)
            .into_response();

        let json: serde_json::Value =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(json["error"]["type"], "upstream_timeout_error");
        assert_eq!(json["error"]["code"], "upstream_timeout");
        assert_eq!(json["error"]["retryable"], true);
        assert!(json["error"].get("param").is_none());
    }
}
