//! Failures talking to the Canvas API

use bytes::Bytes;
use thiserror::Error;

/// How a transport-level failure happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailure {
    /// No response within the configured timeout
    Timeout,
    /// Could not connect (DNS, refused, reset during connect)
    Connect,
    /// Anything else that broke the exchange
    Other,
}

impl TransportFailure {
    /// Whether the same call could succeed if issued again later
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout | Self::Connect)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Connect => "connect",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by a Canvas client
#[derive(Debug, Clone, Error)]
pub enum UpstreamError {
    /// Canvas answered with a non-2xx status. Status and body are relayed verbatim.
    #[error("Canvas returned HTTP {status}")]
    Status {
        status: u16,
        body: Bytes,
        content_type: Option<String>,
    },

    #[error("Transport failure ({kind}): {message}")]
    Transport {
        kind: TransportFailure,
        message: String,
    },

    /// A 2xx response whose body is not JSON
    #[error("Invalid response body: {message}")]
    InvalidBody { message: String },
}

impl UpstreamError {
    pub fn status(status: u16, body: impl Into<Bytes>, content_type: Option<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
            content_type,
        }
    }

    pub fn transport(kind: TransportFailure, message: impl Into<String>) -> Self {
        Self::Transport {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::InvalidBody {
            message: message.into(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { kind, .. } => kind.is_retryable(),
            Self::Status { .. } | Self::InvalidBody { .. } => false,
        }
    }

    /// Short label used for metrics and logs
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Status { .. } => "upstream_status",
            Self::Transport { kind, .. } => match kind {
                TransportFailure::Timeout => "timeout",
                TransportFailure::Connect => "connect_error",
                TransportFailure::Other => "transport_error",
            },
            Self::InvalidBody { .. } => "invalid_body",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_retryability() {
        assert!(TransportFailure::Timeout.is_retryable());
        assert!(TransportFailure::Connect.is_retryable());
        assert!(!TransportFailure::Other.is_retryable());
    }

    #[test]
    fn test_status_error_is_not_retryable() {
        let err = UpstreamError::status(503, "busy", None);
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "Canvas returned HTTP 503");
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(UpstreamError::status(401, "", None).outcome(), "upstream_status");
        assert_eq!(
            UpstreamError::transport(TransportFailure::Timeout, "t").outcome(),
            "timeout"
        );
        assert_eq!(UpstreamError::invalid_body("x").outcome(), "invalid_body");
    }
}
