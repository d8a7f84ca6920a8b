use thiserror::Error;

use super::canvas::UpstreamError;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid ID format: {message}")]
    InvalidId { message: String },

    #[error("Credential error: {message}")]
    Credential { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),
}

impl DomainError {
    pub fn invalid_id(message: impl Into<String>) -> Self {
        Self::InvalidId {
            message: message.into(),
        }
    }

    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::canvas::TransportFailure;

    #[test]
    fn test_invalid_id_error() {
        let error = DomainError::invalid_id("Course ID must be a positive integer");
        assert_eq!(
            error.to_string(),
            "Invalid ID format: Course ID must be a positive integer"
        );
    }

    #[test]
    fn test_credential_error() {
        let error = DomainError::credential("Missing token");
        assert_eq!(error.to_string(), "Credential error: Missing token");
    }

    #[test]
    fn test_upstream_error_conversion() {
        let error: DomainError = UpstreamError::transport(TransportFailure::Timeout, "deadline").into();
        assert!(matches!(error, DomainError::Upstream(_)));
        assert!(error.to_string().starts_with("Upstream error:"));
    }
}
