use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use crate::domain::{
    AccessToken, CanvasClient, DomainError, TransportFailure, UpstreamBody, UpstreamError,
    UpstreamRequest,
};
use crate::infrastructure::logging::truncate_for_log;

const USER_AGENT: &str = concat!("canvas-gateway/", env!("CARGO_PKG_VERSION"));
const LOG_BODY_LIMIT: usize = 512;

/// Canvas client backed by a pooled reqwest client
#[derive(Debug, Clone)]
pub struct CanvasHttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl CanvasHttpClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl CanvasClient for CanvasHttpClient {
    async fn get_json(
        &self,
        request: &UpstreamRequest,
        token: &AccessToken,
    ) -> Result<UpstreamBody, UpstreamError> {
        let url = request.url(&self.base_url);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, token.bearer())
            .header(ACCEPT, "application/json")
            .query(request.query())
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let body = response.bytes().await.map_err(classify_transport_error)?;

        debug!(
            path = %request.path(),
            status = %status.as_u16(),
            body = %truncate_for_log(&String::from_utf8_lossy(&body), LOG_BODY_LIMIT),
            "Canvas response"
        );

        if !status.is_success() {
            return Err(UpstreamError::status(status.as_u16(), body, content_type));
        }

        serde_json::from_slice::<serde::de::IgnoredAny>(&body).map_err(|e| {
            UpstreamError::invalid_body(format!("Canvas returned non-JSON body: {}", e))
        })?;

        Ok(UpstreamBody::new(body, content_type))
    }
}

fn classify_transport_error(err: reqwest::Error) -> UpstreamError {
    let kind = if err.is_timeout() {
        TransportFailure::Timeout
    } else if err.is_connect() {
        TransportFailure::Connect
    } else {
        TransportFailure::Other
    };

    UpstreamError::transport(kind, err.to_string())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CourseId;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn token() -> AccessToken {
        AccessToken::new("test-token").unwrap()
    }

    fn client_for(server: &MockServer) -> CanvasHttpClient {
        CanvasHttpClient::new(format!("{}/api/v1/", server.uri()), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client =
            CanvasHttpClient::new("https://canvas.test/api/v1/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "https://canvas.test/api/v1");
    }

    #[tokio::test]
    async fn test_get_json_sends_bearer_and_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/users/self/courses"))
            .and(query_param("enrollment_state", "active"))
            .and(header("authorization", "Bearer test-token"))
            .and(header("accept", "application/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"courses":[{"id":1}]}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let body = client_for(&server)
            .get_json(&UpstreamRequest::courses(true), &token())
            .await
            .unwrap();

        assert_eq!(&body.bytes[..], br#"{"courses":[{"id":1}]}"#);
        assert_eq!(body.content_type.as_deref(), Some("application/json"));
    }

    #[tokio::test]
    async fn test_get_json_passes_error_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/courses/5/assignments"))
            .respond_with(
                ResponseTemplate::new(401).set_body_raw(r#"{"error":"bad token"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let request = UpstreamRequest::assignments(CourseId::new(5).unwrap());
        let err = client_for(&server).get_json(&request, &token()).await.unwrap_err();

        match err {
            UpstreamError::Status { status, body, content_type } => {
                assert_eq!(status, 401);
                assert_eq!(&body[..], br#"{"error":"bad token"}"#);
                assert_eq!(content_type.as_deref(), Some("application/json"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_json_submissions_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/courses/9/students/submissions"))
            .and(query_param("student_ids[]", "self"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let request = UpstreamRequest::submissions(CourseId::new(9).unwrap());
        let body = client_for(&server).get_json(&request, &token()).await.unwrap();

        assert_eq!(&body.bytes[..], b"[]");
    }

    #[tokio::test]
    async fn test_get_json_rejects_non_json_success() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("<html>", "text/html"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_json(&UpstreamRequest::courses(false), &token())
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamError::InvalidBody { .. }));
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_get_json_timeout_is_retryable() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw("[]", "application/json")
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client =
            CanvasHttpClient::new(format!("{}/api/v1", server.uri()), Duration::from_millis(50))
                .unwrap();

        let err = client
            .get_json(&UpstreamRequest::courses(true), &token())
            .await
            .unwrap_err();

        match err {
            UpstreamError::Transport { kind, .. } => assert_eq!(kind, TransportFailure::Timeout),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_json_connection_refused() {
        let client = CanvasHttpClient::new("http://127.0.0.1:1/api/v1", Duration::from_secs(2)).unwrap();

        let err = client
            .get_json(&UpstreamRequest::courses(true), &token())
            .await
            .unwrap_err();

        match err {
            UpstreamError::Transport { kind, .. } => assert_eq!(kind, TransportFailure::Connect),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
