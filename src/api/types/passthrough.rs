//! Successful Canvas responses relayed to the caller

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::domain::UpstreamBody;

/// Canvas JSON body returned without re-encoding
#[derive(Debug)]
pub struct UpstreamJson(pub UpstreamBody);

impl IntoResponse for UpstreamJson {
    fn into_response(self) -> Response {
        let UpstreamBody {
            bytes,
            content_type,
        } = self.0;

        let content_type = content_type
            .and_then(|ct| HeaderValue::from_str(&ct).ok())
            .unwrap_or_else(|| HeaderValue::from_static("application/json"));

        (StatusCode::OK, [(header::CONTENT_TYPE, content_type)], bytes).into_response()
    }
}
