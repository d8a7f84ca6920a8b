use axum::{body::Body, http::Request, middleware, routing::get, Router};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::canvas;
use super::health;
use super::middleware::{
    cors_layer, logging_middleware, metrics_middleware, security_headers_middleware,
};
use super::state::AppState;
use crate::config::AppConfig;
use crate::domain::DomainError;
use crate::infrastructure::observability::{create_metrics_router, PrometheusMetrics};

/// Create the full router with application state
pub fn create_router(
    state: AppState,
    config: &AppConfig,
    metrics: Option<PrometheusMetrics>,
) -> Result<Router, DomainError> {
    let mut router = Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .merge(canvas::create_canvas_router())
        .with_state(state);

    if let Some(m) = metrics {
        router = router.merge(create_metrics_router(m, &config.metrics.path));
    }

    // Outermost layer last: CORS answers preflights before anything else runs
    Ok(router
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(cors_layer(&config.cors)?))
}

/// Request span without the query string, which carries the caller's token
fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    tracing::debug_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}
