//! Cross-origin policy for the front-end

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::CorsConfig;
use crate::domain::DomainError;

/// Allow exactly one origin, with credentials.
///
/// Methods and headers mirror the preflight request since wildcards cannot be
/// combined with credentials.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, DomainError> {
    let origin = config.origin_header()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::exact(origin))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
