use std::time::Duration;

use axum::http::HeaderValue;
use serde::Deserialize;

use crate::domain::DomainError;
use crate::infrastructure::observability::MetricsConfig;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub canvas: CanvasConfig,
    pub cors: CorsConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Upstream Canvas API settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// API root, e.g. `https://school.instructure.com/api/v1`
    pub base_url: String,
    pub timeout_secs: u64,
    /// Add `enrollment_state=active` when listing courses
    pub active_enrollments_only: bool,
}

/// Cross-origin settings for the single front-end origin
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            base_url: "https://canvas.instructure.com/api/v1".to_string(),
            timeout_secs: 30,
            active_enrollments_only: true,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "http://localhost:5173".to_string(),
        }
    }
}

impl CanvasConfig {
    /// Base URL without trailing slashes
    pub fn normalized_base_url(&self) -> String {
        self.base_url.trim().trim_end_matches('/').to_string()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl CorsConfig {
    pub fn origin_header(&self) -> Result<HeaderValue, DomainError> {
        HeaderValue::from_str(self.allowed_origin.trim()).map_err(|e| {
            DomainError::configuration(format!(
                "Invalid CORS origin '{}': {}",
                self.allowed_origin, e
            ))
        })
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> Result<(), DomainError> {
        let base_url = self.canvas.normalized_base_url();
        let parsed = reqwest::Url::parse(&base_url).map_err(|e| {
            DomainError::configuration(format!("Invalid Canvas base URL '{}': {}", base_url, e))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DomainError::configuration(format!(
                "Canvas base URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        if self.canvas.timeout_secs == 0 {
            return Err(DomainError::configuration(
                "Canvas timeout must be greater than zero",
            ));
        }

        self.cors.origin_header()?;

        if !self.metrics.path.starts_with('/') {
            return Err(DomainError::configuration(format!(
                "Metrics path '{}' must start with '/'",
                self.metrics.path
            )));
        }

        Ok(())
    }
}
