mod app_config;

pub use app_config::{AppConfig, CanvasConfig, CorsConfig, LogFormat, LoggingConfig, ServerConfig};
