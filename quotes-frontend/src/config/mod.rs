use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub bind_host: String,
    pub port: u16,
    /// Base URL of quotes-api, without the `/api/quotes` path.
    pub api_url: String,
    pub otlp_endpoint: Option<String>,
}

impl Settings {
    pub fn load() -> Result<Self, AppError> {
        core_config::load(&[("port", "5002"), ("api_url", "http://api:5001")])
    }
}
