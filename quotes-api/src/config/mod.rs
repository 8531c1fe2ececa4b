use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;

pub const DEFAULT_MONGO_URI: &str = "mongodb://mongodb-svc:27017/";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub bind_host: String,
    pub port: u16,
    pub mongo_uri: String,
    pub mongo_database: String,
    pub quote_store: QuoteStoreKind,
    /// OTLP collector for span export; console logging only when unset.
    pub otlp_endpoint: Option<String>,
}

/// Which backend holds the quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStoreKind {
    Mongo,
    Memory,
}

impl Settings {
    pub fn load() -> Result<Self, AppError> {
        core_config::load(&[
            ("port", "5001"),
            ("mongo_uri", DEFAULT_MONGO_URI),
            ("mongo_database", "quotesdb"),
            ("quote_store", "mongo"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 7] = [
        "BIND_HOST",
        "HOST",
        "PORT",
        "MONGO_URI",
        "MONGO_DATABASE",
        "QUOTE_STORE",
        "OTLP_ENDPOINT",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn defaults_when_environment_is_empty() {
        clear_env();

        let settings = Settings::load().expect("defaults should load");

        assert_eq!(settings.bind_host, "0.0.0.0");
        assert_eq!(settings.port, 5001);
        assert_eq!(settings.mongo_uri, "mongodb://mongodb-svc:27017/");
        assert_eq!(settings.mongo_database, "quotesdb");
        assert_eq!(settings.quote_store, QuoteStoreKind::Mongo);
        assert!(settings.otlp_endpoint.is_none());
    }

    #[test]
    #[serial]
    fn environment_overrides_defaults() {
        clear_env();
        std::env::set_var("PORT", "6123");
        std::env::set_var("MONGO_URI", "mongodb://db.internal:27018/");
        std::env::set_var("QUOTE_STORE", "memory");

        let result = Settings::load();
        clear_env();
        let settings = result.expect("overrides should load");

        assert_eq!(settings.port, 6123);
        assert_eq!(settings.mongo_uri, "mongodb://db.internal:27018/");
        assert_eq!(settings.quote_store, QuoteStoreKind::Memory);
    }

    #[test]
    #[serial]
    fn shell_host_variable_does_not_change_bind_address() {
        clear_env();
        std::env::set_var("HOST", "myworkstation");

        let result = Settings::load();
        clear_env();

        assert_eq!(result.expect("settings should load").bind_host, "0.0.0.0");
    }

    #[test]
    #[serial]
    fn bind_host_variable_sets_bind_address() {
        clear_env();
        std::env::set_var("BIND_HOST", "127.0.0.1");

        let result = Settings::load();
        clear_env();

        assert_eq!(result.expect("settings should load").bind_host, "127.0.0.1");
    }
}
