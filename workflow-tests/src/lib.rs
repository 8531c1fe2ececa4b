//! Cross-service workflow integration tests library.
//!
//! Spawns quotes-api (on the in-memory store) and quotes-frontend on random
//! local ports, wires the frontend to the API, and drives them the way a
//! browser would.

use anyhow::{anyhow, Result};
use quotes_api::config::{QuoteStoreKind, Settings as ApiSettings};
use quotes_api::services::MemoryQuoteStore;
use quotes_frontend::config::Settings as FrontendSettings;
use std::sync::{Arc, Once};
use std::time::Duration;

/// Default timeout for waiting on services.
pub const SERVICE_TIMEOUT: Duration = Duration::from_secs(10);

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,workflow_tests=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Both services running in this process.
pub struct QuotesStack {
    pub api_url: String,
    pub frontend_url: String,
    /// The API's store, for asserting on what was persisted.
    pub store: Arc<MemoryQuoteStore>,
}

impl QuotesStack {
    /// Start the API and a frontend pointed at it.
    pub async fn spawn() -> Result<Self> {
        let store = Arc::new(MemoryQuoteStore::new());

        let api = quotes_api::startup::Application::build_with_store(
            ApiSettings {
                bind_host: "127.0.0.1".to_string(),
                port: 0,
                mongo_uri: String::new(),
                mongo_database: String::new(),
                quote_store: QuoteStoreKind::Memory,
                otlp_endpoint: None,
            },
            store.clone(),
        )
        .await?;
        let api_url = format!("http://127.0.0.1:{}", api.port());
        tokio::spawn(async move {
            api.run_until_stopped().await.ok();
        });
        wait_until_healthy(&format!("{}/ok", api_url), SERVICE_TIMEOUT).await?;

        let frontend_url = spawn_frontend(&api_url).await?;

        Ok(Self {
            api_url,
            frontend_url,
            store,
        })
    }
}

/// Start a frontend against `api_url` and return its base URL.
pub async fn spawn_frontend(api_url: &str) -> Result<String> {
    let frontend = quotes_frontend::startup::Application::build(FrontendSettings {
        bind_host: "127.0.0.1".to_string(),
        port: 0,
        api_url: api_url.to_string(),
        otlp_endpoint: None,
    })
    .await?;
    let frontend_url = format!("http://127.0.0.1:{}", frontend.port());
    tokio::spawn(async move {
        frontend.run_until_stopped().await.ok();
    });
    wait_until_healthy(&format!("{}/health", frontend_url), SERVICE_TIMEOUT).await?;

    Ok(frontend_url)
}

/// A base URL nothing is listening on.
pub fn unreachable_url() -> Result<String> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    drop(listener);
    Ok(format!("http://127.0.0.1:{}", port))
}

/// HTTP client that posts forms like a browser but reports redirects
/// instead of following them.
pub fn browser() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}

/// Poll `url` until it answers 200 OK.
pub async fn wait_until_healthy(url: &str, timeout: Duration) -> Result<()> {
    let client = reqwest::Client::new();
    let start = std::time::Instant::now();

    loop {
        let last_error = match client.get(url).timeout(Duration::from_secs(2)).send().await {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            Ok(resp) => format!("status: {}", resp.status()),
            Err(e) => format!("error: {}", e),
        };

        if start.elapsed() > timeout {
            return Err(anyhow!("Timeout waiting for {} ({})", url, last_error));
        }

        tracing::debug!("Waiting for {}: {}", url, last_error);
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_url_is_local() {
        let url = unreachable_url().unwrap();
        assert!(url.starts_with("http://127.0.0.1:"));
    }
}
