#![allow(dead_code)]

use async_trait::async_trait;
use quotes_api::config::{QuoteStoreKind, Settings};
use quotes_api::models::Quote;
use quotes_api::services::{MemoryQuoteStore, QuoteDb, QuoteStore};
use quotes_api::startup::Application;
use service_core::error::AppError;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub mongo: Option<QuoteDb>,
}

/// Store whose every call fails, standing in for an unreachable database.
pub struct UnreachableQuoteStore;

#[async_trait]
impl QuoteStore for UnreachableQuoteStore {
    async fn list(&self) -> Result<Vec<Quote>, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!("connection refused")))
    }

    async fn insert(&self, _quote: &Quote) -> Result<String, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!("connection refused")))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!("connection refused")))
    }
}

pub fn test_settings(quote_store: QuoteStoreKind, mongo_database: String) -> Settings {
    Settings {
        bind_host: "127.0.0.1".to_string(),
        port: 0,
        mongo_uri: std::env::var("TEST_MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
        mongo_database,
        quote_store,
        otlp_endpoint: None,
    }
}

impl TestApp {
    /// Spawn against a fresh in-memory store.
    pub async fn spawn() -> Self {
        Self::spawn_with_store(Arc::new(MemoryQuoteStore::new())).await
    }

    pub async fn spawn_with_store(store: Arc<dyn QuoteStore>) -> Self {
        let settings = test_settings(QuoteStoreKind::Memory, "unused".to_string());
        let app = Application::build_with_store(settings, store)
            .await
            .expect("Failed to build test application");

        Self::run(app, None).await
    }

    /// Spawn against MongoDB at `TEST_MONGODB_URI`, in a throwaway database.
    pub async fn spawn_mongo() -> Self {
        let settings = test_settings(
            QuoteStoreKind::Mongo,
            format!("quotes_test_{}", uuid::Uuid::new_v4().simple()),
        );
        let db = QuoteDb::connect(&settings.mongo_uri, &settings.mongo_database)
            .await
            .expect("Failed to configure MongoDB client");

        let app = Application::build_with_store(settings, Arc::new(db.clone()))
            .await
            .expect("Failed to build test application");

        Self::run(app, Some(db)).await
    }

    async fn run(app: Application, mongo: Option<QuoteDb>) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server by polling the liveness endpoint
        let client = reqwest::Client::new();
        let ok_url = format!("{}/ok", address);
        for _ in 0..50 {
            if client.get(&ok_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            mongo,
        }
    }

    pub async fn post_quote(&self, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/api/quotes", self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn list_quotes(&self) -> Vec<serde_json::Value> {
        let response = reqwest::Client::new()
            .get(format!("{}/api/quotes", self.address))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status().as_u16(), 200);
        response.json().await.expect("Failed to parse quote list")
    }

    pub async fn cleanup(&self) {
        if let Some(db) = &self.mongo {
            db.database().drop(None).await.ok();
        }
    }
}
