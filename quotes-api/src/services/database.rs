use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc, Bson, Document},
    options::{ClientOptions, FindOptions},
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

use super::QuoteStore;
use crate::models::Quote;

const QUOTES_COLLECTION: &str = "quotes";

#[derive(Clone)]
pub struct QuoteDb {
    client: MongoClient,
    db: Database,
}

impl QuoteDb {
    /// Build a client for `uri`. The driver connects lazily, so an
    /// unreachable server surfaces on the first query rather than here.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Configuring MongoDB client");

        let mut options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Invalid MongoDB URI: {}", e);
            AppError::ConfigError(anyhow::anyhow!("Invalid MongoDB URI: {}", e))
        })?;
        options.app_name = Some("quotes-api".to_string());

        let client = MongoClient::with_options(options)?;
        let db = client.database(database);

        Ok(Self { client, db })
    }

    pub fn quotes(&self) -> Collection<Quote> {
        self.db.collection(QUOTES_COLLECTION)
    }

    /// Handle to the underlying database, for test cleanup.
    pub fn database(&self) -> &Database {
        &self.db
    }
}

/// Decode stored documents, skipping any whose `quote` or `author` is not a
/// string so one bad record cannot break the whole listing.
fn decode_quotes(documents: Vec<Document>) -> Vec<Quote> {
    documents
        .into_iter()
        .filter_map(|document| match bson::from_document::<Quote>(document.clone()) {
            Ok(quote) => Some(quote),
            Err(e) => {
                tracing::warn!(document = %document, "Skipping malformed quote: {}", e);
                None
            }
        })
        .collect()
}

#[async_trait]
impl QuoteStore for QuoteDb {
    async fn list(&self) -> Result<Vec<Quote>, AppError> {
        let options = FindOptions::builder()
            .projection(doc! { "_id": 0 })
            .build();

        let cursor = self
            .db
            .collection::<Document>(QUOTES_COLLECTION)
            .find(doc! {}, options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list quotes: {}", e);
                AppError::from(e)
            })?;

        let documents: Vec<Document> = cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect quotes: {}", e);
            AppError::from(e)
        })?;

        Ok(decode_quotes(documents))
    }

    async fn insert(&self, quote: &Quote) -> Result<String, AppError> {
        let result = self.quotes().insert_one(quote, None).await.map_err(|e| {
            tracing::error!("Failed to insert quote: {}", e);
            AppError::from(e)
        })?;

        let id = match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        };

        Ok(id)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
