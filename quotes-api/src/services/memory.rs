use async_trait::async_trait;
use service_core::error::AppError;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::QuoteStore;
use crate::models::Quote;

/// In-process store for running without MongoDB (`QUOTE_STORE=memory`).
/// Contents are lost on restart.
#[derive(Default)]
pub struct MemoryQuoteStore {
    quotes: RwLock<Vec<(String, Quote)>>,
}

impl MemoryQuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.quotes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.quotes.read().await.is_empty()
    }
}

#[async_trait]
impl QuoteStore for MemoryQuoteStore {
    async fn list(&self) -> Result<Vec<Quote>, AppError> {
        let quotes = self.quotes.read().await;
        Ok(quotes.iter().map(|(_, quote)| quote.clone()).collect())
    }

    async fn insert(&self, quote: &Quote) -> Result<String, AppError> {
        let id = Uuid::new_v4().to_string();
        self.quotes.write().await.push((id.clone(), quote.clone()));

        tracing::debug!(id = %id, "[MEMORY] Quote stored");
        Ok(id)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
