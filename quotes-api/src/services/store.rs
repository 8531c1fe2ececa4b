use async_trait::async_trait;
use service_core::error::AppError;

use crate::models::Quote;

/// Persistence seam for quotes.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// All quotes in natural (insertion) order.
    async fn list(&self) -> Result<Vec<Quote>, AppError>;

    /// Persist one quote and return its storage-assigned id. The id format
    /// belongs to the backend; callers treat it as opaque.
    async fn insert(&self, quote: &Quote) -> Result<String, AppError>;

    /// Round-trip to the backend, for readiness probes.
    async fn ping(&self) -> Result<(), AppError>;
}
