pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use services::quotes_client::QuotesClient;
use std::sync::Arc;

/// Shared application state containing service clients
#[derive(Clone)]
pub struct AppState {
    pub quotes_client: Arc<QuotesClient>,
}

impl AppState {
    pub fn new(quotes_client: Arc<QuotesClient>) -> Self {
        Self { quotes_client }
    }
}
