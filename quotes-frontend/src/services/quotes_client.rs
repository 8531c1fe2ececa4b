//! HTTP client for quotes-api.

use crate::models::Quote;
use reqwest::{Client, StatusCode};
use service_core::observability::TracedClientExt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuotesClientError {
    #[error("Unable to reach quotes API: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("Quotes API responded with status code {}", .0.as_u16())]
    UnexpectedStatus(StatusCode),

    #[error("Invalid response from quotes API: {0}")]
    Decode(#[source] reqwest::Error),
}

pub struct QuotesClient {
    client: Client,
    base_url: String,
}

impl QuotesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn quotes_url(&self) -> String {
        format!("{}/api/quotes", self.base_url)
    }

    /// Fetch every quote. Anything but 200 is an error.
    pub async fn list_quotes(
        &self,
        request_id: Option<&str>,
    ) -> Result<Vec<Quote>, QuotesClientError> {
        let url = self.quotes_url();

        let response = self
            .client
            .traced_get(&url)
            .send(request_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to send GET request to {}: {}", url, e);
                QuotesClientError::Unreachable(e)
            })?;

        if response.status() != StatusCode::OK {
            return Err(QuotesClientError::UnexpectedStatus(response.status()));
        }

        response.json().await.map_err(QuotesClientError::Decode)
    }

    /// Store a quote. Succeeds only on 201 Created.
    pub async fn add_quote(
        &self,
        quote: &Quote,
        request_id: Option<&str>,
    ) -> Result<(), QuotesClientError> {
        let url = self.quotes_url();

        let response = self
            .client
            .traced_post(&url)
            .json(quote)
            .send(request_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to send POST request to {}: {}", url, e);
                QuotesClientError::Unreachable(e)
            })?;

        match response.status() {
            StatusCode::CREATED => Ok(()),
            status => Err(QuotesClientError::UnexpectedStatus(status)),
        }
    }
}
