use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use service_core::error::AppError;

use crate::{
    dtos::{CreatedQuoteResponse, NewQuoteRequest},
    models::Quote,
    AppState,
};

pub const MISSING_FIELDS_MESSAGE: &str = "Both 'quote' and 'author' are required.";

fn missing_fields() -> AppError {
    AppError::BadRequest(anyhow::anyhow!(MISSING_FIELDS_MESSAGE))
}

/// Return every stored quote.
#[tracing::instrument(skip(state))]
pub async fn list_quotes(State(state): State<AppState>) -> Result<Json<Vec<Quote>>, AppError> {
    let quotes = state.store.list().await?;

    tracing::debug!(count = quotes.len(), "Listed quotes");
    Ok(Json(quotes))
}

/// Validate and persist a new quote.
///
/// A body that is not JSON, or that lacks a non-empty `quote` or `author`
/// string, is answered with 400 and nothing is stored.
#[tracing::instrument(skip(state, payload))]
pub async fn add_quote(
    State(state): State<AppState>,
    payload: Result<Json<NewQuoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedQuoteResponse>), AppError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!(error = %e.body_text(), "Rejected quote body");
        missing_fields()
    })?;

    let quote = request.into_quote().map_err(|e| {
        tracing::warn!(error = %e, "Rejected incomplete quote");
        missing_fields()
    })?;

    let id = state.store.insert(&quote).await?;

    tracing::info!(id = %id, author = %quote.author, "Quote added");

    Ok((
        StatusCode::CREATED,
        Json(CreatedQuoteResponse::new(id, quote)),
    ))
}
