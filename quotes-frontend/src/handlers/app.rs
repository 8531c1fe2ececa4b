use askama::Template;
use axum::{
    extract::{rejection::FormRejection, State},
    http::{HeaderMap, StatusCode},
    response::Redirect,
    Form,
};
use service_core::observability::extract_request_id;

use crate::models::{Quote, QuoteForm};
use crate::services::QuotesClientError;
use crate::AppState;

pub const MISSING_FIELDS_MESSAGE: &str = "Error: Both quote and author fields are required.";
pub const UNREACHABLE_MESSAGE: &str = "Error: Unable to connect to the API.";

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub quotes: Vec<Quote>,
}

/// Render the page with whatever quotes-api returns.
///
/// A failed fetch is logged and rendered as an empty list; the page itself
/// shows no error.
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> IndexTemplate {
    let request_id = extract_request_id(&headers);

    let quotes = match state
        .quotes_client
        .list_quotes(request_id.as_deref())
        .await
    {
        Ok(quotes) => quotes,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch quotes, rendering empty list");
            Vec::new()
        }
    };

    IndexTemplate { quotes }
}

/// Forward a submitted quote to quotes-api, then send the browser back to
/// the page.
pub async fn submit_quote(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<QuoteForm>, FormRejection>,
) -> Result<Redirect, (StatusCode, String)> {
    let quote = form
        .ok()
        .and_then(|Form(form)| form.into_quote())
        .ok_or_else(|| (StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE.to_string()))?;

    let request_id = extract_request_id(&headers);

    match state
        .quotes_client
        .add_quote(&quote, request_id.as_deref())
        .await
    {
        Ok(()) => {
            tracing::info!(author = %quote.author, "Quote submitted");
            Ok(Redirect::to("/"))
        }
        Err(QuotesClientError::UnexpectedStatus(status)) => {
            tracing::warn!(status = status.as_u16(), "quotes-api refused quote");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!(
                    "Error: Unable to save quote. API responded with status code {}.",
                    status.as_u16()
                ),
            ))
        }
        Err(e) => {
            tracing::error!(error = %e, "Error connecting to quotes API");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                UNREACHABLE_MESSAGE.to_string(),
            ))
        }
    }
}

pub async fn health_check() -> &'static str {
    "OK"
}
