use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::models::Quote;

/// Body of `POST /api/quotes`. Fields are optional so that a missing field is
/// reported by validation rather than by the JSON extractor.
#[derive(Debug, Deserialize, Validate)]
pub struct NewQuoteRequest {
    #[validate(required, length(min = 1))]
    pub quote: Option<String>,
    #[validate(required, length(min = 1))]
    pub author: Option<String>,
}

impl NewQuoteRequest {
    pub fn into_quote(self) -> Result<Quote, ValidationErrors> {
        self.validate()?;

        match (self.quote, self.author) {
            (Some(quote), Some(author)) => Ok(Quote { quote, author }),
            _ => Err(ValidationErrors::new()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedQuoteResponse {
    pub id: String,
    pub quote: String,
    pub author: String,
}

impl CreatedQuoteResponse {
    pub fn new(id: String, quote: Quote) -> Self {
        Self {
            id,
            quote: quote.quote,
            author: quote.author,
        }
    }
}
