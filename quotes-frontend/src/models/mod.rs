use serde::{Deserialize, Serialize};

/// A quote as listed by quotes-api.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}

/// Fields posted by the page's form. Either may be absent.
#[derive(Debug, Deserialize)]
pub struct QuoteForm {
    pub quote: Option<String>,
    pub author: Option<String>,
}

impl QuoteForm {
    /// The quote to forward, when both fields are present and non-empty.
    pub fn into_quote(self) -> Option<Quote> {
        match (self.quote, self.author) {
            (Some(quote), Some(author)) if !quote.is_empty() && !author.is_empty() => {
                Some(Quote { quote, author })
            }
            _ => None,
        }
    }
}
