pub mod quotes_client;

pub use quotes_client::{QuotesClient, QuotesClientError};
