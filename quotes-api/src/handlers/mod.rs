pub mod health;
pub mod quotes;

pub use health::{ok, readiness_check};
pub use quotes::{add_quote, list_quotes};
