pub mod database;
pub mod memory;
pub mod store;

pub use database::QuoteDb;
pub use memory::MemoryQuoteStore;
pub use store::QuoteStore;
