//! Common test utilities for workflow integration tests.

use workflow_tests::{init_tracing, QuotesStack};

/// Start both services, with logging routed to the test writer.
pub async fn setup() -> QuotesStack {
    init_tracing();

    QuotesStack::spawn()
        .await
        .expect("Failed to start quotes services")
}
