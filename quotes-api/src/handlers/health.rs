use axum::extract::State;
use service_core::error::AppError;

use crate::AppState;

/// Liveness probe. Answers without touching the store.
pub async fn ok() -> &'static str {
    "OK"
}

/// Readiness probe: the store must answer a ping.
pub async fn readiness_check(State(state): State<AppState>) -> Result<&'static str, AppError> {
    state.store.ping().await.map_err(|e| {
        tracing::warn!(error = %e, "Quote store not ready");
        AppError::ServiceUnavailable
    })?;

    Ok("READY")
}
