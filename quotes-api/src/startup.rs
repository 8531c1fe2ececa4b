//! Router assembly and server lifecycle for quotes-api.

use axum::{
    middleware::from_fn,
    routing::get,
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    security_headers::security_headers_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use service_core::shutdown::shutdown_signal;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::{QuoteStoreKind, Settings};
use crate::handlers;
use crate::services::{MemoryQuoteStore, QuoteDb, QuoteStore};
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/quotes",
            get(handlers::list_quotes).post(handlers::add_quote),
        )
        .route("/ok", get(handlers::ok))
        .route("/ready", get(handlers::readiness_check))
        .layer(from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Select the quote store named by the settings.
pub async fn connect_store(settings: &Settings) -> Result<Arc<dyn QuoteStore>, AppError> {
    match settings.quote_store {
        QuoteStoreKind::Mongo => {
            let db = QuoteDb::connect(&settings.mongo_uri, &settings.mongo_database).await?;
            Ok(Arc::new(db))
        }
        QuoteStoreKind::Memory => {
            tracing::warn!("Using in-memory quote store; quotes are lost on restart");
            Ok(Arc::new(MemoryQuoteStore::new()))
        }
    }
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the store selected by `settings`.
    pub async fn build(settings: Settings) -> Result<Self, AppError> {
        let store = connect_store(&settings).await?;
        Self::build_with_store(settings, store).await
    }

    /// Build the application around an existing store. Port 0 binds a random
    /// port, which tests rely on.
    pub async fn build_with_store(
        settings: Settings,
        store: Arc<dyn QuoteStore>,
    ) -> Result<Self, AppError> {
        let address = format!("{}:{}", settings.bind_host, settings.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let router = build_router(AppState::new(store));

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let addr: SocketAddr = self.listener.local_addr()?;
        tracing::info!("quotes-api listening on {}", addr);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
