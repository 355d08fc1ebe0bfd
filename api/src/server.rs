//! Router assembly and the serving loop.

use crate::error::ApiError;
use crate::handlers;
use axum::routing::get;
use axum::Router;
use cinder_provider::BalanceProvider;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Build the API router. CORS is permissive: the consumer is a browser
/// front end on another origin.
pub fn router(provider: Arc<dyn BalanceProvider>) -> Router {
    Router::new()
        .route("/tokens", get(handlers::tokens))
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(provider)
}

pub struct ApiServer {
    port: u16,
    provider: Arc<dyn BalanceProvider>,
}

impl ApiServer {
    pub fn new(port: u16, provider: Arc<dyn BalanceProvider>) -> Self {
        Self { port, provider }
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(&self) -> Result<(), ApiError> {
        let app = router(self.provider.clone());
        let addr = format!("0.0.0.0:{}", self.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| ApiError::Server(format!("failed to bind {addr}: {e}")))?;
        tracing::info!(%addr, "API server listening");
        axum::serve(listener, app)
            .await
            .map_err(|e| ApiError::Server(e.to_string()))
    }
}
