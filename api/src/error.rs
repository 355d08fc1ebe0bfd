//! API error types and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cinder_provider::ProviderError;
use cinder_types::AddressError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The `address` query parameter was omitted.
    #[error("Address is required")]
    MissingAddress,

    /// The `address` query parameter is not a valid chain address.
    #[error(transparent)]
    InvalidAddress(#[from] AddressError),

    /// The upstream balance provider failed or is unconfigured.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The server itself failed to bind or serve.
    #[error("server error: {0}")]
    Server(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingAddress | ApiError::InvalidAddress(_) => StatusCode::BAD_REQUEST,
            ApiError::Provider(_) | ApiError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self, "request failed");
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
