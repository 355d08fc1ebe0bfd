//! Request handlers.

use crate::error::ApiError;
use axum::extract::{Query, State};
use axum::Json;
use cinder_provider::BalanceProvider;
use cinder_types::{ChainAddress, TokenBalance};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct TokensQuery {
    pub address: Option<String>,
}

/// `GET /tokens?address=<addr>`: the owner's normalized token balances.
///
/// The provider has already excluded the native/wrapped-native token, so
/// the response is the burnable set (zero balances included).
pub async fn tokens(
    State(provider): State<Arc<dyn BalanceProvider>>,
    Query(query): Query<TokensQuery>,
) -> Result<Json<Vec<TokenBalance>>, ApiError> {
    let raw = query.address.ok_or(ApiError::MissingAddress)?;
    let owner = ChainAddress::parse(&raw)?;
    let tokens = provider.fetch(&owner).await?;
    Ok(Json(tokens))
}

/// `GET /health` liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
