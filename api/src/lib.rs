//! Axum-based HTTP API.
//!
//! Exposes the balance query boundary:
//! - `GET /tokens?address=<addr>`: normalized token balances for an owner
//! - `GET /health`: liveness

pub mod error;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use server::{router, ApiServer};
