//! Fundamental types shared across the cinder workspace.
//!
//! Token amounts are integers end to end: balances arrive as string
//! integers from the chain-data provider, are held as raw `u128` units,
//! and are only scaled for display at render time.

pub mod address;
pub mod amount;
pub mod error;
pub mod network;
pub mod time;
pub mod token;

pub use address::ChainAddress;
pub use amount::TokenAmount;
pub use error::{AddressError, AmountError};
pub use network::Network;
pub use time::Timestamp;
pub use token::TokenBalance;
