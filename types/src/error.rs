//! Validation errors for the fundamental types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address must start with 0x: {0}")]
    MissingPrefix(String),

    #[error("address must be 42 characters, got {0}")]
    BadLength(usize),

    #[error("address contains non-hex characters: {0}")]
    NonHex(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount is not a non-negative decimal integer: {0}")]
    InvalidInteger(String),
}
