//! Raw token amount type.
//!
//! Amounts are raw integer units (u128) to avoid floating-point precision
//! loss. Decimal scaling happens only at display time, with integer
//! arithmetic.

use crate::error::AmountError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fungible-token amount in raw units.
///
/// Serialized as a decimal string integer, the wire representation used
/// by balance providers for values that overflow JSON numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TokenAmount(u128);

impl TokenAmount {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// Parse a decimal string integer (e.g. `"2500000000000000000"`).
    pub fn from_dec_str(s: &str) -> Result<Self, AmountError> {
        s.parse::<u128>()
            .map(Self)
            .map_err(|_| AmountError::InvalidInteger(s.to_string()))
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Format scaled by `decimals` with exactly four fractional digits,
    /// truncating (not rounding). Works on the decimal string, so any
    /// `decimals` value is safe from overflow.
    pub fn display_scaled(&self, decimals: u8) -> String {
        let raw = self.0.to_string();
        let decimals = decimals as usize;
        let padded = if raw.len() <= decimals {
            let mut s = "0".repeat(decimals - raw.len() + 1);
            s.push_str(&raw);
            s
        } else {
            raw
        };
        let split = padded.len() - decimals;
        let (whole, frac) = padded.split_at(split);
        let mut frac = frac.to_string();
        if frac.len() < 4 {
            frac.push_str(&"0".repeat(4 - frac.len()));
        } else {
            frac.truncate(4);
        }
        format!("{whole}.{frac}")
    }
}

impl TryFrom<String> for TokenAmount {
    type Error = AmountError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_dec_str(&s)
    }
}

impl From<TokenAmount> for String {
    fn from(amount: TokenAmount) -> Self {
        amount.0.to_string()
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
