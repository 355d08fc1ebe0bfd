//! EVM-style chain address, normalized to lowercase hex.

use crate::error::AddressError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 20-byte EVM address held as a lowercase `0x`-prefixed hex string.
///
/// Normalization happens at construction, so equality and hashing are
/// case-insensitive for free. Used for both token contracts and wallet
/// owners; the chain does not distinguish them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChainAddress(String);

impl ChainAddress {
    /// Hex length including the `0x` prefix.
    pub const LEN: usize = 42;

    /// The canonical unspendable "dead" address. Tokens sent here are
    /// irreversibly destroyed.
    pub const BURN_HEX: &'static str = "0x000000000000000000000000000000000000dead";

    /// Parse and normalize an address string.
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        let lower = raw.to_ascii_lowercase();
        if !lower.starts_with("0x") {
            return Err(AddressError::MissingPrefix(raw.to_string()));
        }
        if lower.len() != Self::LEN {
            return Err(AddressError::BadLength(raw.len()));
        }
        if !lower[2..].bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AddressError::NonHex(raw.to_string()));
        }
        Ok(Self(lower))
    }

    /// The burn address constant.
    pub fn burn() -> Self {
        Self(Self::BURN_HEX.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ChainAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ChainAddress {
    type Error = AddressError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ChainAddress> for String {
    fn from(addr: ChainAddress) -> Self {
        addr.0
    }
}

impl fmt::Display for ChainAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_to_lowercase() {
        let mixed = "0x000000000000000000000000000000000000dEaD";
        let addr = ChainAddress::parse(mixed).unwrap();
        assert_eq!(addr.as_str(), ChainAddress::BURN_HEX);
        assert_eq!(addr, ChainAddress::burn());
    }

    #[test]
    fn case_variants_compare_equal() {
        let a = ChainAddress::parse("0xBB4CDB9CBD36B01BD1CBAEBF2DE08D9173BC095C").unwrap();
        let b = ChainAddress::parse("0xbb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn reject_missing_prefix() {
        let result = ChainAddress::parse("bb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c00");
        assert!(matches!(result, Err(AddressError::MissingPrefix(_))));
    }

    #[test]
    fn reject_wrong_length() {
        assert!(matches!(
            ChainAddress::parse("0xdead"),
            Err(AddressError::BadLength(6))
        ));
        assert!(ChainAddress::parse("").is_err());
    }

    #[test]
    fn reject_non_hex_characters() {
        let result = ChainAddress::parse("0xzz4cdb9cbd36b01bd1cbaebf2de08d9173bc095c");
        assert!(matches!(result, Err(AddressError::NonHex(_))));
    }

    #[test]
    fn serde_roundtrip_validates() {
        let json = "\"0x000000000000000000000000000000000000dEaD\"";
        let addr: ChainAddress = serde_json::from_str(json).unwrap();
        assert_eq!(addr, ChainAddress::burn());
        assert_eq!(
            serde_json::to_string(&addr).unwrap(),
            format!("\"{}\"", ChainAddress::BURN_HEX)
        );

        let bad: Result<ChainAddress, _> = serde_json::from_str("\"not-an-address\"");
        assert!(bad.is_err());
    }
}
