//! Chain selection and per-chain constants.

use crate::address::ChainAddress;
use serde::{Deserialize, Serialize};

/// Which BSC network the process targets. Process-wide configuration;
/// never varies per request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// Chain id in the hex form the balance provider expects.
    pub fn chain_id_hex(&self) -> &'static str {
        match self {
            Network::Mainnet => "0x38",
            Network::Testnet => "0x61",
        }
    }

    /// The wrapped-native token (WBNB) contract for this network.
    ///
    /// Burning the native coin or its wrapped form is out of scope, so
    /// this address is excluded from every normalized balance list.
    pub fn wrapped_native(&self) -> ChainAddress {
        let hex = match self {
            Network::Mainnet => "0xbb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c",
            Network::Testnet => "0xae13d989dac2f0debff460ac112a837c89baa7cd",
        };
        ChainAddress::parse(hex).expect("wrapped-native constant is a valid address")
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }

    /// Parse a network name, defaulting to mainnet for unknown values.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "testnet" | "test" => Network::Testnet,
            _ => Network::Mainnet,
        }
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::Mainnet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_native_constants_parse() {
        assert_eq!(
            Network::Mainnet.wrapped_native().as_str(),
            "0xbb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c"
        );
        assert_eq!(
            Network::Testnet.wrapped_native().as_str(),
            "0xae13d989dac2f0debff460ac112a837c89baa7cd"
        );
    }

    #[test]
    fn parse_falls_back_to_mainnet() {
        assert_eq!(Network::parse("testnet"), Network::Testnet);
        assert_eq!(Network::parse("TEST"), Network::Testnet);
        assert_eq!(Network::parse("mainnet"), Network::Mainnet);
        assert_eq!(Network::parse("garbage"), Network::Mainnet);
    }
}
