//! A single discovered token holding.

use crate::address::ChainAddress;
use crate::amount::TokenAmount;
use serde::{Deserialize, Serialize};

/// One fungible-token balance held by the owner.
///
/// The serde shape matches the `/tokens` wire format (and the upstream
/// provider's): `token_address`, `symbol`, `balance` (string integer),
/// `decimals`. Unknown upstream fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance {
    #[serde(rename = "token_address")]
    pub address: ChainAddress,
    pub symbol: String,
    pub balance: TokenAmount,
    pub decimals: u8,
}

impl TokenBalance {
    /// Human-readable balance, scaled by `decimals` at render time only.
    pub fn display_balance(&self) -> String {
        self.balance.display_scaled(self.decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_format() {
        let json = r#"{
            "token_address": "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c",
            "symbol": "WBNB",
            "name": "Wrapped BNB",
            "balance": "2500000000000000000",
            "decimals": 18
        }"#;
        let token: TokenBalance = serde_json::from_str(json).unwrap();
        assert_eq!(
            token.address.as_str(),
            "0xbb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c"
        );
        assert_eq!(token.symbol, "WBNB");
        assert_eq!(token.balance.raw(), 2_500_000_000_000_000_000);
        assert_eq!(token.decimals, 18);
    }

    #[test]
    fn serializes_balance_as_string() {
        let token = TokenBalance {
            address: ChainAddress::burn(),
            symbol: "TST".into(),
            balance: TokenAmount::new(100),
            decimals: 18,
        };
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["token_address"], ChainAddress::BURN_HEX);
        assert_eq!(json["balance"], "100");
        assert_eq!(json["decimals"], 18);
    }

    #[test]
    fn display_balance_scales_by_decimals() {
        let token = TokenBalance {
            address: ChainAddress::burn(),
            symbol: "TST".into(),
            balance: TokenAmount::new(1_250_000),
            decimals: 6,
        };
        assert_eq!(token.display_balance(), "1.2500");
    }
}
