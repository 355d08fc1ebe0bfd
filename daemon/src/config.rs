//! Daemon configuration.

use cinder_types::Network;
use serde::Deserialize;

/// Settings for a running daemon. A TOML file supplies the base values;
/// CLI flags and environment variables override them.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DaemonConfig {
    /// Chain to query balances on.
    pub network: Network,
    /// Port the HTTP API listens on.
    pub api_port: u16,
    /// Moralis API key. Without one the provider reports itself
    /// unavailable instead of issuing unauthenticated requests.
    pub moralis_api_key: Option<String>,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            network: Network::Mainnet,
            api_port: 7080,
            moralis_api_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let cfg: DaemonConfig = toml::from_str(r#"api_port = 9000"#).unwrap();
        assert_eq!(cfg.api_port, 9000);
        assert_eq!(cfg.network, Network::Mainnet);
        assert!(cfg.moralis_api_key.is_none());
    }

    #[test]
    fn full_file_parses() {
        let cfg: DaemonConfig = toml::from_str(
            r#"
            network = "testnet"
            api_port = 8088
            moralis_api_key = "key-123"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.network, Network::Testnet);
        assert_eq!(cfg.api_port, 8088);
        assert_eq!(cfg.moralis_api_key.as_deref(), Some("key-123"));
    }

    #[test]
    fn unknown_file_keys_are_ignored() {
        // Log level is a CLI/env concern, not a file one; a file that still
        // carries it must not fail to parse.
        let cfg: DaemonConfig = toml::from_str(
            r#"
            api_port = 9000
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.api_port, 9000);
    }
}
