//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default so a minimal (or missing) config still runs
//! against the public testnet deployment. The secret key is deliberately
//! absent: it is loaded from the environment only.

use serde::{Deserialize, Serialize};

/// Root configuration for the messenger client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MessengerConfig {
    /// Ledger RPC endpoint settings.
    pub rpc: RpcConfig,

    /// Network identity and fee bid.
    pub network: NetworkConfig,

    /// Target contract and its entry points.
    pub contract: ContractConfig,

    /// Confirmation poll settings.
    pub confirmation: ConfirmationConfig,
}

/// Ledger RPC endpoint settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RpcConfig {
    /// Endpoint URL.
    pub endpoint_url: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            endpoint_url: "https://soroban-testnet.stellar.org".to_string(),
            request_timeout_secs: 10,
        }
    }
}

/// Network identity and fee bid.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Network passphrase; scopes signatures to one network.
    pub passphrase: String,

    /// Base fee bid in stroops. The resource fee from simulation is
    /// added on top during prepare.
    pub base_fee: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            passphrase: "Test SDF Network ; September 2015".to_string(),
            base_fee: 100,
        }
    }
}

/// Target contract and its entry points.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Contract identifier on the ledger.
    pub contract_id: String,

    /// Zero-argument read entry point.
    pub read_function: String,

    /// Single string-argument write entry point.
    pub write_function: String,

    /// Expiration timeout for read (simulated) transactions, seconds.
    pub read_timeout_secs: u64,

    /// Expiration timeout for submitted transactions, seconds.
    pub write_timeout_secs: u64,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            contract_id: "CAJN25XAZLTZEVS7ZFLNZ3HWREJRQHKUU265CK67ED2ASJ22TDQ5Y4PL".to_string(),
            read_function: "get_message".to_string(),
            write_function: "set_message".to_string(),
            read_timeout_secs: 30,
            write_timeout_secs: 60,
        }
    }
}

/// Confirmation poll settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConfirmationConfig {
    /// Delay between status checks, milliseconds.
    pub poll_interval_ms: u64,

    /// Maximum number of status checks before giving up with a timeout.
    pub max_poll_attempts: u32,
}

impl Default for ConfirmationConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1200,
            max_poll_attempts: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_target_testnet() {
        let config = MessengerConfig::default();
        assert!(config.rpc.endpoint_url.contains("testnet"));
        assert_eq!(config.network.base_fee, 100);
        assert_eq!(config.contract.read_function, "get_message");
        assert_eq!(config.confirmation.poll_interval_ms, 1200);
        assert_eq!(config.confirmation.max_poll_attempts, 50);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: MessengerConfig = toml::from_str(
            r#"
            [confirmation]
            max_poll_attempts = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.confirmation.max_poll_attempts, 5);
        assert_eq!(config.confirmation.poll_interval_ms, 1200);
        assert_eq!(config.network.passphrase, "Test SDF Network ; September 2015");
    }
}
