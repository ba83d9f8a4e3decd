//! Ledger-facing types and error definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::ledger::value::ScValue;

/// Account identifier: hex-encoded ed25519 public key, strongly typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub String);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Account state as seen by the ledger.
///
/// Fetched fresh before every transaction build; the sequence number is
/// single-use and must increment per submitted transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub account_id: AccountId,
    pub sequence: u64,
}

/// 32-byte transaction hash, rendered as hex on the wire and in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TxHash(pub [u8; 32]);

impl TxHash {
    /// First eight hex characters, for progress logging.
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for TxHash {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)
            .map_err(|e| ClientError::Value(format!("invalid transaction hash: {}", e)))?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|_| ClientError::Value("transaction hash must be 32 bytes".to_string()))?;
        Ok(Self(bytes))
    }
}

impl Serialize for TxHash {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TxHash {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Storage keys a transaction will touch, resolved by simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    #[serde(default)]
    pub read_keys: Vec<String>,
    #[serde(default)]
    pub write_keys: Vec<String>,
}

/// A single contract invocation: function name plus encoded arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractCall {
    pub contract_id: String,
    pub function: String,
    pub args: Vec<ScValue>,
}

/// An intended state change. Built fresh per call, immutable once
/// constructed; `prepare` returns a copy with the footprint resolved and
/// the resource fee folded into the fee bid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub source: AccountId,
    pub sequence: u64,
    pub call: ContractCall,
    pub fee: u64,
    pub timeout_secs: u64,
    pub footprint: Option<Footprint>,
}

/// A transaction plus the source account's signature over its
/// network-scoped hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedTransaction {
    pub tx: Transaction,
    /// Hex-encoded ed25519 signature.
    pub signature: String,
}

/// Outcome of a dry-run evaluation. One stable schema: a missing return
/// value is reported loudly by the caller, never probed around.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub return_value: Option<ScValue>,
    pub footprint: Footprint,
    /// Resource fee the execution would consume, added on top of the
    /// base fee bid during `prepare`.
    #[serde(default)]
    pub resource_fee: u64,
}

/// Outcome of broadcasting a signed transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub hash: TxHash,
    /// Reason the network rejected the transaction outright, if it did.
    pub rejection: Option<String>,
}

/// Details of a transaction that reached a terminal status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationRecord {
    pub hash: TxHash,
    pub ledger: Option<u64>,
    pub return_value: Option<ScValue>,
    pub error: Option<String>,
}

/// Confirmation status of a submitted transaction, retrieved by hash.
/// Terminal states end the poll loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "record", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Success(ConfirmationRecord),
    Failed(ConfirmationRecord),
}

/// Errors that can occur during contract interaction.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Endpoint unreachable or RPC-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// Transaction rejected before inclusion in a ledger.
    #[error("transaction rejected at submission: {0}")]
    Submission(String),

    /// Transaction included but the contract logic failed.
    #[error("transaction {} failed on-chain: {}", .0.hash, .0.error.as_deref().unwrap_or("no diagnostic"))]
    Execution(ConfirmationRecord),

    /// Read-only evaluation failed or returned an unusable result.
    #[error("simulation failed: {0}")]
    Simulation(String),

    /// Confirmation poll bound exhausted while the transaction was
    /// still pending.
    #[error("transaction not confirmed after {attempts} status polls")]
    Timeout { attempts: u32 },

    /// Invalid secret key or signing failure.
    #[error("wallet error: {0}")]
    Wallet(String),

    /// Contract value could not be converted to the expected native type.
    #[error("invalid contract value: {0}")]
    Value(String),
}

/// Result type for contract interaction operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tx_hash_round_trip() {
        let hash = TxHash([0xab; 32]);
        let text = hash.to_string();
        assert_eq!(text.len(), 64);
        assert_eq!(text.parse::<TxHash>().unwrap(), hash);
    }

    #[test]
    fn test_tx_hash_short() {
        let hash = TxHash([0x01; 32]);
        assert_eq!(hash.short(), "01010101");
    }

    #[test]
    fn test_tx_hash_rejects_bad_length() {
        assert!("abcd".parse::<TxHash>().is_err());
        assert!("zz".repeat(32).parse::<TxHash>().is_err());
    }

    #[test]
    fn test_status_serialization() {
        let status = TransactionStatus::Pending;
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("PENDING"));

        let record = ConfirmationRecord {
            hash: TxHash([0; 32]),
            ledger: Some(7),
            return_value: None,
            error: None,
        };
        let status = TransactionStatus::Success(record);
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["status"], "SUCCESS");
        assert_eq!(json["record"]["ledger"], 7);
    }

    #[test]
    fn test_error_display() {
        let err = ClientError::Timeout { attempts: 50 };
        assert_eq!(
            err.to_string(),
            "transaction not confirmed after 50 status polls"
        );

        let err = ClientError::Execution(ConfirmationRecord {
            hash: TxHash([0; 32]),
            ledger: None,
            return_value: None,
            error: Some("contract trapped".to_string()),
        });
        assert!(err.to_string().contains("contract trapped"));
    }
}
