//! Wallet management and transaction signing.
//!
//! # Security
//! - The secret key is loaded ONLY from an environment variable
//! - Keys are never logged or serialized
//! - Signatures are scoped to one network via the passphrase-derived
//!   network id, so a testnet signature cannot replay on mainnet

use ed25519_dalek::{Signer, SigningKey};
use sha2::{Digest, Sha256};

use crate::ledger::types::{
    AccountId, ClientError, ClientResult, SignedTransaction, Transaction, TxHash,
};

/// Environment variable name for the secret key.
pub const SECRET_KEY_ENV_VAR: &str = "MESSENGER_SECRET_KEY";

/// Signing identity for the caller, bound to one network.
pub struct Wallet {
    signing_key: SigningKey,
    network_id: [u8; 32],
}

impl Wallet {
    /// Create a wallet from a hex-encoded ed25519 seed.
    ///
    /// # Arguments
    /// * `secret_hex` - 32-byte seed as hex (with or without 0x prefix)
    /// * `network_passphrase` - passphrase of the network to sign for
    pub fn from_secret_hex(secret_hex: &str, network_passphrase: &str) -> ClientResult<Self> {
        let key_hex = secret_hex.strip_prefix("0x").unwrap_or(secret_hex);

        let seed = hex::decode(key_hex)
            .map_err(|e| ClientError::Wallet(format!("invalid secret key format: {}", e)))?;
        let seed: [u8; 32] = seed
            .try_into()
            .map_err(|_| ClientError::Wallet("secret key must be 32 bytes".to_string()))?;

        let signing_key = SigningKey::from_bytes(&seed);
        let network_id = Sha256::digest(network_passphrase.as_bytes()).into();

        let wallet = Self {
            signing_key,
            network_id,
        };

        tracing::info!(
            account = %wallet.account_id(),
            "Wallet initialized"
        );

        Ok(wallet)
    }

    /// Load the wallet from `MESSENGER_SECRET_KEY`.
    pub fn from_env(network_passphrase: &str) -> ClientResult<Self> {
        let secret = std::env::var(SECRET_KEY_ENV_VAR).map_err(|_| {
            ClientError::Wallet(format!(
                "environment variable {} not set",
                SECRET_KEY_ENV_VAR
            ))
        })?;

        Self::from_secret_hex(&secret, network_passphrase)
    }

    /// The account identifier derived from the public key.
    pub fn account_id(&self) -> AccountId {
        AccountId(hex::encode(self.signing_key.verifying_key().to_bytes()))
    }

    /// Network-scoped hash of a transaction: SHA-256 over the network id
    /// followed by the canonical transaction bytes.
    pub fn transaction_hash(&self, tx: &Transaction) -> ClientResult<TxHash> {
        let tx_bytes = serde_json::to_vec(tx)
            .map_err(|e| ClientError::Wallet(format!("failed to encode transaction: {}", e)))?;

        let mut hasher = Sha256::new();
        hasher.update(self.network_id);
        hasher.update(&tx_bytes);
        Ok(TxHash(hasher.finalize().into()))
    }

    /// Sign a prepared transaction.
    pub fn sign(&self, tx: &Transaction) -> ClientResult<SignedTransaction> {
        let hash = self.transaction_hash(tx)?;
        let signature = self.signing_key.sign(&hash.0);

        Ok(SignedTransaction {
            tx: tx.clone(),
            signature: hex::encode(signature.to_bytes()),
        })
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("account", &self.account_id())
            .finish()
    }
}
