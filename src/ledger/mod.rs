//! Ledger client facade.
//!
//! # Data Flow
//! ```text
//! contract.rs builds a Transaction
//!     → prepare (resolve footprint + resource fee)
//!     → wallet.rs signs
//!     → submit (broadcast, immediate-rejection check)
//!     → get_status polled until terminal
//! ```
//!
//! # Design Decisions
//! - Everything network-facing sits behind the `LedgerClient` trait so the
//!   interaction logic can be exercised against a scripted stub
//! - Simulation is the only path for reads: no signing, no fee spent
//! - Wire protocol details (XDR, envelope layout) stay behind the facade

pub mod rpc;
pub mod types;
pub mod value;

use async_trait::async_trait;

pub use rpc::RpcLedgerClient;
pub use types::{
    Account, AccountId, ClientError, ClientResult, ConfirmationRecord, ContractCall, Footprint,
    SignedTransaction, SimulationResult, SubmissionResult, Transaction, TransactionStatus, TxHash,
};
pub use value::ScValue;

/// Capabilities this client consumes from the ledger.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Fetch current account state (public key, sequence number).
    async fn get_account(&self, id: &AccountId) -> ClientResult<Account>;

    /// Dry-run an unsigned transaction and return its result.
    async fn simulate(&self, tx: &Transaction) -> ClientResult<SimulationResult>;

    /// Resolve the transaction's resource footprint and fee.
    async fn prepare(&self, tx: &Transaction) -> ClientResult<Transaction>;

    /// Broadcast a signed transaction.
    async fn submit(&self, tx: &SignedTransaction) -> ClientResult<SubmissionResult>;

    /// Fetch the confirmation status of a submitted transaction.
    async fn get_status(&self, hash: &TxHash) -> ClientResult<TransactionStatus>;
}
