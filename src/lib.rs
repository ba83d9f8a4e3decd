//! Client library for a Soroban message contract.
//!
//! Reads and writes a single string value held by a contract, through a
//! ledger facade that covers account lookup, simulation, preparation,
//! submission, and status polling.

pub mod config;
pub mod contract;
pub mod ledger;
pub mod wallet;

pub use config::MessengerConfig;
pub use contract::ContractClient;
pub use ledger::{ClientError, LedgerClient, RpcLedgerClient};
pub use wallet::Wallet;
