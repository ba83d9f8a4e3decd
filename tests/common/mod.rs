//! Shared utilities for integration testing: a scripted ledger stub.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use soroban_messenger::config::MessengerConfig;
use soroban_messenger::ledger::{
    Account, AccountId, ClientResult, ConfirmationRecord, Footprint, LedgerClient, ScValue,
    SignedTransaction, SimulationResult, SubmissionResult, Transaction, TransactionStatus, TxHash,
};
use soroban_messenger::wallet::Wallet;

pub const TEST_SECRET: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";

pub fn demo_wallet() -> Wallet {
    let config = MessengerConfig::default();
    Wallet::from_secret_hex(TEST_SECRET, &config.network.passphrase).unwrap()
}

pub fn demo_config() -> MessengerConfig {
    MessengerConfig::default()
}

const STUB_RESOURCE_FEE: u64 = 4200;

#[derive(Debug)]
struct StubState {
    stored_value: String,
    sequence: u64,
    pending_polls: u32,
    reject_submission: Option<String>,
    fail_execution: Option<String>,
    simulate_missing_value: bool,
    account_fetches: u32,
    status_calls: u32,
    submitted_sequences: Vec<u64>,
    // Staged write, applied when the poll observes SUCCESS.
    staged_write: Option<String>,
}

/// In-memory ledger holding one message value, with programmable failures
/// and call counters for asserting the client's behavior.
#[derive(Debug, Clone)]
pub struct StubLedger {
    state: Arc<Mutex<StubState>>,
}

#[allow(dead_code)]
impl StubLedger {
    pub fn new(initial_value: &str) -> Self {
        Self {
            state: Arc::new(Mutex::new(StubState {
                stored_value: initial_value.to_string(),
                sequence: 7,
                pending_polls: 0,
                reject_submission: None,
                fail_execution: None,
                simulate_missing_value: false,
                account_fetches: 0,
                status_calls: 0,
                submitted_sequences: Vec::new(),
                staged_write: None,
            })),
        }
    }

    pub fn set_pending_polls(&self, n: u32) {
        self.state.lock().unwrap().pending_polls = n;
    }

    pub fn set_rejection(&self, reason: &str) {
        self.state.lock().unwrap().reject_submission = Some(reason.to_string());
    }

    pub fn set_execution_failure(&self, error: &str) {
        self.state.lock().unwrap().fail_execution = Some(error.to_string());
    }

    pub fn set_simulate_missing_value(&self) {
        self.state.lock().unwrap().simulate_missing_value = true;
    }

    pub fn stored_value(&self) -> String {
        self.state.lock().unwrap().stored_value.clone()
    }

    pub fn account_fetches(&self) -> u32 {
        self.state.lock().unwrap().account_fetches
    }

    pub fn status_calls(&self) -> u32 {
        self.state.lock().unwrap().status_calls
    }

    pub fn submitted_sequences(&self) -> Vec<u64> {
        self.state.lock().unwrap().submitted_sequences.clone()
    }
}

fn stub_hash(sequence: u64) -> TxHash {
    let mut bytes = [0u8; 32];
    bytes[..8].copy_from_slice(&sequence.to_be_bytes());
    TxHash(bytes)
}

#[async_trait]
impl LedgerClient for StubLedger {
    async fn get_account(&self, id: &AccountId) -> ClientResult<Account> {
        let mut state = self.state.lock().unwrap();
        state.account_fetches += 1;
        Ok(Account {
            account_id: id.clone(),
            sequence: state.sequence,
        })
    }

    async fn simulate(&self, tx: &Transaction) -> ClientResult<SimulationResult> {
        let state = self.state.lock().unwrap();
        if state.simulate_missing_value {
            return Ok(SimulationResult {
                return_value: None,
                footprint: Footprint::default(),
                resource_fee: STUB_RESOURCE_FEE,
            });
        }

        let return_value = if tx.call.args.is_empty() {
            ScValue::String(state.stored_value.clone())
        } else {
            ScValue::Void
        };

        Ok(SimulationResult {
            return_value: Some(return_value),
            footprint: Footprint {
                read_keys: vec!["MESSAGE".to_string()],
                write_keys: if tx.call.args.is_empty() {
                    vec![]
                } else {
                    vec!["MESSAGE".to_string()]
                },
            },
            resource_fee: STUB_RESOURCE_FEE,
        })
    }

    async fn prepare(&self, tx: &Transaction) -> ClientResult<Transaction> {
        let sim = self.simulate(tx).await?;
        let mut prepared = tx.clone();
        prepared.fee = tx.fee + sim.resource_fee;
        prepared.footprint = Some(sim.footprint);
        Ok(prepared)
    }

    async fn submit(&self, tx: &SignedTransaction) -> ClientResult<SubmissionResult> {
        let mut state = self.state.lock().unwrap();
        let hash = stub_hash(tx.tx.sequence);

        if let Some(reason) = state.reject_submission.clone() {
            return Ok(SubmissionResult {
                hash,
                rejection: Some(reason),
            });
        }

        state.submitted_sequences.push(tx.tx.sequence);
        state.sequence = tx.tx.sequence;
        state.staged_write = tx.tx.call.args.first().and_then(|arg| match arg {
            ScValue::String(s) => Some(s.clone()),
            _ => None,
        });

        Ok(SubmissionResult {
            hash,
            rejection: None,
        })
    }

    async fn get_status(&self, hash: &TxHash) -> ClientResult<TransactionStatus> {
        let mut state = self.state.lock().unwrap();
        state.status_calls += 1;

        if let Some(error) = state.fail_execution.clone() {
            return Ok(TransactionStatus::Failed(ConfirmationRecord {
                hash: *hash,
                ledger: Some(101),
                return_value: None,
                error: Some(error),
            }));
        }

        if state.pending_polls > 0 {
            state.pending_polls -= 1;
            return Ok(TransactionStatus::Pending);
        }

        if let Some(value) = state.staged_write.take() {
            state.stored_value = value;
        }

        Ok(TransactionStatus::Success(ConfirmationRecord {
            hash: *hash,
            ledger: Some(101),
            return_value: Some(ScValue::Void),
            error: None,
        }))
    }
}
