//! Contract interaction: read, write, and confirmation monitoring.
//!
//! # Responsibilities
//! - Build call transactions against a fresh account snapshot
//! - Read via simulation (no signing, no fee spent)
//! - Write via prepare → sign → submit → bounded confirmation poll

use std::time::Duration;
use tokio::time::sleep;

use crate::config::MessengerConfig;
use crate::ledger::{
    AccountId, ClientError, ClientResult, ConfirmationRecord, ContractCall, LedgerClient, ScValue,
    Transaction, TransactionStatus,
};
use crate::wallet::Wallet;

/// Client for a message contract holding a single string value.
///
/// Holds everything one run needs: the ledger facade, the signing wallet,
/// and the validated configuration. Nothing here is process-global.
pub struct ContractClient<L> {
    ledger: L,
    wallet: Wallet,
    config: MessengerConfig,
}

impl<L: LedgerClient> ContractClient<L> {
    /// Create a new contract client.
    pub fn new(ledger: L, wallet: Wallet, config: MessengerConfig) -> Self {
        Self {
            ledger,
            wallet,
            config,
        }
    }

    /// Read the current value via simulation.
    ///
    /// Builds a zero-argument call transaction and dry-runs it; nothing is
    /// signed and no fee is spent.
    pub async fn read_value(&self) -> ClientResult<String> {
        let function = self.config.contract.read_function.clone();
        tracing::info!(function = %function, "Reading contract value");

        let tx = self
            .build_transaction(&function, vec![], self.config.contract.read_timeout_secs)
            .await?;

        let sim = self.ledger.simulate(&tx).await?;
        let value = sim.return_value.ok_or_else(|| {
            ClientError::Simulation("simulation returned no value".to_string())
        })?;

        value.into_native_string()
    }

    /// Write a new value and wait for on-chain confirmation.
    pub async fn write_value(&self, new_value: &str) -> ClientResult<ConfirmationRecord> {
        let function = self.config.contract.write_function.clone();
        tracing::info!(function = %function, value = %new_value, "Writing contract value");

        let tx = self
            .build_transaction(
                &function,
                vec![ScValue::from_native_str(new_value)],
                self.config.contract.write_timeout_secs,
            )
            .await?;

        self.submit_and_confirm(tx).await
    }

    /// Prepare, sign, submit, and poll until the transaction reaches a
    /// terminal status or the poll bound is exhausted.
    pub async fn submit_and_confirm(&self, tx: Transaction) -> ClientResult<ConfirmationRecord> {
        let prepared = self.ledger.prepare(&tx).await?;
        let signed = self.wallet.sign(&prepared)?;
        let submitted = self.ledger.submit(&signed).await?;

        if let Some(reason) = submitted.rejection {
            return Err(ClientError::Submission(reason));
        }

        let interval = Duration::from_millis(self.config.confirmation.poll_interval_ms);
        let max_attempts = self.config.confirmation.max_poll_attempts;

        tracing::info!(
            hash = %submitted.hash.short(),
            "Waiting for transaction confirmation"
        );

        let mut attempts = 0u32;
        loop {
            attempts += 1;
            match self.ledger.get_status(&submitted.hash).await? {
                TransactionStatus::Pending => {
                    tracing::debug!(
                        hash = %submitted.hash.short(),
                        attempt = attempts,
                        "Transaction pending"
                    );
                }
                TransactionStatus::Success(record) => {
                    tracing::info!(
                        hash = %submitted.hash,
                        ledger = record.ledger,
                        "Transaction confirmed"
                    );
                    return Ok(record);
                }
                TransactionStatus::Failed(record) => {
                    return Err(ClientError::Execution(record));
                }
            }

            if attempts >= max_attempts {
                return Err(ClientError::Timeout {
                    attempts: max_attempts,
                });
            }
            sleep(interval).await;
        }
    }

    /// The wallet's account identifier.
    pub fn account_id(&self) -> AccountId {
        self.wallet.account_id()
    }

    /// Build a call transaction against a fresh account snapshot.
    ///
    /// Sequence numbers are single-use, so the account is fetched
    /// immediately before every build.
    async fn build_transaction(
        &self,
        function: &str,
        args: Vec<ScValue>,
        timeout_secs: u64,
    ) -> ClientResult<Transaction> {
        let account = self.ledger.get_account(&self.wallet.account_id()).await?;

        Ok(Transaction {
            source: account.account_id,
            sequence: account.sequence + 1,
            call: ContractCall {
                contract_id: self.config.contract.contract_id.clone(),
                function: function.to_string(),
                args,
            },
            fee: self.config.network.base_fee,
            timeout_secs,
            footprint: None,
        })
    }
}
