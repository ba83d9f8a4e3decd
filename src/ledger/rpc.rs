//! JSON-RPC ledger client with timeout and error handling.
//!
//! # Responsibilities
//! - Speak JSON-RPC 2.0 to the ledger endpoint
//! - Map transport, protocol, and simulation failures onto the error taxonomy
//! - Enforce a per-request timeout

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use url::Url;

use crate::ledger::types::{
    Account, AccountId, ClientError, ClientResult, Footprint, SignedTransaction, SimulationResult,
    SubmissionResult, Transaction, TransactionStatus, TxHash,
};
use crate::ledger::value::ScValue;
use crate::ledger::LedgerClient;

/// Ledger client backed by a JSON-RPC endpoint.
#[derive(Debug)]
pub struct RpcLedgerClient {
    http: reqwest::Client,
    endpoint: Url,
    next_id: AtomicU64,
}

#[derive(Debug, Deserialize)]
struct RpcEnvelope<R> {
    result: Option<R>,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

/// Wire shape of a simulation response. A populated `error` means the
/// contract trapped during the dry run.
#[derive(Debug, Deserialize)]
struct RawSimulation {
    error: Option<String>,
    return_value: Option<ScValue>,
    #[serde(default)]
    footprint: Footprint,
    #[serde(default)]
    resource_fee: u64,
}

impl RpcLedgerClient {
    /// Create a new client for the given endpoint.
    pub fn new(endpoint_url: &str, request_timeout: Duration) -> ClientResult<Self> {
        let endpoint: Url = endpoint_url.parse().map_err(|e| {
            ClientError::Network(format!("invalid RPC URL '{}': {}", endpoint_url, e))
        })?;

        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| ClientError::Network(format!("failed to build HTTP client: {}", e)))?;

        tracing::info!(
            endpoint = %endpoint,
            timeout_secs = request_timeout.as_secs(),
            "Ledger RPC client initialized"
        );

        Ok(Self {
            http,
            endpoint,
            next_id: AtomicU64::new(1),
        })
    }

    async fn call<P: Serialize, R: DeserializeOwned>(
        &self,
        method: &str,
        params: P,
    ) -> ClientResult<R> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    tracing::warn!(method = method, "RPC request timed out");
                    ClientError::Network(format!("RPC timeout calling {}", method))
                } else {
                    ClientError::Network(format!("RPC transport error calling {}: {}", method, e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Network(format!(
                "RPC endpoint returned HTTP {} for {}",
                status, method
            )));
        }

        let envelope: RpcEnvelope<R> = response.json().await.map_err(|e| {
            ClientError::Network(format!("malformed RPC response for {}: {}", method, e))
        })?;

        if let Some(err) = envelope.error {
            return Err(ClientError::Network(format!(
                "RPC error from {}: {} (code {})",
                method, err.message, err.code
            )));
        }

        envelope.result.ok_or_else(|| {
            ClientError::Network(format!("RPC response for {} carried no result", method))
        })
    }
}

#[async_trait::async_trait]
impl LedgerClient for RpcLedgerClient {
    async fn get_account(&self, id: &AccountId) -> ClientResult<Account> {
        self.call("getAccount", serde_json::json!({ "account_id": id }))
            .await
    }

    async fn simulate(&self, tx: &Transaction) -> ClientResult<SimulationResult> {
        let raw: RawSimulation = self
            .call("simulateTransaction", serde_json::json!({ "transaction": tx }))
            .await?;

        if let Some(error) = raw.error {
            return Err(ClientError::Simulation(error));
        }

        Ok(SimulationResult {
            return_value: raw.return_value,
            footprint: raw.footprint,
            resource_fee: raw.resource_fee,
        })
    }

    async fn prepare(&self, tx: &Transaction) -> ClientResult<Transaction> {
        // The endpoint resolves footprints through simulation; the prepared
        // transaction carries the footprint and bids base fee + resource fee.
        let sim = self.simulate(tx).await?;

        let mut prepared = tx.clone();
        prepared.fee = tx.fee.saturating_add(sim.resource_fee);
        prepared.footprint = Some(sim.footprint);

        tracing::debug!(
            fee = prepared.fee,
            resource_fee = sim.resource_fee,
            "Transaction prepared"
        );

        Ok(prepared)
    }

    async fn submit(&self, tx: &SignedTransaction) -> ClientResult<SubmissionResult> {
        self.call("sendTransaction", serde_json::json!({ "transaction": tx }))
            .await
    }

    async fn get_status(&self, hash: &TxHash) -> ClientResult<TransactionStatus> {
        self.call("getTransaction", serde_json::json!({ "hash": hash }))
            .await
    }
}
