//! Message contract demo client.
//!
//! Runs a three-step demo against the configured contract:
//! read the current message, write a new one (waiting for on-chain
//! confirmation), then read it back.
//!
//! ```text
//! config (TOML + defaults)          MESSENGER_SECRET_KEY (env)
//!         │                                  │
//!         ▼                                  ▼
//!   MessengerConfig ──────────────────► Wallet
//!         │                                  │
//!         ▼                                  ▼
//!   RpcLedgerClient ──────────────► ContractClient
//!                                           │
//!                          read → write (poll) → read
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use soroban_messenger::config::{load_config, MessengerConfig};
use soroban_messenger::contract::ContractClient;
use soroban_messenger::ledger::RpcLedgerClient;
use soroban_messenger::wallet::Wallet;

#[derive(Parser)]
#[command(name = "soroban-messenger")]
#[command(about = "Read and write a message held by a Soroban contract", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the ledger RPC endpoint URL.
    #[arg(long)]
    rpc_url: Option<String>,

    /// Message to write during the demo.
    #[arg(short, long, default_value = "Hola desde JS ✅")]
    message: String,

    /// Only read the current message; skip the write step.
    #[arg(long)]
    read_only: bool,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soroban_messenger=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => MessengerConfig::default(),
    };
    if let Some(url) = cli.rpc_url {
        config.rpc.endpoint_url = url;
    }

    tracing::info!(
        endpoint = %config.rpc.endpoint_url,
        contract_id = %config.contract.contract_id,
        "Configuration loaded"
    );

    let wallet = Wallet::from_env(&config.network.passphrase)?;
    let ledger = RpcLedgerClient::new(
        &config.rpc.endpoint_url,
        Duration::from_secs(config.rpc.request_timeout_secs),
    )?;
    let client = ContractClient::new(ledger, wallet, config);

    println!("--- Message contract demo ---");

    let current = client.read_value().await?;
    println!("current message: {}", current);

    if cli.read_only {
        return Ok(());
    }

    let record = client.write_value(&cli.message).await?;
    match record.ledger {
        Some(ledger) => println!("confirmed in ledger {}, hash {}", ledger, record.hash),
        None => println!("confirmed, hash {}", record.hash),
    }

    let updated = client.read_value().await?;
    println!("updated message: {}", updated);

    println!("--- Demo complete ---");
    Ok(())
}
