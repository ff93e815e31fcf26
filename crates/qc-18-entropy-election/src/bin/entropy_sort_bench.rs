//! # Entropy Sort Benchmark Driver
//!
//! Generates a set of miner identities, then elects an order over them for a
//! stream of clock-derived transaction ids and reports the elapsed time.
//!
//! ```text
//! entropy-sort-bench <MINERS> <TRANSACTIONS> [--shared-secret S] [--log-level L]
//! ```

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use qc_18_entropy_election::{
    ClockTransactionIdSource, ElectionConfig, EntropyElectionApi, EntropyElectionService,
    KeyPairProvider, Secp256k1KeyProvider, TransactionIdSource,
};

/// Shared secret used when none is given: a DER-encoded miner key, as text.
const DEFAULT_SHARED_SECRET: &str = "30770201010420b01b5f30ed449a36f701fdf95b290e5db7167a0b9b7f08ac17e6d93af1be6bb1a00a06082a8648ce3d030107a144034200040d113336e60c0c4c42bd20c6763ff0f50abda25725e5fc16d5ffc90ecc6d6437b454a6cac8c3d695e2955aecdab8fa758c9d3328870171d8fdd0d965a90bfb5e";

#[derive(Parser, Debug)]
#[command(
    name = "entropy-sort-bench",
    version,
    about = "Time entropy-sort elections over random miner keys"
)]
struct Args {
    /// Number of miner keys to generate
    miners: usize,

    /// Number of transactions to elect an order for
    transactions: usize,

    /// Shared secret keying the starting point
    #[arg(long, default_value = DEFAULT_SHARED_SECRET)]
    shared_secret: String,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .context("invalid log filter")?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let service = EntropyElectionService::with_config(ElectionConfig::from_env());

    let miner_keys = Secp256k1KeyProvider::new().public_keys(args.miners);
    let tx_source = ClockTransactionIdSource::new();
    let secret = args.shared_secret.as_bytes();

    info!(
        miners = args.miners,
        transactions = args.transactions,
        "Starting entropy sort"
    );

    let started = Instant::now();
    for round in 0..args.transactions {
        let tx_id = tx_source.next_transaction_id();
        service
            .order_candidates(secret, &tx_id, &miner_keys)
            .with_context(|| format!("election failed at transaction {round}"))?;
    }
    let elapsed = started.elapsed();

    info!(
        elapsed_secs = elapsed.as_secs_f64(),
        miners = args.miners,
        transactions = args.transactions,
        "Entropy sort finished"
    );

    Ok(())
}
