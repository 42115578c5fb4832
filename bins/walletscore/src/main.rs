//! Walletscore batch scorer.
//!
//! Reads a JSON log of lending-protocol transactions, builds per-wallet
//! features and writes a `wallet,credit_score` CSV table. With no arguments
//! it reads `data/user_transactions.json` and writes
//! `outputs/wallet_scores.csv`.

mod config;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use walletscore_core::pipeline::run_files;
use walletscore_engine::ScoreEngine;

use crate::config::{LogFormat, RunConfig};

/// Wallet credit scoring from lending-protocol transaction logs.
#[derive(Parser, Debug)]
#[command(
    name = "walletscore",
    version,
    about = "Score wallets in [0, 1000] from a JSON transaction log"
)]
struct Args {
    /// JSON file holding one transaction object or an array of them
    #[arg(long)]
    input: Option<PathBuf>,

    /// CSV score table to write (parent directories are created)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Also write the per-wallet feature table to this CSV file
    #[arg(long)]
    features_out: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log output format ("text" or "json")
    #[arg(long, default_value = "text")]
    log_format: String,
}

impl Args {
    /// Convert CLI args into a RunConfig.
    fn into_config(self) -> RunConfig {
        let defaults = RunConfig::default();
        RunConfig {
            input_path: self.input.unwrap_or(defaults.input_path),
            output_path: self.output.unwrap_or(defaults.output_path),
            features_path: self.features_out,
            log_level: self.log_level,
            log_format: LogFormat::parse(&self.log_format),
        }
    }
}

fn main() {
    let config = Args::parse().into_config();

    init_logging(&config.log_level, config.log_format);

    info!("Walletscore v{}", env!("CARGO_PKG_VERSION"));
    info!("input: {:?}", config.input_path);
    info!("output: {:?}", config.output_path);

    if let Err(e) = run(&config) {
        error!("{e:#}");
        process::exit(1);
    }
}

/// Score the configured input and write the output tables.
fn run(config: &RunConfig) -> Result<()> {
    let engine = ScoreEngine::new();
    let result = run_files(
        &config.input_path,
        &config.output_path,
        config.features_path.as_deref(),
        &engine,
    )
    .with_context(|| format!("scoring {:?} failed", config.input_path))?;

    info!(
        "credit scores for {} wallets ({} transactions) saved to {:?}",
        result.scores.len(),
        result.transactions.len(),
        config.output_path
    );
    Ok(())
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// `RUST_LOG`, when set, takes precedence over `level_str`.
fn init_logging(level_str: &str, format: LogFormat) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_level(true))
            .init(),
    }
}
