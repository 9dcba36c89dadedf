// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Aurum Node
//!
//! Entry point for the `aurum-node` binary: the external caller of the
//! ledger core. Parses CLI arguments, initializes logging, builds a
//! transaction batch, assembles the block and appends it.
//!
//! - `append`  - commit a block built from `--tx` payloads
//! - `demo`    - commit the built-in sample block
//! - `version` - print build version information
//!
//! A storage failure surfaces as an error from `main`, which exits non-zero.

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;

use aurum_ledger::config::{HASH_ALGORITHM, LEDGER_FORMAT_VERSION};
use aurum_ledger::{Block, Digest, Ledger, Transaction};

use cli::{AurumNodeCli, Commands};
use logging::LogFormat;

/// Payload of the single transaction in the sample block.
const DEMO_PAYLOAD: &str = "price:2000";

fn main() -> Result<()> {
    let cli = AurumNodeCli::parse();
    let format = LogFormat::from_str_lossy(&cli.log_format);

    match cli.command {
        Commands::Append(args) => {
            logging::init_logging(&cli.log_level, format);
            let block = append_block(&args)?;
            report(&block, args.json)
        }
        Commands::Demo(args) => {
            logging::init_logging(&cli.log_level, format);
            run_demo(&args)
        }
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Builds the block described by `args` and appends it to the ledger.
fn append_block(args: &cli::AppendArgs) -> Result<Block> {
    let timestamp = args.timestamp.unwrap_or_else(now);
    let transactions = args
        .txs
        .iter()
        .map(|payload| Transaction::from_payload(payload.as_bytes(), timestamp))
        .collect();

    let block = Block::assemble(
        args.index,
        timestamp,
        args.prev_hash.clone(),
        transactions,
        None,
    );

    Ledger::new(&args.ledger).append(&block).with_context(|| {
        format!(
            "storage failure: could not append block #{} to {}",
            block.index(),
            args.ledger.display()
        )
    })?;

    Ok(block)
}

/// Commits the sample block: index 1, genesis-linked, one transaction whose
/// digest is `SHA-256("price:2000")`.
fn run_demo(args: &cli::DemoArgs) -> Result<()> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        ledger = %args.ledger.display(),
        "aurum core starting"
    );

    let block = demo_block(now());
    Ledger::new(&args.ledger)
        .append(&block)
        .with_context(|| format!("storage failure writing to {}", args.ledger.display()))?;

    report(&block, false)?;
    println!("Success: Block committed.");
    Ok(())
}

fn demo_block(timestamp: i64) -> Block {
    let tx = Transaction::new(Digest::of(DEMO_PAYLOAD), timestamp, Vec::new());
    Block::assemble(1, timestamp, Digest::genesis(), vec![tx], None)
}

/// Writes the human-readable confirmation (or the block as JSON) to stdout.
fn report(block: &Block, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(block).context("failed to serialize block")?;
        println!("{}", out);
    } else {
        println!("Locked Block #{} Hash: {}", block.index(), block.hash());
    }
    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("aurum-node    {}", env!("CARGO_PKG_VERSION"));
    println!("ledger format v{}", LEDGER_FORMAT_VERSION);
    println!("hash          {}", HASH_ALGORITHM);
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}
