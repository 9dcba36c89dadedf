//! # CLI Interface
//!
//! Command-line arguments for `aurum-node`, via `clap` derive. Three
//! subcommands: `append`, `demo`, and `version`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use aurum_ledger::config::{DEFAULT_LEDGER_FILE, GENESIS_PREV_HASH};
use aurum_ledger::Digest;

/// Aurum ledger front end.
///
/// Builds a block from a batch of transaction payloads, chains it onto the
/// given previous hash, and appends its summary to the ledger file.
#[derive(Parser, Debug)]
#[command(
    name = "aurum-node",
    about = "Aurum append-only ledger",
    version,
    propagate_version = true
)]
pub struct AurumNodeCli {
    /// Log output format: `pretty` or `json`.
    #[arg(long, global = true, env = "AURUM_LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,

    /// Default log filter, used when `RUST_LOG` is unset.
    #[arg(
        long,
        global = true,
        env = "AURUM_LOG_LEVEL",
        default_value = "aurum_node=info,aurum_ledger=info"
    )]
    pub log_level: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble one block and append it to the ledger.
    Append(AppendArgs),
    /// Commit the built-in sample block (index 1, one `price:2000` transaction).
    Demo(DemoArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `append` subcommand.
#[derive(Parser, Debug)]
pub struct AppendArgs {
    /// Ledger file to append to. Created if missing; its directory is not.
    #[arg(long, short = 'l', env = "AURUM_LEDGER_PATH", default_value = DEFAULT_LEDGER_FILE)]
    pub ledger: PathBuf,

    /// Transaction payload. Repeat for a multi-transaction batch; order is
    /// preserved. Each payload's SHA-256 becomes its Merkle leaf.
    #[arg(long = "tx", value_name = "PAYLOAD")]
    pub txs: Vec<String>,

    /// Chain position of the new block.
    #[arg(long, default_value_t = 1)]
    pub index: u64,

    /// Hash of the preceding block (hex).
    #[arg(long, default_value = GENESIS_PREV_HASH)]
    pub prev_hash: Digest,

    /// Block timestamp in unix seconds. Defaults to now.
    #[arg(long, allow_negative_numbers = true)]
    pub timestamp: Option<i64>,

    /// Print the committed block as JSON instead of the one-line summary.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `demo` subcommand.
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Ledger file to append to.
    #[arg(long, short = 'l', env = "AURUM_LEDGER_PATH", default_value = DEFAULT_LEDGER_FILE)]
    pub ledger: PathBuf,
}
