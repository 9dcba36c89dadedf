// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Aurum Ledger Core Library
//!
//! The integrity engine behind Aurum: a sequence of blocks, each committing
//! a batch of transactions through a Merkle root and linked to its
//! predecessor by hash, appended to a single file that is never rewritten.
//!
//! ## Architecture
//!
//! - **crypto**: SHA-256 digests as hex text, plus the leaf-level Merkle
//!   reduction. Thin wrappers over `sha2`; nothing hand-rolled.
//! - **transaction**: The immutable `(digest, timestamp, payload)` triple
//!   a block commits to.
//! - **storage**: Block assembly, the chain tip, the binary record codec,
//!   and the append-only ledger file.
//! - **config**: Format constants and sentinels.
//!
//! ## Data Flow
//!
//! ```text
//! Vec<Transaction> ─► compute_merkle_root ─► Block::assemble ─► Ledger::append
//!                                              ▲                    │
//!                                              └──── ChainTip ◄─────┘
//! ```
//!
//! The core never validates linkage retroactively. A block's `prev_hash` is
//! fixed when it is assembled from a [`storage::ChainTip`]; after that the
//! ledger just appends what it's given.

pub mod config;
pub mod crypto;
pub mod storage;
pub mod transaction;

pub use crypto::Digest;
pub use storage::{Block, ChainTip, Ledger, LedgerError};
pub use transaction::Transaction;
