//! # Storage Module
//!
//! Everything between "here is a batch of transactions" and "those bytes are
//! on disk".
//!
//! ## Architecture
//!
//! ```text
//! block.rs   - Block structure, Merkle root over transactions, block hash
//! chain.rs   - ChainTip: last committed index and hash, threaded by the caller
//! record.rs  - Fixed binary layout of one ledger record
//! ledger.rs  - Append-only ledger file with a per-ledger write lock
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! ChainTip + transactions → Block::next → BlockRecord::encode → Ledger::append
//! ```
//!
//! ## Design Decisions
//!
//! 1. **Derived fields are private.** `merkle_root` and `hash` are written
//!    by the assembler and nowhere else. There is no `&mut` access to a
//!    block, so they cannot drift from the transactions.
//!
//! 2. **Summary records only.** The file holds `(index, timestamp, hash)`
//!    per block. It is an audit trail, not a replayable chain: prev_hash,
//!    Merkle root and payloads must be kept elsewhere if needed.
//!
//! 3. **Reopen per append.** No handle is held between calls. Each append
//!    opens in append mode, writes one buffer, syncs and closes.

pub mod block;
pub mod chain;
pub mod ledger;
pub mod record;

pub use block::{compute_block_hash, compute_merkle_root, Block};
pub use chain::ChainTip;
pub use ledger::{Ledger, LedgerError, LedgerResult};
pub use record::BlockRecord;
