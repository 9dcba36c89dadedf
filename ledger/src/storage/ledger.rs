//! # Ledger: Append-only Block Log
//!
//! The only component allowed to write the ledger file. Each append is a
//! self-contained open → write → flush → sync → close; no handle survives
//! between calls, so the ledger is always "closed" from the outside.
//!
//! ## Guarantees
//!
//! - The file is opened with `append(true)` and never truncated, seeked or
//!   rewritten.
//! - A record goes to the OS as one buffer under the ledger's write lock, so
//!   appends through the same `Ledger` never interleave.
//! - If the file can't be opened, nothing is written.
//!
//! ## Non-guarantees
//!
//! - No check of `prev_hash` linkage or index monotonicity. Feed it blocks
//!   from [`Block::next`] if you want those.
//! - No cross-process locking. Two processes appending to the same path can
//!   still interleave.
//! - A crash mid-write can leave a torn trailing record. Nothing detects or
//!   repairs it.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::block::Block;
use super::chain::ChainTip;
use super::record::BlockRecord;
use crate::transaction::Transaction;

// ---------------------------------------------------------------------------
// Error Type
// ---------------------------------------------------------------------------

/// Errors that can occur while appending to the ledger.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// The ledger file couldn't be opened for append or written to:
    /// permissions, missing directory, disk full, any I/O failure.
    #[error("ledger storage unavailable at {}: {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The chain tip is at `u64::MAX`; no further index exists.
    #[error("block index exhausted: tip is already at {last_index}")]
    IndexExhausted { last_index: u64 },

    /// A hash too long for the 4-byte length prefix.
    #[error("record hash of {0} bytes exceeds the u32 length prefix")]
    RecordTooLarge(usize),
}

pub type LedgerResult<T> = Result<T, LedgerError>;

// ---------------------------------------------------------------------------
// Ledger
// ---------------------------------------------------------------------------

/// Handle to an append-only ledger file.
///
/// Cheap to construct (no I/O until the first append). Share one instance
/// via `Arc<Ledger>` across threads; the internal lock serializes writers.
#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl Ledger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append the summary record of an already-assembled block.
    ///
    /// # Errors
    ///
    /// [`LedgerError::StorageUnavailable`] if the file can't be opened or
    /// the write fails. The block is not retried.
    pub fn append(&self, block: &Block) -> LedgerResult<()> {
        let _guard = self.write_lock.lock();
        self.append_locked(block)
    }

    /// Assemble the successor of `tip`, append it, and advance `tip`.
    ///
    /// Merkle computation, hashing and the file write all happen under the
    /// write lock. `tip` only moves if the append succeeded.
    ///
    /// # Errors
    ///
    /// [`LedgerError::IndexExhausted`] if `tip` is at `u64::MAX` (nothing is
    /// written), otherwise as for [`Ledger::append`].
    pub fn commit(
        &self,
        tip: &mut ChainTip,
        timestamp: i64,
        transactions: Vec<Transaction>,
    ) -> LedgerResult<Block> {
        let _guard = self.write_lock.lock();
        let block = Block::next(tip, timestamp, transactions)?;
        self.append_locked(&block)?;
        tip.advance(&block);
        Ok(block)
    }

    fn append_locked(&self, block: &Block) -> LedgerResult<()> {
        let record = BlockRecord::from_block(block).encode()?;

        self.write_record(&record).map_err(|source| {
            tracing::error!(
                index = block.index(),
                path = %self.path.display(),
                error = %source,
                "ledger append failed"
            );
            LedgerError::StorageUnavailable {
                path: self.path.clone(),
                source,
            }
        })?;

        tracing::info!(
            index = block.index(),
            hash = %block.hash(),
            path = %self.path.display(),
            "block committed"
        );
        Ok(())
    }

    // The handle is dropped (closed) on every path out of here.
    fn write_record(&self, record: &[u8]) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(record)?;
        file.flush()?;
        file.sync_data()
    }
}
