//! Chain tip tracking.
//!
//! The ledger file doesn't remember the previous block, and the core holds
//! no hidden process state. Whoever drives the ledger keeps a [`ChainTip`]
//! and hands it to [`Block::next`](super::Block::next) or
//! [`Ledger::commit`](super::Ledger::commit) for each new block.

use serde::Serialize;

use crate::crypto::Digest;

use super::block::Block;

/// Index and hash of the most recently committed block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChainTip {
    /// `None` until the first block is committed.
    last_index: Option<u64>,
    /// Hash the next block links to. The genesis sentinel on an empty chain.
    last_hash: Digest,
}

impl ChainTip {
    /// Tip of an empty chain: the next block is index 0, linked to the
    /// genesis sentinel.
    pub fn genesis() -> Self {
        Self {
            last_index: None,
            last_hash: Digest::genesis(),
        }
    }

    /// Resume from a block the caller already knows about.
    pub fn at(last_index: u64, last_hash: Digest) -> Self {
        Self {
            last_index: Some(last_index),
            last_hash,
        }
    }

    /// Move the tip onto a freshly committed block.
    pub fn advance(&mut self, block: &Block) {
        self.last_index = Some(block.index());
        self.last_hash = block.hash().clone();
    }

    /// Index the next block must carry, or `None` once the tip sits at
    /// `u64::MAX` and the chain can't be extended.
    pub fn next_index(&self) -> Option<u64> {
        match self.last_index {
            None => Some(0),
            Some(i) => i.checked_add(1),
        }
    }

    pub fn last_index(&self) -> Option<u64> {
        self.last_index
    }

    /// The `prev_hash` for the next block.
    pub fn hash(&self) -> &Digest {
        &self.last_hash
    }

    /// Number of blocks committed so far, assuming indices started at 0.
    /// Saturates at `u64::MAX`.
    pub fn height(&self) -> u64 {
        self.last_index.map_or(0, |i| i.saturating_add(1))
    }

    pub fn is_genesis(&self) -> bool {
        self.last_index.is_none()
    }
}

impl Default for ChainTip {
    fn default() -> Self {
        Self::genesis()
    }
}
