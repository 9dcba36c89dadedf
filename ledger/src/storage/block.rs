//! # Block Structure
//!
//! A block commits an ordered transaction batch at a position in the chain.
//!
//! ## Block Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  index: u64          (0 = genesis)          │
//! │  timestamp: i64      (unix seconds)         │
//! │  prev_hash: Digest   (hash of predecessor)  │
//! │  merkle_root: Digest (over tx digests)      │
//! │  hash: Digest        (see below)            │
//! │  signature: Option<Vec<u8>>                 │
//! ├─────────────────────────────────────────────┤
//! │  transactions: Vec<Transaction>             │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Hash Computation
//!
//! ```text
//! hash = SHA-256( decimal(index) ++ decimal(timestamp) ++ prev_hash ++ merkle_root )
//! ```
//!
//! `index` and `timestamp` are base-10 ASCII with no padding or separators
//! (a negative timestamp keeps its `-`). `prev_hash` and `merkle_root` go in
//! as their hex text. The signature and the transactions themselves are not
//! part of the preimage; transactions are covered through the Merkle root.

use serde::Serialize;

use crate::config::RECORD_HEADER_LEN;
use crate::crypto::hash::{merkle_root, Digest};
use crate::transaction::Transaction;

use super::chain::ChainTip;
use super::ledger::{LedgerError, LedgerResult};

/// A committed block.
///
/// Immutable after assembly. There are no setters and no public fields, so
/// `merkle_root` and `hash` always match what [`Block::assemble`] derived.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Block {
    index: u64,
    timestamp: i64,
    prev_hash: Digest,
    merkle_root: Digest,
    hash: Digest,
    signature: Option<Vec<u8>>,
    transactions: Vec<Transaction>,
}

impl Block {
    /// Assemble a block: compute its Merkle root, then its hash.
    ///
    /// No linkage or index checks happen here. Use [`Block::next`] to take
    /// both from a [`ChainTip`].
    pub fn assemble(
        index: u64,
        timestamp: i64,
        prev_hash: Digest,
        transactions: Vec<Transaction>,
        signature: Option<Vec<u8>>,
    ) -> Self {
        let merkle_root = compute_merkle_root(&transactions);
        let hash = compute_block_hash(index, timestamp, &prev_hash, &merkle_root);

        tracing::debug!(
            index,
            tx_count = transactions.len(),
            merkle_root = %merkle_root,
            hash = %hash,
            "block assembled"
        );

        Block {
            index,
            timestamp,
            prev_hash,
            merkle_root,
            hash,
            signature,
            transactions,
        }
    }

    /// Assemble the block that extends `tip`.
    ///
    /// # Errors
    ///
    /// [`LedgerError::IndexExhausted`] if `tip` is already at `u64::MAX`.
    pub fn next(
        tip: &ChainTip,
        timestamp: i64,
        transactions: Vec<Transaction>,
    ) -> LedgerResult<Self> {
        let index = tip.next_index().ok_or(LedgerError::IndexExhausted {
            last_index: u64::MAX,
        })?;
        Ok(Self::assemble(
            index,
            timestamp,
            tip.hash().clone(),
            transactions,
            None,
        ))
    }

    /// Assemble a block at index 0, linked to the genesis sentinel.
    pub fn genesis(timestamp: i64, transactions: Vec<Transaction>) -> Self {
        Self::assemble(0, timestamp, Digest::genesis(), transactions, None)
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn prev_hash(&self) -> &Digest {
        &self.prev_hash
    }

    pub fn merkle_root(&self) -> &Digest {
        &self.merkle_root
    }

    pub fn hash(&self) -> &Digest {
        &self.hash
    }

    /// Signature blob supplied by the caller, if any. Never populated by
    /// the core.
    pub fn signature(&self) -> Option<&[u8]> {
        self.signature.as_deref()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn tx_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn hash_hex(&self) -> &str {
        self.hash.as_str()
    }

    /// Size of this block's ledger record in bytes.
    pub fn record_len(&self) -> usize {
        RECORD_HEADER_LEN + self.hash.len()
    }
}

// ---------------------------------------------------------------------------
// Hash Computation
// ---------------------------------------------------------------------------

/// Hash of a block from its four preimage fields.
pub fn compute_block_hash(
    index: u64,
    timestamp: i64,
    prev_hash: &Digest,
    merkle_root: &Digest,
) -> Digest {
    let preimage = format!("{index}{timestamp}{prev_hash}{merkle_root}");
    Digest::of(preimage)
}

/// Merkle root of a transaction batch, using each transaction's digest as a
/// leaf.
pub fn compute_merkle_root(transactions: &[Transaction]) -> Digest {
    let leaves: Vec<Digest> = transactions.iter().map(|tx| tx.digest().clone()).collect();
    merkle_root(&leaves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GENESIS_PREV_HASH;

    fn tx(payload: &str) -> Transaction {
        Transaction::from_payload(payload, 1_000)
    }

    fn zeros() -> Digest {
        Digest::genesis()
    }

    #[test]
    fn price_scenario() {
        let t = 1_700_000_000;
        let block = Block::assemble(1, t, zeros(), vec![tx("price:2000")], None);

        assert_eq!(block.merkle_root(), &Digest::of("price:2000"));
        let expected = Digest::of(format!(
            "1{t}{}{}",
            GENESIS_PREV_HASH,
            Digest::of("price:2000")
        ));
        assert_eq!(block.hash(), &expected);
        assert_eq!(block.record_len(), 8 + 8 + 4 + 64);
    }

    #[test]
    fn assemble_is_repeatable() {
        let a = Block::assemble(3, 99, zeros(), vec![tx("a"), tx("b")], None);
        let b = Block::assemble(3, 99, zeros(), vec![tx("a"), tx("b")], None);
        assert_eq!(a.hash(), b.hash());
        assert_eq!(a.merkle_root(), b.merkle_root());
    }

    #[test]
    fn hash_covers_every_preimage_field() {
        let base = Block::assemble(1, 10, zeros(), vec![tx("a")], None);

        let other_index = Block::assemble(2, 10, zeros(), vec![tx("a")], None);
        let other_time = Block::assemble(1, 11, zeros(), vec![tx("a")], None);
        let other_prev = Block::assemble(1, 10, Digest::of("x"), vec![tx("a")], None);
        let other_txs = Block::assemble(1, 10, zeros(), vec![tx("b")], None);

        for other in [other_index, other_time, other_prev, other_txs] {
            assert_ne!(base.hash(), other.hash());
        }
    }

    #[test]
    fn signature_is_not_hashed() {
        let unsigned = Block::assemble(1, 10, zeros(), vec![tx("a")], None);
        let signed = Block::assemble(1, 10, zeros(), vec![tx("a")], Some(vec![1, 2, 3]));
        assert_eq!(unsigned.hash(), signed.hash());
        assert_eq!(signed.signature(), Some(&[1u8, 2, 3][..]));
        assert_eq!(unsigned.signature(), None);
    }

    #[test]
    fn negative_timestamp_keeps_sign_in_preimage() {
        let block = Block::assemble(0, -5, zeros(), vec![], None);
        let expected = Digest::of(format!("0-5{}{}", GENESIS_PREV_HASH, Digest::of("empty")));
        assert_eq!(block.hash(), &expected);
    }

    #[test]
    fn empty_block_uses_sentinel_root() {
        let block = Block::assemble(5, 0, zeros(), vec![], None);
        assert_eq!(block.merkle_root(), &Digest::of("empty"));
        assert_eq!(block.tx_count(), 0);
    }

    #[test]
    fn genesis_links_to_sentinel() {
        let genesis = Block::genesis(0, vec![]);
        assert_eq!(genesis.index(), 0);
        assert_eq!(genesis.prev_hash().as_str(), GENESIS_PREV_HASH);
    }

    #[test]
    fn next_extends_tip() {
        let genesis = Block::genesis(0, vec![]);
        let mut tip = ChainTip::genesis();
        tip.advance(&genesis);

        let b1 = Block::next(&tip, 1, vec![tx("one")]).unwrap();
        assert_eq!(b1.index(), 1);
        assert_eq!(b1.prev_hash(), genesis.hash());
    }

    #[test]
    fn next_refuses_to_wrap_past_max_index() {
        let tip = ChainTip::at(u64::MAX, Digest::of("x"));
        let err = Block::next(&tip, 0, vec![]).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::IndexExhausted { last_index: u64::MAX }
        ));

        let last = Block::next(&ChainTip::at(u64::MAX - 1, Digest::of("x")), 0, vec![]).unwrap();
        assert_eq!(last.index(), u64::MAX);
    }

    #[test]
    fn merkle_root_of_three_transactions() {
        let (a, b, c) = (tx("A"), tx("B"), tx("C"));
        let ab = Digest::of(format!("{}{}", a.digest(), b.digest()));
        let expected = Digest::of(format!("{ab}{}", c.digest()));
        assert_eq!(compute_merkle_root(&[a, b, c]), expected);
    }

    #[test]
    fn serializes_hex_fields_as_strings() {
        let block = Block::assemble(1, 2, zeros(), vec![tx("a")], None);
        let json = serde_json::to_value(&block).expect("serialize");
        assert_eq!(json["index"], 1);
        assert_eq!(json["hash"], block.hash_hex());
        assert_eq!(json["prev_hash"], GENESIS_PREV_HASH);
        assert!(json["signature"].is_null());
    }
}
