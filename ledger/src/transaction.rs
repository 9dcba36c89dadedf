//! # Transactions
//!
//! A transaction is the smallest thing a block commits to: an opaque
//! payload, the time it was created, and a digest. Only the digest feeds
//! the Merkle tree. The core never interprets the payload and never checks
//! that the digest actually matches it; the caller owns that contract.
//!
//! Transactions have no storage or lifecycle of their own. They exist only
//! inside a block's transaction list, and are immutable once built.

use serde::Serialize;

use crate::crypto::Digest;

/// One entry in a block's ordered transaction batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Transaction {
    digest: Digest,
    timestamp: i64,
    payload: Vec<u8>,
}

impl Transaction {
    /// Wrap a transaction whose digest the caller already computed, e.g.
    /// over some canonical encoding of the payload.
    pub fn new(digest: Digest, timestamp: i64, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            digest,
            timestamp,
            payload: payload.into(),
        }
    }

    /// Build a transaction whose digest is the SHA-256 of the raw payload.
    ///
    /// ```
    /// use aurum_ledger::{Digest, Transaction};
    ///
    /// let tx = Transaction::from_payload("price:2000", 1_700_000_000);
    /// assert_eq!(tx.digest(), &Digest::of("price:2000"));
    /// ```
    pub fn from_payload(payload: impl Into<Vec<u8>>, timestamp: i64) -> Self {
        let payload = payload.into();
        Self {
            digest: Digest::of(&payload),
            timestamp,
            payload,
        }
    }

    /// The Merkle leaf for this transaction.
    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}
