//! # Hashing Utilities
//!
//! SHA-256 wrappers and the [`Digest`] type.
//!
//! ## Why hex text?
//!
//! The ledger's preimages are built from the *rendered* digests: a Merkle
//! parent is `SHA-256(left_hex ++ right_hex)` and a block hash covers the
//! hex of `prev_hash` and `merkle_root`. Keeping the digest as its hex text
//! makes that explicit at the type level and avoids re-encoding on every
//! round of the tree.
//!
//! ## Merkle reduction
//!
//! [`merkle_root`] pairs nodes left to right. A trailing odd node is carried
//! up to the next level unchanged, neither duplicated nor rehashed. That
//! differs from Bitcoin's duplicate-last rule and means some distinct leaf
//! sequences share intermediate structure. Ledgers already on disk depend
//! on it, so it is reproduced as-is.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use sha2::{Digest as _, Sha256};

use crate::config::{EMPTY_MERKLE_SENTINEL, GENESIS_PREV_HASH, HASH_HEX_LENGTH};

// ---------------------------------------------------------------------------
// Raw hashing
// ---------------------------------------------------------------------------

/// Compute the SHA-256 hash of the input data as a fixed-size array.
///
/// # Example
///
/// ```
/// use aurum_ledger::crypto::sha256;
///
/// let hash = sha256(b"aurum");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA-256 of the input rendered as 64 lowercase hex characters.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

/// Hash several slices as if they were concatenated, without building the
/// concatenation.
pub fn sha256_hex_multi(parts: &[&[u8]]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hex::encode(hasher.finalize())
}

// ---------------------------------------------------------------------------
// Digest
// ---------------------------------------------------------------------------

/// Errors produced when accepting a caller-supplied digest string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DigestError {
    #[error("digest is empty")]
    Empty,

    #[error("digest is not hex: {0:?}")]
    InvalidHex(String),
}

/// Hex text of a digest.
///
/// Produced either by hashing ([`Digest::of`]) or by accepting a hex string
/// from a caller ([`Digest::from_hex`]). The text is kept exactly as given,
/// since changing its case would change every preimage it feeds into.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Digest(String);

impl Digest {
    /// SHA-256 of `data`.
    pub fn of(data: impl AsRef<[u8]>) -> Self {
        Digest(sha256_hex(data.as_ref()))
    }

    /// Accept an existing digest rendered as hex.
    ///
    /// Any non-empty run of ASCII hex digits is accepted. The length is not
    /// forced to 64 so that short sentinels such as
    /// [`GENESIS_PREV_HASH`](crate::config::GENESIS_PREV_HASH) fit.
    pub fn from_hex(s: impl Into<String>) -> Result<Self, DigestError> {
        let s = s.into();
        if s.is_empty() {
            return Err(DigestError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DigestError::InvalidHex(s));
        }
        Ok(Digest(s))
    }

    /// The `prev_hash` sentinel of the block at index 0.
    pub fn genesis() -> Self {
        Digest(GENESIS_PREV_HASH.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The hex text as bytes, which is what gets hashed and persisted.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if this looks like a full SHA-256 digest (64 hex characters).
    pub fn is_sha256(&self) -> bool {
        self.0.len() == HASH_HEX_LENGTH
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.0)
    }
}

impl FromStr for Digest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Digest::from_hex(s)
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Merkle
// ---------------------------------------------------------------------------

/// Parent of two Merkle nodes: `SHA-256(left_hex ++ right_hex)`.
pub fn merkle_parent(left: &Digest, right: &Digest) -> Digest {
    Digest(sha256_hex_multi(&[left.as_bytes(), right.as_bytes()]))
}

/// Reduce an ordered list of leaf digests to a single root.
///
/// - No leaves: `SHA-256("empty")`.
/// - One leaf: the leaf itself.
/// - Otherwise pair left to right each round; an odd trailing node moves up
///   unchanged. Repeat until one node remains.
pub fn merkle_root(leaves: &[Digest]) -> Digest {
    if leaves.is_empty() {
        return Digest::of(EMPTY_MERKLE_SENTINEL);
    }

    let mut level: Vec<Digest> = leaves.to_vec();

    while level.len() > 1 {
        let mut next_level = Vec::with_capacity((level.len() + 1) / 2);

        for chunk in level.chunks(2) {
            if let [left, right] = chunk {
                next_level.push(merkle_parent(left, right));
            } else {
                // Odd node: carried forward as-is.
                next_level.push(chunk[0].clone());
            }
        }

        level = next_level;
    }

    level.swap_remove(0)
}
