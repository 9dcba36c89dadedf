//! # Cryptographic Primitives
//!
//! One hash function, used everywhere: SHA-256 from the audited `sha2`
//! crate. Digests travel through the ledger as lowercase hex text because
//! that text (not the raw bytes) is what gets concatenated into Merkle
//! parents and block-hash preimages, and what lands on disk.
//!
//! Signatures are out of scope for the core. `Block` carries an optional
//! signature blob for callers that add one, and nothing here produces or
//! checks it.

pub mod hash;

pub use hash::{merkle_root, sha256, sha256_hex, sha256_hex_multi, Digest, DigestError};
