//! # Ledger Constants
//!
//! Every value that ends up inside a hash preimage or on disk lives here.
//! Changing any of them after a ledger file exists silently forks the chain,
//! so treat this module as frozen once a deployment has written blocks.

// ---------------------------------------------------------------------------
// Hashing
// ---------------------------------------------------------------------------

/// Name of the digest algorithm, for logs and `version` output.
pub const HASH_ALGORITHM: &str = "SHA-256";

/// Raw SHA-256 output length in bytes.
pub const HASH_OUTPUT_LENGTH: usize = 32;

/// Length of a SHA-256 digest rendered as lowercase hex.
pub const HASH_HEX_LENGTH: usize = HASH_OUTPUT_LENGTH * 2;

/// Input hashed to produce the Merkle root of an empty transaction batch.
///
/// An empty block still gets a real digest here, never zeros, so it can be
/// told apart from a missing block. Two empty blocks share the same root.
pub const EMPTY_MERKLE_SENTINEL: &[u8] = b"empty";

/// `prev_hash` of the block at index 0: thirty-two ASCII zeros.
///
/// Note this is half the width of a real digest. Existing ledgers were
/// written with this exact string in the genesis preimage, so it stays.
pub const GENESIS_PREV_HASH: &str = "00000000000000000000000000000000";

// ---------------------------------------------------------------------------
// On-disk Format
// ---------------------------------------------------------------------------

/// Version of the record layout below. Not written to disk (the format has
/// no header); reported by tooling only.
pub const LEDGER_FORMAT_VERSION: u16 = 1;

/// Width of the `index` field (u64, little-endian).
pub const RECORD_INDEX_LEN: usize = 8;

/// Width of the `timestamp` field (i64, little-endian).
pub const RECORD_TIMESTAMP_LEN: usize = 8;

/// Width of the `hash_length` field (u32, little-endian).
pub const RECORD_HASH_LEN_LEN: usize = 4;

/// Fixed prefix of every record, before the variable hash bytes.
pub const RECORD_HEADER_LEN: usize = RECORD_INDEX_LEN + RECORD_TIMESTAMP_LEN + RECORD_HASH_LEN_LEN;

/// Full size of a record carrying a standard hex SHA-256 hash.
pub const STANDARD_RECORD_LEN: usize = RECORD_HEADER_LEN + HASH_HEX_LENGTH;

/// File name used when the caller doesn't pick one.
pub const DEFAULT_LEDGER_FILE: &str = "aurum_ledger.dat";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_sizes_match_layout() {
        assert_eq!(RECORD_HEADER_LEN, 20);
        assert_eq!(STANDARD_RECORD_LEN, 8 + 8 + 4 + 64);
    }

    #[test]
    fn genesis_sentinel_is_all_zero_ascii() {
        assert_eq!(GENESIS_PREV_HASH.len(), 32);
        assert!(GENESIS_PREV_HASH.bytes().all(|b| b == b'0'));
    }
}
