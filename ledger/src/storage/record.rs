//! # Ledger Record Format
//!
//! The ledger file is a bare concatenation of records. No header, trailer,
//! magic number or checksum. All integers are little-endian.
//!
//! | Field         | Size            | Encoding                      |
//! |---------------|-----------------|-------------------------------|
//! | `index`       | 8               | u64 LE                        |
//! | `timestamp`   | 8               | i64 LE (two's complement)     |
//! | `hash_length` | 4               | u32 LE, byte count that follows |
//! | `hash_bytes`  | `hash_length`   | ASCII hex of the block hash   |
//!
//! A standard record is 84 bytes.

use bytes::{BufMut, Bytes, BytesMut};

use crate::config::RECORD_HEADER_LEN;

use super::block::Block;
use super::ledger::{LedgerError, LedgerResult};

/// The on-disk summary of one block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockRecord<'a> {
    pub index: u64,
    pub timestamp: i64,
    pub hash: &'a [u8],
}

impl<'a> BlockRecord<'a> {
    pub fn from_block(block: &'a Block) -> Self {
        Self {
            index: block.index(),
            timestamp: block.timestamp(),
            hash: block.hash().as_bytes(),
        }
    }

    pub fn encoded_len(&self) -> usize {
        RECORD_HEADER_LEN + self.hash.len()
    }

    /// Serialize into one contiguous buffer, so the ledger can hand the
    /// whole record to a single `write_all`.
    pub fn encode(&self) -> LedgerResult<Bytes> {
        let hash_len =
            u32::try_from(self.hash.len()).map_err(|_| LedgerError::RecordTooLarge(self.hash.len()))?;

        let mut buf = BytesMut::with_capacity(self.encoded_len());
        buf.put_u64_le(self.index);
        buf.put_i64_le(self.timestamp);
        buf.put_u32_le(hash_len);
        buf.put_slice(self.hash);
        Ok(buf.freeze())
    }
}
