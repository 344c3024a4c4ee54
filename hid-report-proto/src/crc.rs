//! CRC-32 frame checksum.
//!
//! Uses the standard ISO-HDLC CRC-32 (the same algorithm as zlib's `crc32`)
//! with a lookup table for fast calculation.

use crc::{Crc, CRC_32_ISO_HDLC};

/// CRC-32/ISO-HDLC calculator with lookup table.
const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Calculate the CRC-32 checksum of a byte slice.
#[inline]
#[must_use]
pub fn calculate_crc32(data: &[u8]) -> u32 {
    CRC32.checksum(data)
}

/// CRC-32 digest for incremental calculation.
///
/// Use this when a frame is produced byte-by-byte (e.g. while escaping),
/// so the checksum accumulates over the raw bytes without a second pass.
pub struct Crc32Digest {
    digest: crc::Digest<'static, u32>,
}

impl Crc32Digest {
    /// Create a new CRC-32 digest.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            digest: CRC32.digest(),
        }
    }

    /// Update the digest with a single byte.
    #[inline]
    pub fn update(&mut self, byte: u8) {
        self.digest.update(&[byte]);
    }

    /// Update the digest with a byte slice.
    #[inline]
    pub fn update_slice(&mut self, data: &[u8]) {
        self.digest.update(data);
    }

    /// Finalize and return the checksum value.
    #[inline]
    #[must_use]
    pub fn finalize(self) -> u32 {
        self.digest.finalize()
    }
}

impl Default for Crc32Digest {
    fn default() -> Self {
        Self::new()
    }
}
