//! CRC-32 reduction of the generation hash.
//!
//! The checksum de-correlates the stream seed from the hash text: its
//! decimal representation is mixed into all three stream accumulators as
//! secondary seed material. Parameters are the reflected CRC-32 in common
//! use: polynomial 0xEDB88320, initial register 0xFFFFFFFF, final XOR with
//! 0xFFFFFFFF, table-driven one character per step.

use std::sync::OnceLock;

use crate::hash::GenHash;

/// Reflected CRC-32 polynomial.
const CRC32_POLYNOMIAL: u32 = 0xEDB8_8320;

static CRC32_TABLE: OnceLock<[u32; 256]> = OnceLock::new();

fn crc32_table() -> &'static [u32; 256] {
    CRC32_TABLE.get_or_init(|| {
        let mut table = [0u32; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            let mut crc = i as u32;
            for _ in 0..8 {
                crc = if crc & 1 != 0 {
                    (crc >> 1) ^ CRC32_POLYNOMIAL
                } else {
                    crc >> 1
                };
            }
            *entry = crc;
        }
        table
    })
}

/// Computes the CRC-32 of a string, one character code (truncated to 8
/// bits) per step.
pub fn crc32(text: &str) -> u32 {
    let table = crc32_table();
    let mut crc = u32::MAX;
    for ch in text.chars() {
        let byte = (ch as u32) & 0xFF;
        crc = (crc >> 8) ^ table[((crc ^ byte) & 0xFF) as usize];
    }
    crc ^ u32::MAX
}

/// Computes the checksum of a generation hash.
pub fn checksum(hash: &GenHash) -> u32 {
    crc32(hash.as_str())
}
