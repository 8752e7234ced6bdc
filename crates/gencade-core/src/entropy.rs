//! Entropy sources for hash minting.
//!
//! Minting a fresh hash is the one place this system is allowed to be
//! non-deterministic. The capability is a trait so tests and reproducible
//! embeds can swap in a seeded source without touching the acquisition
//! logic in [`hash`](crate::hash).

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::hash::HASH_DIGITS;

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Capability interface for drawing the hex digits of a fresh hash.
pub trait EntropySource {
    /// Returns exactly 64 independently drawn lowercase hex digits.
    fn next_hex_digits(&mut self) -> String;
}

/// Production entropy source backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn next_hex_digits(&mut self) -> String {
        let mut rng = rand::thread_rng();
        (0..HASH_DIGITS)
            .map(|_| HEX_CHARS[rng.gen_range(0..HEX_CHARS.len())] as char)
            .collect()
    }
}

/// Deterministic entropy source backed by PCG32, for tests and hosts that
/// want reproducible minting.
#[derive(Debug, Clone)]
pub struct SeededEntropy {
    inner: Pcg32,
}

impl SeededEntropy {
    /// Creates a seeded source.
    ///
    /// The 32-bit seed is expanded to 64 bits by duplicating the value in
    /// both halves, as required by PCG32's state initialization.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }
}

impl EntropySource for SeededEntropy {
    fn next_hex_digits(&mut self) -> String {
        (0..HASH_DIGITS)
            .map(|_| HEX_CHARS[self.inner.gen_range(0..HEX_CHARS.len())] as char)
            .collect()
    }
}
