//! Error types for the strict hash parsing path.

use thiserror::Error;

/// Errors returned by [`GenHash::parse`](crate::hash::GenHash::parse).
///
/// The lenient acquisition path never surfaces these: malformed candidates
/// are silently replaced with freshly minted hashes instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// The candidate is not exactly 66 characters long.
    #[error("hash must be 66 characters (0x + 64 hex digits), got {0}")]
    InvalidLength(usize),

    /// The candidate does not match `0x` followed by 64 lowercase hex digits.
    #[error("hash must match ^0x[0-9a-f]{{64}}$")]
    InvalidFormat,
}
