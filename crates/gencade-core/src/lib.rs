//! Gencade Deterministic Generation Core
//!
//! This crate provides the seeding contract for hash-addressed generative
//! artwork: a 256-bit hash identifies one generation run, and every piece of
//! randomness the artwork consumes is derived from that hash through a
//! deterministic, restartable float stream.
//!
//! # Overview
//!
//! A run starts from a [`GenHash`] (`0x` followed by 64 lowercase hex
//! digits) supplied by the hosting context or minted locally from an
//! [`EntropySource`]. The hash is reduced to a CRC-32 [`checksum`] used as
//! secondary seed material, and both feed a [`GenStream`] producing floats
//! in `[0, 1)` plus the derived sampling operations (`rand_int`,
//! `rand_float`, `choice`). Resetting the stream replays the identical
//! sequence from position zero, so a host can force a deterministic
//! re-render without changing the artwork's identity.
//!
//! # Example
//!
//! ```
//! use gencade_core::{GenHash, GenStream};
//!
//! let hash = GenHash::parse(
//!     "0x7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26",
//! )
//! .unwrap();
//! let mut stream = GenStream::from_hash(hash);
//!
//! let first = stream.next();
//! assert!((0.0..1.0).contains(&first));
//!
//! // Re-seeding replays the identical sequence from position zero.
//! stream.reset();
//! assert_eq!(stream.next(), first);
//! ```
//!
//! # Modules
//!
//! - [`hash`]: the generation hash, its validation, and the acquisition policy
//! - [`entropy`]: entropy capability for minting fresh hashes
//! - [`checksum`]: CRC-32 reduction of the hash
//! - [`stream`]: the deterministic float stream and sampling operations
//! - [`features`]: the feature map reported to the host
//! - [`error`]: error types for the strict parsing path

pub mod checksum;
pub mod entropy;
pub mod error;
pub mod features;
pub mod hash;
pub mod stream;

// Re-export commonly used types at the crate root
pub use checksum::{checksum, crc32};
pub use entropy::{EntropySource, OsEntropy, SeededEntropy};
pub use error::HashError;
pub use features::FeatureMap;
pub use hash::{is_valid_hash, GenHash, HASH_DIGITS, HASH_LEN};
pub use stream::GenStream;
