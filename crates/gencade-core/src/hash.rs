//! The 256-bit generation hash and its acquisition policy.
//!
//! A hash identifies exactly one generation run. The hosting context may
//! supply a candidate (a `genhash` query-style parameter); candidates that
//! do not match the required format are silently replaced with a freshly
//! minted hash, never rejected with an error. A malformed embed still
//! renders; it just renders a fresh artwork. Callers that need to
//! distinguish acceptance from regeneration read the resulting hash back.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::entropy::EntropySource;
use crate::error::HashError;

/// Total length of a well-formed hash string (`0x` + 64 hex digits).
pub const HASH_LEN: usize = 66;

/// Number of hex digits carried by a hash (256 bits of entropy).
pub const HASH_DIGITS: usize = 64;

/// Regex pattern for a well-formed hash.
const HASH_PATTERN: &str = r"^0x[0-9a-f]{64}$";

static HASH_REGEX: OnceLock<Regex> = OnceLock::new();

fn hash_regex() -> &'static Regex {
    HASH_REGEX.get_or_init(|| Regex::new(HASH_PATTERN).expect("invalid regex pattern"))
}

/// Checks whether a candidate string is a well-formed generation hash.
pub fn is_valid_hash(candidate: &str) -> bool {
    hash_regex().is_match(candidate)
}

/// A validated 256-bit generation hash: `0x` followed by 64 lowercase hex
/// digits. Immutable once established for the lifetime of one run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenHash(String);

impl GenHash {
    /// Strictly parses a candidate hash.
    ///
    /// This is the opt-in companion to [`GenHash::acquire`] for hosts that
    /// need to distinguish a rejected candidate; the acquisition path never
    /// calls it.
    pub fn parse(candidate: &str) -> Result<Self, HashError> {
        if candidate.len() != HASH_LEN {
            return Err(HashError::InvalidLength(candidate.len()));
        }
        if !hash_regex().is_match(candidate) {
            return Err(HashError::InvalidFormat);
        }
        Ok(Self(candidate.to_string()))
    }

    /// Acquires a hash from an optional external candidate.
    ///
    /// The candidate is accepted iff it is well-formed; anything else
    /// (absent, wrong length, non-hex, uppercase) is silently replaced by
    /// a freshly minted hash.
    pub fn acquire(candidate: Option<&str>, entropy: &mut dyn EntropySource) -> Self {
        match candidate {
            Some(c) if is_valid_hash(c) => Self(c.to_string()),
            _ => Self::mint(entropy),
        }
    }

    /// Mints a fresh hash by drawing 64 hex digits from the entropy source.
    pub fn mint(entropy: &mut dyn EntropySource) -> Self {
        let digits = entropy.next_hex_digits();
        debug_assert_eq!(digits.len(), HASH_DIGITS);
        Self(format!("0x{digits}"))
    }

    /// Returns the canonical 66-character string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GenHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GenHash {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for GenHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for GenHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        GenHash::parse(&s).map_err(serde::de::Error::custom)
    }
}
