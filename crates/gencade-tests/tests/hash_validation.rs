//! Hash acquisition and validation tests, including property tests that
//! the lenient path never panics and always yields a well-formed hash.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gencade-tests --test hash_validation
//! ```

use gencade_core::{is_valid_hash, GenHash, HashError, SeededEntropy, HASH_LEN};
use gencade_tests::fixtures::HASH_A;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_well_formed_candidate_is_returned_unchanged() {
    let mut entropy = SeededEntropy::new(1);
    let hash = GenHash::acquire(Some(HASH_A), &mut entropy);
    assert_eq!(hash.as_str(), HASH_A);
}

#[test]
fn test_malformed_candidates_are_replaced() {
    let too_long = format!("{HASH_A}0");
    let uppercase = HASH_A.to_uppercase();
    let bad_prefix = format!("1x{}", &HASH_A[2..]);
    let non_hex = format!("0x{}", "z".repeat(64));

    let malformed = [
        "",
        "0x",
        "0xabc",
        &HASH_A[..HASH_LEN - 1], // one digit short
        too_long.as_str(),
        uppercase.as_str(),
        bad_prefix.as_str(),
        non_hex.as_str(),
        "not a hash at all",
    ];

    for candidate in malformed {
        let mut entropy = SeededEntropy::new(99);
        let hash = GenHash::acquire(Some(candidate), &mut entropy);
        assert_ne!(hash.as_str(), candidate, "accepted malformed {candidate:?}");
        assert!(is_valid_hash(hash.as_str()));
        assert_eq!(hash.as_str().len(), HASH_LEN);
    }
}

#[test]
fn test_minted_hashes_are_reproducible_per_seed() {
    let mut a = SeededEntropy::new(7);
    let mut b = SeededEntropy::new(7);
    assert_eq!(GenHash::mint(&mut a), GenHash::mint(&mut b));

    let mut c = SeededEntropy::new(8);
    assert_ne!(GenHash::mint(&mut a), GenHash::mint(&mut c));
}

#[test]
fn test_strict_parse_distinguishes_length_from_shape() {
    assert_eq!(
        GenHash::parse("0xdead"),
        Err(HashError::InvalidLength(6)),
    );
    assert_eq!(
        GenHash::parse(&HASH_A.to_uppercase()),
        Err(HashError::InvalidFormat),
    );
    assert!(GenHash::parse(HASH_A).is_ok());
}

proptest! {
    /// Acquisition never panics and always yields a well-formed hash, no
    /// matter what the hosting context supplies.
    #[test]
    fn acquire_is_total_and_well_formed(candidate in "\\PC{0,80}") {
        let mut entropy = SeededEntropy::new(0);
        let hash = GenHash::acquire(Some(&candidate), &mut entropy);
        prop_assert!(is_valid_hash(hash.as_str()));
    }

    /// Every string matching the hash format is accepted unchanged.
    #[test]
    fn well_formed_candidates_always_accepted(candidate in "0x[0-9a-f]{64}") {
        let mut entropy = SeededEntropy::new(0);
        let hash = GenHash::acquire(Some(&candidate), &mut entropy);
        prop_assert_eq!(hash.as_str(), candidate.as_str());
    }

    /// Validation never panics on arbitrary input.
    #[test]
    fn validation_never_panics(candidate in "\\PC{0,120}") {
        let _ = is_valid_hash(&candidate);
        let _ = GenHash::parse(&candidate);
    }
}
