//! Range laws and distribution tests for the derived sampling operations.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gencade-tests --test sampling
//! ```

use gencade_core::{GenHash, GenStream};
use gencade_tests::fixtures::{HASH_A, HASH_B, ZERO_HASH};
use pretty_assertions::assert_eq;

fn stream(hash: &str) -> GenStream {
    GenStream::from_hash(GenHash::parse(hash).unwrap())
}

#[test]
fn test_rand_int_golden_sequences() {
    for (hash, expected) in [
        (ZERO_HASH, [125, 145, 226, 127, 96]),
        (HASH_A, [343, 146, 68, 337, 69]),
        (HASH_B, [44, 326, 0, 321, 162]),
    ] {
        let mut s = stream(hash);
        let drawn: Vec<i64> = (0..5).map(|_| s.rand_int(0.0, 360.0)).collect();
        assert_eq!(drawn, expected.to_vec(), "rand_int golden mismatch for {hash}");
    }
}

#[test]
fn test_rand_float_golden_sequence() {
    let mut s = stream(ZERO_HASH);
    assert_eq!(s.rand_float(0.5, 1.5), 0.8489925148896873);
    assert_eq!(s.rand_float(0.5, 1.5), 0.9051092313602567);
    assert_eq!(s.rand_float(0.5, 1.5), 1.1279424026142806);
}

#[test]
fn test_rand_int_range_law() {
    // min inclusive after ceil, max exclusive after floor.
    let cases: [(f64, f64, i64, i64); 4] = [
        (0.0, 360.0, 0, 360),
        (5.0, 10.0, 5, 10),
        (0.5, 9.5, 1, 9),
        (-3.7, 4.2, -3, 4),
    ];
    for (min, max, lo, hi) in cases {
        let mut s = stream(HASH_A);
        for i in 0..2_000 {
            let v = s.rand_int(min, max);
            assert!(
                (lo..hi).contains(&v),
                "rand_int({min}, {max}) = {v} outside [{lo}, {hi}) at draw {i}"
            );
        }
    }
}

#[test]
fn test_rand_float_range_law() {
    let mut s = stream(HASH_B);
    for i in 0..10_000 {
        let v = s.rand_float(-2.5, 7.25);
        assert!(
            (-2.5..7.25).contains(&v),
            "rand_float(-2.5, 7.25) = {v} out of bounds at draw {i}"
        );
    }
}

#[test]
fn test_inverted_ranges_stay_permissive() {
    // Degenerate ranges are mathematically defined, never an error.
    let mut s = stream(ZERO_HASH);
    for _ in 0..1_000 {
        let v = s.rand_int(5.0, 0.0);
        assert!((0..=5).contains(&v), "rand_int(5, 0) = {v}");
    }
    let mut s = stream(ZERO_HASH);
    for _ in 0..1_000 {
        let v = s.rand_float(2.0, 1.0);
        assert!(v > 1.0 && v <= 2.0, "rand_float(2, 1) = {v}");
    }
}

#[test]
fn test_choice_golden_elements() {
    let palette = ["red", "orange", "yellow", "green", "blue", "violet"];
    let mut s = stream(ZERO_HASH);
    let drawn: Vec<&str> = (0..6).map(|_| *s.choice(&palette).unwrap()).collect();
    assert_eq!(
        drawn,
        vec!["yellow", "yellow", "green", "yellow", "orange", "blue"],
    );
}

#[test]
fn test_choice_uniformity_over_six_elements() {
    const DRAWS: usize = 100_000;
    let elements = [0usize, 1, 2, 3, 4, 5];
    let mut counts = [0usize; 6];

    let mut s = stream(HASH_A);
    for _ in 0..DRAWS {
        let picked = *s.choice(&elements).unwrap();
        counts[picked] += 1;
    }

    // Each frequency within +/-2% absolute of 1/6.
    let expected = DRAWS as f64 / 6.0;
    let tolerance = DRAWS as f64 * 0.02;
    for (element, &count) in counts.iter().enumerate() {
        let deviation = (count as f64 - expected).abs();
        assert!(
            deviation <= tolerance,
            "element {element} drawn {count} times, expected {expected} +/- {tolerance}"
        );
    }
}

#[test]
fn test_choice_on_empty_slice_advances_the_stream() {
    let mut with_choice = stream(HASH_B);
    let mut plain = stream(HASH_B);

    let empty: [&str; 0] = [];
    assert_eq!(with_choice.choice(&empty), None);

    // The index draw consumed one value, keeping the sequences aligned.
    plain.next();
    for _ in 0..32 {
        assert_eq!(with_choice.next(), plain.next());
    }
}

#[test]
fn test_single_element_choice_is_total() {
    let mut s = stream(ZERO_HASH);
    for _ in 0..100 {
        assert_eq!(s.choice(&["only"]), Some(&"only"));
    }
}
