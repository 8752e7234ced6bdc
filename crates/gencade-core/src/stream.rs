//! The deterministic random stream.
//!
//! All randomness an artwork consumes flows through this module. The stream
//! is a three-register additive generator over double-precision floats,
//! seeded from the hash text and perturbed by the CRC-32 checksum. For a
//! fixed hash the entire derived sequence (every call to
//! [`GenStream::next`], [`GenStream::rand_int`], [`GenStream::rand_float`]
//! and [`GenStream::choice`], in calling order) is bit-for-bit
//! reproducible across processes and platforms given IEEE-754 f64
//! arithmetic.

use crate::checksum::checksum;
use crate::hash::GenHash;

/// Initial value of the mixer accumulator.
const MASH_SEED: f64 = 4_022_871_197.0;

/// Mixer fold multiplier. Exact; must not be approximated.
const MASH_MULTIPLIER: f64 = 0.02519603282416938;

/// 2^-32, the scale mapping a 32-bit integer onto the unit interval.
const TWO_POW_NEG32: f64 = 2.3283064365386963e-10;

/// Additive-generator multiplier applied to the leading accumulator.
const STREAM_MULTIPLIER: f64 = 2_091_639.0;

/// Truncates a double with 32-bit signed integer semantics: the integer
/// part reduced modulo 2^32, reinterpreted as i32.
///
/// Every fold step of the mixer truncates through this function. Any other
/// rounding (round-to-nearest, 64-bit truncation, or an unsigned wrap)
/// produces a different stream for the same hash, so this must not be
/// simplified.
#[inline]
fn trunc32(value: f64) -> i32 {
    ((value.trunc() as i64) & 0xFFFF_FFFF) as u32 as i32
}

/// Stateful string mixer folding character codes into a 32-bit-scaled
/// accumulator.
///
/// The accumulator carries over between calls: mixing the same input twice
/// in a row yields two different values, and the seeding sequence in
/// [`GenStream`] relies on exactly that.
#[derive(Debug, Clone)]
struct Mash {
    n: f64,
}

impl Mash {
    fn new() -> Self {
        Self { n: MASH_SEED }
    }

    /// Folds `input` into the accumulator and returns a float in
    /// [-0.5, 0.5).
    fn mix(&mut self, input: &str) -> f64 {
        for ch in input.chars() {
            self.n += ch as u32 as f64;
            let k = trunc32(MASH_MULTIPLIER * self.n) as f64;
            let f = MASH_MULTIPLIER * self.n - k;
            let t = f * k;
            self.n = 4_294_967_296.0 * (t - trunc32(t) as f64) + trunc32(t) as f64;
        }
        trunc32(self.n) as f64 * TWO_POW_NEG32
    }
}

/// The deterministic float stream derived from one generation hash.
///
/// Construction seeds three fractional accumulators from fixed slices of
/// the hash and perturbs each with the checksum; every draw rotates them.
/// [`GenStream::reset`] restores the seeded state so the host can force a
/// deterministic re-render (e.g. on viewport resize) without changing the
/// artwork's identity.
#[derive(Debug, Clone)]
pub struct GenStream {
    hash: GenHash,
    checksum: u32,
    a: f64,
    b: f64,
    c: f64,
    x: i32,
}

impl GenStream {
    /// Builds the stream for a hash, deriving the checksum and seeding the
    /// accumulators.
    pub fn from_hash(hash: GenHash) -> Self {
        let checksum = checksum(&hash);
        let (a, b, c) = Self::seed_accumulators(&hash, checksum);
        Self {
            hash,
            checksum,
            a,
            b,
            c,
            x: 1,
        }
    }

    fn seed_accumulators(hash: &GenHash, checksum: u32) -> (f64, f64, f64) {
        let text = hash.as_str();
        let mut mash = Mash::new();
        let mut a = mash.mix(&text[0..22]);
        let mut b = mash.mix(&text[22..44]);
        let mut c = mash.mix(&text[44..]);

        // Three further applications of the same stateful mixer, one per
        // accumulator; each yields a distinct perturbation.
        let decimal = checksum.to_string();
        a -= mash.mix(&decimal);
        b -= mash.mix(&decimal);
        c -= mash.mix(&decimal);
        if a < 0.0 {
            a += 1.0;
        }
        if b < 0.0 {
            b += 1.0;
        }
        if c < 0.0 {
            c += 1.0;
        }
        (a, b, c)
    }

    /// The hash this stream was derived from.
    pub fn hash(&self) -> &GenHash {
        &self.hash
    }

    /// The CRC-32 checksum mixed into the seed.
    pub fn checksum(&self) -> u32 {
        self.checksum
    }

    /// Draws the next float in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        let y = self.x as f64 * TWO_POW_NEG32 + self.a * STREAM_MULTIPLIER;
        self.a = self.b;
        self.b = self.c;
        self.x = trunc32(y);
        self.c = y - self.x as f64;
        self.c
    }

    /// Re-derives the stream from the unchanged hash and checksum; the
    /// subsequent output is byte-identical to the original construction's,
    /// from position zero.
    pub fn reset(&mut self) {
        let (a, b, c) = Self::seed_accumulators(&self.hash, self.checksum);
        self.a = a;
        self.b = b;
        self.c = c;
        self.x = 1;
    }

    /// Draws an integer in `[ceil(min), floor(max))`: `min` inclusive,
    /// `max` exclusive, both coerced toward integers before combination.
    ///
    /// Degenerate ranges (`min > max`) are not validated and produce the
    /// mathematically defined inverted result rather than an error.
    pub fn rand_int(&mut self, min: f64, max: f64) -> i64 {
        let lo = min.ceil();
        let hi = max.floor();
        (self.next() * (hi - lo)).floor() as i64 + lo as i64
    }

    /// Draws a float in `[min, max)`. No coercion, no validation.
    pub fn rand_float(&mut self, min: f64, max: f64) -> f64 {
        self.next() * (max - min) + min
    }

    /// Draws a uniform element of `items`, or `None` if it is empty.
    ///
    /// The index draw happens unconditionally, so the stream position
    /// advances exactly one step either way.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let index = self.rand_int(0.0, items.len() as f64);
        items.get(index as usize)
    }
}
