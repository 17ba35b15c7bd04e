use crate::random::seed::Seed;

/// Initial hash state before any seed character is folded in.
pub const HASH_INIT: u32 = 0xDEAD_BEEF;

const FOLD_MUL: u32 = 2_654_435_761;
const MIX_MUL_A: u32 = 2_246_822_507;
const MIX_MUL_B: u32 = 3_266_489_909;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Fold a seed string into the 32-bit starting state.
///
/// Operates on UTF-16 code units so that non-ASCII seeds hash the same way a browser's
/// `charCodeAt` loop would.
pub fn hash_seed(seed: &str) -> u32 {
    seed.encode_utf16().fold(HASH_INIT, |h, unit| {
        (h ^ u32::from(unit)).wrapping_mul(FOLD_MUL)
    })
}

/// A stream of uniform draws in `[0, 1)`.
///
/// Generators are written against this trait; the provided helpers define how a single draw
/// becomes a range, an index or a coin flip, and are part of the reproducibility contract.
pub trait RandomSource {
    /// Next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// `base + draw * width`.
    fn spread(&mut self, base: f64, width: f64) -> f64 {
        base + self.next_f64() * width
    }

    /// `floor(draw * n)`, in `0..n`.
    fn index(&mut self, n: u32) -> u32 {
        (self.next_f64() * f64::from(n)).floor() as u32
    }

    /// `draw > threshold`.
    fn chance(&mut self, threshold: f64) -> bool {
        self.next_f64() > threshold
    }
}

/// Deterministic xorshift-multiply generator over a 32-bit state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Start a stream from the hash of `seed`.
    pub fn new(seed: &Seed) -> Self {
        Self::from_state(seed.hash())
    }

    /// Start a stream from a raw hash state.
    pub fn from_state(state: u32) -> Self {
        Self { state }
    }

    /// Current state; the value most recently returned by [`SeededRng::next_u32`].
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance the state and return it.
    pub fn next_u32(&mut self) -> u32 {
        let mut h = self.state;
        h = (h ^ (h >> 16)).wrapping_mul(MIX_MUL_A);
        h = (h ^ (h >> 13)).wrapping_mul(MIX_MUL_B);
        h ^= h >> 16;
        self.state = h;
        h
    }
}

impl RandomSource for SeededRng {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/random/rng.rs"]
mod tests;
