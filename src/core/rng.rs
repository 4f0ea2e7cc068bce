//! Deterministic Random Number Generation
//!
//! Setup draws (weapon placement, solution, shuffle, first player) and dice
//! rolls all go through the [`RandomSource`] trait, so a game can be replayed
//! from its seed and tests can substitute a scripted sequence.
//!
//! The default source is Xorshift128+, seeded through SplitMix64.

use serde::{Serialize, Deserialize};
use sha2::{Sha256, Digest};

/// Source of uniform integers, injected into setup and dice rolls.
///
/// All ranges are inclusive on both ends: indexing a list of length `n`
/// uses `uniform_int(0, n - 1)`.
pub trait RandomSource {
    /// Uniform integer in `[min, max]`.
    ///
    /// Returns `min` when `min >= max`.
    fn uniform_int(&mut self, min: usize, max: usize) -> usize;

    /// Shuffle a slice in place (Fisher-Yates).
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.uniform_int(0, i);
            items.swap(i, j);
        }
    }

    /// Uniform index into a list of `len` items, `None` for an empty list.
    fn choose_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.uniform_int(0, len - 1))
        }
    }
}

/// Deterministic PRNG using Xorshift128+ algorithm.
///
/// # Example
///
/// ```
/// use cluedo::core::rng::DeterministicRng;
///
/// let mut rng = DeterministicRng::new(12345);
/// let value = rng.next_u64();
/// assert_eq!(value, 6233086606872742541); // Always the same!
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeterministicRng {
    state: [u64; 2],
}

impl Default for DeterministicRng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl DeterministicRng {
    /// Create a new RNG from a 64-bit seed.
    ///
    /// Uses SplitMix64 to initialize the internal state, ensuring
    /// good distribution even from weak seeds.
    pub fn new(seed: u64) -> Self {
        let mut s = seed;
        let state0 = splitmix64(&mut s);
        let state1 = splitmix64(&mut s);

        // Xorshift never leaves the all-zero state
        let state = if state0 == 0 && state1 == 0 {
            [1, 1]
        } else {
            [state0, state1]
        };

        Self { state }
    }

    /// Generate the next 64-bit random value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.state[1] = s1.rotate_left(37);

        result
    }

    /// Generate a random integer in range [0, bound).
    ///
    /// Rejection sampling keeps the distribution exactly uniform.
    pub fn next_below(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        // Largest multiple of `bound` that fits in u64; draws above it are biased
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let value = self.next_u64();
            if value < zone {
                return value % bound;
            }
        }
    }
}

impl RandomSource for DeterministicRng {
    fn uniform_int(&mut self, min: usize, max: usize) -> usize {
        if min >= max {
            return min;
        }
        let span = ((max - min) as u64).wrapping_add(1);
        if span == 0 {
            return self.next_u64() as usize;
        }
        min + self.next_below(span) as usize
    }
}

/// SplitMix64 for seed initialization.
/// Produces well-distributed values from sequential seeds.
#[inline]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Derive a game seed from a game id and the seated suspects.
///
/// Seat order matters: the same suspects seated differently produce a
/// different deal.
pub fn derive_game_seed(game_id: &[u8; 16], seat_names: &[&str]) -> u64 {
    let mut hasher = Sha256::new();

    hasher.update(b"CLUEDO_SEED_V1");
    hasher.update(game_id);

    for name in seat_names {
        hasher.update((name.len() as u32).to_le_bytes());
        hasher.update(name.as_bytes());
    }

    let hash = hasher.finalize();

    let mut seed = [0u8; 8];
    seed.copy_from_slice(&hash[..8]);
    u64::from_le_bytes(seed)
}
