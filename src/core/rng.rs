//! Deterministic random number generation for grid and target creation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Injected**: The engine never touches a process-wide random source
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use mindstrike_engine::core::PuzzleRng;
//!
//! let mut rng1 = PuzzleRng::new(42);
//! let mut rng2 = PuzzleRng::new(42);
//!
//! // Same seed, same draws
//! assert_eq!(rng1.gen_range(1..10), rng2.gen_range(1..10));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backing grid generation and target walks.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
/// Replaying the same seed replays the exact grid, target, and reference walk.
#[derive(Clone, Debug)]
pub struct PuzzleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl PuzzleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<i32>) -> i32 {
        self.inner.gen_range(range)
    }

    /// Generate a random usize in the given inclusive range.
    pub fn gen_range_inclusive(&mut self, range: std::ops::RangeInclusive<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> PuzzleRngState {
        PuzzleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &PuzzleRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing a session.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = PuzzleRng::new(42);
        let mut rng2 = PuzzleRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range(0..1000), rng2.gen_range(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = PuzzleRng::new(1);
        let mut rng2 = PuzzleRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_inclusive_range_hits_both_ends() {
        let mut rng = PuzzleRng::new(7);
        let mut seen_low = false;
        let mut seen_high = false;

        for _ in 0..500 {
            match rng.gen_range_inclusive(3..=5) {
                3 => seen_low = true,
                5 => seen_high = true,
                4 => {}
                other => panic!("out of range draw: {other}"),
            }
        }

        assert!(seen_low);
        assert!(seen_high);
    }

    #[test]
    fn test_choose() {
        let mut rng = PuzzleRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some());
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = PuzzleRng::new(42);

        // Advance the RNG
        for _ in 0..100 {
            rng.gen_range(0..1000);
        }

        let state = rng.state();

        // Continue generating
        let expected: Vec<_> = (0..10).map(|_| rng.gen_range(0..1000)).collect();

        // Restore and verify
        let mut restored = PuzzleRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_range(0..1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = PuzzleRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: PuzzleRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
