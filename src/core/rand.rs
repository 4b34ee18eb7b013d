//! Move Selection Randomness
//!
//! The computer's move must be picked uniformly at random, before the
//! player's input is known and independent of it. The source of that
//! randomness sits behind the [`MoveSource`] trait so tests can substitute
//! a deterministic source and assert exact outcomes.
//!
//! Two implementations are provided:
//!
//! - [`OsMoveSource`]: the OS CSPRNG, used by the real game.
//! - [`SeededMoveSource`]: Xorshift128+ seeded via SplitMix64. Given the
//!   same seed it produces the identical pick sequence on any platform.

use rand::rngs::OsRng;
use rand::Rng;

/// Uniform random index source for move selection.
///
/// Implementations must return an index in `[0, len)` with each value
/// equally likely. `len` is always at least 1 (a move set is never empty).
pub trait MoveSource {
    /// Pick a uniformly random index in `[0, len)`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Move source backed by the operating system's CSPRNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsMoveSource;

impl MoveSource for OsMoveSource {
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        OsRng.gen_range(0..len)
    }
}

/// Deterministic move source using the Xorshift128+ algorithm.
///
/// Given the same seed, produces the identical index sequence on any
/// platform. Intended for tests and replays; the real game uses
/// [`OsMoveSource`].
///
/// # Example
///
/// ```
/// use cycle_duel::core::rand::{MoveSource, SeededMoveSource};
///
/// let mut a = SeededMoveSource::new(7);
/// let mut b = SeededMoveSource::new(7);
/// assert_eq!(a.pick_index(5), b.pick_index(5));
/// ```
#[derive(Clone, Debug)]
pub struct SeededMoveSource {
    state: [u64; 2],
}

impl SeededMoveSource {
    /// Create a new source from a 64-bit seed.
    ///
    /// Uses SplitMix64 to initialize the internal state, ensuring good
    /// distribution even from weak seeds.
    pub fn new(seed: u64) -> Self {
        let mut s = seed;
        let state0 = splitmix64(&mut s);
        let state1 = splitmix64(&mut s);

        // Xorshift state must never be all zeros
        let state = if state0 == 0 && state1 == 0 {
            [1, 1]
        } else {
            [state0, state1]
        };

        Self { state }
    }

    /// Generate the next 64-bit random value.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.state[1] = s1.rotate_left(37);

        result
    }
}

impl MoveSource for SeededMoveSource {
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        // Modulo bias is negligible for move-set sized ranges
        (self.next_u64() % len as u64) as usize
    }
}

/// SplitMix64 for seed initialization.
#[inline]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}
