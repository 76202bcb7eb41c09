//! L64X128MixRandom engine
//!
//! State is four 64-bit words: the per-stream LCG additive parameter `a`
//! (always odd, never mutated after construction), the LCG state `s`, and
//! the xoroshiro128 state pair `(x0, x1)` (never both zero).
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Debugging (reproduce exact runs)
//! - Testing (golden vectors)
//! - Research (validate results)
//!
//! # Algorithm
//!
//! Each call emits `mix_lea(s + x0)` computed from the pre-transition
//! state, then advances `s = M*s + a` (wrapping) and steps `(x0, x1)`
//! with the xoroshiro128 v1.0 update (rotations 24 and 37, shift 16).

use crate::rng::mix::{mix_lea, mix_murmur, mix_stafford13, GOLDEN_RATIO_64, SILVER_RATIO_64};
use crate::rng::seed::{pack_u64, SeedSequence};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fixed LCG multiplier. Per-stream variation lives in `a`, not here.
const LCG_MULTIPLIER: u64 = 0xd1342543de82ef95;

/// Error parsing the textual state form (`"a s x0 x1"`, decimal).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseStateError {
    #[error("Expected 4 state words, found {0}")]
    WrongWordCount(usize),

    #[error("Invalid state word '{word}': {source}")]
    InvalidWord {
        word: String,
        source: std::num::ParseIntError,
    },
}

/// Deterministic random number generator (LXM family, L64X128MixRandom)
///
/// Produces a reproducible stream of 64-bit values across the full
/// `[0, u64::MAX]` range. Not cryptographically secure. An instance is
/// single-threaded; give each thread its own seeded or [`split`] instance.
///
/// [`split`]: L64X128MixRandom::split
///
/// # Example
/// ```
/// use lxm_random_core_rs::L64X128MixRandom;
///
/// let mut rng = L64X128MixRandom::new(42);
/// assert_eq!(rng.next(), 0xb2482ded0ba7ac12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct L64X128MixRandom {
    /// LCG additive parameter (odd, per-stream constant)
    a: u64,
    /// LCG state
    s: u64,
    /// xoroshiro128 state, first word
    x0: u64,
    /// xoroshiro128 state, second word
    x1: u64,
}

/// Default engine alias for callers that only care about "the LXM RNG".
pub type LxmRandom = L64X128MixRandom;

impl L64X128MixRandom {
    /// Seed used by [`Default`].
    pub const DEFAULT_SEED: u64 = 1;

    /// Create a generator from a 64-bit integer seed
    ///
    /// The seed is XORed with the silver-ratio constant, then the four
    /// state words are derived through the Murmur3 and Stafford-13
    /// finalizers. Any seed value is valid, including 0.
    ///
    /// # Example
    /// ```
    /// use lxm_random_core_rs::L64X128MixRandom;
    ///
    /// let mut a = L64X128MixRandom::new(12345);
    /// let mut b = L64X128MixRandom::new(12345);
    /// assert_eq!(a.next(), b.next());
    /// ```
    pub fn new(seed: u64) -> Self {
        let value = seed ^ SILVER_RATIO_64;
        Self::init(
            mix_murmur(value),
            1,
            mix_stafford13(value),
            mix_stafford13(value.wrapping_add(GOLDEN_RATIO_64)),
        )
    }

    /// Create a generator from an external seed-word source
    ///
    /// Requests exactly eight 32-bit words and packs them pairwise,
    /// most-significant word first, into `(a, s, x0, x1)`.
    pub fn from_seed_seq<S: SeedSequence>(seq: &mut S) -> Self {
        let mut words = [0u32; 8];
        seq.generate(&mut words);
        Self::init(
            pack_u64(words[0], words[1]),
            pack_u64(words[2], words[3]),
            pack_u64(words[4], words[5]),
            pack_u64(words[6], words[7]),
        )
    }

    /// Restore a generator from four raw state words
    ///
    /// The words pass through the same initializer as every other
    /// construction path: `a` is forced odd and an all-zero `(x0, x1)`
    /// pair is repaired. Restoring words captured from a live instance
    /// reproduces its subsequent output stream exactly.
    ///
    /// # Example
    /// ```
    /// use lxm_random_core_rs::L64X128MixRandom;
    ///
    /// let mut original = L64X128MixRandom::new(7);
    /// let (a, s, x0, x1) = original.state_words();
    /// let mut restored = L64X128MixRandom::from_state_words(a, s, x0, x1);
    /// assert_eq!(original.next(), restored.next());
    /// ```
    pub fn from_state_words(a: u64, s: u64, x0: u64, x1: u64) -> Self {
        Self::init(a, s, x0, x1)
    }

    /// Common initializer; all construction paths converge here.
    fn init(a: u64, s: u64, x0: u64, x1: u64) -> Self {
        let mut rng = Self {
            a: a | 1,
            s,
            x0,
            x1,
        };

        // Both x0 and x1 cannot be 0. Repair each word independently
        // from s; the reference implementation assigns x0 twice here and
        // leaves x1 zero, which would keep the degenerate state.
        if rng.x0 == 0 && rng.x1 == 0 {
            let v = s.wrapping_add(GOLDEN_RATIO_64);
            rng.x0 = mix_stafford13(v);
            rng.x1 = mix_stafford13(v.wrapping_add(GOLDEN_RATIO_64));
        }

        rng
    }

    /// Generate the next 64-bit value and advance the state
    ///
    /// Never fails; runs in constant time regardless of history.
    ///
    /// # Example
    /// ```
    /// use lxm_random_core_rs::L64X128MixRandom;
    ///
    /// let mut rng = L64X128MixRandom::new(42);
    /// let first = rng.next();
    /// let second = rng.next();
    /// assert_ne!(first, second);
    /// ```
    #[inline]
    pub fn next(&mut self) -> u64 {
        // Output is mixed from the state BEFORE this transition.
        let z = mix_lea(self.s.wrapping_add(self.x0));

        // Update the LCG subgenerator
        self.s = LCG_MULTIPLIER.wrapping_mul(self.s).wrapping_add(self.a);

        // Update the XBG subgenerator (xoroshiro128 v1.0)
        let q0 = self.x0;
        let mut q1 = self.x1;
        q1 ^= q0;
        let q0 = q0.rotate_left(24);
        let q0 = q0 ^ q1 ^ (q1 << 16);
        let q1 = q1.rotate_left(37);
        self.x0 = q0;
        self.x1 = q1;

        z
    }

    /// Skip `n` outputs
    ///
    /// Equivalent to calling [`next`](Self::next) `n` times and dropping
    /// the results; no faster skip-ahead exists for this generator.
    ///
    /// # Example
    /// ```
    /// use lxm_random_core_rs::L64X128MixRandom;
    ///
    /// let mut a = L64X128MixRandom::new(7);
    /// let mut b = L64X128MixRandom::new(7);
    /// a.discard(3);
    /// for _ in 0..3 {
    ///     b.next();
    /// }
    /// assert_eq!(a.next(), b.next());
    /// ```
    pub fn discard(&mut self, n: u64) {
        for _ in 0..n {
            self.next();
        }
    }

    /// Derive an independent child stream, advancing this one by one step
    ///
    /// The parent's next output is consumed and mixed through finalizers
    /// the seeding path does not chain in this order, giving the child
    /// its own odd LCG parameter `a` and a fresh `(s, x0, x1)`. Parent
    /// and child then evolve with no further coupling. Intended for
    /// fan-out across threads: split once per worker, move each child in.
    ///
    /// # Example
    /// ```
    /// use lxm_random_core_rs::L64X128MixRandom;
    ///
    /// let mut parent = L64X128MixRandom::new(42);
    /// let mut child = parent.split();
    /// assert_ne!(parent, child);
    /// assert_ne!(parent.next(), child.next());
    /// ```
    pub fn split(&mut self) -> Self {
        let z = self.next();
        Self::init(
            mix_murmur(z),
            mix_stafford13(z),
            mix_stafford13(z.wrapping_add(GOLDEN_RATIO_64)),
            mix_stafford13(z.wrapping_add(GOLDEN_RATIO_64.wrapping_mul(2))),
        )
    }

    /// Smallest value the generator can emit (inclusive)
    pub const fn min() -> u64 {
        0
    }

    /// Largest value the generator can emit (inclusive)
    pub const fn max() -> u64 {
        u64::MAX
    }

    /// Get the raw state words `(a, s, x0, x1)` (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use lxm_random_core_rs::L64X128MixRandom;
    ///
    /// let rng = L64X128MixRandom::new(1);
    /// let (a, _, _, _) = rng.state_words();
    /// assert_eq!(a & 1, 1);
    /// ```
    pub fn state_words(&self) -> (u64, u64, u64, u64) {
        (self.a, self.s, self.x0, self.x1)
    }
}

impl Default for L64X128MixRandom {
    /// Equivalent to `L64X128MixRandom::new(L64X128MixRandom::DEFAULT_SEED)`.
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl fmt::Display for L64X128MixRandom {
    /// Write the state as four space-separated decimal words: `a s x0 x1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.a, self.s, self.x0, self.x1)
    }
}

impl FromStr for L64X128MixRandom {
    type Err = ParseStateError;

    /// Parse the textual state form produced by [`Display`](fmt::Display).
    ///
    /// Fails on a missing or extra word and on any non-numeric word; a
    /// failed parse constructs nothing.
    ///
    /// # Example
    /// ```
    /// use lxm_random_core_rs::L64X128MixRandom;
    ///
    /// let mut rng = L64X128MixRandom::new(42);
    /// let saved = rng.to_string();
    /// let mut restored: L64X128MixRandom = saved.parse().unwrap();
    /// assert_eq!(rng, restored);
    /// assert_eq!(rng.next(), restored.next());
    /// ```
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != 4 {
            return Err(ParseStateError::WrongWordCount(tokens.len()));
        }

        let mut words = [0u64; 4];
        for (slot, token) in words.iter_mut().zip(&tokens) {
            *slot = token.parse().map_err(|source| ParseStateError::InvalidWord {
                word: (*token).to_string(),
                source,
            })?;
        }

        Ok(Self::from_state_words(words[0], words[1], words[2], words[3]))
    }
}
