//! Seeding from an external entropy source.
//!
//! The engine can be seeded from any object able to emit a run of 32-bit
//! words. This is a named factory input rather than a constructor
//! overload, so callers can never confuse it with integer seeding or raw
//! state restoration.

/// A source of 32-bit seed material.
///
/// Implementors fill the whole output slice; the engine requests exactly
/// eight words and packs them pairwise, most-significant word first, into
/// its four 64-bit state words.
///
/// # Example
/// ```
/// use lxm_random_core_rs::{L64X128MixRandom, SeedSequence};
///
/// struct Counter(u32);
///
/// impl SeedSequence for Counter {
///     fn generate(&mut self, out: &mut [u32]) {
///         for word in out.iter_mut() {
///             self.0 = self.0.wrapping_add(1);
///             *word = self.0;
///         }
///     }
/// }
///
/// let mut seq = Counter(0);
/// let mut rng = L64X128MixRandom::from_seed_seq(&mut seq);
/// rng.next();
/// ```
pub trait SeedSequence {
    /// Fill `out` with seed words.
    fn generate(&mut self, out: &mut [u32]);
}

/// Pack two 32-bit words into one 64-bit word, most-significant first.
#[inline]
pub(crate) fn pack_u64(hi: u32, lo: u32) -> u64 {
    (u64::from(hi) << 32) | u64::from(lo)
}
