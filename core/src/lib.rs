//! LXM Random Core - Rust Engine
//!
//! Deterministic pseudorandom number generation using the LXM family
//! (L64X128MixRandom variant): a 64-bit linear-congruential subgenerator
//! combined with a xoroshiro128 xor-based subgenerator, post-processed
//! through Doug Lea's 64-bit mixing function.
//!
//! # Architecture
//!
//! - **rng**: The L64X128MixRandom engine, its mixing functions, and
//!   seed-sequence support
//!
//! # Critical Invariants
//!
//! 1. Same seed produces the same output sequence, on every platform
//! 2. The LCG additive parameter `a` is always odd
//! 3. The xor-based subgenerator state `(x0, x1)` is never all-zero
//! 4. All arithmetic is wrapping; overflow is part of the algorithm
//!
//! Not cryptographically secure. Suitable for simulation, sampling, and
//! testing only.

// Module declarations
pub mod rng;

// Re-exports for convenience
pub use rng::{
    lxm::{L64X128MixRandom, LxmRandom, ParseStateError},
    mix::{mix_lea, mix_murmur, mix_stafford13, GOLDEN_RATIO_64, SILVER_RATIO_64},
    seed::SeedSequence,
};
