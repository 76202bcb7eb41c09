//! Deterministic random number generation
//!
//! Implements the LXM generator family member L64X128MixRandom.
//! CRITICAL: every construction path and every state transition here is
//! bit-exact against the reference implementation; the mixing constants
//! and shift amounts are load-bearing and must not be "tuned".

pub mod lxm;
pub mod mix;
pub mod seed;

pub use lxm::{L64X128MixRandom, LxmRandom, ParseStateError};
pub use seed::SeedSequence;
