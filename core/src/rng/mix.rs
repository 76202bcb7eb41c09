//! Bit-mixing (finalizer) functions and global mixing constants.
//!
//! Each mixer is a fixed xorshift-multiply sequence that avalanches one
//! 64-bit word. They are pure and stateless; the engine uses Murmur3 and
//! Stafford-13 for seeding and Lea's mixer for per-call output.

/// The first 64 bits of the golden ratio (1+sqrt(5))/2, forced to be odd.
pub const GOLDEN_RATIO_64: u64 = 0x9e3779b97f4a7c15;

/// The first 64 bits of the silver ratio 1+sqrt(2), forced to be odd.
pub const SILVER_RATIO_64: u64 = 0x6A09E667F3BCC909;

const MURMUR3_M1: u64 = 0xff51afd7ed558ccd;
const MURMUR3_M2: u64 = 0xc4ceb9fe1a85ec53;

const STAFFORD13_M1: u64 = 0xbf58476d1ce4e5b9;
const STAFFORD13_M2: u64 = 0x94d049bb133111eb;

const LEA_M: u64 = 0xdaba0b6eb09322e3;

/// MurmurHash3 64-bit finalizer. Shifts 33/33/33.
#[inline]
pub const fn mix_murmur(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(MURMUR3_M1);
    h ^= h >> 33;
    h = h.wrapping_mul(MURMUR3_M2);
    h ^= h >> 33;
    h
}

/// David Stafford's "Mix13" variant of the 64-bit finalizer. Shifts 30/27/31.
#[inline]
pub const fn mix_stafford13(mut h: u64) -> u64 {
    h ^= h >> 30;
    h = h.wrapping_mul(STAFFORD13_M1);
    h ^= h >> 27;
    h = h.wrapping_mul(STAFFORD13_M2);
    h ^= h >> 31;
    h
}

/// Doug Lea's 64-bit mixing function. Shift 32, same multiplier all rounds.
#[inline]
pub const fn mix_lea(mut h: u64) -> u64 {
    h ^= h >> 32;
    h = h.wrapping_mul(LEA_M);
    h ^= h >> 32;
    h = h.wrapping_mul(LEA_M);
    h ^= h >> 32;
    h
}
