//! Determinism Tests - Reproducible Output Streams
//!
//! Critical invariants tested:
//! - Same seed produces identical sequences, for any seed
//! - Default construction equals explicit default-seed construction
//! - Golden vector: seed 42 matches the reference implementation
//! - discard(N) + next() equals N+1 next() calls, including N = 0
//! - Every construction path yields odd `a` and non-degenerate (x0, x1)

use lxm_random_core_rs::{L64X128MixRandom, LxmRandom};
use proptest::prelude::*;

// ============================================================================
// Golden Vectors
// ============================================================================

/// First five outputs for seed 42, pinned from the reference
/// implementation. Guards against constant or shift-order drift.
const SEED_42_REFERENCE: [u64; 5] = [
    0xb2482ded0ba7ac12,
    0xabc6a30a803e9910,
    0xb52050e95869e138,
    0xd0bb322ded7531ec,
    0x882b4c1e1da17c8a,
];

/// First five outputs for the default seed (1).
const DEFAULT_SEED_REFERENCE: [u64; 5] = [
    0xe79751724d8031be,
    0x183a3c7e4a6d3477,
    0x0b800efa2b2de6aa,
    0x56b138d75f243dae,
    0xb74add3eff1ed9e0,
];

#[test]
fn seed_42_matches_reference_vector() {
    let mut rng = L64X128MixRandom::new(42);
    for (i, expected) in SEED_42_REFERENCE.iter().enumerate() {
        assert_eq!(rng.next(), *expected, "output {} diverged", i);
    }
}

#[test]
fn default_seed_matches_reference_vector() {
    let mut rng = L64X128MixRandom::default();
    for expected in DEFAULT_SEED_REFERENCE {
        assert_eq!(rng.next(), expected);
    }
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn same_seed_same_sequence() {
    for seed in [0, 1, 42, 0xdead_beef, u64::MAX] {
        let mut a = L64X128MixRandom::new(seed);
        let mut b = L64X128MixRandom::new(seed);
        for i in 0..1000 {
            assert_eq!(a.next(), b.next(), "seed {} diverged at step {}", seed, i);
        }
    }
}

#[test]
fn default_equals_explicit_default_seed() {
    let mut implicit = LxmRandom::default();
    let mut explicit = LxmRandom::new(LxmRandom::DEFAULT_SEED);
    assert_eq!(implicit, explicit);
    for _ in 0..100 {
        assert_eq!(implicit.next(), explicit.next());
    }
}

#[test]
fn different_seeds_differ() {
    let mut a = L64X128MixRandom::new(1);
    let mut b = L64X128MixRandom::new(2);
    assert_ne!(a, b);
    assert_ne!(a.next(), b.next());
}

// ============================================================================
// Discard
// ============================================================================

#[test]
fn discard_equals_repeated_next() {
    for n in [0u64, 1, 2, 3, 17, 100] {
        let mut skipped = L64X128MixRandom::new(7);
        let mut stepped = L64X128MixRandom::new(7);

        skipped.discard(n);
        let mut last = stepped.next();
        for _ in 0..n {
            last = stepped.next();
        }

        assert_eq!(skipped.next(), last, "discard({}) diverged", n);
    }
}

#[test]
fn discard_three_then_next_matches_reference() {
    let mut rng = L64X128MixRandom::new(7);
    rng.discard(3);
    assert_eq!(rng.next(), 0x5d6d615218ab72d8);
}

#[test]
fn discard_zero_is_a_no_op() {
    let mut rng = L64X128MixRandom::new(99);
    let before = rng;
    rng.discard(0);
    assert_eq!(rng, before);
}

// ============================================================================
// Equality & Construction Invariants
// ============================================================================

#[test]
fn raw_word_instances_stay_equal_in_lockstep() {
    let mut a = L64X128MixRandom::from_state_words(11, 22, 33, 44);
    let mut b = L64X128MixRandom::from_state_words(11, 22, 33, 44);
    assert_eq!(a, b);
    for _ in 0..500 {
        assert_eq!(a.next(), b.next());
        assert_eq!(a, b);
    }
}

#[test]
fn additive_parameter_odd_after_every_construction_path() {
    let from_seed = L64X128MixRandom::new(1234);
    let from_default = L64X128MixRandom::default();
    let from_raw = L64X128MixRandom::from_state_words(0x4000, 1, 2, 3);

    for rng in [from_seed, from_default, from_raw] {
        let (a, ..) = rng.state_words();
        assert_eq!(a & 1, 1, "even additive parameter leaked through");
    }
}

proptest! {
    #[test]
    fn xbg_state_never_degenerate(seed in any::<u64>()) {
        let (_, _, x0, x1) = L64X128MixRandom::new(seed).state_words();
        prop_assert!(x0 != 0 || x1 != 0);
    }

    #[test]
    fn discard_equivalence_holds_for_any_seed(seed in any::<u64>(), n in 0u64..64) {
        let mut skipped = L64X128MixRandom::new(seed);
        let mut stepped = L64X128MixRandom::new(seed);
        skipped.discard(n);
        for _ in 0..n {
            stepped.next();
        }
        prop_assert_eq!(skipped.next(), stepped.next());
    }
}
