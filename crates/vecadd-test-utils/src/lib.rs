//! Test utilities and mock kernels for vecadd development.
//!
//! Provides deterministic random [`BufferPair`](vecadd_arena::BufferPair)s,
//! a proptest strategy over pairs, and mock [`Kernel`](vecadd_kernel::Kernel)
//! implementations for exercising the engine.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vecadd_arena::BufferPair;

pub use fixtures::{ConstKernel, FailingKernel};

/// Half-width of the value range used for random buffers.
///
/// Small enough that `x + y` is always finite and exact enough to compare
/// serial against parallel results bit-for-bit.
pub const VALUE_RANGE: f32 = 1000.0;

/// Build a pair of `len` elements with values drawn from a seeded ChaCha8 RNG.
///
/// The same `(len, seed)` always yields the same pair.
pub fn random_pair(len: usize, seed: u64) -> BufferPair {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let x: Vec<f32> = (0..len)
        .map(|_| rng.random_range(-VALUE_RANGE..VALUE_RANGE))
        .collect();
    let y: Vec<f32> = (0..len)
        .map(|_| rng.random_range(-VALUE_RANGE..VALUE_RANGE))
        .collect();
    BufferPair::from_vecs(x, y).expect("both vectors have len elements")
}

/// Strategy producing equal-length pairs of up to `max_len` finite elements.
pub fn arb_pair(max_len: usize) -> impl Strategy<Value = BufferPair> {
    (0..=max_len).prop_flat_map(|len| {
        let elem = -VALUE_RANGE..VALUE_RANGE;
        (
            proptest::collection::vec(elem.clone(), len),
            proptest::collection::vec(elem, len),
        )
            .prop_map(|(x, y)| {
                BufferPair::from_vecs(x, y).expect("strategy yields equal lengths")
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_pair_is_deterministic() {
        assert_eq!(random_pair(64, 7), random_pair(64, 7));
        assert_ne!(random_pair(64, 7), random_pair(64, 8));
    }

    #[test]
    fn random_pair_values_in_range() {
        let pair = random_pair(256, 1);
        assert_eq!(pair.len(), 256);
        assert!(pair
            .x()
            .iter()
            .chain(pair.y())
            .all(|v| v.abs() <= VALUE_RANGE));
    }
}
