//! Elementwise accumulation of the input buffer into the accumulator.
//!
//! # Semantics
//!
//! - Reads every element of `x`, writes every element of `y`.
//! - `y[i] = x[i] + y[i]`, each index exactly once per step.
//! - Indices are independent, so iteration order (and parallel splitting)
//!   has no effect on the result.
//!
//! The step is stateful: applying it twice to a freshly initialized pair
//! (x = 1.0, y = 2.0) leaves y = 4.0, not 3.0.
//!
//! # Construction
//!
//! ```
//! use vecadd_arena::BufferPair;
//! use vecadd_core::ExecMode;
//! use vecadd_kernel::{ElementwiseAdd, Kernel};
//!
//! let mut pair = BufferPair::new(5, 1.0, 2.0).unwrap();
//! ElementwiseAdd::new(ExecMode::Serial).step(&mut pair).unwrap();
//! assert_eq!(pair.y(), &[3.0; 5]);
//! ```

use rayon::prelude::*;
use vecadd_arena::BufferPair;
use vecadd_core::{ExecMode, KernelError};

use crate::kernel::Kernel;

/// Adds the input buffer into the accumulator, elementwise.
///
/// Cannot fail: `step()` always returns `Ok(())`. Out-of-bounds access is
/// impossible because both slices come from the same [`BufferPair`] and
/// are walked with a zipped iterator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElementwiseAdd {
    mode: ExecMode,
}

impl ElementwiseAdd {
    /// Create an add kernel running in the given mode.
    pub fn new(mode: ExecMode) -> Self {
        Self { mode }
    }

    /// The configured execution mode.
    pub fn mode(&self) -> ExecMode {
        self.mode
    }

    /// Apply the add directly, without going through the trait.
    pub fn apply(&self, pair: &mut BufferPair) {
        let (x, y) = pair.split_mut();
        match self.mode {
            ExecMode::Serial => add_serial(x, y),
            ExecMode::Parallel => add_parallel(x, y),
        }
    }
}

fn add_serial(x: &[f32], y: &mut [f32]) {
    for (yi, &xi) in y.iter_mut().zip(x) {
        *yi += xi;
    }
}

fn add_parallel(x: &[f32], y: &mut [f32]) {
    y.par_iter_mut().zip(x.par_iter()).for_each(|(yi, &xi)| {
        *yi += xi;
    });
}

impl Kernel for ElementwiseAdd {
    fn name(&self) -> &str {
        "ElementwiseAdd"
    }

    fn step(&self, pair: &mut BufferPair) -> Result<(), KernelError> {
        self.apply(pair);
        Ok(())
    }
}
