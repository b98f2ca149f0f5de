//! Verification scan over the accumulator.
//!
//! Computes the maximum absolute deviation of a buffer from an expected
//! constant. NaN elements are skipped by the max (matching `fmax`) but are
//! counted in [`Verification::non_finite`], so a corrupted buffer never
//! reports a clean result through [`Verification::passed`].

use rayon::prelude::*;
use vecadd_core::ExecMode;

/// Outcome of a verification scan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Verification {
    /// Number of elements scanned.
    pub len: usize,
    /// `max_i |values[i] - expected|` over non-NaN elements; 0.0 when empty.
    pub max_error: f32,
    /// First index attaining `max_error`, or `None` if nothing was compared.
    pub worst_index: Option<usize>,
    /// Number of NaN or infinite elements.
    pub non_finite: usize,
}

impl Verification {
    /// Whether every element is finite and within `tolerance` of the
    /// expected value.
    pub fn passed(&self, tolerance: f32) -> bool {
        self.non_finite == 0 && self.max_error <= tolerance
    }
}

/// Running state of the reduction. Associative, so it can be split
/// across rayon jobs and merged in any grouping.
#[derive(Clone, Copy, Debug)]
struct Scan {
    max_error: f32,
    worst_index: Option<usize>,
    non_finite: usize,
}

impl Scan {
    const EMPTY: Self = Self {
        max_error: 0.0,
        worst_index: None,
        non_finite: 0,
    };

    fn observe(mut self, index: usize, value: f32, expected: f32) -> Self {
        if !value.is_finite() {
            self.non_finite += 1;
        }
        let err = (value - expected).abs();
        if err.is_nan() {
            return self;
        }
        if self.worst_index.is_none() || err > self.max_error {
            self.max_error = err;
            self.worst_index = Some(index);
        }
        self
    }

    fn merge(self, other: Self) -> Self {
        let non_finite = self.non_finite + other.non_finite;
        let pick_other = match (self.worst_index, other.worst_index) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(a), Some(b)) => {
                other.max_error > self.max_error || (other.max_error == self.max_error && b < a)
            }
        };
        let best = if pick_other { other } else { self };
        Self {
            max_error: best.max_error,
            worst_index: best.worst_index,
            non_finite,
        }
    }
}

/// Scan `values` against `expected`.
///
/// Serial and parallel modes return identical results, including the
/// choice of `worst_index` when several elements tie.
pub fn verify(values: &[f32], expected: f32, mode: ExecMode) -> Verification {
    let scan = match mode {
        ExecMode::Serial => values
            .iter()
            .enumerate()
            .fold(Scan::EMPTY, |acc, (i, &v)| acc.observe(i, v, expected)),
        ExecMode::Parallel => values
            .par_iter()
            .enumerate()
            .fold(|| Scan::EMPTY, |acc, (i, &v)| acc.observe(i, v, expected))
            .reduce(|| Scan::EMPTY, Scan::merge),
    };
    Verification {
        len: values.len(),
        max_error: scan.max_error,
        worst_index: scan.worst_index,
        non_finite: scan.non_finite,
    }
}

/// `max_i |values[i] - expected|`, or 0.0 for an empty slice.
pub fn max_abs_error(values: &[f32], expected: f32) -> f32 {
    verify(values, expected, ExecMode::Serial).max_error
}
