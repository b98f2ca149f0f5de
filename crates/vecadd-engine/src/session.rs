//! A validated run configuration and the driver for its phases.
//!
//! [`Session`] owns nothing but its [`RunConfig`]. Each `run*` call
//! allocates a fresh [`BufferPair`], applies kernels, verifies, and drops
//! the buffers before returning, so runs are independent of each other.

use std::time::Instant;

use tracing::{debug, info, info_span, warn};
use vecadd_arena::BufferPair;
use vecadd_core::RunConfig;
use vecadd_kernel::{verify, ElementwiseAdd, Kernel, Verification};

use crate::error::RunError;
use crate::metrics::RunMetrics;

/// Result of a successful run.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Outcome of the verification scan.
    pub verification: Verification,
    /// Value the accumulator was checked against.
    pub expected: f32,
    /// Number of kernel steps applied.
    pub kernels_run: usize,
    /// Timing and memory for this run.
    pub metrics: RunMetrics,
}

impl RunReport {
    /// Maximum absolute deviation of the accumulator from `expected`.
    pub fn max_error(&self) -> f32 {
        self.verification.max_error
    }
}

/// Driver for vecadd runs.
///
/// # Example
///
/// ```
/// use vecadd_core::RunConfig;
/// use vecadd_engine::Session;
///
/// let session = Session::new(RunConfig::new(1024)).unwrap();
/// let report = session.run().unwrap();
/// assert_eq!(report.max_error(), 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    config: RunConfig,
}

impl Session {
    /// Validate `config` and create a session for it.
    pub fn new(config: RunConfig) -> Result<Self, RunError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration every run uses.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Initialize, add once, and verify against `config.expected`.
    pub fn run(&self) -> Result<RunReport, RunError> {
        let add: Box<dyn Kernel> = Box::new(ElementwiseAdd::new(self.config.exec_mode));
        self.run_with(&[add], self.config.expected)
    }

    /// Initialize, add `times` times, and verify against
    /// [`RunConfig::expected_after`]`(times)`.
    ///
    /// Each add accumulates again, so the expected value grows with `times`.
    /// The adds share one kernel and one metrics entry, so `times` costs no
    /// memory beyond the buffers.
    pub fn run_repeated(&self, times: u32) -> Result<RunReport, RunError> {
        let add = ElementwiseAdd::new(self.config.exec_mode);
        self.drive(self.config.expected_after(times), |pair, kernel_us| {
            let start = Instant::now();
            for _ in 0..times {
                add.apply(pair);
            }
            let us = start.elapsed().as_micros() as u64;
            debug!(kernel = add.name(), times, us, "kernel applied repeatedly");
            kernel_us.push((add.name().to_string(), us));
            Ok(times as usize)
        })
    }

    /// Initialize, apply `kernels` in order, and verify against `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Allocation`] if the buffers cannot be allocated
    /// and [`RunError::KernelFailed`] for the first kernel that fails. The
    /// buffers are released in both cases.
    pub fn run_with(
        &self,
        kernels: &[Box<dyn Kernel>],
        expected: f32,
    ) -> Result<RunReport, RunError> {
        self.drive(expected, |pair, kernel_us| {
            for kernel in kernels {
                let kernel_start = Instant::now();
                kernel
                    .step(pair)
                    .map_err(|reason| RunError::KernelFailed {
                        name: kernel.name().to_string(),
                        reason,
                    })?;
                let us = kernel_start.elapsed().as_micros() as u64;
                debug!(kernel = kernel.name(), us, "kernel applied");
                kernel_us.push((kernel.name().to_string(), us));
            }
            Ok(kernels.len())
        })
    }

    /// Initialize, hand the pair to `apply`, then verify against `expected`.
    ///
    /// `apply` records its timings in the vector it is given and returns
    /// the number of kernel steps it performed.
    fn drive<F>(&self, expected: f32, apply: F) -> Result<RunReport, RunError>
    where
        F: FnOnce(&mut BufferPair, &mut Vec<(String, u64)>) -> Result<usize, RunError>,
    {
        let config = &self.config;
        let span = info_span!("run", len = config.len, mode = %config.exec_mode);
        let _enter = span.enter();
        let run_start = Instant::now();

        let init_start = Instant::now();
        let mut pair = BufferPair::from_config(config).map_err(|e| {
            warn!(error = %e, "buffer allocation failed");
            RunError::from(e)
        })?;
        let init_us = init_start.elapsed().as_micros() as u64;
        debug!(
            init_us,
            memory_bytes = pair.memory_bytes(),
            x_fill = config.x_fill,
            y_fill = config.y_fill,
            "buffers initialized"
        );

        let mut kernel_us = Vec::new();
        let kernels_run = apply(&mut pair, &mut kernel_us)?;

        let verify_start = Instant::now();
        let verification = verify(pair.y(), expected, config.exec_mode);
        let verify_us = verify_start.elapsed().as_micros() as u64;
        if verification.non_finite > 0 {
            warn!(
                non_finite = verification.non_finite,
                "accumulator holds non-finite values"
            );
        }

        let metrics = RunMetrics {
            total_us: run_start.elapsed().as_micros() as u64,
            init_us,
            kernel_us,
            verify_us,
            memory_bytes: pair.memory_bytes(),
        };
        info!(
            max_error = verification.max_error,
            expected,
            total_us = metrics.total_us,
            "run complete"
        );

        Ok(RunReport {
            verification,
            expected,
            kernels_run,
            metrics,
        })
    }
}
