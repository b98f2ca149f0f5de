//! Per-run performance metrics.
//!
//! [`RunMetrics`] captures timing and memory data for a single run. It is
//! logged by the session and returned in the report; it never reaches
//! stdout.

/// Timing and memory metrics collected during a single run.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default)]
pub struct RunMetrics {
    /// Wall-clock time for the whole run, in microseconds.
    pub total_us: u64,
    /// Time spent allocating and filling the buffers, in microseconds.
    pub init_us: u64,
    /// Per-kernel execution times in run order: `(name, microseconds)`.
    pub kernel_us: Vec<(String, u64)>,
    /// Time spent in the verification scan, in microseconds.
    pub verify_us: u64,
    /// Memory held by both buffers during the run, in bytes.
    pub memory_bytes: usize,
}

impl RunMetrics {
    /// Sum of all kernel execution times, in microseconds.
    pub fn kernels_total_us(&self) -> u64 {
        self.kernel_us.iter().map(|(_, us)| us).sum()
    }
}
