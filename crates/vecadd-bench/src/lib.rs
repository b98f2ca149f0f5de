//! Benchmark profiles for vecadd.
//!
//! - [`reference_profile`]: 1M elements, the binary's default working set
//! - [`stress_profile`]: 16M elements (128MB across both buffers)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use vecadd_core::{ExecMode, RunConfig};

/// Element count of the stress profile.
pub const STRESS_LEN: usize = 1 << 24;

/// The default run: 1M elements, x = 1.0, y = 2.0.
pub fn reference_profile(mode: ExecMode) -> RunConfig {
    RunConfig::default().with_exec_mode(mode)
}

/// Same fills as [`reference_profile`] at 16x the element count.
pub fn stress_profile(mode: ExecMode) -> RunConfig {
    RunConfig::new(STRESS_LEN).with_exec_mode(mode)
}
