//! Run orchestration for vecadd.
//!
//! A [`Session`] executes the three phases of a run in order:
//!
//! 1. **Initialize**: allocate and fill the [`BufferPair`](vecadd_arena::BufferPair).
//! 2. **Apply**: run each [`Kernel`](vecadd_kernel::Kernel) once, in order.
//! 3. **Verify**: scan the accumulator against the expected value.
//!
//! The buffers are dropped when the run returns, on success and on error.
//! Each run is wrapped in a `tracing` span; phase timings are returned in
//! [`RunMetrics`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod metrics;
pub mod session;

pub use error::RunError;
pub use metrics::RunMetrics;
pub use session::{RunReport, Session};
