//! vecadd: elementwise `f32` vector addition with error verification.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all vecadd sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use vecadd::prelude::*;
//!
//! let session = Session::new(RunConfig::new(1 << 10)).unwrap();
//! let report = session.run().unwrap();
//! assert_eq!(report.max_error(), 0.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `vecadd-core` | `RunConfig`, `ExecMode`, shared errors |
//! | [`arena`] | `vecadd-arena` | `Buffer`, `BufferPair` |
//! | [`kernel`] | `vecadd-kernel` | `Kernel` trait, `ElementwiseAdd`, verification |
//! | [`engine`] | `vecadd-engine` | `Session`, `RunReport`, `RunMetrics` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Run configuration and shared error types (`vecadd-core`).
pub use vecadd_core as types;

/// Owned buffers and the input/accumulator pair (`vecadd-arena`).
pub use vecadd_arena as arena;

/// Kernel trait, elementwise add, and verification scan (`vecadd-kernel`).
pub use vecadd_kernel as kernel;

/// Run orchestration (`vecadd-engine`).
pub use vecadd_engine as engine;

/// Common imports for typical vecadd usage.
///
/// ```rust
/// use vecadd::prelude::*;
/// ```
pub mod prelude {
    pub use vecadd_arena::{ArenaError, BufferPair};
    pub use vecadd_core::{ConfigError, ExecMode, KernelError, RunConfig};
    pub use vecadd_engine::{RunError, RunMetrics, RunReport, Session};
    pub use vecadd_kernel::{max_abs_error, verify, ElementwiseAdd, Kernel, Verification};
}
