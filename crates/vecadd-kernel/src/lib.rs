//! Kernel trait, elementwise add, and verification scan for vecadd.
//!
//! A run applies one or more [`Kernel`]s to a [`BufferPair`](vecadd_arena::BufferPair)
//! and then checks the accumulator with [`verify()`]:
//!
//! 1. [`ElementwiseAdd`]: `y[i] = x[i] + y[i]` for every index.
//! 2. [`verify()`]: `max_i |y[i] - expected|`, plus the worst index and a
//!    non-finite count.
//!
//! Both operations run either serially or on the rayon pool, selected by
//! [`ExecMode`](vecadd_core::ExecMode). The results are identical.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod add;
pub mod kernel;
pub mod verify;

pub use add::ElementwiseAdd;
pub use kernel::Kernel;
pub use verify::{max_abs_error, verify, Verification};
