//! Owned, fixed-length `f32` buffers for vecadd runs.
//!
//! A run works on exactly two buffers of the same length: the read-only
//! input `x` and the accumulator `y`. Both are allocated together by
//! [`BufferPair`] so their lengths can never diverge.
//!
//! ```text
//! BufferPair
//! ├── x: Buffer (Box<[f32]>, read-only after init)
//! └── y: Buffer (Box<[f32]>, mutated in place by kernels)
//! ```
//!
//! Allocation is fallible: an out-of-memory condition surfaces as
//! [`ArenaError::AllocationFailed`] instead of aborting the process.
//! Memory is released when the pair is dropped.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod error;
pub mod pair;

pub use buffer::Buffer;
pub use error::ArenaError;
pub use pair::BufferPair;
