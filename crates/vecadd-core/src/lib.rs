//! Core types for the vecadd workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! run configuration, the execution mode, the compile-time defaults, and
//! the error types shared by the kernel and engine crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;

pub use config::{ConfigError, ExecMode, RunConfig};
pub use error::KernelError;
