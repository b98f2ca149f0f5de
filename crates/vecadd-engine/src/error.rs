//! Errors surfaced by a [`Session`](crate::Session) run.

use std::error::Error;
use std::fmt;

use vecadd_arena::ArenaError;
use vecadd_core::{ConfigError, KernelError};

/// Errors that terminate a run.
#[derive(Clone, Debug, PartialEq)]
pub enum RunError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// The working buffers could not be allocated.
    Allocation(ArenaError),
    /// A kernel returned an error; the run was abandoned.
    KernelFailed {
        /// Name of the failing kernel.
        name: String,
        /// The underlying kernel error.
        reason: KernelError,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Allocation(e) => write!(f, "cannot allocate working set: {e}"),
            Self::KernelFailed { name, reason } => {
                write!(f, "kernel '{name}' failed: {reason}")
            }
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Allocation(e) => Some(e),
            Self::KernelFailed { reason, .. } => Some(reason),
        }
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ArenaError> for RunError {
    fn from(e: ArenaError) -> Self {
        Self::Allocation(e)
    }
}
