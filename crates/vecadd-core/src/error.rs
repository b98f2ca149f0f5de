//! Error types shared across the vecadd workspace.

use std::error::Error;
use std::fmt;

/// Errors from an individual kernel step.
///
/// Returned by `Kernel::step()` and wrapped in the engine's
/// `RunError::KernelFailed` together with the kernel name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KernelError {
    /// The kernel could not complete its step.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// A non-finite value was found in the kernel's output.
    ///
    /// For kernels that check what they wrote before returning. The
    /// built-in add does not; a run still counts non-finite elements in
    /// its verification scan.
    NonFinite {
        /// Index of the first non-finite element.
        index: usize,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExecutionFailed { reason } => write!(f, "execution failed: {reason}"),
            Self::NonFinite { index } => {
                write!(f, "non-finite value in output at index {index}")
            }
        }
    }
}

impl Error for KernelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_execution_failed() {
        let err = KernelError::ExecutionFailed {
            reason: "boom".into(),
        };
        assert_eq!(err.to_string(), "execution failed: boom");
    }

    #[test]
    fn display_non_finite_includes_index() {
        let err = KernelError::NonFinite { index: 17 };
        assert_eq!(err.to_string(), "non-finite value in output at index 17");
    }
}
