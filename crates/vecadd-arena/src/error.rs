//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while allocating or assembling buffers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The allocator could not provide the requested memory.
    AllocationFailed {
        /// Number of bytes requested.
        requested_bytes: usize,
    },
    /// The requested element count does not fit in `usize` bytes.
    LengthOverflow {
        /// The requested element count.
        len: usize,
    },
    /// Two buffers with different lengths were offered as a pair.
    LengthMismatch {
        /// Length of the input buffer.
        x_len: usize,
        /// Length of the accumulator buffer.
        y_len: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested_bytes } => {
                write!(f, "buffer allocation failed: requested {requested_bytes} bytes")
            }
            Self::LengthOverflow { len } => {
                write!(f, "buffer length {len} overflows the address space")
            }
            Self::LengthMismatch { x_len, y_len } => {
                write!(f, "buffer length mismatch: x has {x_len} elements, y has {y_len}")
            }
        }
    }
}

impl Error for ArenaError {}
