//! Run configuration parameters.
//!
//! [`RunConfig`] carries the buffer length, the fill constants, the value
//! the accumulator must hold after one add, and the [`ExecMode`]. The
//! binary only ever uses [`RunConfig::default()`]; there is no runtime
//! configuration surface.

use std::error::Error;
use std::fmt;

/// How elementwise loops are executed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecMode {
    /// Plain sequential loop on the calling thread.
    #[default]
    Serial,
    /// Data-parallel loop on the global rayon pool.
    ///
    /// Produces bit-identical buffers to [`ExecMode::Serial`]: every index
    /// is computed independently.
    Parallel,
}

impl fmt::Display for ExecMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serial => write!(f, "serial"),
            Self::Parallel => write!(f, "parallel"),
        }
    }
}

/// Configuration for a single vecadd run.
///
/// All values are fixed before the run starts and never change during it.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Number of elements in each buffer.
    ///
    /// Default: 1_048_576 (`1 << 20`).
    pub len: usize,

    /// Value every element of the input buffer `x` is set to.
    pub x_fill: f32,

    /// Value every element of the accumulator buffer `y` is set to.
    pub y_fill: f32,

    /// Value every accumulator element must hold after a single add.
    pub expected: f32,

    /// Execution strategy for the add and the verification scan.
    pub exec_mode: ExecMode,
}

impl RunConfig {
    /// Default buffer length: 1M elements.
    pub const DEFAULT_LEN: usize = 1 << 20;

    /// Default input fill.
    pub const DEFAULT_X_FILL: f32 = 1.0;

    /// Default accumulator fill.
    pub const DEFAULT_Y_FILL: f32 = 2.0;

    /// Default expected accumulator value after one add.
    pub const DEFAULT_EXPECTED: f32 = 3.0;

    /// Create a config for the given buffer length.
    ///
    /// Uses default values for all other parameters.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            x_fill: Self::DEFAULT_X_FILL,
            y_fill: Self::DEFAULT_Y_FILL,
            expected: Self::DEFAULT_EXPECTED,
            exec_mode: ExecMode::Serial,
        }
    }

    /// Return a copy of this config with a different execution mode.
    pub fn with_exec_mode(mut self, exec_mode: ExecMode) -> Self {
        self.exec_mode = exec_mode;
        self
    }

    /// Value every accumulator element holds after `adds` applications
    /// of the elementwise add, starting from a fresh initialization.
    pub fn expected_after(&self, adds: u32) -> f32 {
        self.y_fill + adds as f32 * self.x_fill
    }

    /// Total bytes needed for both buffers, or `None` on overflow.
    pub fn buffer_bytes(&self) -> Option<usize> {
        self.len
            .checked_mul(std::mem::size_of::<f32>())?
            .checked_mul(2)
    }

    /// Check that every numeric parameter is finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("x_fill", self.x_fill),
            ("y_fill", self.y_fill),
            ("expected", self.expected),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEN)
    }
}

/// Errors detected by [`RunConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A fill or expected value is NaN or infinite.
    NonFinite {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}
