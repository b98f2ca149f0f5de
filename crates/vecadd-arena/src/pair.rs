//! The input/accumulator buffer pair.
//!
//! [`BufferPair`] is the whole working set of a run. Both buffers are
//! created by the same constructor from the same length, and neither can
//! be taken out or resized, so every index valid for `x` is valid for `y`.

use vecadd_core::RunConfig;

use crate::buffer::Buffer;
use crate::error::ArenaError;

/// Two equal-length `f32` buffers: the input `x` and the accumulator `y`.
///
/// Kernels read `x` and mutate `y` through [`split_mut()`](BufferPair::split_mut),
/// which hands out both views in a single borrow.
#[derive(Clone, Debug, PartialEq)]
pub struct BufferPair {
    x: Buffer,
    y: Buffer,
}

impl BufferPair {
    /// Allocate both buffers with `len` elements and fill them.
    ///
    /// # Errors
    ///
    /// Returns the first [`ArenaError`] hit while allocating `x` or `y`.
    /// If `y` fails, `x` is released before returning.
    pub fn new(len: usize, x_fill: f32, y_fill: f32) -> Result<Self, ArenaError> {
        let x = Buffer::filled(len, x_fill)?;
        let y = Buffer::filled(len, y_fill)?;
        Ok(Self { x, y })
    }

    /// Allocate and fill both buffers as described by `config`.
    pub fn from_config(config: &RunConfig) -> Result<Self, ArenaError> {
        Self::new(config.len, config.x_fill, config.y_fill)
    }

    /// Build a pair from existing data.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::LengthMismatch`] if the vectors differ in length.
    pub fn from_vecs(x: Vec<f32>, y: Vec<f32>) -> Result<Self, ArenaError> {
        if x.len() != y.len() {
            return Err(ArenaError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self {
            x: Buffer::from_vec(x),
            y: Buffer::from_vec(y),
        })
    }

    /// Re-initialize both buffers in place without reallocating.
    pub fn refill(&mut self, x_fill: f32, y_fill: f32) {
        self.x.fill(x_fill);
        self.y.fill(y_fill);
    }

    /// The input buffer.
    pub fn x(&self) -> &[f32] {
        self.x.as_slice()
    }

    /// The accumulator buffer.
    pub fn y(&self) -> &[f32] {
        self.y.as_slice()
    }

    /// Shared input and exclusive accumulator, borrowed together.
    ///
    /// Both slices have length [`len()`](BufferPair::len).
    pub fn split_mut(&mut self) -> (&[f32], &mut [f32]) {
        (self.x.as_slice(), self.y.as_mut_slice())
    }

    /// Number of elements in each buffer.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether both buffers are empty.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Memory usage of both buffers in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.x.memory_bytes() + self.y.memory_bytes()
    }

    /// Consume the pair, returning `(x, y)`.
    pub fn into_vecs(self) -> (Vec<f32>, Vec<f32>) {
        (self.x.into_vec(), self.y.into_vec())
    }
}
