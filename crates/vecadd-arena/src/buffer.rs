//! A single owned, fixed-length `f32` buffer.
//!
//! A [`Buffer`] is allocated to its full length at creation and never
//! grows or shrinks. Allocation goes through `Vec::try_reserve_exact`
//! so that an out-of-memory condition is reported as an error.

use crate::error::ArenaError;

/// Contiguous, fixed-length `f32` storage.
///
/// The length is set at construction and is immutable for the lifetime of
/// the buffer. Contents may be overwritten in place with [`fill`](Buffer::fill)
/// or through [`as_mut_slice`](Buffer::as_mut_slice).
#[derive(Clone, Debug, PartialEq)]
pub struct Buffer {
    data: Box<[f32]>,
}

impl Buffer {
    /// Allocate a buffer of `len` elements, every one set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::LengthOverflow`] if `len` f32 elements cannot
    /// be addressed, or [`ArenaError::AllocationFailed`] if the allocator
    /// refuses the request.
    pub fn filled(len: usize, value: f32) -> Result<Self, ArenaError> {
        let requested_bytes = len
            .checked_mul(std::mem::size_of::<f32>())
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .ok_or(ArenaError::LengthOverflow { len })?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| ArenaError::AllocationFailed { requested_bytes })?;
        data.resize(len, value);
        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }

    /// Take ownership of existing data as a buffer.
    pub fn from_vec(data: Vec<f32>) -> Self {
        Self {
            data: data.into_boxed_slice(),
        }
    }

    /// Overwrite every element with `value` without reallocating.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Shared view of the contents.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable view of the contents. The length cannot change through it.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds zero elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<f32>()
    }

    /// Consume the buffer, returning its contents.
    pub fn into_vec(self) -> Vec<f32> {
        self.data.into_vec()
    }
}
