//! Reusable kernel test fixtures.
//!
//! - [`ConstKernel`]: overwrites the accumulator with a constant.
//! - [`FailingKernel`]: writes its call index, then fails once its step
//!   budget runs out.

use std::sync::atomic::{AtomicUsize, Ordering};

use vecadd_arena::BufferPair;
use vecadd_core::KernelError;
use vecadd_kernel::Kernel;

/// Writes a constant value to every accumulator element.
///
/// Useful for checking that the engine runs kernels in order and that
/// verification sees the last kernel's output.
pub struct ConstKernel {
    pub name: String,
    pub value: f32,
}

impl ConstKernel {
    pub fn new(name: impl Into<String>, value: f32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Kernel for ConstKernel {
    fn name(&self) -> &str {
        &self.name
    }

    fn step(&self, pair: &mut BufferPair) -> Result<(), KernelError> {
        let (_, y) = pair.split_mut();
        y.fill(self.value);
        Ok(())
    }
}

/// Stamps the accumulator with its call index for `succeed_count` steps,
/// then returns [`KernelError::ExecutionFailed`] on every later step.
///
/// The call counter is atomic because `Kernel::step` takes `&self`.
pub struct FailingKernel {
    pub name: String,
    pub succeed_count: usize,
    call_count: AtomicUsize,
}

impl FailingKernel {
    /// Create a kernel that succeeds `succeed_count` times then fails.
    pub fn new(name: impl Into<String>, succeed_count: usize) -> Self {
        Self {
            name: name.into(),
            succeed_count,
            call_count: AtomicUsize::new(0),
        }
    }

    /// How many times `step()` has been called.
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl Kernel for FailingKernel {
    fn name(&self) -> &str {
        &self.name
    }

    fn step(&self, pair: &mut BufferPair) -> Result<(), KernelError> {
        let n = self.call_count.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            return Err(KernelError::ExecutionFailed {
                reason: format!("step budget of {} exhausted", self.succeed_count),
            });
        }
        // y[i] = call index, so a caller can tell which step wrote last.
        let (_, y) = pair.split_mut();
        y.fill(n as f32);
        Ok(())
    }
}
