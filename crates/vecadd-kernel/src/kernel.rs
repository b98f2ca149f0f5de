//! The [`Kernel`] trait.

use vecadd_arena::BufferPair;
use vecadd_core::KernelError;

/// An in-place operation on a [`BufferPair`].
///
/// # Contract
///
/// - `step()` reads `x` and may only mutate `y`; the pair's
///   [`split_mut()`](BufferPair::split_mut) enforces this.
/// - `&self`: kernels are stateless. Every effect lives in the buffers.
/// - `step()` must be deterministic for a given pair.
///
/// # Object safety
///
/// This trait is object-safe; the engine stores kernels as
/// `Vec<Box<dyn Kernel>>`.
///
/// # Examples
///
/// A kernel that scales the accumulator:
///
/// ```
/// use vecadd_arena::BufferPair;
/// use vecadd_core::KernelError;
/// use vecadd_kernel::Kernel;
///
/// struct Scale(f32);
///
/// impl Kernel for Scale {
///     fn name(&self) -> &str { "scale" }
///
///     fn step(&self, pair: &mut BufferPair) -> Result<(), KernelError> {
///         let (_, y) = pair.split_mut();
///         y.iter_mut().for_each(|v| *v *= self.0);
///         Ok(())
///     }
/// }
///
/// let mut pair = BufferPair::new(3, 1.0, 2.0).unwrap();
/// Scale(0.5).step(&mut pair).unwrap();
/// assert_eq!(pair.y(), &[1.0, 1.0, 1.0]);
/// ```
pub trait Kernel: Send + 'static {
    /// Human-readable name for error reporting and metrics.
    fn name(&self) -> &str;

    /// Apply the kernel to `pair` once.
    fn step(&self, pair: &mut BufferPair) -> Result<(), KernelError>;
}
