#[cfg(not(feature = "portable-atomic"))]
pub(crate) use alloc::sync::Arc;
#[cfg(feature = "portable-atomic")]
pub(crate) use portable_atomic_util::Arc;

/// Element transfer strategy used by `enqueue_with` and `dequeue_with`.
///
/// Called with `dst` and `src` of equal length: the payload of the element being moved.
pub type CopyFn = fn(dst: &mut [u8], src: &[u8]);

/// Default [`CopyFn`]: plain byte copy.
#[inline]
pub fn copy_bytes(dst: &mut [u8], src: &[u8]) {
    dst.copy_from_slice(src);
}
