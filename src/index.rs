//! Capacity and index arithmetic shared by all ring flavors.
//!
//! Capacity is always a power of two, so wrapping an index is a single mask with `capacity - 1`.
//! Indices live in `0..capacity`. One slot is never filled: `read == write` means empty and
//! `next_index(write) == read` means full.

#[cfg(not(feature = "portable-atomic"))]
use core::sync::atomic::{AtomicUsize, Ordering};
use core::num::NonZeroUsize;
use crossbeam_utils::CachePadded;
#[cfg(feature = "portable-atomic")]
use portable_atomic::{AtomicUsize, Ordering};

/// Smallest power of two that is greater than or equal to `n`.
///
/// Returns `None` if `n` is zero or the result does not fit into `usize`.
pub fn round_up_pow2(n: usize) -> Option<NonZeroUsize> {
    if n == 0 {
        return None;
    }
    n.checked_next_power_of_two().and_then(NonZeroUsize::new)
}

/// Index that follows `index` in a ring of `capacity` slots.
#[inline]
pub fn next_index(capacity: NonZeroUsize, index: usize) -> usize {
    debug_assert!(capacity.is_power_of_two());
    (index + 1) & (capacity.get() - 1)
}

/// Number of occupied slots between `read` and `write`.
#[inline]
pub fn occupied(capacity: NonZeroUsize, read: usize, write: usize) -> usize {
    if write >= read {
        write - read
    } else {
        capacity.get() - read + write
    }
}

/// Index published by one side of the ring and observed by the other.
///
/// Stores are `Release` and loads are `Acquire`: everything the owner wrote to a slot before moving the index
/// is visible to whoever loads the new value.
#[derive(Default)]
pub(crate) struct SharedIndex {
    value: CachePadded<AtomicUsize>,
}

impl SharedIndex {
    #[inline]
    pub fn get(&self) -> usize {
        self.value.load(Ordering::Acquire)
    }
    #[inline]
    pub fn set(&self, value: usize) {
        self.value.store(value, Ordering::Release);
    }
}
