use crate::{error::BuildError, utils::CopyFn};
use alloc::{boxed::Box, collections::TryReserveError, vec::Vec};
use core::{cell::UnsafeCell, num::NonZeroUsize, slice};

/// Slot arena.
///
/// All slots share one contiguous byte allocation of `capacity * element_size` bytes.
/// Slot `i` covers bytes `i * element_size..(i + 1) * element_size`, its payload length is kept in a parallel size table.
///
/// Storage does not track which slots are in use, that is the job of the ring indices.
pub struct Slots {
    element_size: usize,
    data: Box<[UnsafeCell<u8>]>,
    sizes: Box<[UnsafeCell<usize>]>,
}

unsafe impl Sync for Slots {}

fn try_alloc<T>(len: usize, init: impl FnMut() -> T) -> Result<Box<[T]>, TryReserveError> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(len)?;
    vec.resize_with(len, init);
    Ok(vec.into_boxed_slice())
}

impl Slots {
    /// Allocates `capacity` zero-filled slots of `element_size` bytes each.
    pub fn new(element_size: usize, capacity: NonZeroUsize) -> Result<Self, BuildError> {
        let len = capacity.get().checked_mul(element_size).ok_or(BuildError::CapacityOverflow {
            slots: capacity.get(),
            element_size,
        })?;
        let data = try_alloc(len, || UnsafeCell::new(0))?;
        let sizes = try_alloc(capacity.get(), || UnsafeCell::new(0))?;
        Ok(Self { element_size, data, sizes })
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn element_size(&self) -> usize {
        self.element_size
    }

    #[inline]
    fn slot_ptr(&self, index: usize) -> *mut u8 {
        assert!(index < self.len());
        // Arena is empty when `element_size` is zero, offset is zero then.
        UnsafeCell::raw_get(self.data.as_ptr().wrapping_add(index * self.element_size))
    }

    /// Payload currently recorded in slot `index`.
    ///
    /// # Safety
    ///
    /// Nobody may write to the slot while the returned slice is alive.
    pub unsafe fn get(&self, index: usize) -> &[u8] {
        let size = *self.sizes[index].get();
        slice::from_raw_parts(self.slot_ptr(index), size)
    }

    /// Copies `elem` into slot `index` through `copy` and records its length.
    ///
    /// # Safety
    ///
    /// Caller must have exclusive access to the slot.
    ///
    /// *Panics if `elem` is longer than the slot.*
    pub unsafe fn put(&self, index: usize, elem: &[u8], copy: CopyFn) {
        assert!(
            elem.len() <= self.element_size,
            "element of {} bytes does not fit into a {}-byte slot",
            elem.len(),
            self.element_size
        );
        let dst = slice::from_raw_parts_mut(self.slot_ptr(index), elem.len());
        copy(dst, elem);
        *self.sizes[index].get() = elem.len();
    }

    /// Forgets recorded payload sizes of all slots.
    ///
    /// # Safety
    ///
    /// Caller must have exclusive access to every slot.
    pub unsafe fn reset(&self) {
        for size in self.sizes.iter() {
            *size.get() = 0;
        }
    }
}
