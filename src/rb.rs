use crate::{
    error::BuildError,
    index::{next_index, round_up_pow2, SharedIndex},
    storage::Slots,
    utils::CopyFn,
};
use core::num::NonZeroUsize;

/// Slot ring shared between one producer and one consumer.
///
/// The producer owns `write_index`, the consumer owns `read_index`. Each side only stores to its own index and
/// only loads the other one, so no read-modify-write operations are needed.
///
/// Methods that touch slots are unsafe: at most one thread may act as producer and at most one as consumer at a time.
/// Safe access goes through [`Prod`](crate::Prod) and [`Cons`](crate::Cons).
pub struct SlotRb {
    slots: Slots,
    capacity: NonZeroUsize,
    read_index: SharedIndex,
    write_index: SharedIndex,
}

impl SlotRb {
    /// Allocates a ring of `requested.next_power_of_two()` slots of `element_size` bytes.
    pub fn new(element_size: usize, requested: usize) -> Result<Self, BuildError> {
        let result = Self::allocate(element_size, requested);
        match &result {
            Ok(rb) => tracing::debug!(
                requested,
                capacity = rb.capacity.get(),
                element_size,
                "slot ring allocated"
            ),
            Err(err) => tracing::warn!(requested, element_size, error = %err, "slot ring rejected"),
        }
        result
    }

    fn allocate(element_size: usize, requested: usize) -> Result<Self, BuildError> {
        let capacity = match round_up_pow2(requested) {
            Some(capacity) => capacity,
            None if requested == 0 => return Err(BuildError::ZeroCapacity),
            None => {
                return Err(BuildError::CapacityOverflow {
                    slots: requested,
                    element_size,
                })
            }
        };
        Ok(Self {
            slots: Slots::new(element_size, capacity)?,
            capacity,
            read_index: SharedIndex::default(),
            write_index: SharedIndex::default(),
        })
    }

    #[inline]
    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }
    #[inline]
    pub fn element_size(&self) -> usize {
        self.slots.element_size()
    }

    #[inline]
    pub fn read_index(&self) -> usize {
        self.read_index.get()
    }
    #[inline]
    pub fn write_index(&self) -> usize {
        self.write_index.get()
    }

    /// Copies `elem` into the slot at the write index and publishes it.
    ///
    /// Returns `false` without touching anything if the ring is full.
    ///
    /// # Safety
    ///
    /// Must not be called concurrently with another `push` or with `reset`.
    pub unsafe fn push(&self, elem: &[u8], copy: CopyFn) -> bool {
        let write = self.write_index.get();
        let next = next_index(self.capacity, write);
        if next == self.read_index.get() {
            return false;
        }
        self.slots.put(write, elem, copy);
        self.write_index.set(next);
        true
    }

    /// Moves the front element into `out` (or drops it if `out` is `None`) and releases its slot.
    ///
    /// Returns the payload size of the removed element or `None` if the ring is empty.
    ///
    /// # Safety
    ///
    /// Must not be called concurrently with another `pop`, `front` or `reset`.
    ///
    /// *Panics if `out` is shorter than the payload.*
    pub unsafe fn pop(&self, out: Option<&mut [u8]>, copy: CopyFn) -> Option<usize> {
        let read = self.read_index.get();
        if read == self.write_index.get() {
            return None;
        }
        let payload = self.slots.get(read);
        let size = payload.len();
        if let Some(out) = out {
            assert!(
                out.len() >= size,
                "output of {} bytes cannot hold a {}-byte element",
                out.len(),
                size
            );
            copy(&mut out[..size], payload);
        }
        self.read_index.set(next_index(self.capacity, read));
        Some(size)
    }

    /// Payload of the front element.
    ///
    /// # Safety
    ///
    /// The slice must be dropped before the next `pop` or `reset`.
    pub unsafe fn front(&self) -> Option<&[u8]> {
        let read = self.read_index.get();
        if read == self.write_index.get() {
            None
        } else {
            Some(self.slots.get(read))
        }
    }

    /// Drops all elements and rewinds both indices to the first slot.
    ///
    /// # Safety
    ///
    /// Caller must hold both producer and consumer roles.
    pub unsafe fn reset(&self) {
        self.slots.reset();
        self.read_index.set(0);
        self.write_index.set(0);
    }
}
