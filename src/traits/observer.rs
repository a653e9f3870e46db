use super::utils::ConsOwner;
use crate::index::{next_index, occupied};
use core::num::NonZeroUsize;

/// Ring buffer observer.
///
/// Can observe ring buffer state but cannot access its slots.
pub trait Observer {
    /// Total number of slots, including the one that is never filled.
    ///
    /// Always a power of two and constant during the whole ring buffer lifetime.
    fn capacity(&self) -> NonZeroUsize;

    /// Size of a single slot in bytes.
    fn element_size(&self) -> usize;

    /// Index of the front slot (next to be dequeued).
    ///
    /// Index value is in range `0..capacity`.
    fn read_index(&self) -> usize;
    /// Index of the slot the next element will be written to.
    ///
    /// Index value is in range `0..capacity`.
    fn write_index(&self) -> usize;

    /// The number of elements stored in the buffer.
    ///
    /// *Exact only for the producer right after its own enqueue or for the consumer right after its own dequeue.
    /// Other observers may get a stale value.*
    fn count(&self) -> usize {
        occupied(self.capacity(), self.read_index(), self.write_index())
    }

    /// The number of elements that can still be enqueued.
    ///
    /// *Actual number may be greater or less than returned value due to concurring activity of consumer or producer respectively.*
    fn vacant_len(&self) -> usize {
        self.capacity().get() - 1 - self.count()
    }

    /// Checks if the ring buffer is empty.
    ///
    /// *The result may become irrelevant at any time because of concurring producer activity.*
    #[inline]
    fn is_empty(&self) -> bool {
        self.read_index() == self.write_index()
    }

    /// Checks if the ring buffer is full.
    ///
    /// *The result may become irrelevant at any time because of concurring consumer activity.*
    #[inline]
    fn is_full(&self) -> bool {
        next_index(self.capacity(), self.write_index()) == self.read_index()
    }
}

/// Trait used for delegating observer methods to the owned consumer.
pub(crate) trait DelegateObserver: ConsOwner {}

impl<D: DelegateObserver> Observer for D {
    #[inline]
    fn capacity(&self) -> NonZeroUsize {
        self.cons().capacity()
    }
    #[inline]
    fn element_size(&self) -> usize {
        self.cons().element_size()
    }

    #[inline]
    fn read_index(&self) -> usize {
        self.cons().read_index()
    }
    #[inline]
    fn write_index(&self) -> usize {
        self.cons().write_index()
    }

    #[inline]
    fn count(&self) -> usize {
        self.cons().count()
    }
    #[inline]
    fn vacant_len(&self) -> usize {
        self.cons().vacant_len()
    }
    #[inline]
    fn is_empty(&self) -> bool {
        self.cons().is_empty()
    }
    #[inline]
    fn is_full(&self) -> bool {
        self.cons().is_full()
    }
}
