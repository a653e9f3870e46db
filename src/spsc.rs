//! Lock-free single-producer/single-consumer ring.

use crate::{
    error::BuildError,
    rb::SlotRb,
    traits::{ConsOwner, Consumer, DelegateConsumer, DelegateObserver, Fifo, Observer, Producer},
    utils::{Arc, CopyFn},
};
use core::num::NonZeroUsize;

/// Write end of a slot ring.
///
/// There is exactly one producer per ring, so enqueueing needs no synchronization beyond publishing the write index.
pub struct Prod {
    rb: Arc<SlotRb>,
}

/// Read end of a slot ring.
pub struct Cons {
    rb: Arc<SlotRb>,
}

impl Prod {
    #[cfg(feature = "std")]
    pub(crate) fn rb(&self) -> &Arc<SlotRb> {
        &self.rb
    }
}

impl Cons {
    #[cfg(feature = "std")]
    pub(crate) fn rb(&self) -> &Arc<SlotRb> {
        &self.rb
    }
}

macro_rules! impl_observer {
    ($type:ident) => {
        impl Observer for $type {
            #[inline]
            fn capacity(&self) -> NonZeroUsize {
                self.rb.capacity()
            }
            #[inline]
            fn element_size(&self) -> usize {
                self.rb.element_size()
            }
            #[inline]
            fn read_index(&self) -> usize {
                self.rb.read_index()
            }
            #[inline]
            fn write_index(&self) -> usize {
                self.rb.write_index()
            }
        }
    };
}

impl_observer!(Prod);
impl_observer!(Cons);

impl Producer for Prod {
    #[inline]
    fn enqueue_with(&mut self, elem: &[u8], copy: CopyFn) -> bool {
        // `&mut self` on the only producer of the ring rules out concurrent pushes.
        unsafe { self.rb.push(elem, copy) }
    }
}

impl Consumer for Cons {
    #[inline]
    fn dequeue_with(&mut self, out: Option<&mut [u8]>, copy: CopyFn) -> Option<usize> {
        unsafe { self.rb.pop(out, copy) }
    }

    #[inline]
    fn peek(&self) -> Option<&[u8]> {
        // Slice borrows `self`, so it is gone before the next `dequeue`.
        unsafe { self.rb.front() }
    }
}

/// Lock-free SPSC ring owning both of its ends.
///
/// Use it directly from a single thread or [`split`](Self::split) it into a [`Prod`] and a [`Cons`]
/// that can be moved to different threads.
///
/// ```
/// use slotfifo::{traits::*, SpscFifo};
/// use std::thread;
///
/// let (mut prod, mut cons) = SpscFifo::new(8, 16).unwrap().split();
/// thread::spawn(move || {
///     assert!(prod.enqueue(&123u64.to_le_bytes()));
/// })
/// .join()
/// .unwrap();
///
/// let mut out = [0; 8];
/// assert_eq!(cons.dequeue(Some(&mut out)), Some(8));
/// assert_eq!(u64::from_le_bytes(out), 123);
/// ```
///
/// The owned consumer end cannot be swapped for one of another ring:
///
/// ```compile_fail
/// use slotfifo::{traits::*, SpscFifo};
///
/// let (_prod, cons) = SpscFifo::new(8, 8).unwrap().split();
/// let mut rb = SpscFifo::new(8, 8).unwrap();
/// core::mem::replace(rb.cons_mut(), cons);
/// ```
pub struct SpscFifo {
    prod: Prod,
    cons: Cons,
}

impl SpscFifo {
    /// Creates a ring of `capacity.next_power_of_two()` slots of `element_size` bytes, one of them kept vacant.
    ///
    /// All slot storage is allocated here, nothing is allocated afterwards.
    pub fn new(element_size: usize, capacity: usize) -> Result<Self, BuildError> {
        let rb = Arc::new(SlotRb::new(element_size, capacity)?);
        Ok(Self {
            prod: Prod { rb: rb.clone() },
            cons: Cons { rb },
        })
    }

    /// Splits the ring into producer and consumer.
    pub fn split(self) -> (Prod, Cons) {
        (self.prod, self.cons)
    }
}

impl ConsOwner for SpscFifo {
    fn cons(&self) -> &Cons {
        &self.cons
    }
    fn cons_mut(&mut self) -> &mut Cons {
        &mut self.cons
    }
}

impl DelegateObserver for SpscFifo {}
impl DelegateConsumer for SpscFifo {}

impl Producer for SpscFifo {
    #[inline]
    fn enqueue_with(&mut self, elem: &[u8], copy: CopyFn) -> bool {
        self.prod.enqueue_with(elem, copy)
    }
}

impl Fifo for SpscFifo {
    fn dispose(&mut self) {
        let dropped = self.cons.count();
        // Both ends are borrowed mutably here.
        unsafe { self.cons.rb.reset() };
        tracing::debug!(dropped, "slot ring disposed");
    }
}
