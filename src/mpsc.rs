//! Multi-producer/single-consumer ring.
//!
//! Producers are serialized by one mutex that owns the [`Prod`] end of a lock-free ring.
//! The consumer end is the plain [`Cons`], reads never touch the mutex.
//! There is still only one consumer: dequeueing requires `&mut Cons`.

use crate::{
    error::BuildError,
    rb::SlotRb,
    spsc::{Cons, Prod, SpscFifo},
    traits::{ConsOwner, DelegateConsumer, DelegateObserver, Fifo, MultiProducer, Observer, Producer},
    utils::{Arc, CopyFn},
};
use core::num::NonZeroUsize;
use parking_lot::Mutex;

/// Shared write end of an [`MpscFifo`].
///
/// Clone it to get one handle per producer thread. Enqueues from all clones are totally ordered by the guard,
/// so the consumer sees them in the order they were accepted.
#[derive(Clone)]
pub struct MpscProd {
    prod: Arc<Mutex<Prod>>,
    // Observer methods read the indices without taking the guard.
    rb: Arc<SlotRb>,
}

impl MpscProd {
    fn new(prod: Prod) -> Self {
        let rb = prod.rb().clone();
        Self {
            prod: Arc::new(Mutex::new(prod)),
            rb,
        }
    }

    #[cfg(test)]
    pub(crate) fn guard(&self) -> &Mutex<Prod> {
        &self.prod
    }
}

impl Observer for MpscProd {
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

impl Producer for MpscProd {
    /// Waits for the guard, then enqueues.
    ///
    /// The wait lasts at most as long as one enqueue of another producer.
    fn enqueue_with(&mut self, elem: &[u8], copy: CopyFn) -> bool {
        self.prod.lock().enqueue_with(elem, copy)
    }
}

impl MultiProducer for MpscProd {
    fn try_enqueue_with(&mut self, elem: &[u8], copy: CopyFn) -> bool {
        match self.prod.try_lock() {
            Some(mut prod) => prod.enqueue_with(elem, copy),
            None => {
                tracing::trace!("producer guard is busy");
                false
            }
        }
    }
}

/// MPSC ring owning its consumer and the guarded producer.
///
/// [`split`](Self::split) it to hand out producer clones to several threads and keep the consumer on one.
pub struct MpscFifo {
    cons: Cons,
    prod: MpscProd,
}

impl MpscFifo {
    /// Creates a ring of `capacity.next_power_of_two()` slots of `element_size` bytes, one of them kept vacant.
    ///
    /// The guard is created only after slot storage has been allocated.
    pub fn new(element_size: usize, capacity: usize) -> Result<Self, BuildError> {
        let (prod, cons) = SpscFifo::new(element_size, capacity)?.split();
        Ok(Self {
            cons,
            prod: MpscProd::new(prod),
        })
    }

    /// Splits the ring into a cloneable producer and the only consumer.
    pub fn split(self) -> (MpscProd, Cons) {
        (self.prod, self.cons)
    }
}

impl ConsOwner for MpscFifo {
    fn cons(&self) -> &Cons {
        &self.cons
    }
    fn cons_mut(&mut self) -> &mut Cons {
        &mut self.cons
    }
}

impl DelegateObserver for MpscFifo {}
impl DelegateConsumer for MpscFifo {}

impl Producer for MpscFifo {
    #[inline]
    fn enqueue_with(&mut self, elem: &[u8], copy: CopyFn) -> bool {
        self.prod.enqueue_with(elem, copy)
    }
}

impl MultiProducer for MpscFifo {
    #[inline]
    fn try_enqueue_with(&mut self, elem: &[u8], copy: CopyFn) -> bool {
        self.prod.try_enqueue_with(elem, copy)
    }
}

impl Fifo for MpscFifo {
    fn dispose(&mut self) {
        let dropped = self.cons.count();
        let _guard = self.prod.prod.lock();
        // Producer is locked and consumer is borrowed mutably.
        unsafe { self.cons.rb().reset() };
        tracing::debug!(dropped, "guarded slot ring disposed");
    }
}
