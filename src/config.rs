#[cfg(feature = "std")]
use crate::mpsc::MpscFifo;
use crate::{error::BuildError, spsc::SpscFifo, traits::Fifo};
use alloc::boxed::Box;

/// Concurrency contract of a ring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// Lock-free, one producer and one consumer.
    #[default]
    SingleProducer,
    /// Producers serialized by a mutex, one consumer.
    #[cfg(feature = "std")]
    MultiProducer,
}

/// Ring parameters.
///
/// ```
/// use slotfifo::{traits::*, FifoConfig, Flavor};
///
/// let mut fifo = FifoConfig::new(4, 14).flavor(Flavor::MultiProducer).build().unwrap();
/// assert_eq!(fifo.capacity().get(), 16);
/// assert!(fifo.enqueue(b"abcd"));
/// assert_eq!(fifo.peek(), Some(&b"abcd"[..]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FifoConfig {
    /// Size of one slot in bytes.
    pub element_size: usize,
    /// Requested number of slots, rounded up to a power of two.
    pub capacity: usize,
    pub flavor: Flavor,
}

impl Default for FifoConfig {
    fn default() -> Self {
        Self {
            element_size: 8,
            capacity: 1024,
            flavor: Flavor::default(),
        }
    }
}

impl FifoConfig {
    pub fn new(element_size: usize, capacity: usize) -> Self {
        Self {
            element_size,
            capacity,
            ..Self::default()
        }
    }

    pub fn element_size(mut self, element_size: usize) -> Self {
        self.element_size = element_size;
        self
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = flavor;
        self
    }

    /// Builds a ring of the configured flavor behind a flavor-agnostic handle.
    pub fn build(&self) -> Result<Box<dyn Fifo + Send>, BuildError> {
        let fifo: Box<dyn Fifo + Send> = match self.flavor {
            Flavor::SingleProducer => Box::new(self.build_spsc()?),
            #[cfg(feature = "std")]
            Flavor::MultiProducer => Box::new(self.build_mpsc()?),
        };
        Ok(fifo)
    }

    /// Builds a lock-free SPSC ring regardless of the configured flavor.
    pub fn build_spsc(&self) -> Result<SpscFifo, BuildError> {
        SpscFifo::new(self.element_size, self.capacity)
    }

    /// Builds a guarded MPSC ring regardless of the configured flavor.
    #[cfg(feature = "std")]
    pub fn build_mpsc(&self) -> Result<MpscFifo, BuildError> {
        MpscFifo::new(self.element_size, self.capacity)
    }
}
