use super::{consumer::Consumer, producer::MultiProducer, producer::Producer};

/// Full capability set of a ring buffer that exclusively owns both of its ends.
///
/// Object safe: `Box<dyn Fifo + Send>` can hold any ring flavor.
pub trait Fifo: Producer + Consumer {
    /// Discards all stored elements and rewinds the buffer to its initial empty state.
    ///
    /// Slot storage is kept, the buffer is ready for reuse right away.
    fn dispose(&mut self);
}

/// [`Fifo`] whose producer end is guarded for multiple writers.
pub trait MultiWriterFifo: Fifo + MultiProducer {}

impl<T: Fifo + MultiProducer + ?Sized> MultiWriterFifo for T {}
