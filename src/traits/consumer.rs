use super::{
    observer::{DelegateObserver, Observer},
    utils::ConsOwner,
};
use crate::utils::{copy_bytes, CopyFn};

/// Consumer part of ring buffer.
pub trait Consumer: Observer {
    /// Removes the front element.
    ///
    /// If `out` is `Some` the payload is moved into its beginning with `copy`, otherwise it is discarded.
    ///
    /// Returns payload size of the removed element or `None` if the buffer is empty.
    ///
    /// *Panics if `out` is shorter than the payload.*
    fn dequeue_with(&mut self, out: Option<&mut [u8]>, copy: CopyFn) -> Option<usize>;

    /// Removes the front element copying its bytes into `out`.
    ///
    /// Same as [`Self::dequeue_with`] with plain byte copy.
    #[inline]
    fn dequeue(&mut self, out: Option<&mut [u8]>) -> Option<usize> {
        self.dequeue_with(out, copy_bytes)
    }

    /// Payload of the element that the next dequeue will return.
    fn peek(&self) -> Option<&[u8]>;

    /// Payload size of the front element, zero if the buffer is empty.
    #[inline]
    fn peek_size(&self) -> usize {
        self.peek().map_or(0, <[u8]>::len)
    }

    /// Removes the front element without reading it.
    ///
    /// Returns `false` if the buffer is empty.
    #[inline]
    fn skip(&mut self) -> bool {
        self.dequeue_with(None, copy_bytes).is_some()
    }

    /// Removes all elements that are in the buffer at the moment of the call.
    ///
    /// *Elements pushed by a concurring producer during the call may stay in the buffer.*
    ///
    /// Returns the number of removed elements.
    fn clear(&mut self) -> usize {
        let count = self.count();
        for _ in 0..count {
            self.skip();
        }
        count
    }
}

/// Trait used for delegating consumer methods to the owned consumer.
pub(crate) trait DelegateConsumer: DelegateObserver {}

impl<D: DelegateConsumer> Consumer for D {
    #[inline]
    fn dequeue_with(&mut self, out: Option<&mut [u8]>, copy: CopyFn) -> Option<usize> {
        self.cons_mut().dequeue_with(out, copy)
    }

    #[inline]
    fn peek(&self) -> Option<&[u8]> {
        self.cons().peek()
    }

    #[inline]
    fn clear(&mut self) -> usize {
        self.cons_mut().clear()
    }
}
