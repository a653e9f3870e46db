use super::observer::Observer;
use crate::utils::{copy_bytes, CopyFn};

/// Producer part of ring buffer.
pub trait Producer: Observer {
    /// Appends an element to the ring buffer moving its bytes with `copy`.
    ///
    /// Returns `false` if the buffer is full, the buffer stays untouched then.
    ///
    /// *Panics if `elem` is longer than [`Observer::element_size`].*
    fn enqueue_with(&mut self, elem: &[u8], copy: CopyFn) -> bool;

    /// Appends an element to the ring buffer.
    ///
    /// Same as [`Self::enqueue_with`] with plain byte copy.
    #[inline]
    fn enqueue(&mut self, elem: &[u8]) -> bool {
        self.enqueue_with(elem, copy_bytes)
    }
}

/// Producer that may be shared by several threads through cloned handles.
///
/// [`Producer`] methods wait for other producers to finish, `try_*` methods never wait.
pub trait MultiProducer: Producer {
    /// Appends an element unless the buffer is full or another producer is in progress.
    ///
    /// Both cases are reported as `false` and leave the buffer untouched.
    fn try_enqueue_with(&mut self, elem: &[u8], copy: CopyFn) -> bool;

    /// Same as [`Self::try_enqueue_with`] with plain byte copy.
    #[inline]
    fn try_enqueue(&mut self, elem: &[u8]) -> bool {
        self.try_enqueue_with(elem, copy_bytes)
    }
}
