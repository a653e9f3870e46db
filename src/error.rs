use alloc::collections::TryReserveError;
use thiserror::Error;

/// Construction failure of a ring.
///
/// A failed construction never leaves allocated storage behind.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Requested capacity is zero.
    #[error("requested capacity must be at least one slot")]
    ZeroCapacity,
    /// Rounded slot count or total arena size does not fit into `usize`.
    #[error("{slots} slots of {element_size} bytes overflow the address space")]
    CapacityOverflow { slots: usize, element_size: usize },
    /// Allocator refused the slot arena or the size table.
    #[error("slot allocation failed: {0}")]
    Alloc(TryReserveError),
}

impl From<TryReserveError> for BuildError {
    fn from(err: TryReserveError) -> Self {
        Self::Alloc(err)
    }
}
