//! Fixed-capacity FIFO of byte slots.
//!
//! [`SpscFifo`] is a lock-free single-producer/single-consumer ring. [`MpscFifo`] serializes any number of
//! producers through one mutex while the consumer path stays lock-free.
//!
//! Every element occupies one slot of `element_size` bytes. The ring keeps one slot permanently vacant, so a
//! buffer of capacity `N` holds at most `N - 1` elements.
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod config;
pub mod error;
pub mod index;
#[cfg(feature = "std")]
pub mod mpsc;
pub mod rb;
pub mod spsc;
pub mod storage;
pub mod traits;
mod utils;

pub use config::{FifoConfig, Flavor};
pub use error::BuildError;
#[cfg(feature = "std")]
pub use mpsc::{MpscFifo, MpscProd};
pub use spsc::{Cons, Prod, SpscFifo};
pub use utils::{copy_bytes, CopyFn};

#[cfg(test)]
mod tests;
