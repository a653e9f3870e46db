pub mod consumer;
pub mod fifo;
pub mod observer;
pub mod producer;
mod utils;

pub(crate) use consumer::DelegateConsumer;
pub use consumer::Consumer;
pub use fifo::{Fifo, MultiWriterFifo};
pub(crate) use observer::DelegateObserver;
pub use observer::Observer;
pub use producer::{MultiProducer, Producer};
pub(crate) use utils::ConsOwner;
