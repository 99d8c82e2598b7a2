pub(crate) mod block;
pub mod buffer;
pub mod fifo;
pub mod iter;
pub mod position;
pub mod ring_error;

pub(crate) use block::Block;
pub use buffer::RingBuffer;
pub use fifo::Insertion;
pub use iter::{Drain, Iter};
pub use position::*;
pub use ring_error::*;
