use super::{Block, DefaultRepresentation, Representation, RingError};
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use tracing::debug;

/// Fixed-capacity FIFO that overwrites its oldest element when full.
///
/// `head` names the oldest live element and `tail` the slot the next insert
/// writes to. The two coincide both when the ring is empty and when it is
/// full, so `len` is the only source of truth for occupancy.
pub struct RingBuffer<T, R: Representation = DefaultRepresentation> {
    pub(crate) block: Block<T>,
    pub(crate) head: R::Position<T>,
    pub(crate) tail: R::Position<T>,
    pub(crate) len: usize,
    pub(crate) _owns: PhantomData<T>,
}

// The block is owned exclusively; positions only ever point into it.
unsafe impl<T: Send, R: Representation> Send for RingBuffer<T, R> {}
unsafe impl<T: Sync, R: Representation> Sync for RingBuffer<T, R> {}

impl<T, R: Representation> RingBuffer<T, R> {
    /// Allocates storage for exactly `capacity` elements.
    ///
    /// A zero capacity is rejected with [`RingError::InvalidCapacity`]; a
    /// failed (or overflowing) allocation yields
    /// [`RingError::AllocationFailed`] rather than aborting.
    pub fn new(capacity: usize) -> Result<Self, RingError> {
        let block = Block::allocate(capacity)?;
        let origin: R::Position<T> = block.origin();

        debug!(capacity, representation = R::NAME, "ring buffer created");

        Ok(Self {
            block,
            head: origin,
            tail: origin,
            len: 0,
            _owns: PhantomData,
        })
    }

    /// Drops every live element, oldest first, then releases the storage.
    pub fn destroy(self) {
        drop(self);
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.block.capacity()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len == self.block.capacity()
    }
}

impl<T, R: Representation> Drop for RingBuffer<T, R> {
    fn drop(&mut self) {
        if mem::needs_drop::<T>() {
            self.clear();
        }
    }
}

impl<T: fmt::Debug, R: Representation> fmt::Debug for RingBuffer<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RingBuffer")?;
        f.debug_list().entries(self.iter()).finish()
    }
}
