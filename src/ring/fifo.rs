use super::{Representation, RingBuffer, RingError};
use std::mem::{self, MaybeUninit};
use tracing::trace;

/// Outcome of [`RingBuffer::insert`]. Inserting never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// Written into a free slot.
    Stored,
    /// The ring was full; the oldest element was dropped to make room.
    Overwrote,
}

impl<T, R: Representation> RingBuffer<T, R> {
    #[inline]
    pub fn insert(&mut self, value: T) -> Insertion {
        let slot = self.block.slot(self.tail);

        if self.is_full() {
            // head == tail here, so the slot holds the oldest element.
            let evicted = unsafe { slot.read().assume_init() };
            unsafe { slot.write(MaybeUninit::new(value)) };
            self.tail = self.block.advance(self.tail);
            self.head = self.block.advance(self.head);

            trace!(capacity = self.capacity(), "evicted oldest element");
            drop(evicted);
            return Insertion::Overwrote;
        }

        unsafe { slot.write(MaybeUninit::new(value)) };
        self.tail = self.block.advance(self.tail);
        self.len += 1;
        Insertion::Stored
    }

    /// Removes the oldest element. On an empty ring nothing changes and
    /// [`RingError::Empty`] is returned.
    #[inline]
    pub fn remove(&mut self) -> Result<T, RingError> {
        if self.is_empty() {
            return Err(RingError::Empty);
        }

        self.len -= 1;
        let slot = self.block.slot(self.head);
        // SAFETY: the slot at head is live whenever len was non-zero.
        let value = unsafe { slot.read().assume_init() };
        self.head = self.block.advance(self.head);
        Ok(value)
    }

    #[inline]
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        let slot = self.block.slot(self.head);
        Some(unsafe { slot.as_ref().assume_init_ref() })
    }

    /// Drops every live element, oldest first. Constant time when `T` has
    /// no drop glue.
    pub fn clear(&mut self) {
        if mem::needs_drop::<T>() {
            while self.remove().is_ok() {}
            return;
        }

        self.head = self.tail;
        self.len = 0;
    }
}

impl<T, R: Representation> Extend<T> for RingBuffer<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
