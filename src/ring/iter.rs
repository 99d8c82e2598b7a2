use super::{Block, Representation, RingBuffer};
use std::iter::FusedIterator;

impl<T, R: Representation> RingBuffer<T, R> {
    /// Live elements from oldest to newest.
    pub fn iter(&self) -> Iter<'_, T, R> {
        Iter {
            block: &self.block,
            pos: self.head,
            remaining: self.len,
        }
    }

    /// Removes elements oldest first as the iterator is advanced. Elements
    /// not yet yielded when the iterator is dropped stay in the ring.
    pub fn drain(&mut self) -> Drain<'_, T, R> {
        Drain { ring: self }
    }
}

pub struct Iter<'a, T, R: Representation> {
    block: &'a Block<T>,
    pos: R::Position<T>,
    remaining: usize,
}

impl<'a, T, R: Representation> Iterator for Iter<'a, T, R> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let slot = self.block.slot(self.pos);
        // SAFETY: `remaining` counts live slots from the head onwards.
        let value = unsafe { slot.as_ref().assume_init_ref() };
        self.pos = self.block.advance(self.pos);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, R: Representation> ExactSizeIterator for Iter<'_, T, R> {}
impl<T, R: Representation> FusedIterator for Iter<'_, T, R> {}

impl<'a, T, R: Representation> IntoIterator for &'a RingBuffer<T, R> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Drain<'a, T, R: Representation> {
    ring: &'a mut RingBuffer<T, R>,
}

impl<T, R: Representation> Iterator for Drain<'_, T, R> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.ring.remove().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ring.len(), Some(self.ring.len()))
    }
}

impl<T, R: Representation> ExactSizeIterator for Drain<'_, T, R> {}
impl<T, R: Representation> FusedIterator for Drain<'_, T, R> {}
