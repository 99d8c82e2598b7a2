//! Head/tail position encodings.
//!
//! A position names one slot of the ring's storage. Both encodings move
//! forward one slot at a time and wrap back to the first slot as soon as they
//! reach the end. Neither can tell an empty ring from a full one on its own;
//! the ring buffer keeps an explicit length for that.
//!
//! Positions are opaque outside the crate:
//!
//! ```compile_fail
//! use ringfifo::ring::block::Block;
//! ```
//!
//! ```compile_fail
//! use ringfifo::ring::position::sealed::Cursor;
//! ```

use std::fmt;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

pub(crate) mod sealed {
    use std::mem::MaybeUninit;
    use std::ptr::NonNull;

    pub trait Sealed {}

    /// Cursor arithmetic over a block starting at `base` with `capacity`
    /// slots. Implementors stay within `[0, capacity)`.
    pub trait Cursor<T>: Sealed {
        fn origin(base: NonNull<MaybeUninit<T>>) -> Self;

        fn advance(self, base: NonNull<MaybeUninit<T>>, capacity: usize) -> Self;

        fn slot(self, base: NonNull<MaybeUninit<T>>) -> NonNull<MaybeUninit<T>>;
    }
}

use sealed::Cursor;

/// Marker for the head/tail types of a [`Representation`].
pub trait Position<T>: Copy + Eq + fmt::Debug + Cursor<T> {}

/// Selects the position type a ring buffer tracks its head and tail with.
pub trait Representation: sealed::Sealed {
    type Position<T>: Position<T>;

    const NAME: &'static str;
}

/// Offsets into the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indexed;

/// Addresses inside the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Addressed;

impl sealed::Sealed for Indexed {}
impl sealed::Sealed for Addressed {}

impl Representation for Indexed {
    type Position<T> = Offset;

    const NAME: &'static str = "indexed";
}

impl Representation for Addressed {
    type Position<T> = Address<T>;

    const NAME: &'static str = "addressed";
}

#[cfg(feature = "index-positions")]
pub type DefaultRepresentation = Indexed;

#[cfg(not(feature = "index-positions"))]
pub type DefaultRepresentation = Addressed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset(usize);

impl sealed::Sealed for Offset {}
impl<T> Position<T> for Offset {}

impl<T> Cursor<T> for Offset {
    #[inline(always)]
    fn origin(_base: NonNull<MaybeUninit<T>>) -> Self {
        Offset(0)
    }

    #[inline(always)]
    fn advance(self, _base: NonNull<MaybeUninit<T>>, capacity: usize) -> Self {
        let next = self.0 + 1;
        if next >= capacity { Offset(0) } else { Offset(next) }
    }

    #[inline(always)]
    fn slot(self, base: NonNull<MaybeUninit<T>>) -> NonNull<MaybeUninit<T>> {
        // SAFETY: offsets never leave [0, capacity).
        unsafe { base.add(self.0) }
    }
}

pub struct Address<T>(NonNull<MaybeUninit<T>>);

impl<T> sealed::Sealed for Address<T> {}
impl<T> Position<T> for Address<T> {}

impl<T> Clone for Address<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Address<T> {}

impl<T> PartialEq for Address<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Address<T> {}

impl<T> fmt::Debug for Address<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({:p})", self.0)
    }
}

impl<T> Cursor<T> for Address<T> {
    #[inline(always)]
    fn origin(base: NonNull<MaybeUninit<T>>) -> Self {
        Address(base)
    }

    #[inline(always)]
    fn advance(self, base: NonNull<MaybeUninit<T>>, capacity: usize) -> Self {
        // SAFETY: self is below the end of the block, so one step lands at
        // most one past the last slot, which is also where `end` points.
        let (next, end) = unsafe { (self.0.add(1), base.add(capacity)) };
        if next >= end { Address(base) } else { Address(next) }
    }

    #[inline(always)]
    fn slot(self, _base: NonNull<MaybeUninit<T>>) -> NonNull<MaybeUninit<T>> {
        self.0
    }
}
