use super::RingError;
use super::position::sealed::Cursor;
use std::mem::{self, MaybeUninit};
use std::ptr::{self, NonNull};

/// Contiguous storage of `capacity` slots, none of which are tracked as
/// initialized here. The owning ring buffer decides which slots are live.
pub struct Block<T> {
    base: NonNull<MaybeUninit<T>>,
    capacity: usize,
}

impl<T> Block<T> {
    pub(crate) fn allocate(capacity: usize) -> Result<Self, RingError> {
        if capacity == 0 {
            return Err(RingError::InvalidCapacity {
                capacity,
                reason: "must hold at least one element",
            });
        }

        let mut area: Vec<MaybeUninit<T>> = Vec::new();
        area.try_reserve_exact(capacity)
            .map_err(|_| RingError::AllocationFailed {
                capacity,
                element_size: mem::size_of::<T>(),
            })?;
        // SAFETY: `capacity` slots are reserved and MaybeUninit needs no
        // initialization.
        unsafe { area.set_len(capacity) };

        let base = NonNull::from(Box::leak(area.into_boxed_slice())).cast();
        Ok(Self { base, capacity })
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub(crate) fn origin<P: Cursor<T>>(&self) -> P {
        P::origin(self.base)
    }

    #[inline(always)]
    pub(crate) fn advance<P: Cursor<T>>(&self, pos: P) -> P {
        pos.advance(self.base, self.capacity)
    }

    #[inline(always)]
    pub(crate) fn slot<P: Cursor<T>>(&self, pos: P) -> NonNull<MaybeUninit<T>> {
        pos.slot(self.base)
    }
}

impl<T> Drop for Block<T> {
    fn drop(&mut self) {
        // MaybeUninit slots are never dropped here; only the allocation goes.
        let area = ptr::slice_from_raw_parts_mut(self.base.as_ptr(), self.capacity);
        unsafe { drop(Box::from_raw(area)) };
    }
}
