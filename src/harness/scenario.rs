use super::TestContext;
use crate::ring::{Insertion, Representation, RingBuffer, RingError};

/// Parameters of the walkthrough: a ring of `capacity` elements fed two
/// batches of `batch` consecutive integers, with two removals in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walkthrough {
    pub capacity: usize,
    pub batch: usize,
}

impl Default for Walkthrough {
    fn default() -> Self {
        Self {
            capacity: 4,
            batch: 10,
        }
    }
}

impl Walkthrough {
    const REMOVALS: usize = 2;

    /// Runs every step against a fresh ring, recording each observation in
    /// `ctx`. Only construction failure is returned as an error; wrong
    /// observations are counted as failed checks.
    pub fn run<R: Representation>(&self, ctx: &mut TestContext) -> Result<(), RingError> {
        let capacity = self.capacity;
        let batch = self.batch;

        ctx.message(&format!(
            "Creating a {} ring buffer for {} elements",
            R::NAME,
            capacity
        ));
        let mut ring = RingBuffer::<u64, R>::new(capacity)?;
        check_state(ctx, &ring, capacity, 0);

        ctx.message(&format!(
            "Inserting {} elements, only the last {} should remain",
            batch, capacity
        ));
        for value in 0..batch as u64 {
            let expected = if ring.is_full() {
                Insertion::Overwrote
            } else {
                Insertion::Stored
            };
            ctx.check_eq(expected, ring.insert(value));
        }
        let held = batch.min(capacity);
        check_state(ctx, &ring, capacity, held);

        let removals = Self::REMOVALS.min(held);
        ctx.message(&format!("Removing {} elements", removals));
        let oldest = (batch - held) as u64;
        for step in 0..removals as u64 {
            ctx.check_eq(Ok(oldest + step), ring.remove());
        }
        let held = held - removals;
        check_state(ctx, &ring, capacity, held);

        ctx.message(&format!("Inserting {} more", batch));
        for value in batch as u64..2 * batch as u64 {
            ring.insert(value);
        }
        let held = (held + batch).min(capacity);
        check_state(ctx, &ring, capacity, held);

        ctx.message("Removing everything");
        let mut expected = (2 * batch - held) as u64;
        while !ring.is_empty() {
            ctx.check_eq(Ok(expected), ring.remove());
            expected += 1;
        }
        check_state(ctx, &ring, capacity, 0);
        ctx.check_eq(Err(RingError::Empty), ring.remove());
        check_state(ctx, &ring, capacity, 0);

        ring.destroy();
        Ok(())
    }
}

#[track_caller]
fn check_state<R: Representation>(
    ctx: &mut TestContext,
    ring: &RingBuffer<u64, R>,
    capacity: usize,
    len: usize,
) {
    ctx.check_eq(len, ring.len());
    ctx.check_eq(capacity, ring.capacity());
    ctx.check_eq(len == 0, ring.is_empty());
    ctx.check_eq(len == capacity, ring.is_full());
}
