use proptest::prelude::*;
use ringfifo::ring::{Addressed, Indexed, Insertion, Representation, RingBuffer, RingError};
use std::collections::VecDeque;

#[derive(Debug, Clone)]
enum Op {
    Insert(u16),
    Remove,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u16>().prop_map(Op::Insert),
        2 => Just(Op::Remove),
    ]
}

/// Replays `ops` against a ring and a bounded VecDeque, asserting they agree
/// after every step. Returns the observed removal trace.
fn replay<R: Representation>(capacity: usize, ops: &[Op]) -> Vec<Result<u16, RingError>> {
    let mut ring = RingBuffer::<u16, R>::new(capacity).unwrap();
    let mut model = VecDeque::with_capacity(capacity);
    let mut trace = Vec::new();

    for op in ops {
        match op {
            Op::Insert(value) => {
                let expected = if model.len() == capacity {
                    model.pop_front();
                    Insertion::Overwrote
                } else {
                    Insertion::Stored
                };
                model.push_back(*value);
                assert_eq!(ring.insert(*value), expected);
            }
            Op::Remove => {
                let observed = ring.remove();
                assert_eq!(observed, model.pop_front().ok_or(RingError::Empty));
                trace.push(observed);
            }
        }

        assert!(ring.len() <= ring.capacity());
        assert_eq!(ring.len(), model.len());
        assert_eq!(ring.is_empty(), model.is_empty());
        assert_eq!(ring.is_full(), model.len() == capacity);
        assert_eq!(ring.peek(), model.front());
        assert!(ring.iter().eq(model.iter()));
    }

    trace
}

proptest! {
    #[test]
    fn matches_bounded_deque_model(
        capacity in 1usize..12,
        ops in prop::collection::vec(op(), 0..200)
    ) {
        replay::<Indexed>(capacity, &ops);
        replay::<Addressed>(capacity, &ops);
    }

    #[test]
    fn representations_are_indistinguishable(
        capacity in 1usize..12,
        ops in prop::collection::vec(op(), 0..200)
    ) {
        prop_assert_eq!(
            replay::<Indexed>(capacity, &ops),
            replay::<Addressed>(capacity, &ops)
        );
    }

    #[test]
    fn overflow_drops_exactly_the_oldest(capacity in 1usize..64, extra in 0usize..64) {
        let total = (capacity + extra) as u32;

        let mut ring = RingBuffer::<u32, Addressed>::new(capacity).unwrap();
        ring.extend(0..total);
        let kept: Vec<u32> = ring.drain().collect();
        prop_assert_eq!(kept, (extra as u32..total).collect::<Vec<_>>());

        let mut ring = RingBuffer::<u32, Indexed>::new(capacity).unwrap();
        ring.extend(0..total);
        let kept: Vec<u32> = ring.drain().collect();
        prop_assert_eq!(kept, (extra as u32..total).collect::<Vec<_>>());
    }

    #[test]
    fn round_trip_without_eviction(values in prop::collection::vec(any::<i64>(), 1..50)) {
        let mut ring = RingBuffer::<i64, Indexed>::new(values.len()).unwrap();
        ring.extend(values.iter().copied());
        prop_assert!(ring.is_full());
        let out: Vec<i64> = ring.drain().collect();
        prop_assert_eq!(out, values);
    }
}
