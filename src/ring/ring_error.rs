use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("Invalid capacity {capacity}: {reason}")]
    InvalidCapacity {
        capacity: usize,
        reason: &'static str,
    },

    #[error(
        "Failed to allocate ring storage: {capacity} elements of {element_size} bytes"
    )]
    AllocationFailed {
        capacity: usize,
        element_size: usize,
    },

    #[error("Ring buffer is empty")]
    Empty,
}
