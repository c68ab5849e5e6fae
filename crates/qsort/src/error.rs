use thiserror::Error;

/// Failures reported by the sort engine.
///
/// Everything except `StackExhausted` is detected before the buffer is
/// touched.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum SortError {
    #[error("element size {size} exceeds pivot scratch capacity {capacity}")]
    ElementTooLarge { size: usize, capacity: usize },

    #[error("buffer holds {actual} bytes but {required} are required")]
    BufferTooSmall { required: usize, actual: usize },

    #[error("{count} elements of {size} bytes overflow the address space")]
    LengthOverflow { count: usize, size: usize },

    /// The buffer is still a permutation of its input, just not sorted.
    #[error("work stack exhausted at {capacity} pending ranges")]
    StackExhausted { capacity: usize },
}
