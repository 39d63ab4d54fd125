use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    #[error("Heap capacity must be greater than 0")]
    InvalidCapacity,
    #[error("Heap is full, it can hold at most `{capacity}` handles")]
    Full { capacity: usize },
    #[error("Heap is empty, there is no root to swap")]
    Empty,
    #[error("The handle is not owned by this heap")]
    ForeignHandle,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerError {
    #[error("Window size must be greater than 0")]
    InvalidWindow,
    #[error("No samples added yet")]
    NotReady,
    #[error("Heap invariant broken: {0}")]
    Heap(#[from] HeapError),
}
