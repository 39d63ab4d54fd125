//! Sliding-window median over a pair of addressable binary heaps.

pub mod error;
pub mod handle;
pub mod heap;
pub mod macros;
pub mod tracker;

pub use error::{HeapError, TrackerError};
pub use handle::{Handle, HandleTable, HeapId};
pub use heap::{AddressableHeap, Order};
pub use tracker::SlidingMedianTracker;
