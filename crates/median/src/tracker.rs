//! Median of the most recent `window` samples.
//!
//! The lower half of the window lives in a max-heap and the upper half in a
//! min-heap, so the two central order statistics are always the two roots.
//! The max-heap holds the extra sample when the count is odd.
//!
//! Each window slot remembers the handle of the sample it holds. Once the
//! window is full, a new sample overwrites the value behind the oldest slot's
//! handle in whichever heap currently owns it, which evicts and inserts in a
//! single O(log W) update. A root swap afterwards fixes the partition if the
//! new value landed on the wrong side of the median.

use crate::error::{HeapError, TrackerError};
use crate::handle::{Handle, HandleTable};
use crate::heap::{AddressableHeap, Order};

#[derive(Debug)]
pub struct SlidingMedianTracker<T> {
    window: usize,
    table: HandleTable<T>,
    /// Lower half of the window.
    max_heap: AddressableHeap,
    /// Upper half of the window.
    min_heap: AddressableHeap,
    /// Window slot -> handle of the sample stored in it.
    rolling: Vec<Handle>,
    /// Slot written by the next `add`; holds the oldest sample once full.
    rolling_index: usize,
}

impl<T: Ord> SlidingMedianTracker<T> {
    pub fn new(window: usize) -> Result<Self, TrackerError> {
        if window < 1 {
            return Err(TrackerError::InvalidWindow);
        }
        let max_capacity = window.div_ceil(2);
        // A window of one never fills the min-heap, but the heap still needs a slot.
        let min_capacity = (window / 2).max(1);

        let tracker = Self {
            window,
            table: HandleTable::with_capacity(window),
            max_heap: AddressableHeap::new(Order::Max, max_capacity)?,
            min_heap: AddressableHeap::new(Order::Min, min_capacity)?,
            rolling: Vec::with_capacity(window),
            rolling_index: 0,
        };
        tracing::debug!(
            window,
            max_capacity,
            min_capacity,
            "Created sliding median tracker"
        );
        Ok(tracker)
    }

    pub fn window_size(&self) -> usize {
        self.window
    }

    pub fn num_samples(&self) -> usize {
        self.max_heap.len() + self.min_heap.len()
    }

    pub fn is_full(&self) -> bool {
        self.num_samples() == self.window
    }

    /// Adds a sample, evicting the oldest one once the window is full.
    ///
    /// Only fails if the heaps were left in an inconsistent state, which
    /// correct bookkeeping never produces.
    pub fn add(&mut self, value: T) -> Result<(), TrackerError> {
        let samples = self.num_samples();
        if samples < self.window {
            let heap = if samples % 2 == 0 {
                &mut self.max_heap
            } else {
                &mut self.min_heap
            };
            let handle = heap.add(&mut self.table, value)?;
            self.rolling.push(handle);
        } else {
            let handle = self.rolling[self.rolling_index];
            let owner = self.table.owner(handle).ok_or(HeapError::ForeignHandle)?;
            let heap = if owner == self.max_heap.id() {
                &mut self.max_heap
            } else {
                &mut self.min_heap
            };
            heap.update(&mut self.table, handle, value)?;
            tracing::trace!(slot = self.rolling_index, "Replaced oldest sample");
        }

        self.rebalance()?;
        self.rolling_index = (self.rolling_index + 1) % self.window;
        Ok(())
    }

    /// Lower central order statistic, or the median itself when the count is odd.
    pub fn first_median(&self) -> Result<&T, TrackerError> {
        self.max_heap
            .peek(&self.table)
            .ok_or(TrackerError::NotReady)
    }

    /// Upper central order statistic, or the median itself when the count is odd.
    pub fn second_median(&self) -> Result<&T, TrackerError> {
        if self.max_heap.len() == self.min_heap.len() {
            if let Some(upper) = self.min_heap.peek(&self.table) {
                return Ok(upper);
            }
        }
        self.first_median()
    }

    pub fn medians(&self) -> Result<(&T, &T), TrackerError> {
        Ok((self.first_median()?, self.second_median()?))
    }

    /// Each heap is internally valid after an add or update, but the new value
    /// may sit on the wrong side of the split. Swapping the roots moves it across.
    fn rebalance(&mut self) -> Result<(), HeapError> {
        let crossed = match (
            self.max_heap.peek(&self.table),
            self.min_heap.peek(&self.table),
        ) {
            (Some(lower), Some(upper)) => upper < lower,
            _ => false,
        };
        if crossed {
            self.min_heap.swap_root(&mut self.max_heap, &mut self.table)?;
            tracing::trace!(samples = self.num_samples(), "Swapped heap roots");
        }
        Ok(())
    }
}
