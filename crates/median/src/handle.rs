//! Handle table shared by the heaps of one tracker.
//!
//! A [`Handle`] is an index into a [`HandleTable`]. The table records the
//! value behind each handle, its position in the owning heap's storage and
//! which heap owns it, so moving a handle between heaps only rewrites table
//! entries.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_HEAP_ID: AtomicU64 = AtomicU64::new(0);

/// Stable reference to a value stored in a [`HandleTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(usize);

impl Handle {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Identity of a heap, unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeapId(u64);

impl HeapId {
    pub(crate) fn next() -> Self {
        Self(NEXT_HEAP_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug)]
pub(crate) struct Entry<T> {
    pub(crate) value: T,
    pub(crate) position: usize,
    pub(crate) owner: HeapId,
}

#[derive(Debug)]
pub struct HandleTable<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for HandleTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HandleTable<T> {
    pub fn new() -> Self {
        Self { entries: vec![] }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value behind `handle`, or `None` if it was not issued by this table.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.entries.get(handle.0).map(|entry| &entry.value)
    }

    pub fn owner(&self, handle: Handle) -> Option<HeapId> {
        self.entries.get(handle.0).map(|entry| entry.owner)
    }

    pub fn position(&self, handle: Handle) -> Option<usize> {
        self.entries.get(handle.0).map(|entry| entry.position)
    }

    pub(crate) fn insert(&mut self, value: T, position: usize, owner: HeapId) -> Handle {
        let handle = Handle(self.entries.len());
        self.entries.push(Entry {
            value,
            position,
            owner,
        });
        handle
    }

    // Handles passed below come from a heap's own storage and are always in range.
    #[inline]
    pub(crate) fn entry(&self, handle: Handle) -> &Entry<T> {
        &self.entries[handle.0]
    }

    #[inline]
    pub(crate) fn entry_mut(&mut self, handle: Handle) -> &mut Entry<T> {
        &mut self.entries[handle.0]
    }
}
