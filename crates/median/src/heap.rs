//! Fixed-capacity binary heap whose elements can be updated in place.
//!
//! The heap stores [`Handle`]s and keeps its values in an external
//! [`HandleTable`]. Every handle's recorded position always matches its
//! index in the heap storage, so a handle can be updated without searching
//! for it first.

use crate::error::HeapError;
use crate::handle::{Handle, HandleTable, HeapId};

/// Which end of the ordering sits at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Max,
    Min,
}

impl Order {
    /// Returns `true` if `value` belongs above `other` in a heap of this order.
    ///
    /// Equal values never move.
    #[inline]
    pub fn should_move_up<T: Ord>(self, value: &T, other: &T) -> bool {
        match self {
            Order::Max => value > other,
            Order::Min => value < other,
        }
    }
}

#[derive(Debug)]
pub struct AddressableHeap {
    id: HeapId,
    order: Order,
    capacity: usize,
    slots: Vec<Handle>,
}

impl AddressableHeap {
    pub fn new(order: Order, capacity: usize) -> Result<Self, HeapError> {
        if capacity < 1 {
            return Err(HeapError::InvalidCapacity);
        }
        Ok(Self {
            id: HeapId::next(),
            order,
            capacity,
            slots: Vec::with_capacity(capacity),
        })
    }

    pub fn id(&self) -> HeapId {
        self.id
    }

    pub fn order(&self) -> Order {
        self.order
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Handles in storage order. Index 0 is the root.
    pub fn handles(&self) -> &[Handle] {
        &self.slots
    }

    #[inline]
    pub fn root(&self) -> Option<Handle> {
        self.slots.first().copied()
    }

    /// Returns the root value, or `None` if the heap is empty or `table` is
    /// not the table this heap's handles live in.
    pub fn peek<'a, T>(&self, table: &'a HandleTable<T>) -> Option<&'a T> {
        self.root()
            .filter(|&handle| self.owns(table, handle))
            .and_then(|handle| table.get(handle))
    }

    /// Appends `value` and sifts it up. The returned handle stays valid for
    /// the lifetime of `table`, wherever the value later moves.
    pub fn add<T: Ord>(
        &mut self,
        table: &mut HandleTable<T>,
        value: T,
    ) -> Result<Handle, HeapError> {
        if self.is_full() {
            return Err(HeapError::Full {
                capacity: self.capacity,
            });
        }
        self.check_table(table)?;
        let pos = self.slots.len();
        let handle = table.insert(value, pos, self.id);
        self.slots.push(handle);
        self.sift_up(table, pos);
        Ok(handle)
    }

    /// Replaces the value behind `handle` and restores the heap property.
    ///
    /// Only one direction can be violated by a single change, so the handle
    /// is sifted either up or down, never both. Setting an equal value is a
    /// no-op.
    pub fn update<T: Ord>(
        &mut self,
        table: &mut HandleTable<T>,
        handle: Handle,
        value: T,
    ) -> Result<(), HeapError> {
        if !self.owns(table, handle) {
            return Err(HeapError::ForeignHandle);
        }
        let entry = table.entry_mut(handle);
        if entry.value == value {
            return Ok(());
        }
        let move_up = self.order.should_move_up(&value, &entry.value);
        entry.value = value;
        let pos = entry.position;

        if move_up {
            self.sift_up(table, pos);
        } else {
            self.sift_down(table, pos);
        }
        Ok(())
    }

    /// Exchanges the roots of `self` and `other`, then sifts each new root
    /// down in its new heap.
    pub fn swap_root<T: Ord>(
        &mut self,
        other: &mut AddressableHeap,
        table: &mut HandleTable<T>,
    ) -> Result<(), HeapError> {
        let (Some(ours), Some(theirs)) = (self.root(), other.root()) else {
            return Err(HeapError::Empty);
        };
        if !self.owns(table, ours) || !other.owns(table, theirs) {
            return Err(HeapError::ForeignHandle);
        }

        // Both handles stay at position 0, only their owners change.
        table.entry_mut(ours).owner = other.id;
        table.entry_mut(theirs).owner = self.id;
        self.slots[0] = theirs;
        other.slots[0] = ours;

        self.sift_down(table, 0);
        other.sift_down(table, 0);
        Ok(())
    }

    #[inline]
    fn owns<T>(&self, table: &HandleTable<T>, handle: Handle) -> bool {
        table.owner(handle) == Some(self.id)
    }

    /// All slots of a heap come from the table its first handle was added to,
    /// so checking the root is enough to reject any other table.
    fn check_table<T>(&self, table: &HandleTable<T>) -> Result<(), HeapError> {
        match self.root() {
            Some(root) if !self.owns(table, root) => Err(HeapError::ForeignHandle),
            _ => Ok(()),
        }
    }

    fn sift_up<T: Ord>(&mut self, table: &mut HandleTable<T>, mut pos: usize) {
        while let Some(parent) = parent_of(pos) {
            let node = &table.entry(self.slots[pos]).value;
            let above = &table.entry(self.slots[parent]).value;
            if !self.order.should_move_up(node, above) {
                break;
            }
            self.swap_slots(table, pos, parent);
            pos = parent;
        }
    }

    fn sift_down<T: Ord>(&mut self, table: &mut HandleTable<T>, mut pos: usize) {
        while let Some(child) = self.extreme_child(table, pos) {
            let node = &table.entry(self.slots[pos]).value;
            let below = &table.entry(self.slots[child]).value;
            if !self.order.should_move_up(below, node) {
                break;
            }
            self.swap_slots(table, pos, child);
            pos = child;
        }
    }

    /// The child that would become the parent if the two children were compared:
    /// the larger one in a max-heap, the smaller one in a min-heap.
    fn extreme_child<T: Ord>(&self, table: &HandleTable<T>, pos: usize) -> Option<usize> {
        let len = self.slots.len();
        let left = 2 * pos + 1;
        if left >= len {
            return None;
        }
        let right = left + 1;
        if right < len {
            let left_value = &table.entry(self.slots[left]).value;
            let right_value = &table.entry(self.slots[right]).value;
            if self.order.should_move_up(right_value, left_value) {
                return Some(right);
            }
        }
        Some(left)
    }

    #[inline]
    fn swap_slots<T>(&mut self, table: &mut HandleTable<T>, a: usize, b: usize) {
        self.slots.swap(a, b);
        table.entry_mut(self.slots[a]).position = a;
        table.entry_mut(self.slots[b]).position = b;
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants<T: Ord + std::fmt::Debug>(&self, table: &HandleTable<T>) {
        assert!(self.slots.len() <= self.capacity);
        for (pos, &handle) in self.slots.iter().enumerate() {
            let entry = table.entry(handle);
            assert_eq!(entry.position, pos, "stale position for {:?}", handle);
            assert_eq!(entry.owner, self.id, "{:?} owned by another heap", handle);
            if let Some(parent) = parent_of(pos) {
                let above = &table.entry(self.slots[parent]).value;
                assert!(
                    !self.order.should_move_up(&entry.value, above),
                    "{:?} at {} violates {:?} order against parent {:?}",
                    entry.value,
                    pos,
                    self.order,
                    above
                );
            }
        }
    }
}

#[inline]
fn parent_of(pos: usize) -> Option<usize> {
    if pos == 0 {
        None
    } else {
        Some((pos - 1) / 2)
    }
}
