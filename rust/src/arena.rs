//! Slab allocator backing the linked binary tree.
//!
//! Nodes are owned by value in a single `Vec`, addressed by `NodeId`. A free
//! list recycles slots, and a per-slot generation counter is bumped on every
//! deallocation so that a handle minted for a removed node can never silently
//! alias whatever node later reuses the slot.

use crate::types::{NodeId, NULL_NODE};

/// Statistics for an arena
#[derive(Debug, Clone, Copy)]
pub struct ArenaStats {
    pub total_slots: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
}

/// Arena allocator with slot reuse and generation tracking
#[derive(Debug)]
pub struct Arena<T> {
    /// Slot storage; `None` marks a free slot
    storage: Vec<Option<T>>,
    /// Generation of each slot, bumped when the slot is freed
    generations: Vec<u32>,
    /// Free slot indices for reuse
    free_list: Vec<usize>,
}

impl<T> Arena<T> {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Create a new arena with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            generations: Vec::with_capacity(capacity),
            free_list: Vec::new(),
        }
    }

    /// Allocate a new item in the arena and return its ID
    #[inline]
    pub fn allocate(&mut self, item: T) -> NodeId {
        let index = if let Some(free_index) = self.free_list.pop() {
            // Reuse a free slot; its generation was already bumped at free time
            self.storage[free_index] = Some(item);
            free_index
        } else {
            let index = self.storage.len();
            self.storage.push(Some(item));
            self.generations.push(0);
            index
        };

        NodeId::try_from(index).expect("arena index should fit in NodeId")
    }

    /// Deallocate an item from the arena and return it
    #[inline]
    pub fn deallocate(&mut self, id: NodeId) -> Option<T> {
        let index = self.slot_index(id)?;
        let item = self.storage[index].take()?;

        // Invalidate outstanding handles to this slot before recycling it
        self.generations[index] = self.generations[index].wrapping_add(1);
        self.free_list.push(index);
        Some(item)
    }

    /// Get a reference to an item in the arena
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        let index = self.slot_index(id)?;
        self.storage[index].as_ref()
    }

    /// Get a mutable reference to an item in the arena
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let index = self.slot_index(id)?;
        self.storage[index].as_mut()
    }

    /// Current generation of a slot, if it is allocated
    #[inline]
    pub fn generation(&self, id: NodeId) -> Option<u32> {
        let index = self.slot_index(id)?;
        if self.storage[index].is_some() {
            Some(self.generations[index])
        } else {
            None
        }
    }

    /// Check if an ID is valid and allocated
    pub fn contains(&self, id: NodeId) -> bool {
        self.slot_index(id)
            .map(|index| self.storage[index].is_some())
            .unwrap_or(false)
    }

    /// Get the number of allocated items
    pub fn len(&self) -> usize {
        self.storage.len() - self.free_list.len()
    }

    /// Check if the arena is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all items from the arena
    pub fn clear(&mut self) {
        self.storage.clear();
        self.generations.clear();
        self.free_list.clear();
    }

    /// Get the number of free slots
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Get the number of allocated items
    pub fn allocated_count(&self) -> usize {
        self.len()
    }

    /// Get arena statistics
    pub fn stats(&self) -> ArenaStats {
        let total_slots = self.storage.len();
        let allocated_count = self.len();
        let free_count = self.free_list.len();
        let utilization = if total_slots > 0 {
            allocated_count as f64 / total_slots as f64
        } else {
            0.0
        };

        ArenaStats {
            total_slots,
            allocated_count,
            free_count,
            utilization,
        }
    }

    /// Translate an ID into a slot index, rejecting NULL and out-of-range IDs
    #[inline]
    fn slot_index(&self, id: NodeId) -> Option<usize> {
        if id == NULL_NODE {
            return None;
        }
        let index = usize::try_from(id).ok()?;
        if index < self.storage.len() {
            Some(index)
        } else {
            None
        }
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_basic_operations() {
        let mut arena = Arena::new();

        let id1 = arena.allocate(42);
        let id2 = arena.allocate(84);
        let id3 = arena.allocate(126);

        assert_eq!(arena.get(id1), Some(&42));
        assert_eq!(arena.get(id2), Some(&84));
        assert_eq!(arena.get(id3), Some(&126));

        assert!(arena.contains(id1));
        assert!(!arena.contains(NULL_NODE));

        let stats = arena.stats();
        assert_eq!(stats.allocated_count, 3);
        assert_eq!(stats.free_count, 0);
    }

    #[test]
    fn test_arena_slot_reuse() {
        let mut arena: Arena<i32> = Arena::new();

        let id1 = arena.allocate(42);
        let id2 = arena.allocate(84);

        let removed = arena.deallocate(id1);
        assert_eq!(removed, Some(42));
        assert!(!arena.contains(id1));
        assert!(arena.contains(id2));

        // Freed slot is recycled
        let id3 = arena.allocate(168);
        assert_eq!(id3, id1);
        assert_eq!(arena.get(id3), Some(&168));
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.free_count(), 0);
    }

    #[test]
    fn test_generation_bump_on_deallocate() {
        let mut arena: Arena<i32> = Arena::new();

        let id = arena.allocate(1);
        let gen_before = arena.generation(id).unwrap();

        arena.deallocate(id);
        assert_eq!(arena.generation(id), None);

        // Reusing the slot must present a different generation
        let id_again = arena.allocate(2);
        assert_eq!(id_again, id);
        let gen_after = arena.generation(id_again).unwrap();
        assert_ne!(gen_before, gen_after);
    }

    #[test]
    fn test_double_deallocate_is_rejected() {
        let mut arena: Arena<i32> = Arena::new();
        let id = arena.allocate(7);

        assert_eq!(arena.deallocate(id), Some(7));
        assert_eq!(arena.deallocate(id), None);
        assert_eq!(arena.free_count(), 1);
    }
}
