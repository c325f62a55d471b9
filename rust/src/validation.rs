//! Validation and debugging utilities for [`HeapPriorityQueue`].
//!
//! This module contains the invariant checking methods, debugging utilities,
//! and test helpers for the heap. Both structural invariants are verified:
//! completeness (breadth-first ranks 1..n populated with no gaps) and heap
//! order (every parent key compares <= both child keys under the active
//! comparator), plus consistency between the tree links and the arena.

use std::cmp::Ordering;

use crate::types::{Comparator, HeapPriorityQueue, Position};

impl<K: Clone, V: Clone, C: Comparator<K>> HeapPriorityQueue<K, V, C> {
    /// Check if the queue maintains its structural invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        let order: Vec<Position> = self.tree.breadthfirst().collect();
        let n = order.len();

        // Arena and traversal must agree on the node count
        if n != self.tree.len() {
            return Err(format!(
                "Breadth-first traversal visited {} nodes but tree reports {}",
                n,
                self.tree.len()
            ));
        }
        let stats = self.tree.arena_stats();
        if stats.allocated_count != n {
            return Err(format!(
                "{} nodes in tree vs {} allocated in arena",
                n, stats.allocated_count
            ));
        }

        if let Some(first) = order.first() {
            if self.tree.root() != Some(*first) {
                return Err("Breadth-first traversal does not start at the root".to_string());
            }
        }

        for (i, p) in order.iter().enumerate() {
            let rank = i + 1;
            self.check_node_invariants(&order, n, *p, rank)?;
        }
        Ok(())
    }

    /// Check completeness, linkage, and heap order at one breadth-first rank.
    fn check_node_invariants(
        &self,
        order: &[Position],
        n: usize,
        p: Position,
        rank: usize,
    ) -> Result<(), String> {
        let left = self.tree.left(p).map_err(|e| e.to_string())?;
        let right = self.tree.right(p).map_err(|e| e.to_string())?;

        // Completeness: in level order, rank r has a left child exactly when
        // 2r <= n and a right child exactly when 2r + 1 <= n
        if left.is_some() != (2 * rank <= n) {
            return Err(format!(
                "Completeness violated: unexpected left child state at rank {} of {}",
                rank, n
            ));
        }
        if right.is_some() != (2 * rank + 1 <= n) {
            return Err(format!(
                "Completeness violated: unexpected right child state at rank {} of {}",
                rank, n
            ));
        }

        for (child, child_rank) in [(left, 2 * rank), (right, 2 * rank + 1)] {
            let Some(child) = child else { continue };

            // The child must occupy its computed breadth-first rank
            if order[child_rank - 1] != child {
                return Err(format!(
                    "Child of rank {} does not sit at breadth-first rank {}",
                    rank, child_rank
                ));
            }

            // Parent back-link must agree with the downward link
            let back = self.tree.parent(child).map_err(|e| e.to_string())?;
            if back != Some(p) {
                return Err(format!(
                    "Parent back-link mismatch between ranks {} and {}",
                    rank, child_rank
                ));
            }

            // Heap order at this edge
            let parent_entry = self.tree.get(p).map_err(|e| e.to_string())?;
            let child_entry = self.tree.get(child).map_err(|e| e.to_string())?;
            match self
                .comparator
                .try_compare(&parent_entry.key, &child_entry.key)
            {
                Some(Ordering::Greater) => {
                    return Err(format!(
                        "Heap order violated between ranks {} and {}",
                        rank, child_rank
                    ));
                }
                Some(_) => {}
                None => {
                    return Err(format!(
                        "Stored keys at ranks {} and {} are incomparable",
                        rank, child_rank
                    ));
                }
            }
        }
        Ok(())
    }

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> Result<(), String> {
        self.check_invariants_detailed()
    }
}

// ============================================================================
// DEBUGGING AND TESTING UTILITIES
// ============================================================================

impl<K: Clone + std::fmt::Debug, V: Clone, C: Comparator<K>> HeapPriorityQueue<K, V, C> {
    /// Prints the heap shape with keys for debugging.
    pub fn print_tree(&self) {
        println!("Heap structure ({} entries):", self.len());
        if let Some(root) = self.tree.root() {
            self.print_position(root, 0);
        }
    }

    fn print_position(&self, p: Position, depth: usize) {
        let indent = "  ".repeat(depth);
        match self.tree.get(p) {
            Ok(entry) => println!("{}[id={}] key={:?}", indent, p.id(), entry.key),
            Err(_) => println!("{}[id={}] <missing>", indent, p.id()),
        }
        if let Ok(Some(left)) = self.tree.left(p) {
            self.print_position(left, depth + 1);
        }
        if let Ok(Some(right)) = self.tree.right(p) {
            self.print_position(right, depth + 1);
        }
    }
}
