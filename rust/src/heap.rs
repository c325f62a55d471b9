//! Heap priority queue operations.
//!
//! [`HeapPriorityQueue`] keeps its entries in a [`LinkedBinaryTree`] and
//! maintains two invariants across insertions and removals: tree completeness
//! and min-heap order under the active comparator. Both are restored through
//! positional operations only; there is no array addressing anywhere. The
//! position that keeps the tree complete is found by counting a fresh
//! breadth-first traversal, which makes `insert` and `remove_min` O(n) by
//! deliberate design rather than the O(log n) an index-addressed heap would
//! reach.

use std::cmp::Ordering;

use crate::error::{HeapResult, HeapResultExt, TreeResult};
use crate::types::{
    check_key, Comparator, Entry, FnComparator, HeapPriorityQueue, LinkedBinaryTree, NaturalOrder,
    Position,
};

// ============================================================================
// CONSTRUCTION
// ============================================================================

impl<K: Clone + PartialOrd, V: Clone> HeapPriorityQueue<K, V> {
    /// Create an empty queue ordered by the keys' natural ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use heaptree::HeapPriorityQueue;
    ///
    /// let queue: HeapPriorityQueue<i32, &str> = HeapPriorityQueue::new();
    /// assert!(queue.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K: Clone + PartialOrd, V: Clone> Default for HeapPriorityQueue<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone, F> HeapPriorityQueue<K, V, FnComparator<F>>
where
    F: Fn(&K, &K) -> Ordering,
{
    /// Create an empty queue ordered by a user-supplied comparison closure.
    ///
    /// # Examples
    ///
    /// ```
    /// use heaptree::HeapPriorityQueue;
    ///
    /// // A max-queue via a reversed comparator
    /// let mut queue = HeapPriorityQueue::with_comparator_fn(|a: &i32, b: &i32| b.cmp(a));
    /// queue.insert(1, ()).unwrap();
    /// queue.insert(9, ()).unwrap();
    /// assert_eq!(queue.min().map(|e| *e.key()), Some(9));
    /// ```
    pub fn with_comparator_fn(compare: F) -> Self {
        Self::with_comparator(FnComparator(compare))
    }
}

impl<K: Clone, V: Clone, C: Comparator<K>> HeapPriorityQueue<K, V, C> {
    /// Create an empty queue with an explicit comparator.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: LinkedBinaryTree::new(),
            comparator,
        }
    }

    // ============================================================================
    // PUBLIC QUEUE OPERATIONS
    // ============================================================================

    /// Returns the number of entries in the queue.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns true if the queue holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entry with the minimal key, or `None` for an empty queue.
    ///
    /// O(1) peek at the root; no mutation.
    pub fn min(&self) -> Option<&Entry<K, V>> {
        let root = self.tree.root()?;
        self.tree.get(root).ok()
    }

    /// Insert a key-value pair, returning a copy of the stored entry.
    ///
    /// The key is checked against the comparator before any mutation; a key
    /// that cannot be ordered (for example `f64::NAN` under natural
    /// ordering) is rejected and the queue is left unchanged. The returned
    /// entry is for diagnostic use only; the queue never re-accepts it.
    pub fn insert(&mut self, key: K, value: V) -> HeapResult<Entry<K, V>> {
        check_key(&self.comparator, &key)?;

        let newest = Entry::new(key, value);
        let returned = newest.clone();

        // Place the entry at the position that keeps the tree complete,
        // then restore heap order upward from there.
        let p = self.add_next(newest).with_operation("insert")?;
        self.upheap(p).with_operation("insert")?;

        Ok(returned)
    }

    /// Remove and return the entry with the minimal key.
    ///
    /// An empty queue is a normal outcome, reported as `None` rather than an
    /// error.
    pub fn remove_min(&mut self) -> Option<Entry<K, V>> {
        let root = self.tree.root()?;
        let last = self.last_position()?;

        // Swap root and last payloads, then drop the (leaf) last node so
        // completeness is preserved.
        self.swap(root, last)
            .expect("root and last position must both be live");
        let min = self
            .tree
            .remove_leaf(last)
            .expect("last breadth-first position must be a leaf");

        if let Some(new_root) = self.tree.root() {
            self.downheap(new_root)
                .expect("downheap positions must remain live");
        }

        Some(min)
    }

    // ============================================================================
    // HEAP INVARIANT MAINTENANCE
    // ============================================================================

    /// Bubble the entry at `p` upward until its parent's key is no larger.
    ///
    /// Ties stop the bubbling; equal keys never move past each other.
    fn upheap(&mut self, mut p: Position) -> TreeResult<()> {
        while let Some(parent) = self.tree.parent(p)? {
            if self.compare_positions(p, parent)? != Ordering::Less {
                break;
            }
            self.swap(p, parent)?;
            p = parent;
        }
        Ok(())
    }

    /// Bubble the entry at `p` downward along its smaller-keyed children.
    ///
    /// The right child is considered only when present; ties prefer the
    /// left. Bubbling stops as soon as no child key is strictly smaller.
    fn downheap(&mut self, mut p: Position) -> TreeResult<()> {
        while let Some(left) = self.tree.left(p)? {
            let mut smallest = left;
            if let Some(right) = self.tree.right(p)? {
                if self.compare_positions(right, left)? == Ordering::Less {
                    smallest = right;
                }
            }
            if self.compare_positions(smallest, p)? != Ordering::Less {
                break;
            }
            self.swap(p, smallest)?;
            p = smallest;
        }
        Ok(())
    }

    /// Exchange the entries stored at `a` and `b` in place.
    ///
    /// Node identities stay fixed; only payloads move. The tree layer offers
    /// no way to re-parent a node, so this is the only legal exchange.
    fn swap(&mut self, a: Position, b: Position) -> TreeResult<()> {
        if a == b {
            return Ok(());
        }
        let temp = self.tree.get(a)?.clone();
        let other = self.tree.set(b, temp)?;
        self.tree.set(a, other)?;
        Ok(())
    }

    /// Compare the keys at two positions under the active comparator.
    fn compare_positions(&self, a: Position, b: Position) -> TreeResult<Ordering> {
        let a_entry = self.tree.get(a)?;
        let b_entry = self.tree.get(b)?;
        self.comparator
            .try_compare(&a_entry.key, &b_entry.key)
            .ok_or_else(|| crate::error::HeapTreeError::invalid_key("stored keys stopped comparing"))
    }

    // ============================================================================
    // COMPLETENESS BOOKKEEPING
    // ============================================================================

    /// Create a node for `entry` at the position that keeps the tree
    /// complete, and return that position.
    ///
    /// For a tree growing to `new_size` nodes, the parent of the new node is
    /// the node at 1-indexed breadth-first rank `new_size / 2`, with an even
    /// `new_size` attaching as a left child and an odd one as a right child.
    /// This is the array-heap `parent(i) = (i - 1) / 2` arithmetic translated
    /// into breadth-first rank, located by a linear level-order scan.
    fn add_next(&mut self, entry: Entry<K, V>) -> TreeResult<Position> {
        if self.tree.is_empty() {
            return self.tree.add_root(entry);
        }

        let new_size = self.tree.len() + 1;
        let parent_rank = new_size / 2;
        let mut parent = None;
        for (count, p) in self.tree.breadthfirst().enumerate() {
            if count + 1 == parent_rank {
                parent = Some(p);
                break;
            }
        }
        let parent = parent.ok_or_else(|| {
            crate::error::HeapTreeError::data_integrity(
                "add_next",
                "breadth-first scan ended before the parent rank",
            )
        })?;

        if new_size % 2 == 0 {
            self.tree.add_left(parent, entry)
        } else {
            self.tree.add_right(parent, entry)
        }
    }

    /// Position visited last in breadth-first order.
    ///
    /// Always a leaf in a complete tree, which is what lets `remove_min`
    /// remove it after the root swap.
    fn last_position(&self) -> Option<Position> {
        self.tree.breadthfirst().last()
    }
}
