//! Core types and data structures for the heap priority queue.
//!
//! This module contains the fundamental data structures, type definitions,
//! and constants used throughout the crate: position handles, key-value
//! entries, comparator plumbing, and the tree and queue structs themselves.

use std::cmp::Ordering;

use crate::arena::Arena;
use crate::error::{HeapResult, HeapTreeError};

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Node ID type for arena-based allocation
pub type NodeId = u32;

/// Sentinel ID marking an absent node (no parent, no child, no root)
pub const NULL_NODE: NodeId = u32::MAX;

// ============================================================================
// POSITIONS AND ENTRIES
// ============================================================================

/// Opaque handle to a single node of a [`LinkedBinaryTree`].
///
/// All navigation and mutation of the tree goes through positions rather than
/// indices. A position is invalidated when the node it refers to is removed;
/// the embedded generation lets the tree detect and reject such stale handles
/// even after the underlying arena slot has been recycled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) id: NodeId,
    pub(crate) generation: u32,
}

impl Position {
    /// Return the raw node ID (diagnostic use only).
    pub fn id(&self) -> NodeId {
        self.id
    }
}

/// An immutable key-value pair stored in a priority queue or sorted table.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K, V> Entry<K, V> {
    /// Create a new entry from a key and a value.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// The entry's key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The entry's value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consume the entry, returning its key and value.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

// ============================================================================
// COMPARATORS
// ============================================================================

/// Key ordering strategy for the priority queue and sorted table.
///
/// `try_compare` returns `None` when the two keys cannot be ordered; the
/// queue rejects such keys up front, before any mutation.
pub trait Comparator<K> {
    fn try_compare(&self, a: &K, b: &K) -> Option<Ordering>;
}

/// Natural ordering via [`PartialOrd`].
///
/// Keys that do not order against themselves (for example `f64::NAN`) are
/// reported as incomparable rather than being admitted into the structure.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<K: PartialOrd> Comparator<K> for NaturalOrder {
    fn try_compare(&self, a: &K, b: &K) -> Option<Ordering> {
        a.partial_cmp(b)
    }
}

/// Comparator backed by a user-supplied closure over total orderings.
#[derive(Debug, Clone)]
pub struct FnComparator<F>(pub F);

impl<K, F> Comparator<K> for FnComparator<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    fn try_compare(&self, a: &K, b: &K) -> Option<Ordering> {
        Some((self.0)(a, b))
    }
}

/// Reject keys the comparator cannot order, by comparing the key to itself.
pub(crate) fn check_key<K, C: Comparator<K>>(comparator: &C, key: &K) -> HeapResult<()> {
    comparator
        .try_compare(key, key)
        .map(|_| ())
        .ok_or_else(|| HeapTreeError::invalid_key("key does not compare to itself"))
}

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// A single node of the linked binary tree.
///
/// The parent link is a non-owning back-reference used only for upward
/// navigation; ownership of every node lives in the tree's arena.
#[derive(Debug)]
pub(crate) struct TreeNode<T> {
    pub(crate) element: T,
    pub(crate) parent: NodeId,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
}

impl<T> TreeNode<T> {
    pub(crate) fn new(element: T, parent: NodeId) -> Self {
        Self {
            element,
            parent,
            left: NULL_NODE,
            right: NULL_NODE,
        }
    }
}

/// Binary tree addressed by opaque [`Position`] handles.
///
/// Supports root/parent/child navigation, payload query and replacement by
/// position, attaching a root or a missing child, leaf removal, and a fresh
/// breadth-first enumeration of all positions. There is no random-access
/// addressing; every structural question is answered by walking links.
///
/// # Examples
///
/// ```
/// use heaptree::LinkedBinaryTree;
///
/// let mut tree = LinkedBinaryTree::new();
/// let root = tree.add_root("a").unwrap();
/// let left = tree.add_left(root, "b").unwrap();
/// tree.add_right(root, "c").unwrap();
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.parent(left).unwrap(), Some(root));
/// assert_eq!(tree.get(root), Ok(&"a"));
/// ```
#[derive(Debug)]
pub struct LinkedBinaryTree<T> {
    pub(crate) arena: Arena<TreeNode<T>>,
    pub(crate) root: NodeId,
}

/// Min-oriented priority queue of key-value entries, heap-ordered over a
/// [`LinkedBinaryTree`].
///
/// Two structural invariants hold between public operations: the tree is
/// complete (every level full except possibly the last, filled left to
/// right) and heap-ordered (every node's key compares less than or equal to
/// both children's keys under the active comparator).
///
/// # Examples
///
/// ```
/// use heaptree::HeapPriorityQueue;
///
/// let mut queue = HeapPriorityQueue::new();
/// queue.insert(5, "five").unwrap();
/// queue.insert(1, "one").unwrap();
/// queue.insert(3, "three").unwrap();
///
/// assert_eq!(queue.min().map(|e| *e.key()), Some(1));
/// assert_eq!(queue.remove_min().map(|e| e.into_parts()), Some((1, "one")));
/// assert_eq!(queue.len(), 2);
/// ```
#[derive(Debug)]
pub struct HeapPriorityQueue<K, V, C = NaturalOrder> {
    pub(crate) tree: LinkedBinaryTree<Entry<K, V>>,
    pub(crate) comparator: C,
}
