//! Heap-ordered priority queue over a positional linked binary tree.
//!
//! This crate provides a min-oriented priority queue whose entries live in a
//! linked binary tree addressed by opaque positions rather than array
//! indices. The queue maintains tree completeness and heap order through
//! payload swaps and breadth-first rank arithmetic alone, the way the
//! structure is usually presented before the array encoding is introduced.
//! Alongside it ship two smaller structures on the same entry and comparator
//! plumbing: a sorted table map answering floor/ceiling queries by binary
//! search, and a hash-backed index-addressed list.

mod arena;
mod error;
mod hash_list;
mod heap;
mod iteration;
#[cfg(test)]
mod macros;
mod sorted_table;
mod tree;
mod types;
mod validation;

pub use arena::{Arena, ArenaStats};
pub use error::{HeapResult, HeapResultExt, HeapTreeError, ListResult, TreeResult};
pub use hash_list::{HashList, Iter as HashListIter};
pub use iteration::{Breadthfirst, Elements};
pub use sorted_table::SortedTableMap;
pub use types::{
    Comparator, Entry, FnComparator, HeapPriorityQueue, LinkedBinaryTree, NaturalOrder, NodeId,
    Position, NULL_NODE,
};
