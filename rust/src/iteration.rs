//! Iterator implementations for [`LinkedBinaryTree`].
//!
//! This module contains the level-order traversal iterators. Each iterator is
//! derived fresh from the tree's current shape when constructed; nothing is
//! cached across calls.

use std::collections::VecDeque;

use crate::types::{LinkedBinaryTree, NodeId, Position, NULL_NODE};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Breadth-first (level-order) iterator over tree positions.
///
/// Yields every position exactly once: parent before children, left sibling
/// before right sibling at each level.
pub struct Breadthfirst<'a, T> {
    pub(crate) tree: &'a LinkedBinaryTree<T>,
    frontier: VecDeque<NodeId>,
}

/// Breadth-first iterator over element references.
pub struct Elements<'a, T> {
    positions: Breadthfirst<'a, T>,
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

impl<'a, T> Breadthfirst<'a, T> {
    pub(crate) fn new(tree: &'a LinkedBinaryTree<T>) -> Self {
        let mut frontier = VecDeque::new();
        if tree.root != NULL_NODE {
            frontier.push_back(tree.root);
        }
        Self { tree, frontier }
    }
}

impl<'a, T> Iterator for Breadthfirst<'a, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.frontier.pop_front()?;
        if let Some(node) = self.tree.arena.get(id) {
            if node.left != NULL_NODE {
                self.frontier.push_back(node.left);
            }
            if node.right != NULL_NODE {
                self.frontier.push_back(node.right);
            }
        }
        Some(self.tree.position(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // At least the queued frontier remains, at most the whole tree
        (self.frontier.len(), Some(self.tree.len()))
    }
}

impl<'a, T> Elements<'a, T> {
    pub(crate) fn new(tree: &'a LinkedBinaryTree<T>) -> Self {
        Self {
            positions: Breadthfirst::new(tree),
        }
    }
}

impl<'a, T> Iterator for Elements<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let p = self.positions.next()?;
        self.positions.tree.get(p).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use crate::types::LinkedBinaryTree;

    #[test]
    fn test_positions_cover_every_node_once() {
        let mut tree = LinkedBinaryTree::new();
        let root = tree.add_root(0).unwrap();
        let l = tree.add_left(root, 1).unwrap();
        tree.add_right(root, 2).unwrap();
        tree.add_left(l, 3).unwrap();

        let mut seen = Vec::new();
        for p in tree.positions() {
            assert!(!seen.contains(&p), "position yielded twice");
            seen.push(p);
        }
        assert_eq!(seen.len(), tree.len());
    }

    #[test]
    fn test_parent_precedes_children() {
        let mut tree = LinkedBinaryTree::new();
        let root = tree.add_root(0).unwrap();
        let l = tree.add_left(root, 1).unwrap();
        let r = tree.add_right(root, 2).unwrap();
        tree.add_left(l, 3).unwrap();
        tree.add_right(r, 4).unwrap();

        let order: Vec<_> = tree.positions().collect();
        for p in &order {
            if let Some(parent) = tree.parent(*p).unwrap() {
                let parent_rank = order.iter().position(|q| *q == parent).unwrap();
                let child_rank = order.iter().position(|q| *q == *p).unwrap();
                assert!(parent_rank < child_rank);
            }
        }
    }
}
