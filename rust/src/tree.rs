//! Positional operations for [`LinkedBinaryTree`].
//!
//! All structural queries and mutations are expressed against [`Position`]
//! handles. Misuse of the contract (attaching over an occupied child slot,
//! removing a node with children, presenting a stale position) is reported
//! as an error rather than silently tolerated.

use crate::arena::{Arena, ArenaStats};
use crate::error::{HeapTreeError, TreeResult};
use crate::iteration::{Breadthfirst, Elements};
use crate::types::{LinkedBinaryTree, NodeId, Position, TreeNode, NULL_NODE};

/// Which child slot of a parent an attachment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChildSlot {
    Left,
    Right,
}

impl ChildSlot {
    fn name(self) -> &'static str {
        match self {
            ChildSlot::Left => "left",
            ChildSlot::Right => "right",
        }
    }
}

impl<T> LinkedBinaryTree<T> {
    // ============================================================================
    // CONSTRUCTION
    // ============================================================================

    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: NULL_NODE,
        }
    }

    /// Create an empty tree with pre-allocated node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            root: NULL_NODE,
        }
    }

    // ============================================================================
    // QUERY OPERATIONS
    // ============================================================================

    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns true if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Position of the root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<Position> {
        if self.root == NULL_NODE {
            None
        } else {
            Some(self.position(self.root))
        }
    }

    /// Position of `p`'s parent, or `None` if `p` is the root.
    pub fn parent(&self, p: Position) -> TreeResult<Option<Position>> {
        let id = self.resolve(p)?;
        let parent_id = self.node(id)?.parent;
        Ok(self.optional_position(parent_id))
    }

    /// Position of `p`'s left child, or `None` if absent.
    pub fn left(&self, p: Position) -> TreeResult<Option<Position>> {
        let id = self.resolve(p)?;
        let left_id = self.node(id)?.left;
        Ok(self.optional_position(left_id))
    }

    /// Position of `p`'s right child, or `None` if absent.
    pub fn right(&self, p: Position) -> TreeResult<Option<Position>> {
        let id = self.resolve(p)?;
        let right_id = self.node(id)?.right;
        Ok(self.optional_position(right_id))
    }

    /// Number of children of `p` (0, 1, or 2).
    pub fn num_children(&self, p: Position) -> TreeResult<usize> {
        let id = self.resolve(p)?;
        let node = self.node(id)?;
        let mut count = 0;
        if node.left != NULL_NODE {
            count += 1;
        }
        if node.right != NULL_NODE {
            count += 1;
        }
        Ok(count)
    }

    /// Reference to the element stored at `p`.
    pub fn get(&self, p: Position) -> TreeResult<&T> {
        let id = self.resolve(p)?;
        Ok(&self.node(id)?.element)
    }

    /// Mutable reference to the element stored at `p`.
    pub fn get_mut(&mut self, p: Position) -> TreeResult<&mut T> {
        let id = self.resolve(p)?;
        Ok(&mut self.node_mut(id)?.element)
    }

    // ============================================================================
    // MUTATION OPERATIONS
    // ============================================================================

    /// Replace the element stored at `p` in place, returning the old element.
    ///
    /// The node keeps its identity and position; only the payload moves.
    pub fn set(&mut self, p: Position, element: T) -> TreeResult<T> {
        let id = self.resolve(p)?;
        let node = self.node_mut(id)?;
        Ok(std::mem::replace(&mut node.element, element))
    }

    /// Add a root to an empty tree.
    pub fn add_root(&mut self, element: T) -> TreeResult<Position> {
        if self.root != NULL_NODE {
            return Err(HeapTreeError::empty_tree("add a root to a non-empty tree"));
        }
        let id = self.arena.allocate(TreeNode::new(element, NULL_NODE));
        self.root = id;
        Ok(self.position(id))
    }

    /// Attach a left child to a position that lacks one.
    pub fn add_left(&mut self, p: Position, element: T) -> TreeResult<Position> {
        self.attach(p, element, ChildSlot::Left)
    }

    /// Attach a right child to a position that lacks one.
    pub fn add_right(&mut self, p: Position, element: T) -> TreeResult<Position> {
        self.attach(p, element, ChildSlot::Right)
    }

    /// Remove the leaf node at `p`, returning its element.
    ///
    /// Only childless nodes may be removed; this is the sole node
    /// destruction path the tree offers.
    pub fn remove_leaf(&mut self, p: Position) -> TreeResult<T> {
        let id = self.resolve(p)?;
        let (parent_id, left, right) = {
            let node = self.node(id)?;
            (node.parent, node.left, node.right)
        };
        if left != NULL_NODE || right != NULL_NODE {
            return Err(HeapTreeError::not_a_leaf(id));
        }

        if parent_id == NULL_NODE {
            self.root = NULL_NODE;
        } else {
            let parent = self.node_mut(parent_id)?;
            if parent.left == id {
                parent.left = NULL_NODE;
            } else if parent.right == id {
                parent.right = NULL_NODE;
            } else {
                return Err(HeapTreeError::data_integrity(
                    "remove_leaf",
                    "parent does not link back to the removed node",
                ));
            }
        }

        let node = self
            .arena
            .deallocate(id)
            .ok_or_else(|| HeapTreeError::arena_error("deallocate", "node already freed"))?;
        Ok(node.element)
    }

    // ============================================================================
    // TRAVERSAL
    // ============================================================================

    /// Breadth-first (level-order) enumeration of every position: parent
    /// before children, left sibling before right.
    ///
    /// The traversal is derived fresh from the current shape on every call,
    /// never cached.
    pub fn breadthfirst(&self) -> Breadthfirst<'_, T> {
        Breadthfirst::new(self)
    }

    /// Alias for [`breadthfirst`](Self::breadthfirst).
    pub fn positions(&self) -> Breadthfirst<'_, T> {
        self.breadthfirst()
    }

    /// Level-order iterator over element references.
    pub fn elements(&self) -> Elements<'_, T> {
        Elements::new(self)
    }

    /// Statistics of the backing arena.
    pub fn arena_stats(&self) -> ArenaStats {
        self.arena.stats()
    }

    // ============================================================================
    // INTERNAL HELPERS
    // ============================================================================

    /// Mint a position for a live node ID.
    pub(crate) fn position(&self, id: NodeId) -> Position {
        Position {
            id,
            generation: self.arena.generation(id).unwrap_or(0),
        }
    }

    fn optional_position(&self, id: NodeId) -> Option<Position> {
        if id == NULL_NODE {
            None
        } else {
            Some(self.position(id))
        }
    }

    /// Check a position against the arena, rejecting stale handles.
    fn resolve(&self, p: Position) -> TreeResult<NodeId> {
        if self.arena.generation(p.id) == Some(p.generation) {
            Ok(p.id)
        } else {
            Err(HeapTreeError::stale_position(p.id))
        }
    }

    fn node(&self, id: NodeId) -> TreeResult<&TreeNode<T>> {
        self.arena
            .get(id)
            .ok_or_else(|| HeapTreeError::arena_error("node lookup", "missing node"))
    }

    fn node_mut(&mut self, id: NodeId) -> TreeResult<&mut TreeNode<T>> {
        self.arena
            .get_mut(id)
            .ok_or_else(|| HeapTreeError::arena_error("node lookup", "missing node"))
    }

    fn attach(&mut self, p: Position, element: T, slot: ChildSlot) -> TreeResult<Position> {
        let parent_id = self.resolve(p)?;
        let occupied = {
            let node = self.node(parent_id)?;
            match slot {
                ChildSlot::Left => node.left,
                ChildSlot::Right => node.right,
            }
        };
        if occupied != NULL_NODE {
            return Err(HeapTreeError::child_occupied(slot.name(), parent_id));
        }

        let child_id = self.arena.allocate(TreeNode::new(element, parent_id));
        let node = self.node_mut(parent_id)?;
        match slot {
            ChildSlot::Left => node.left = child_id,
            ChildSlot::Right => node.right = child_id,
        }
        Ok(self.position(child_id))
    }
}

impl<T> Default for LinkedBinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_node_tree() -> (LinkedBinaryTree<i32>, Position, Position, Position) {
        let mut tree = LinkedBinaryTree::new();
        let root = tree.add_root(1).unwrap();
        let left = tree.add_left(root, 2).unwrap();
        let right = tree.add_right(root, 3).unwrap();
        (tree, root, left, right)
    }

    #[test]
    fn test_navigation_links() {
        let (tree, root, left, right) = three_node_tree();

        assert_eq!(tree.root(), Some(root));
        assert_eq!(tree.parent(root).unwrap(), None);
        assert_eq!(tree.parent(left).unwrap(), Some(root));
        assert_eq!(tree.parent(right).unwrap(), Some(root));
        assert_eq!(tree.left(root).unwrap(), Some(left));
        assert_eq!(tree.right(root).unwrap(), Some(right));
        assert_eq!(tree.left(left).unwrap(), None);
        assert_eq!(tree.num_children(root).unwrap(), 2);
        assert_eq!(tree.num_children(left).unwrap(), 0);
    }

    #[test]
    fn test_set_replaces_payload_in_place() {
        let (mut tree, root, left, _right) = three_node_tree();

        let old = tree.set(left, 20).unwrap();
        assert_eq!(old, 2);
        assert_eq!(tree.get(left).unwrap(), &20);
        // Structure is untouched
        assert_eq!(tree.parent(left).unwrap(), Some(root));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_add_root_on_non_empty_tree_fails() {
        let (mut tree, _root, _left, _right) = three_node_tree();
        assert!(tree.add_root(9).is_err());
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_add_over_occupied_child_fails() {
        let (mut tree, root, _left, _right) = three_node_tree();

        let err = tree.add_left(root, 9).unwrap_err();
        assert!(matches!(err, HeapTreeError::ChildOccupied(_)));
        let err = tree.add_right(root, 9).unwrap_err();
        assert!(matches!(err, HeapTreeError::ChildOccupied(_)));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_remove_leaf() {
        let (mut tree, root, left, right) = three_node_tree();

        assert_eq!(tree.remove_leaf(left).unwrap(), 2);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.left(root).unwrap(), None);
        assert_eq!(tree.right(root).unwrap(), Some(right));

        assert_eq!(tree.remove_leaf(right).unwrap(), 3);
        assert_eq!(tree.remove_leaf(root).unwrap(), 1);
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
    }

    #[test]
    fn test_remove_with_children_fails() {
        let (mut tree, root, _left, _right) = three_node_tree();

        let err = tree.remove_leaf(root).unwrap_err();
        assert!(matches!(err, HeapTreeError::NotALeaf(_)));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_stale_position_is_rejected() {
        let (mut tree, root, left, _right) = three_node_tree();

        tree.remove_leaf(left).unwrap();
        let err = tree.get(left).unwrap_err();
        assert!(err.is_stale_position());

        // Even after the slot is recycled for a new node, the old handle
        // must not resolve to the new occupant.
        let fresh = tree.add_left(root, 99).unwrap();
        assert_eq!(fresh.id(), left.id());
        assert!(tree.get(left).unwrap_err().is_stale_position());
        assert_eq!(tree.get(fresh).unwrap(), &99);
    }

    #[test]
    fn test_breadthfirst_order() {
        let mut tree = LinkedBinaryTree::new();
        let root = tree.add_root(1).unwrap();
        let l = tree.add_left(root, 2).unwrap();
        let r = tree.add_right(root, 3).unwrap();
        tree.add_left(l, 4).unwrap();
        tree.add_right(l, 5).unwrap();
        tree.add_left(r, 6).unwrap();

        let elements: Vec<i32> = tree.elements().copied().collect();
        assert_eq!(elements, vec![1, 2, 3, 4, 5, 6]);

        // A second traversal reflects the current shape, not a cached one
        tree.add_right(r, 7).unwrap();
        let elements: Vec<i32> = tree.elements().copied().collect();
        assert_eq!(elements, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_breadthfirst_on_empty_tree() {
        let tree: LinkedBinaryTree<i32> = LinkedBinaryTree::new();
        assert_eq!(tree.breadthfirst().count(), 0);
    }
}
