//! Error handling and result types for heap and tree operations.
//!
//! This module provides error handling for the priority queue, the positional
//! tree it is built on, and the auxiliary map/list structures, including
//! contextual error constructors and result type aliases for better ergonomics.

/// Error type for heap and positional tree operations.
#[derive(Debug, Clone, PartialEq)]
pub enum HeapTreeError {
    /// Key cannot be ordered by the active comparator.
    InvalidKey(String),
    /// Operation requires an empty tree (or a non-empty one) and got the opposite.
    EmptyTree(String),
    /// Attempted to attach a child to a slot that is already occupied.
    ChildOccupied(String),
    /// Attempted a leaf-only operation on a position with children.
    NotALeaf(String),
    /// Position refers to a node that has since been removed.
    StalePosition(String),
    /// Sequence index out of range.
    IndexOutOfBounds(String),
    /// Internal data structure integrity violation.
    DataIntegrityError(String),
    /// Arena operation failed.
    ArenaError(String),
}

impl HeapTreeError {
    /// Create an InvalidKey error with context
    pub fn invalid_key(context: &str) -> Self {
        Self::InvalidKey(format!(
            "Key cannot be ordered by the active comparator: {}",
            context
        ))
    }

    /// Create an EmptyTree error with context
    pub fn empty_tree(operation: &str) -> Self {
        Self::EmptyTree(format!("Cannot {} on this tree state", operation))
    }

    /// Create a ChildOccupied error with context
    pub fn child_occupied(slot: &str, parent_id: u32) -> Self {
        Self::ChildOccupied(format!(
            "Node {} already has a {} child",
            parent_id, slot
        ))
    }

    /// Create a NotALeaf error with context
    pub fn not_a_leaf(node_id: u32) -> Self {
        Self::NotALeaf(format!(
            "Node {} has children and cannot be removed",
            node_id
        ))
    }

    /// Create a StalePosition error with context
    pub fn stale_position(node_id: u32) -> Self {
        Self::StalePosition(format!(
            "Position for node {} no longer refers to a live node",
            node_id
        ))
    }

    /// Create an IndexOutOfBounds error with context
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds(format!("Index {} out of range for length {}", index, len))
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Create an ArenaError with context
    pub fn arena_error(operation: &str, details: &str) -> Self {
        Self::ArenaError(format!("{} failed: {}", operation, details))
    }

    /// Check if this error is an invalid-key error
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Self::InvalidKey(_))
    }

    /// Check if this error is a stale-position error
    pub fn is_stale_position(&self) -> bool {
        matches!(self, Self::StalePosition(_))
    }

    /// Check if this error is an out-of-bounds error
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::IndexOutOfBounds(_))
    }
}

impl std::fmt::Display for HeapTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeapTreeError::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
            HeapTreeError::EmptyTree(msg) => write!(f, "Empty tree: {}", msg),
            HeapTreeError::ChildOccupied(msg) => write!(f, "Child occupied: {}", msg),
            HeapTreeError::NotALeaf(msg) => write!(f, "Not a leaf: {}", msg),
            HeapTreeError::StalePosition(msg) => write!(f, "Stale position: {}", msg),
            HeapTreeError::IndexOutOfBounds(msg) => write!(f, "Index out of bounds: {}", msg),
            HeapTreeError::DataIntegrityError(msg) => write!(f, "Data integrity error: {}", msg),
            HeapTreeError::ArenaError(msg) => write!(f, "Arena error: {}", msg),
        }
    }
}

impl std::error::Error for HeapTreeError {}

/// Result type for positional tree operations
pub type TreeResult<T> = Result<T, HeapTreeError>;

/// Result type for priority queue and sorted table operations
pub type HeapResult<T> = Result<T, HeapTreeError>;

/// Result type for index-addressed list operations
pub type ListResult<T> = Result<T, HeapTreeError>;

/// Result extension trait for improved error handling
pub trait HeapResultExt<T> {
    /// Convert to a HeapResult with additional context
    fn with_context(self, context: &str) -> HeapResult<T>;

    /// Convert to a HeapResult with operation context
    fn with_operation(self, operation: &str) -> HeapResult<T>;
}

impl<T> HeapResultExt<T> for Result<T, HeapTreeError> {
    fn with_context(self, context: &str) -> HeapResult<T> {
        self.map_err(|e| match e {
            HeapTreeError::InvalidKey(msg) => {
                HeapTreeError::InvalidKey(format!("{}: {}", context, msg))
            }
            HeapTreeError::EmptyTree(msg) => {
                HeapTreeError::EmptyTree(format!("{}: {}", context, msg))
            }
            HeapTreeError::ChildOccupied(msg) => {
                HeapTreeError::ChildOccupied(format!("{}: {}", context, msg))
            }
            HeapTreeError::NotALeaf(msg) => {
                HeapTreeError::NotALeaf(format!("{}: {}", context, msg))
            }
            HeapTreeError::StalePosition(msg) => {
                HeapTreeError::StalePosition(format!("{}: {}", context, msg))
            }
            HeapTreeError::IndexOutOfBounds(msg) => {
                HeapTreeError::IndexOutOfBounds(format!("{}: {}", context, msg))
            }
            HeapTreeError::DataIntegrityError(msg) => HeapTreeError::data_integrity(context, &msg),
            HeapTreeError::ArenaError(msg) => HeapTreeError::arena_error(context, &msg),
        })
    }

    fn with_operation(self, operation: &str) -> HeapResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }
}
