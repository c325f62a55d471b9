//! Index-addressed sequence built atop a hash map.
//!
//! [`HashList`] stores element `i` under integer key `i` in an
//! `FnvHashMap`, keeping the key range contiguous from 0 to `len - 1`.
//! Insertion and removal in the middle remap the trailing keys one by one,
//! which makes both O(n); lookups are map lookups.

use fnv::FnvHashMap;

use crate::error::{HeapTreeError, ListResult};

/// Sequence with positional access backed by a hash map with contiguous
/// integer keys.
///
/// # Examples
///
/// ```
/// use heaptree::HashList;
///
/// let mut list = HashList::new();
/// list.push("a");
/// list.push("c");
/// list.add(1, "b").unwrap();
///
/// assert_eq!(list.get(0), Ok(&"a"));
/// assert_eq!(list.get(1), Ok(&"b"));
/// assert_eq!(list.remove(2), Ok("c"));
/// assert_eq!(list.len(), 2);
/// ```
#[derive(Debug)]
pub struct HashList<E> {
    map: FnvHashMap<usize, E>,
}

impl<E> HashList<E> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            map: FnvHashMap::default(),
        }
    }

    /// Create an empty list with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: FnvHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Element at index `i`.
    pub fn get(&self, i: usize) -> ListResult<&E> {
        self.check_index(i, self.len())?;
        self.map
            .get(&i)
            .ok_or_else(|| HeapTreeError::data_integrity("get", "missing key inside bounds"))
    }

    /// Replace the element at index `i`, returning the old element.
    pub fn set(&mut self, i: usize, element: E) -> ListResult<E> {
        self.check_index(i, self.len())?;
        self.map
            .insert(i, element)
            .ok_or_else(|| HeapTreeError::data_integrity("set", "missing key inside bounds"))
    }

    /// Insert `element` at index `i`, shifting later elements up by one.
    ///
    /// `i` may equal `len()`, which appends.
    pub fn add(&mut self, i: usize, element: E) -> ListResult<()> {
        self.check_index(i, self.len() + 1)?;

        // Shift keys i..len up by one, from the top down, so no entry holds
        // key i when the new element lands there
        let mut j = self.len();
        while j > i {
            let shifted = self.take(j - 1)?;
            self.map.insert(j, shifted);
            j -= 1;
        }
        self.map.insert(i, element);
        Ok(())
    }

    /// Append `element` at the end of the list.
    pub fn push(&mut self, element: E) {
        let end = self.len();
        self.map.insert(end, element);
    }

    /// Remove and return the element at index `i`, shifting later elements
    /// down by one.
    pub fn remove(&mut self, i: usize) -> ListResult<E> {
        self.check_index(i, self.len())?;

        let removed = self.take(i)?;

        // Close the gap: pull keys i+1..=len down by one
        let remaining = self.len();
        for j in i..remaining {
            let shifted = self.take(j + 1)?;
            self.map.insert(j, shifted);
        }
        Ok(removed)
    }

    /// Iterator over elements in index order.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            list: self,
            index: 0,
        }
    }

    fn check_index(&self, i: usize, bound: usize) -> ListResult<()> {
        if i < bound {
            Ok(())
        } else {
            Err(HeapTreeError::index_out_of_bounds(i, self.len()))
        }
    }

    fn take(&mut self, key: usize) -> ListResult<E> {
        self.map
            .remove(&key)
            .ok_or_else(|| HeapTreeError::data_integrity("shift", "integer keys must be contiguous"))
    }
}

impl<E> Default for HashList<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over list elements in index order.
pub struct Iter<'a, E> {
    list: &'a HashList<E>,
    index: usize,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.list.map.get(&self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}
