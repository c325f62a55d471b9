//! Sorted associative table over a contiguous, ordered sequence.
//!
//! [`SortedTableMap`] keeps its entries sorted in a `Vec` and answers every
//! lookup with a binary search that lands on the leftmost index whose key is
//! not smaller than the probe. On top of that one search routine sit exact
//! lookup, floor/ceiling/lower/higher queries, and half-open range views.

use std::cmp::Ordering;

use crate::error::HeapResult;
use crate::types::{check_key, Comparator, Entry, NaturalOrder};

/// Map of key-value entries maintained in comparator order, backed by binary
/// search over a dynamically sized sequence.
///
/// # Examples
///
/// ```
/// use heaptree::SortedTableMap;
///
/// let mut map = SortedTableMap::new();
/// map.put(3, "three").unwrap();
/// map.put(1, "one").unwrap();
/// map.put(2, "two").unwrap();
///
/// assert_eq!(map.get(&2), Some(&"two"));
/// assert_eq!(map.floor_entry(&5).map(|e| *e.key()), Some(3));
/// assert_eq!(map.ceiling_entry(&0).map(|e| *e.key()), Some(1));
/// ```
#[derive(Debug)]
pub struct SortedTableMap<K, V, C = NaturalOrder> {
    table: Vec<Entry<K, V>>,
    comparator: C,
}

impl<K: Clone + PartialOrd, V: Clone> SortedTableMap<K, V> {
    /// Create an empty map ordered by the keys' natural ordering.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K: Clone + PartialOrd, V: Clone> Default for SortedTableMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone, C: Comparator<K>> SortedTableMap<K, V, C> {
    /// Create an empty map with an explicit comparator.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            table: Vec::new(),
            comparator,
        }
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Insert or replace the value for `key`, returning the replaced value.
    ///
    /// Rejects keys the comparator cannot order, before any mutation.
    pub fn put(&mut self, key: K, value: V) -> HeapResult<Option<V>> {
        check_key(&self.comparator, &key)?;

        let idx = self.search(&key);
        if self.is_exact(idx, &key) {
            let old = std::mem::replace(&mut self.table[idx].value, value);
            return Ok(Some(old));
        }
        self.table.insert(idx, Entry::new(key, value));
        Ok(None)
    }

    /// Value stored for `key`, if present.
    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = self.search(key);
        if self.is_exact(idx, key) {
            Some(&self.table[idx].value)
        } else {
            None
        }
    }

    /// Remove the entry for `key`, returning its value if it existed.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.search(key);
        if self.is_exact(idx, key) {
            Some(self.table.remove(idx).value)
        } else {
            None
        }
    }

    /// Entry with the smallest key.
    pub fn first_entry(&self) -> Option<&Entry<K, V>> {
        self.table.first()
    }

    /// Entry with the largest key.
    pub fn last_entry(&self) -> Option<&Entry<K, V>> {
        self.table.last()
    }

    /// Entry with the largest key <= `key`.
    pub fn floor_entry(&self, key: &K) -> Option<&Entry<K, V>> {
        let idx = self.search(key);
        if self.is_exact(idx, key) {
            return self.table.get(idx);
        }
        // No exact match: everything at idx and beyond is strictly greater
        if idx == 0 {
            None
        } else {
            self.table.get(idx - 1)
        }
    }

    /// Entry with the smallest key >= `key`.
    pub fn ceiling_entry(&self, key: &K) -> Option<&Entry<K, V>> {
        self.table.get(self.search(key))
    }

    /// Entry with the largest key strictly < `key`.
    pub fn lower_entry(&self, key: &K) -> Option<&Entry<K, V>> {
        let idx = self.search(key);
        if idx == 0 {
            None
        } else {
            self.table.get(idx - 1)
        }
    }

    /// Entry with the smallest key strictly > `key`.
    pub fn higher_entry(&self, key: &K) -> Option<&Entry<K, V>> {
        let idx = self.search(key);
        if self.is_exact(idx, key) {
            self.table.get(idx + 1)
        } else {
            self.table.get(idx)
        }
    }

    /// Entries with keys in `[from, to)`, in ascending order.
    pub fn sub_map(&self, from: &K, to: &K) -> &[Entry<K, V>] {
        let start = self.search(from);
        let end = self.search(to);
        if start >= end {
            &[]
        } else {
            &self.table[start..end]
        }
    }

    /// Iterator over all entries in ascending key order.
    pub fn entries(&self) -> std::slice::Iter<'_, Entry<K, V>> {
        self.table.iter()
    }

    /// Leftmost index whose key is >= `key`; `len()` when every key is
    /// smaller. The insertion point for a missing key.
    fn search(&self, key: &K) -> usize {
        let (mut i, mut j) = (0, self.table.len());
        while i < j {
            let m = (i + j) / 2;
            match self.comparator.try_compare(key, &self.table[m].key) {
                Some(Ordering::Greater) => i = m + 1,
                _ => j = m,
            }
        }
        i
    }

    /// Whether the search landed on an entry whose key equals `key`.
    fn is_exact(&self, idx: usize, key: &K) -> bool {
        idx < self.table.len()
            && self.comparator.try_compare(key, &self.table[idx].key) == Some(Ordering::Equal)
    }
}
