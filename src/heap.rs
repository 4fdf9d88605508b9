//! Indexed binary min-heap.
//!
//! An array-backed binary heap ordered by key, paired with a value-to-position
//! index. The index gives O(1) membership tests and lets `decrease_key` find
//! an entry without scanning.
//!
//! ```text
//!            (1,a)                 entries:   [(1,a) (2,b) (4,d) (3,c)]
//!           /     \                positions: a -> 0, b -> 1, d -> 2, c -> 3
//!       (2,b)     (4,d)
//!       /
//!   (3,c)
//! ```
//!
//! Comparisons are strict: an entry only moves past another whose key is
//! strictly greater (sift-up) or strictly smaller (sift-down). Among equal
//! keys the order is decided by array position, not by insertion time.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::error::{Error, Result};

/// A `(key, value)` pair held by the heap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Priority of this entry.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Payload of this entry.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Split the entry into its key and value.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// Binary min-heap with unique values and decrease-key.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<K, V> {
    entries: Vec<Entry<K, V>>,
    positions: HashMap<V, usize>,
}

impl<K, V> IndexedMinHeap<K, V> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Create an empty heap with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Number of entries currently held.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Whether the heap holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the minimum entry without removing it.
    ///
    /// # Errors
    /// Returns `Error::EmptyHeap` if the heap holds no entries.
    pub fn peek(&self) -> Result<&Entry<K, V>> {
        self.entries.first().ok_or(Error::EmptyHeap)
    }

    /// Iterate over entries in array order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<K, V>> {
        self.entries.iter()
    }
}

impl<K, V> Default for IndexedMinHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V: Eq + Hash + Clone> IndexedMinHeap<K, V> {
    /// O(1) membership test.
    pub fn contains_value(&self, value: &V) -> bool {
        self.positions.contains_key(value)
    }

    /// Current key of `value`, if present.
    pub fn key_of(&self, value: &V) -> Option<&K> {
        self.positions.get(value).map(|&i| &self.entries[i].key)
    }

    /// Insert `value` with priority `key`.
    ///
    /// # Errors
    /// Returns `Error::DuplicateValue` if `value` is already present. The heap
    /// is left unchanged.
    pub fn add(&mut self, key: K, value: V) -> Result<()> {
        if self.positions.contains_key(&value) {
            return Err(Error::DuplicateValue);
        }
        let index = self.entries.len();
        self.positions.insert(value.clone(), index);
        self.entries.push(Entry { key, value });
        self.sift_up(index);
        Ok(())
    }

    /// Lower the key of `value` to `new_key`.
    ///
    /// # Errors
    /// Returns `Error::ValueNotFound` if `value` is absent, and
    /// `Error::KeyNotDecreased` unless `new_key` is strictly less than the
    /// current key. Either way the heap is left unchanged.
    pub fn decrease_key(&mut self, value: &V, new_key: K) -> Result<()> {
        let index = *self.positions.get(value).ok_or(Error::ValueNotFound)?;
        if new_key >= self.entries[index].key {
            return Err(Error::KeyNotDecreased);
        }
        self.entries[index].key = new_key;
        self.sift_up(index);
        Ok(())
    }

    /// Remove and return the minimum entry.
    ///
    /// # Errors
    /// Returns `Error::EmptyHeap` if the heap holds no entries.
    pub fn extract_min(&mut self) -> Result<Entry<K, V>> {
        if self.entries.is_empty() {
            return Err(Error::EmptyHeap);
        }
        let last = self.entries.len() - 1;
        self.swap(0, last);
        let min = self.entries.pop().ok_or(Error::EmptyHeap)?;
        self.positions.remove(&min.value);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// The set of values currently present.
    pub fn values(&self) -> HashSet<&V> {
        self.entries.iter().map(|e| &e.value).collect()
    }

    /// Check the heap order and that the index agrees with the array.
    pub fn is_valid(&self) -> bool {
        let ordered = (1..self.entries.len())
            .all(|i| self.entries[parent(i)].key <= self.entries[i].key);
        let indexed = self.positions.len() == self.entries.len()
            && self
                .entries
                .iter()
                .enumerate()
                .all(|(i, e)| self.positions.get(&e.value) == Some(&i));
        ordered && indexed
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let p = parent(index);
            if self.entries[p].key <= self.entries[index].key {
                break;
            }
            self.swap(index, p);
            index = p;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let n = self.entries.len();
        loop {
            let l = 2 * index + 1;
            let r = l + 1;
            let mut smallest = index;
            if l < n && self.entries[l].key < self.entries[smallest].key {
                smallest = l;
            }
            if r < n && self.entries[r].key < self.entries[smallest].key {
                smallest = r;
            }
            if smallest == index {
                return;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }

    /// Swap two slots, keeping the index in step.
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        if let Some(pos) = self.positions.get_mut(&self.entries[a].value) {
            *pos = a;
        }
        if let Some(pos) = self.positions.get_mut(&self.entries[b].value) {
            *pos = b;
        }
    }
}

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}
