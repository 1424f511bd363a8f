/*!
A binary heap on keyed entries.

In other words, a heap backed by a vector of [entries](Entry) with a companion map which tracks the current location of each key in the vector.

The companion map allows an arbitrary entry to be found without a scan of the heap, and so the value of any entry may be revised, or any entry removed, in logarithmic time.
This is useful when priorities change after an entry has been added, e.g. when a shorter path to a node is found during a shortest path search.

Whether the heap is a min heap or a max heap is set by a [Mode] when the heap is made, and fixed for the life of the heap.

```rust
# use keyed_heap::{config::Mode, heap::KeyedHeap, types::err::HeapError};
let mut heap = KeyedHeap::new(Mode::Min);

heap.insert("b", 20, ());
heap.insert("a", 10, ());
heap.insert("c", 30, ());

assert_eq!(heap.top().map(|entry| entry.key), Some("a"));

assert!(heap.update("c", 5).is_ok());
assert_eq!(heap.top().map(|entry| entry.key), Some("c"));

assert_eq!(heap.insert("a", 1, ()), Err(HeapError::DuplicateKey));
assert_eq!(heap.delete("b").map(|entry| entry.value), Ok(20));

assert_eq!(heap.pop().map(|entry| entry.key), Some("c"));
assert_eq!(heap.pop().map(|entry| entry.key), Some("a"));
assert!(heap.pop().is_none());
```

Methods are split across a few files:
- Core methods, here.
- Methods to maintain the heap invariant, in [heapify](self::heapify).
- Methods to inspect the heap, and mode-specific methods, in [access](self::access).
- Methods to build a heap from many entries at once, in [build](self::build).
*/

use std::{borrow::Borrow, collections::HashMap, hash::Hash};

use crate::{
    config::{Config, Mode},
    misc::log::targets::{self},
    types::err::{self},
};

mod entry;
pub use entry::Entry;

pub mod access;
pub mod build;
pub mod heapify;

/// The keyed heap struct.
///
/// The heap maintains three invariants:
/// - For any entry other than the root, the entry does not [precede](KeyedHeap::comparator) its parent.
/// - No two entries share a key.
/// - For each entry at index `i` with key `k`, `key_index[k] == i`.
#[derive(Clone, Debug)]
pub struct KeyedHeap<K, V, D = ()> {
    /// The entries, as a binary tree in array form.
    items: Vec<Entry<K, V, D>>,

    /// The current index in `items` of each key.
    key_index: HashMap<K, usize>,

    mode: Mode,

    /// A counter used to generate keys, see [push_value](KeyedHeap::push_value).
    key_no: usize,
}

impl<K: Hash + Eq + Clone, V: PartialOrd, D> KeyedHeap<K, V, D> {
    /// An empty heap with the given mode.
    pub fn new(mode: Mode) -> Self {
        KeyedHeap {
            items: Vec::default(),
            key_index: HashMap::default(),
            mode,
            key_no: 0,
        }
    }

    /// An empty heap with the given mode and space reserved for `capacity` entries.
    pub fn with_capacity(mode: Mode, capacity: usize) -> Self {
        KeyedHeap {
            items: Vec::with_capacity(capacity),
            key_index: HashMap::with_capacity(capacity),
            mode,
            key_no: 0,
        }
    }

    /// An empty heap, as configured.
    ///
    /// A capacity beyond the bound of the capacity option is limited to the bound.
    pub fn from_config(config: &Config) -> Self {
        let capacity = std::cmp::min(config.capacity.value, config.capacity.max);
        Self::with_capacity(config.mode, capacity)
    }

    /// The mode of the heap.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// True if `a` should be nearer the root than `b`, given the mode of the heap.
    pub fn comparator(&self, a: &Entry<K, V, D>, b: &Entry<K, V, D>) -> bool {
        self.mode.precedes(&a.value, &b.value)
    }

    /// Adds an entry to the heap.
    ///
    /// If `key` is already on the heap the heap is unchanged and an error is returned.
    pub fn insert(&mut self, key: K, value: V, data: D) -> Result<(), err::HeapError> {
        if self.key_index.contains_key(&key) {
            log::warn!(target: targets::HEAP_ERROR, "Insert of a duplicate key");
            return Err(err::HeapError::DuplicateKey);
        }

        let heap_index = self.push_entry(Entry::new(key, value, data));
        let settled_index = self.heapify_up(heap_index);
        log::trace!(target: targets::HEAP, "Insert settled at {settled_index} of {}", self.items.len());
        Ok(())
    }

    /// Removes and returns the top entry of the heap, if one exists.
    ///
    /// To pop with a check that the heap is a min (or max) heap, see [pop_min](KeyedHeap::pop_min) (or [pop_max](KeyedHeap::pop_max)).
    pub fn pop(&mut self) -> Option<Entry<K, V, D>> {
        match self.items.is_empty() {
            true => None,
            false => Some(self.remove_at(0)),
        }
    }

    /// Removes and returns the entry with key `key`.
    pub fn delete<Q>(&mut self, key: &Q) -> Result<Entry<K, V, D>, err::HeapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let heap_index = self.heap_index(key)?;
        Ok(self.remove_at(heap_index))
    }

    /// Revalues the entry with key `key` to `value`, and moves the entry to restore the heap invariant.
    ///
    /// If the revised value is at least as close to the root as the present value the entry moves up, otherwise the entry moves down.
    /// If the revised and present values are incomparable (e.g. either is NaN), the entry is settled from both directions, as neither direction is known.
    pub fn update<Q>(&mut self, key: &Q, value: V) -> Result<(), err::HeapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let heap_index = self.heap_index(key)?;
        let entry = &mut self.items[heap_index];
        let toward_root = match entry.value.partial_cmp(&value) {
            Some(_) => Some(!self.mode.precedes(&entry.value, &value)),
            None => None,
        };
        entry.value = value;

        match toward_root {
            Some(true) => {
                let settled_index = self.heapify_up(heap_index);
                log::trace!(target: targets::HEAP, "Update moved {heap_index} up to {settled_index}");
            }

            Some(false) => {
                let settled_index = self.heapify_down(heap_index);
                log::trace!(target: targets::HEAP, "Update moved {heap_index} down to {settled_index}");
            }

            None => {
                self.heapify_around(heap_index);
                log::trace!(target: targets::HEAP, "Update settled {heap_index} from an incomparable value");
            }
        }
        Ok(())
    }

    /// Removes all entries from the heap.
    /// The mode of the heap is unchanged, though the key counter is reset.
    pub fn clear(&mut self) {
        self.items.clear();
        self.key_index.clear();
        self.key_no = 0;
        log::debug!(target: targets::HEAP, "Cleared");
    }
}

impl<K: Hash + Eq + Clone, V: PartialOrd, D> KeyedHeap<K, V, D> {
    /// The index of `key` on the heap, if present.
    fn heap_index<Q>(&self, key: &Q) -> Result<usize, err::HeapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.key_index.get(key) {
            Some(heap_index) => Ok(*heap_index),
            None => {
                log::debug!(target: targets::HEAP_ERROR, "Missing key");
                Err(err::HeapError::KeyNotFound)
            }
        }
    }

    /// Pushes `entry` to the end of the heap and notes the index of the entry, without restoring the heap invariant.
    ///
    /// Assumes the key of `entry` is not on the heap.
    fn push_entry(&mut self, entry: Entry<K, V, D>) -> usize {
        let heap_index = self.items.len();
        self.key_index.insert(entry.key.clone(), heap_index);
        self.items.push(entry);
        heap_index
    }

    /// Removes the entry at `heap_index`.
    ///
    /// The last entry of the heap takes the place of the removed entry, and is then settled from both directions.
    /// Assumes `heap_index` is some location on the heap.
    fn remove_at(&mut self, heap_index: usize) -> Entry<K, V, D> {
        let removed = self.items.swap_remove(heap_index);
        self.key_index.remove(&removed.key);

        if heap_index < self.items.len() {
            if let Some(moved_index) = self.key_index.get_mut(&self.items[heap_index].key) {
                *moved_index = heap_index;
            }

            self.heapify_around(heap_index);
        }

        log::trace!(target: targets::HEAP, "Removed {heap_index}, {} remain", self.items.len());
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Checks the heap order and index invariants directly on the internal structures.
    pub(super) fn is_coherent<K: Hash + Eq + Clone, V: PartialOrd, D>(
        heap: &KeyedHeap<K, V, D>,
    ) -> bool {
        if heap.items.len() != heap.key_index.len() {
            return false;
        }
        for (heap_index, entry) in heap.items.iter().enumerate() {
            if heap.key_index.get(&entry.key) != Some(&heap_index) {
                return false;
            }
            if heap_index > 0 && heap.comparator(entry, &heap.items[(heap_index - 1) / 2]) {
                return false;
            }
        }
        true
    }

    #[test]
    fn heap_simple() {
        let mut test_heap = KeyedHeap::new(Mode::Max);
        test_heap.insert(6, 10, ()).unwrap();
        test_heap.insert(5, 20, ()).unwrap();
        test_heap.insert(4, 30, ()).unwrap();
        test_heap.insert(1, 60, ()).unwrap();
        test_heap.insert(0, 70, ()).unwrap();
        assert!(is_coherent(&test_heap));

        assert_eq!(test_heap.pop().map(|e| e.key), Some(0));
        assert_eq!(test_heap.pop().map(|e| e.key), Some(1));
        assert_eq!(test_heap.pop().map(|e| e.key), Some(4));
        assert_eq!(test_heap.pop().map(|e| e.key), Some(5));
        assert_eq!(test_heap.pop().map(|e| e.key), Some(6));
        assert!(test_heap.pop().is_none());
        assert!(is_coherent(&test_heap));
    }

    #[test]
    fn heap_update() {
        let mut test_heap = KeyedHeap::new(Mode::Max);
        test_heap.insert(6, 10, ()).unwrap();
        test_heap.insert(4, 30, ()).unwrap();
        test_heap.insert(1, 60, ()).unwrap();
        test_heap.insert(0, 70, ()).unwrap();

        test_heap.update(&0, 0).unwrap();
        test_heap.update(&1, 1).unwrap();
        test_heap.update(&4, 4).unwrap();
        test_heap.update(&6, 6).unwrap();
        assert!(is_coherent(&test_heap));

        assert_eq!(test_heap.pop().map(|e| e.key), Some(6));
        assert_eq!(test_heap.pop().map(|e| e.key), Some(4));
        assert_eq!(test_heap.pop().map(|e| e.key), Some(1));
        assert_eq!(test_heap.pop().map(|e| e.key), Some(0));
        assert!(test_heap.pop().is_none());
    }

    #[test]
    fn heap_update_both_directions() {
        let mut test_heap = KeyedHeap::new(Mode::Min);
        for key in 0..32 {
            test_heap.insert(key, key * 10, ()).unwrap();
        }

        test_heap.update(&0, 1000).unwrap();
        assert!(is_coherent(&test_heap));
        assert_eq!(test_heap.top().map(|e| e.key), Some(1));

        test_heap.update(&31, -1).unwrap();
        assert!(is_coherent(&test_heap));
        assert_eq!(test_heap.top().map(|e| e.key), Some(31));

        // An equal value leaves the entry where it is.
        test_heap.update(&31, -1).unwrap();
        assert!(is_coherent(&test_heap));
        assert_eq!(test_heap.top().map(|e| e.key), Some(31));
    }

    #[test]
    fn heap_remove() {
        let mut test_heap = KeyedHeap::new(Mode::Max);
        for key in [6, 5, 4, 1, 0] {
            test_heap.insert(key, key, ()).unwrap();
        }

        assert!(test_heap.delete(&4).is_ok());
        assert_eq!(test_heap.delete(&4), Err(err::HeapError::KeyNotFound));
        assert!(test_heap.delete(&6).is_ok());
        assert!(is_coherent(&test_heap));

        test_heap.insert(4, 1, ()).unwrap();

        assert_eq!(test_heap.pop().map(|e| e.key), Some(5));
        let next = test_heap.pop().map(|e| e.key);
        assert!(next == Some(1) || next == Some(4));
        test_heap.pop();
        assert_eq!(test_heap.pop().map(|e| e.key), Some(0));
    }

    #[test]
    fn remove_moves_last_entry_up() {
        // Removing a leaf from one subtree may bring a smaller entry from the other subtree.
        let mut test_heap = KeyedHeap::new(Mode::Min);
        for (key, value) in [(0, 0), (1, 100), (2, 1), (3, 101), (4, 102), (5, 2), (6, 3)] {
            test_heap.insert(key, value, ()).unwrap();
        }
        assert_eq!(test_heap.items.last().map(|e| e.key), Some(6));

        test_heap.delete(&3).unwrap();
        assert!(is_coherent(&test_heap));
        assert_eq!(test_heap.position_of(&6), Some(1));
    }

    fn drain_values<K: Hash + Eq + Clone, D>(heap: &mut KeyedHeap<K, f64, D>) -> Vec<f64> {
        let mut values = vec![];
        while let Some(entry) = heap.pop() {
            values.push(entry.value);
        }
        values
    }

    #[test]
    fn update_from_incomparable() {
        let mut test_heap = KeyedHeap::new(Mode::Min);
        test_heap.insert(0, f64::NAN, ()).unwrap();
        test_heap.insert(1, 1.0, ()).unwrap();
        test_heap.insert(2, 2.0, ()).unwrap();
        assert_eq!(test_heap.position_of(&0), Some(0));

        test_heap.update(&0, 5.0).unwrap();
        assert!(is_coherent(&test_heap));
        assert_eq!(test_heap.top().map(|e| e.key), Some(1));
        assert_eq!(drain_values(&mut test_heap), vec![1.0, 2.0, 5.0]);
    }

    #[test]
    fn update_from_incomparable_over_hidden_child() {
        // The child of the NaN entry was never compared with the root.
        let mut test_heap = KeyedHeap::new(Mode::Min);
        for (key, value) in [(0, 5.0), (1, f64::NAN), (2, 6.0), (3, 1.0)] {
            test_heap.insert(key, value, ()).unwrap();
        }
        assert_eq!(test_heap.position_of(&3), Some(3));

        test_heap.update(&1, 2.0).unwrap();
        assert!(is_coherent(&test_heap));
        assert_eq!(test_heap.top().map(|e| e.key), Some(3));
        assert_eq!(drain_values(&mut test_heap), vec![1.0, 2.0, 5.0, 6.0]);
    }

    #[test]
    fn update_to_incomparable_and_back() {
        let mut test_heap = KeyedHeap::new(Mode::Min);
        for key in 0..7 {
            test_heap.insert(key, key as f64, ()).unwrap();
        }

        test_heap.update(&0, f64::NAN).unwrap();
        assert!(is_coherent(&test_heap));
        assert_eq!(test_heap.len(), 7);

        test_heap.update(&0, 10.0).unwrap();
        assert!(is_coherent(&test_heap));
        assert_eq!(
            drain_values(&mut test_heap),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 10.0]
        );
    }

    #[test]
    fn delete_incomparable() {
        let mut test_heap = KeyedHeap::new(Mode::Min);
        for (key, value) in [(0, 5.0), (1, f64::NAN), (2, 6.0), (3, 1.0), (4, 7.0)] {
            test_heap.insert(key, value, ()).unwrap();
        }

        assert!(test_heap.delete(&1).is_ok_and(|e| e.value.is_nan()));
        assert!(is_coherent(&test_heap));
        assert_eq!(drain_values(&mut test_heap), vec![1.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn duplicate_key_unchanged() {
        let mut test_heap = KeyedHeap::new(Mode::Min);
        test_heap.insert("a", 1, 'a').unwrap();
        assert_eq!(
            test_heap.insert("a", 0, 'b'),
            Err(err::HeapError::DuplicateKey)
        );
        assert_eq!(test_heap.len(), 1);
        assert_eq!(test_heap.value_of("a"), Ok(&1));
        assert_eq!(test_heap.data_of("a"), Ok(&'a'));
        assert!(is_coherent(&test_heap));
    }

    #[test]
    fn clear_keeps_mode() {
        let mut test_heap = KeyedHeap::new(Mode::Max);
        test_heap.insert(0, 1.0, ()).unwrap();
        test_heap.clear();
        assert!(test_heap.is_empty());
        assert_eq!(test_heap.mode(), Mode::Max);
        assert!(test_heap.key_index.is_empty());
        assert!(test_heap.pop().is_none());
    }

    #[test]
    fn from_config() {
        let mut config = Config::with_mode(Mode::Max);
        config.capacity.max = 64;
        config.capacity.value = 1024;
        let test_heap: KeyedHeap<u32, u32> = KeyedHeap::from_config(&config);
        assert_eq!(test_heap.mode(), Mode::Max);
        assert!(test_heap.items.capacity() >= 64);
        assert!(test_heap.items.capacity() < 1024);
    }
}
