/*!
Methods to build a heap from many entries at once, and to revalue every entry at once.

Building a heap by [build](KeyedHeap::build) or [from_values](KeyedHeap::from_values) loads every entry before restoring the heap invariant in a single pass, rather than restoring the invariant after each insertion.

When the keys of a heap are of no interest, keys may be generated from a counter kept by the heap.

```rust
# use keyed_heap::{config::Mode, heap::KeyedHeap};
let mut heap: KeyedHeap<usize, u32> = KeyedHeap::from_values(Mode::Max, [3, 9, 4]);

assert_eq!(heap.max_key(), Ok(&1));
assert_eq!(heap.push_value(12), 3);
assert_eq!(heap.max_key(), Ok(&3));
```
*/

use std::hash::Hash;

use crate::{
    config::Mode,
    heap::{Entry, KeyedHeap},
    misc::log::targets::{self},
    types::err::{self},
};

impl<K: Hash + Eq + Clone, V: PartialOrd, D> KeyedHeap<K, V, D> {
    /// A heap of the given mode with the given entries.
    ///
    /// If two entries share a key no heap is built, and an error is returned.
    pub fn build<I>(mode: Mode, entries: I) -> Result<Self, err::HeapError>
    where
        I: IntoIterator<Item = (K, V, D)>,
    {
        let entries = entries.into_iter();
        let mut heap = Self::with_capacity(mode, entries.size_hint().0);

        for (key, value, data) in entries {
            if heap.key_index.contains_key(&key) {
                log::warn!(target: targets::HEAP_ERROR, "Build with a duplicate key");
                return Err(err::HeapError::DuplicateKey);
            }
            heap.push_entry(Entry::new(key, value, data));
        }

        heap.heapify();
        Ok(heap)
    }

    /// Replaces the value of each entry with the result of applying `f` to the value, and then heapifies.
    ///
    /// For example, scaling every value by some factor.
    pub fn apply_to_all(&mut self, f: impl Fn(&V) -> V) {
        for entry in self.items.iter_mut() {
            entry.value = f(&entry.value);
        }
        self.heapify();
    }
}

/// Methods for heaps whose keys are generated by the heap.
///
/// Keys are generated from a counter, beginning at zero.
/// Keys may still be given to [insert](KeyedHeap::insert), and the counter skips over any key already on the heap.
impl<V: PartialOrd, D: Default> KeyedHeap<usize, V, D> {
    /// A heap of the given mode, with an entry for each value keyed by the position of the value in `values`.
    pub fn from_values<I>(mode: Mode, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let values = values.into_iter();
        let mut heap = Self::with_capacity(mode, values.size_hint().0);

        for value in values {
            let key = heap.fresh_key();
            heap.push_entry(Entry::new(key, value, D::default()));
        }

        heap.heapify();
        heap
    }

    /// Adds `value` to the heap with a fresh key, and returns the key.
    pub fn push_value(&mut self, value: V) -> usize {
        let key = self.fresh_key();
        let heap_index = self.push_entry(Entry::new(key, value, D::default()));
        self.heapify_up(heap_index);
        key
    }

    /// The least key not yet generated and not on the heap.
    fn fresh_key(&mut self) -> usize {
        while self.key_index.contains_key(&self.key_no) {
            self.key_no += 1;
        }
        let key = self.key_no;
        self.key_no += 1;
        key
    }
}
