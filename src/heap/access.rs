/*!
Methods to inspect a heap, and methods specific to min or max heaps.

Aside from [set_value](KeyedHeap::set_value), [set_data](KeyedHeap::set_data), and [data_mut](KeyedHeap::data_mut), each method leaves the heap as it was.
The value of an entry may only be changed through [update](KeyedHeap::update), as any other change may break the heap invariant.
*/

use std::{borrow::Borrow, hash::Hash};

use crate::{
    config::Mode,
    heap::{Entry, KeyedHeap},
    misc::log::targets::{self},
    types::err::{self},
};

impl<K: Hash + Eq + Clone, V: PartialOrd, D> KeyedHeap<K, V, D> {
    /// Peek at the top entry of the heap.
    pub fn top(&self) -> Option<&Entry<K, V, D>> {
        self.items.first()
    }

    /// A count of entries on the heap.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the heap is empty, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True if `key` is on the heap, false otherwise.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.key_index.contains_key(key)
    }

    /// Where the entry of `key` is stored on the heap, if present.
    ///
    /// The root is at index 0, and the children of the entry at index `i` are at `2i + 1` and `2i + 2`, matching the order of [iter](KeyedHeap::iter).
    pub fn position_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.key_index.get(key).copied()
    }

    /// The entry of `key`.
    pub fn entry_of<Q>(&self, key: &Q) -> Result<&Entry<K, V, D>, err::HeapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let heap_index = self.heap_index(key)?;
        Ok(&self.items[heap_index])
    }

    /// The value of the entry of `key`.
    pub fn value_of<Q>(&self, key: &Q) -> Result<&V, err::HeapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entry_of(key).map(|entry| &entry.value)
    }

    /// Sets the value of the entry of `key`.
    ///
    /// The same as [update](KeyedHeap::update).
    pub fn set_value<Q>(&mut self, key: &Q, value: V) -> Result<(), err::HeapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.update(key, value)
    }

    /// The data of the entry of `key`.
    pub fn data_of<Q>(&self, key: &Q) -> Result<&D, err::HeapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entry_of(key).map(|entry| &entry.data)
    }

    /// A mutable reference to the data of the entry of `key`.
    pub fn data_mut<Q>(&mut self, key: &Q) -> Result<&mut D, err::HeapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let heap_index = self.heap_index(key)?;
        Ok(&mut self.items[heap_index].data)
    }

    /// Sets the data of the entry of `key`, and returns the previous data.
    pub fn set_data<Q>(&mut self, key: &Q, data: D) -> Result<D, err::HeapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data_mut(key).map(|present| std::mem::replace(present, data))
    }

    /// An iterator over the entries of the heap, in heap order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<K, V, D>> {
        self.items.iter()
    }

    /// An iterator over the keys of the heap, in heap order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.items.iter().map(|entry| &entry.key)
    }

    /// An iterator over the values of the heap, in heap order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.items.iter().map(|entry| &entry.value)
    }
}

/// Methods which are only valid for a heap with a specific mode.
///
/// Each method returns an error if the mode of the heap does not match the method, or if the heap is empty.
impl<K: Hash + Eq + Clone, V: PartialOrd, D> KeyedHeap<K, V, D> {
    /// The entry with minimum value on a min heap.
    pub fn min(&self) -> Result<&Entry<K, V, D>, err::HeapError> {
        self.top_of(Mode::Min)
    }

    /// The entry with maximum value on a max heap.
    pub fn max(&self) -> Result<&Entry<K, V, D>, err::HeapError> {
        self.top_of(Mode::Max)
    }

    /// The minimum value on a min heap.
    pub fn min_value(&self) -> Result<&V, err::HeapError> {
        self.min().map(|entry| &entry.value)
    }

    /// The maximum value on a max heap.
    pub fn max_value(&self) -> Result<&V, err::HeapError> {
        self.max().map(|entry| &entry.value)
    }

    /// The key of the entry with minimum value on a min heap.
    pub fn min_key(&self) -> Result<&K, err::HeapError> {
        self.min().map(|entry| &entry.key)
    }

    /// The key of the entry with maximum value on a max heap.
    pub fn max_key(&self) -> Result<&K, err::HeapError> {
        self.max().map(|entry| &entry.key)
    }

    /// Removes and returns the entry with minimum value from a min heap.
    pub fn pop_min(&mut self) -> Result<Entry<K, V, D>, err::HeapError> {
        self.top_of(Mode::Min)?;
        self.pop().ok_or(err::HeapError::EmptyHeap)
    }

    /// Removes and returns the entry with maximum value from a max heap.
    pub fn pop_max(&mut self) -> Result<Entry<K, V, D>, err::HeapError> {
        self.top_of(Mode::Max)?;
        self.pop().ok_or(err::HeapError::EmptyHeap)
    }

    fn top_of(&self, mode: Mode) -> Result<&Entry<K, V, D>, err::HeapError> {
        if self.mode != mode {
            log::warn!(target: targets::HEAP_ERROR, "Request for the {mode} of a {} heap", self.mode);
            return Err(err::HeapError::WrongHeapMode);
        }
        self.top().ok_or(err::HeapError::EmptyHeap)
    }
}

impl<'a, K, V, D> IntoIterator for &'a KeyedHeap<K, V, D> {
    type Item = &'a Entry<K, V, D>;
    type IntoIter = std::slice::Iter<'a, Entry<K, V, D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Each entry as `(k: key, v: value, d: data)`, in heap order.
impl<K: std::fmt::Display, V: std::fmt::Display, D: std::fmt::Debug> std::fmt::Display
    for KeyedHeap<K, V, D>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (heap_index, entry) in self.items.iter().enumerate() {
            if heap_index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
