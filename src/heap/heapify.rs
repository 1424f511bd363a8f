/*!
Methods to maintain the heap invariant.

Each method moves entries by swapping pairs of entries, and every swap of a pair of entries also swaps the indices noted for the keys of the pair.
So, the index of a key is only out of sync with the heap within a single swap.
*/

use std::hash::Hash;

use crate::{heap::KeyedHeap, misc::log::targets};

impl<K: Hash + Eq + Clone, V: PartialOrd, D> KeyedHeap<K, V, D> {
    /// Heapify (ensure the heap invariant is upheld) the whole heap.
    ///
    /// Entries with no children are already heaps, and so the method works back from the last entry with a child.
    pub fn heapify(&mut self) {
        for heap_index in (0..self.items.len() / 2).rev() {
            self.heapify_down(heap_index);
        }
        log::debug!(target: targets::HEAP_BUILD, "Heapified {} entries", self.items.len());
    }

    /// Shuffles the entry at `heap_index` up the heap, if required.
    /// Returns the index the entry settles at.
    ///
    /// Swaps the entry with it's parent in the heap, so long as the entry precedes the parent.
    pub(super) fn heapify_up(&mut self, mut heap_index: usize) -> usize {
        let mut parent_index;

        while heap_index > 0 {
            parent_index = heap_parent(heap_index);

            match self
                .mode
                .precedes(&self.items[heap_index].value, &self.items[parent_index].value)
            {
                true => {
                    self.swap(heap_index, parent_index);
                    heap_index = parent_index;
                }
                false => break,
            }
        }

        heap_index
    }

    /// Shuffles the entry at `heap_index` down into the heap, if required.
    /// Returns the index the entry settles at.
    ///
    /// For the trio of an entry and its (at most two) children, a note is kept of whichever of the trio should be nearest the root.
    /// The note begins at the entry, and is revised to the left child and then to the right child, as needed.
    /// Only after the note is settled is a swap made, and if the note remains at the entry, the entry is in place.
    pub(super) fn heapify_down(&mut self, mut heap_index: usize) -> usize {
        let limit = self.items.len();

        let mut left_index;
        let mut right_index;
        let mut update_index;

        loop {
            left_index = heap_left(heap_index);
            if left_index >= limit {
                break;
            }

            update_index = heap_index;

            if self
                .mode
                .precedes(&self.items[left_index].value, &self.items[update_index].value)
            {
                update_index = left_index;
            }

            right_index = heap_right(heap_index);

            if right_index < limit
                && self
                    .mode
                    .precedes(&self.items[right_index].value, &self.items[update_index].value)
            {
                update_index = right_index;
            }

            if update_index == heap_index {
                break;
            }

            self.swap(heap_index, update_index);
            heap_index = update_index;
        }

        heap_index
    }

    /// Settles the entry at `heap_index` when the entry has not been compared with its parent or children.
    /// For example, after the entry replaces an incomparable value, as entries below an incomparable value are never compared with entries above it.
    ///
    /// The entry first moves down.
    /// If the entry then at `heap_index` moves up, the parent it displaces is at `heap_index` above children it has not been compared with, and so moves down in turn.
    pub(super) fn heapify_around(&mut self, heap_index: usize) {
        self.heapify_down(heap_index);
        if self.heapify_up(heap_index) != heap_index {
            self.heapify_down(heap_index);
        }
    }

    /// Swaps the entries at `a` and `b`, together with the indices noted for their keys.
    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);

        if let Some(index) = self.key_index.get_mut(&self.items[a].key) {
            *index = a;
        }
        if let Some(index) = self.key_index.get_mut(&self.items[b].key) {
            *index = b;
        }
    }
}

/// The (heap) index of the left child of `heap_index`.
fn heap_left(heap_index: usize) -> usize {
    (2 * heap_index) + 1
}

/// The (heap) index of the right child of `heap_index`.
fn heap_right(heap_index: usize) -> usize {
    (2 * heap_index) + 2
}

/// The (heap) index of the parent of `heap_index`.
fn heap_parent(heap_index: usize) -> usize {
    heap_index.saturating_sub(1) / 2
}
