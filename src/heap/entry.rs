/// An entry on a [KeyedHeap](crate::heap::KeyedHeap).
///
/// Only the value of an entry is used to order the heap.
/// The data of an entry is carried alongside the key and value, and may be anything at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<K, V, D = ()> {
    pub key: K,
    pub value: V,
    pub data: D,
}

impl<K, V, D> Entry<K, V, D> {
    pub fn new(key: K, value: V, data: D) -> Self {
        Entry { key, value, data }
    }

    /// The key, value, and data of the entry.
    pub fn into_parts(self) -> (K, V, D) {
        (self.key, self.value, self.data)
    }
}

impl<K: std::fmt::Display, V: std::fmt::Display, D: std::fmt::Debug> std::fmt::Display
    for Entry<K, V, D>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(k: {}, v: {}, d: {:?})", self.key, self.value, self.data)
    }
}
