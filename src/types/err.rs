//! Error types used in the library.
//!
//! - Every error reflects some request which could not be honoured, e.g. revaluing a key which is not on the heap.
//! - No error is transient, and so there is nothing to retry.
//! - Requests are checked before any mutation, so the heap is unchanged after any error.
//!
//! Names of the error enums overlap with the concerns they relate to.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The crate-level error, wrapping the error of each concern.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Heap(HeapError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Config error: {e}"),
            Self::Heap(e) => write!(f, "Heap error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors when configuring a heap.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A mode other than `min` or `max` was requested.
    UnknownMode,

    /// A value outside the bounds of some [ConfigOption](crate::config::ConfigOption).
    OutOfBounds,
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMode => write!(f, "unknown heap mode"),
            Self::OutOfBounds => write!(f, "value out of bounds"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors from operations on a [KeyedHeap](crate::heap::KeyedHeap).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HeapError {
    /// The key is not on the heap.
    KeyNotFound,

    /// The key is already on the heap.
    DuplicateKey,

    /// A min-specific method was called on a max heap, or a max-specific method on a min heap.
    WrongHeapMode,

    /// The heap has no entries.
    EmptyHeap,
}

impl From<HeapError> for ErrorKind {
    fn from(e: HeapError) -> Self {
        ErrorKind::Heap(e)
    }
}

impl std::fmt::Display for HeapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KeyNotFound => write!(f, "key not found"),
            Self::DuplicateKey => write!(f, "duplicate key"),
            Self::WrongHeapMode => write!(f, "wrong heap mode"),
            Self::EmptyHeap => write!(f, "empty heap"),
        }
    }
}

impl std::error::Error for HeapError {}
