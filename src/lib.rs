//! A binary heap on keyed entries.
//!
//! keyed_heap is a library providing a priority queue in which each entry is identified by a key, so that any entry (and not only the top entry) may be found, revalued, or removed without a scan of the queue.
//!
//! This is the structure often wanted for shortest path searches, event simulations, and schedulers, where the priority of an item changes while the item is waiting.
//!
//! # Orientation
//!
//! The library is built around a single structure, [KeyedHeap](crate::heap::KeyedHeap).
//!
//! - Each [entry](crate::heap::Entry) on a heap is a key, a value, and some data.
//!   Entries are ordered by value alone, and the data of an entry is carried alongside the entry.
//! - A heap is either a min heap or a max heap, as set by a [mode](crate::config::Mode) when the heap is made.
//! - Alongside the entries, a heap keeps the index of each key, and so (aside from bulk operations) every operation is either constant or logarithmic in the size of the heap.
//! - Requests which cannot be honoured (revaluing a missing key, adding a key twice, etc.) return an [error](crate::types::err), and leave the heap unchanged.
//!
//! # Examples
//!
//! + Order some tasks by deadline, and bring a deadline forward.
//!
//! ```rust
//! # use keyed_heap::config::Mode;
//! # use keyed_heap::heap::KeyedHeap;
//! let mut tasks = KeyedHeap::new(Mode::Min);
//!
//! assert!(tasks.insert("report", 30, "quarterly numbers").is_ok());
//! assert!(tasks.insert("review", 20, "open pull requests").is_ok());
//! assert!(tasks.insert("deploy", 40, "release candidate").is_ok());
//!
//! assert_eq!(tasks.min_key(), Ok(&"review"));
//!
//! assert!(tasks.update("deploy", 10).is_ok());
//! assert_eq!(tasks.min_key(), Ok(&"deploy"));
//!
//! let mut order = vec![];
//! while let Some(task) = tasks.pop() {
//!     order.push(task.key);
//! }
//! assert_eq!(order, vec!["deploy", "review", "report"]);
//! ```
//!
//! + Requests for a missing key return an error, and the heap is unchanged.
//!
//! ```rust
//! # use keyed_heap::config::Mode;
//! # use keyed_heap::heap::KeyedHeap;
//! # use keyed_heap::types::err::{self};
//! let mut heap = KeyedHeap::new(Mode::Max);
//! heap.insert(1, 5.0, ());
//!
//! assert_eq!(heap.update(&2, 1.0), Err(err::HeapError::KeyNotFound));
//! assert_eq!(heap.min().err(), Some(err::HeapError::WrongHeapMode));
//! assert_eq!(heap.len(), 1);
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, with targets listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs of every insertion, removal, and revaluation can be found with `RUST_LOG=heap=trace …` or,
//! - Logs of rejected requests can be found with `RUST_LOG=heap_error …` or,
//! - Logs of configuration options set out of bounds can be found with `RUST_LOG=config …`

#![allow(clippy::single_match)]

pub mod config;
pub mod heap;

pub mod types;

pub mod misc;
