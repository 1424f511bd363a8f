/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when embedding a heap and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to insertion, removal, and revaluation of [entries](crate::heap::Entry).
    pub const HEAP: &str = "heap";

    /// Logs related to [bulk construction](crate::heap::KeyedHeap::build) and full heapify passes.
    pub const HEAP_BUILD: &str = "heap_build";

    /// Logs related to rejected requests, e.g. a duplicate key.
    pub const HEAP_ERROR: &str = "heap_error";

    /// Logs related to [configuration](crate::config), e.g. an option set out of bounds.
    pub const CONFIG: &str = "config";
}
