/*!
The mode of a heap.

The mode determines which entries are nearer the root of a heap, and is fixed when the heap is made.
*/

use crate::types::err::{self};

/// Supported heap modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Entries with smaller values are nearer the root.
    #[default]
    Min,

    /// Entries with larger values are nearer the root.
    Max,
}

impl Mode {
    /// True if `a` should be nearer the root than `b` on a heap with the mode, false otherwise.
    ///
    /// Values which are incomparable (e.g. NaN) never precede one another.
    pub fn precedes<V: PartialOrd + ?Sized>(&self, a: &V, b: &V) -> bool {
        match self {
            Self::Min => a < b,
            Self::Max => a > b,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Min => write!(f, "min"),
            Self::Max => write!(f, "max"),
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = err::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            _ => Err(err::ConfigError::UnknownMode),
        }
    }
}
