//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena construction and allocation.
///
/// Freeing is deliberately infallible: null, foreign, and already-freed
/// pointers are silent no-ops (see [`crate::PoolArena::free_bytes`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The configured capacity was zero; an arena needs a non-empty buffer.
    ZeroCapacity,
    /// The system allocator could not provide the backing buffer.
    ///
    /// The arena cannot proceed without its buffer, so this surfaces as a
    /// construction-time failure.
    BackingAllocationFailed {
        /// Number of bytes requested from the system allocator.
        requested: usize,
    },
    /// No free region fits and the total free bytes are insufficient.
    Exhausted {
        /// Number of bytes requested.
        requested: usize,
        /// Total free bytes remaining in the arena.
        available: usize,
    },
    /// Total free bytes would suffice, but they are spread across
    /// non-contiguous regions and no single region is large enough.
    ///
    /// The arena never merges adjacent free regions, so this state persists
    /// until a large enough region is freed in one piece.
    Fragmented {
        /// Number of bytes requested.
        requested: usize,
        /// Total free bytes remaining in the arena.
        available: usize,
        /// Size of the largest single free region.
        largest_free: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "arena capacity must be non-zero"),
            Self::BackingAllocationFailed { requested } => {
                write!(f, "backing allocation of {requested} bytes failed")
            }
            Self::Exhausted {
                requested,
                available,
            } => {
                write!(
                    f,
                    "arena exhausted: requested {requested} bytes, {available} bytes available"
                )
            }
            Self::Fragmented {
                requested,
                available,
                largest_free,
            } => {
                write!(
                    f,
                    "arena fragmented: requested {requested} bytes, {available} bytes free \
                     but largest contiguous region is {largest_free} bytes"
                )
            }
        }
    }
}

impl Error for ArenaError {}
