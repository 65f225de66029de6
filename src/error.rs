use thiserror::Error;

/// Errors reported by the fallible entry points of this crate.
///
/// The tree algorithms themselves can't fail; these cover caller mistakes
/// that the `try_`/builder APIs check for instead of panicking.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// An operation that needs at least one node was given an empty tree.
    #[error("{operation} requires a non-empty tree")]
    EmptyTree {
        /// Name of the operation that was attempted.
        operation: &'static str,
    },

    /// A level-order description placed a key below an absent slot.
    #[error("key at slot {index} has no parent (slot {parent} is empty)")]
    OrphanedKey {
        /// Slot of the orphaned key.
        index: usize,
        /// Slot of its missing parent.
        parent: usize,
    },

    /// The number of tree shapes doesn't fit in a `u64`.
    #[error("tree shape count for {n} keys overflows u64")]
    CountOverflow {
        /// Number of keys that was asked for.
        n: usize,
    },
}
