use thiserror::Error;

use super::occurrence::OccurrenceId;

/// Rejected removal requests.
///
/// Removing through a [`DuplicateSet`](super::DuplicateSet) never leaves the
/// sequence half-updated: on error nothing is removed or re-indexed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DuplicateError {
    /// The handle came from a different scan or is out of range.
    #[error("occurrence {0} does not belong to this duplicate set")]
    UnknownOccurrence(OccurrenceId),

    /// The occurrence was removed by an earlier call.
    #[error("occurrence {id} was already removed (last index {index})")]
    AlreadyRemoved {
        /// The rejected handle.
        id: OccurrenceId,
        /// Position the occurrence was removed from.
        index: usize,
    },
}
