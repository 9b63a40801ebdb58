//! Errors returned by the stateless helpers.

use thiserror::Error;

/// Invalid arguments passed to a helper.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilError {
    /// `split_array_chunk` was asked for chunks of zero items.
    #[error("Invalid chunk size: {0} (must be at least 1)")]
    InvalidChunkSize(usize),
}

/// Result alias for helper operations.
pub type Result<T> = std::result::Result<T, UtilError>;
