//! Shared helpers for Quill services.
//!
//! The [`dupes`] module carries the only stateful logic: scanning a
//! sequence for repeated values and removing individual repeats while
//! keeping the reported positions correct. The remaining modules are
//! small, stateless conveniences.

pub mod collections;
pub mod dupes;
pub mod emptiness;
pub mod error;
pub mod paths;
pub mod props;
pub mod time;

pub use quill_model as model;

pub use dupes::{
    DuplicateError, DuplicateOccurrence, DuplicateSet, OccurrenceId,
    find_duplicate_items, find_duplicate_records, find_duplicate_values,
};
pub use error::{Result, UtilError};
