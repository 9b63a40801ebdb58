//! Duplicate detection with position-tracking removal.
//!
//! A scan walks an ordered sequence and reports every occurrence of every
//! value that appears more than once. Each [`DuplicateOccurrence`] records
//! where it sits in the sequence and whether it is the first or last member
//! of its group. Wrapping the scan in a [`DuplicateSet`] keeps the caller's
//! `Vec` mutably borrowed so occurrences can be removed one at a time while
//! the positions of the remaining ones stay accurate.
//!
//! ```
//! use quill_core::dupes::find_duplicate_values;
//!
//! let mut letters = vec!['a', 'b', 'c', 'a', 'd', 'c'];
//! let mut set = find_duplicate_values(&mut letters);
//! let first_a = set.occurrences()[0].id();
//! let last_a = set.occurrences()[2].id();
//!
//! set.remove(first_a).unwrap();
//! assert_eq!(set.get(last_a).unwrap().index(), 2);
//! assert_eq!(set.sequence(), &['b', 'c', 'a', 'd', 'c']);
//! ```

mod error;
mod occurrence;
mod scan;
mod set;

use std::hash::Hash;

use serde_json::Value;

pub use error::DuplicateError;
pub use occurrence::{DuplicateOccurrence, OccurrenceId};
pub use scan::scan_duplicates_by;
pub use set::DuplicateSet;

/// Scans `items` for repeated values without taking a mutable borrow.
pub fn scan_duplicate_values<T>(items: &[T]) -> Vec<DuplicateOccurrence<T>>
where
    T: Clone + Eq + Hash,
{
    scan_duplicates_by(items, |item| item)
}

/// Scans `items` for elements whose selected field repeats.
///
/// The selector may borrow from the element, e.g. `|user| user.email.as_str()`.
pub fn scan_duplicate_items<'b, T, K, F>(
    items: &'b [T],
    selector: F,
) -> Vec<DuplicateOccurrence<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&'b T) -> K,
{
    scan_duplicates_by(items, selector)
}

/// Finds every occurrence of every value that appears more than once.
///
/// Occurrences are ordered by ascending index across all groups.
pub fn find_duplicate_values<T>(items: &mut Vec<T>) -> DuplicateSet<'_, T>
where
    T: Clone + Eq + Hash,
{
    let occurrences = scan_duplicates_by(items.as_slice(), |item| item);
    DuplicateSet::from_scan(items, occurrences)
}

/// Finds every element whose selected field value appears more than once.
///
/// The occurrences carry the whole element, not just the field. A selector
/// that cannot always produce a field should return an `Option`; elements
/// yielding `None` form a group of their own and duplicate each other.
///
/// The key must be owned: the set takes the `Vec` mutably once the scan is
/// done, so a key borrowed from an element cannot outlive the scan. Use
/// `|user| user.email.clone()` here, or [`scan_duplicate_items`] when a
/// read-only result with borrowed keys is enough.
pub fn find_duplicate_items<T, K, F>(
    items: &mut Vec<T>,
    selector: F,
) -> DuplicateSet<'_, T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    DuplicateSet::by_key(items, selector)
}

/// Field-mode scan over loosely typed JSON records.
///
/// Elements are grouped by the serialized JSON text of `field`, except that
/// numbers compare by numeric value (`1` and `1.0` match, `1` and `"1"` do
/// not). Non-object elements and objects without the field share the `None`
/// group.
pub fn find_duplicate_records<'a>(
    items: &'a mut Vec<Value>,
    field: &str,
) -> DuplicateSet<'a, Value> {
    DuplicateSet::by_key(items, |record| record.get(field).map(record_key))
}

fn record_key(value: &Value) -> String {
    match value {
        Value::Number(number) => match number.as_f64() {
            // -0 and 0 are the same number.
            Some(float) if float == 0.0 => "0".to_string(),
            Some(float) => float.to_string(),
            None => number.to_string(),
        },
        other => other.to_string(),
    }
}
