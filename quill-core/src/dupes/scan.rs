use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use tracing::debug;

use super::occurrence::{DuplicateOccurrence, OccurrenceId, next_scan_tag};

/// Groups `items` by the key `key_fn` extracts and reports every member of
/// every group with two or more members.
///
/// The result is sorted by ascending index. Within a group the lowest index
/// is flagged `first` and the highest `last`; a group always has at least two
/// members so the two flags never land on the same occurrence.
pub fn scan_duplicates_by<'b, T, K, F>(
    items: &'b [T],
    mut key_fn: F,
) -> Vec<DuplicateOccurrence<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&'b T) -> K,
{
    // Groups are kept in discovery order; each holds ascending indices.
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for (index, item) in items.iter().enumerate() {
        match slots.entry(key_fn(item)) {
            Entry::Occupied(slot) => groups[*slot.get()].push(index),
            Entry::Vacant(slot) => {
                slot.insert(groups.len());
                groups.push(vec![index]);
            }
        }
    }

    let mut duplicate_groups = 0usize;
    let mut occurrences = Vec::new();
    for indices in groups.iter().filter(|indices| indices.len() > 1) {
        duplicate_groups += 1;
        let last = indices.len() - 1;
        for (position, &index) in indices.iter().enumerate() {
            occurrences.push(DuplicateOccurrence::new(
                items[index].clone(),
                index,
                position == 0,
                position == last,
            ));
        }
    }

    occurrences.sort_unstable_by_key(DuplicateOccurrence::index);
    let scan = next_scan_tag();
    for (slot, occurrence) in occurrences.iter_mut().enumerate() {
        occurrence.assign_id(OccurrenceId::new(scan, slot));
    }

    debug!(
        target: "quill::dupes",
        scanned = items.len(),
        groups = duplicate_groups,
        occurrences = occurrences.len(),
        "duplicate scan complete"
    );

    occurrences
}
