use std::hash::Hash;

use tracing::{debug, trace};

use super::error::DuplicateError;
use super::occurrence::{DuplicateOccurrence, OccurrenceId};
use super::scan::scan_duplicates_by;

/// The result of a duplicate scan bound to the sequence it was taken from.
///
/// The set holds the caller's `Vec` mutably for its whole lifetime, so the
/// only way the sequence changes is through [`DuplicateSet::remove`], which
/// keeps every pending occurrence's index in step with the live sequence.
/// Call [`DuplicateSet::into_occurrences`] to end the borrow.
#[derive(Debug)]
pub struct DuplicateSet<'a, T> {
    items: &'a mut Vec<T>,
    occurrences: Vec<DuplicateOccurrence<T>>,
}

impl<'a, T: Clone> DuplicateSet<'a, T> {
    /// Scans `items`, grouping elements by the owned key `key_fn` extracts.
    pub fn by_key<K, F>(items: &'a mut Vec<T>, key_fn: F) -> Self
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let occurrences = scan_duplicates_by(items.as_slice(), key_fn);
        Self::from_scan(items, occurrences)
    }
}

impl<'a, T> DuplicateSet<'a, T> {
    pub(crate) fn from_scan(
        items: &'a mut Vec<T>,
        occurrences: Vec<DuplicateOccurrence<T>>,
    ) -> Self {
        Self { items, occurrences }
    }

    /// All occurrences found by the scan, ascending by original index.
    pub fn occurrences(&self) -> &[DuplicateOccurrence<T>] {
        &self.occurrences
    }

    /// Looks up an occurrence; `None` for handles from another scan.
    pub fn get(&self, id: OccurrenceId) -> Option<&DuplicateOccurrence<T>> {
        self.occurrences
            .get(id.get())
            .filter(|occurrence| occurrence.id() == id)
    }

    /// Handles of every occurrence, in result order.
    pub fn ids(&self) -> Vec<OccurrenceId> {
        self.occurrences.iter().map(DuplicateOccurrence::id).collect()
    }

    /// Occurrences that have not been removed yet.
    pub fn pending(&self) -> impl Iterator<Item = &DuplicateOccurrence<T>> {
        self.occurrences.iter().filter(|o| !o.is_removed())
    }

    /// Number of occurrences found, removed ones included.
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    /// Whether the scan found no duplicates.
    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    /// Read-only view of the live sequence.
    pub fn sequence(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Removes the element behind `id` from the sequence and returns it.
    ///
    /// Every other pending occurrence, in any group, that sits after the
    /// removed position moves down by one.
    pub fn remove(&mut self, id: OccurrenceId) -> Result<T, DuplicateError> {
        let target =
            self.get(id).ok_or(DuplicateError::UnknownOccurrence(id))?;
        let index = target.index();
        if target.is_removed() {
            return Err(DuplicateError::AlreadyRemoved { id, index });
        }

        let element = self.items.remove(index);

        let mut shifted = 0usize;
        for occurrence in &mut self.occurrences {
            if !occurrence.is_removed() && occurrence.index() > index {
                occurrence.shift_down();
                shifted += 1;
                trace!(
                    target: "quill::dupes",
                    occurrence = %occurrence.id(),
                    index = occurrence.index(),
                    "occurrence shifted"
                );
            }
        }
        self.occurrences[id.get()].mark_removed();

        debug!(
            target: "quill::dupes",
            occurrence = %id,
            index,
            shifted,
            remaining = self.items.len(),
            "duplicate occurrence removed"
        );

        Ok(element)
    }

    /// Removes every pending occurrence that is not the first of its group,
    /// leaving one copy of each duplicated value in place.
    ///
    /// Returns the removed elements in their original order.
    pub fn remove_all_but_first(&mut self) -> Result<Vec<T>, DuplicateError> {
        let targets: Vec<OccurrenceId> = self
            .pending()
            .filter(|o| !o.is_first())
            .map(DuplicateOccurrence::id)
            .collect();

        targets.into_iter().map(|id| self.remove(id)).collect()
    }

    /// Releases the sequence and hands back the occurrence records.
    pub fn into_occurrences(self) -> Vec<DuplicateOccurrence<T>> {
        self.occurrences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> Vec<char> {
        vec!['a', 'b', 'c', 'a', 'd', 'c']
    }

    fn indices<T>(set: &DuplicateSet<'_, T>) -> Vec<(usize, bool)> {
        set.occurrences()
            .iter()
            .map(|o| (o.index(), o.is_removed()))
            .collect()
    }

    #[test]
    fn removal_shifts_later_occurrences_in_every_group() {
        let mut items = letters();
        let mut set = DuplicateSet::by_key(&mut items, |c| *c);
        let ids = set.ids();

        assert_eq!(set.remove(ids[0]).unwrap(), 'a');
        assert_eq!(set.sequence(), &['b', 'c', 'a', 'd', 'c']);
        assert_eq!(
            indices(&set),
            vec![(0, true), (1, false), (2, false), (4, false)]
        );
    }

    #[test]
    fn earlier_occurrences_keep_their_index() {
        let mut items = letters();
        let mut set = DuplicateSet::by_key(&mut items, |c| *c);
        let ids = set.ids();

        assert_eq!(set.remove(ids[3]).unwrap(), 'c');
        assert_eq!(
            indices(&set),
            vec![(0, false), (2, false), (3, false), (5, true)]
        );
    }

    #[test]
    fn removal_order_does_not_matter() {
        let mut items = letters();
        let mut set = DuplicateSet::by_key(&mut items, |c| *c);
        let ids = set.ids();

        set.remove(ids[2]).unwrap();
        set.remove(ids[0]).unwrap();
        assert_eq!(set.sequence(), &['b', 'c', 'd', 'c']);
        let c_last = set.get(ids[3]).unwrap();
        assert_eq!(c_last.index(), 3);
        assert_eq!(set.sequence()[c_last.index()], 'c');

        set.remove(ids[3]).unwrap();
        set.remove(ids[1]).unwrap();
        assert_eq!(set.sequence(), &['b', 'd']);
        assert_eq!(set.pending().count(), 0);
    }

    #[test]
    fn double_removal_is_rejected_without_mutation() {
        let mut items = letters();
        let mut set = DuplicateSet::by_key(&mut items, |c| *c);
        let ids = set.ids();

        set.remove(ids[1]).unwrap();
        let err = set.remove(ids[1]).unwrap_err();
        assert_eq!(err, DuplicateError::AlreadyRemoved { id: ids[1], index: 2 });
        assert_eq!(set.sequence(), &['a', 'b', 'a', 'd', 'c']);
    }

    #[test]
    fn out_of_range_id_is_rejected() {
        let mut items = vec![1, 1];
        let mut set = DuplicateSet::by_key(&mut items, |n| *n);
        let stray = OccurrenceId::new(set.ids()[0].scan(), 9);

        let err = set.remove(stray).unwrap_err();
        assert_eq!(err, DuplicateError::UnknownOccurrence(stray));
        assert_eq!(set.sequence(), &[1, 1]);
    }

    #[test]
    fn id_from_another_set_is_rejected() {
        let mut ones = vec![1, 1];
        let foreign = DuplicateSet::by_key(&mut ones, |n| *n).ids()[1];

        let mut nines = vec![9, 9];
        let mut set = DuplicateSet::by_key(&mut nines, |n| *n);
        assert!(set.get(foreign).is_none());

        let err = set.remove(foreign).unwrap_err();
        assert_eq!(err, DuplicateError::UnknownOccurrence(foreign));
        assert_eq!(set.sequence(), &[9, 9]);
        assert_eq!(set.pending().count(), 2);
    }

    #[test]
    fn remove_all_but_first_keeps_one_of_each() {
        let mut items = vec![3, 1, 3, 2, 1, 3];
        let removed = {
            let mut set = DuplicateSet::by_key(&mut items, |n| *n);
            set.remove_all_but_first().unwrap()
        };
        assert_eq!(removed, vec![3, 1, 3]);
        assert_eq!(items, vec![3, 1, 2]);
    }

    #[test]
    fn into_occurrences_releases_the_sequence() {
        let mut items = vec!["x", "y", "x"];
        let mut set = DuplicateSet::by_key(&mut items, |s| *s);
        let first = set.ids()[0];
        set.remove(first).unwrap();

        let occurrences = set.into_occurrences();
        assert!(occurrences[0].is_removed());
        assert_eq!(occurrences[1].index(), 1);
        assert_eq!(items, vec!["y", "x"]);
    }
}
