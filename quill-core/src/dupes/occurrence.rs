use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SCAN: AtomicU64 = AtomicU64::new(1);

/// Draws a tag no other scan in this process has used.
pub(crate) fn next_scan_tag() -> u64 {
    NEXT_SCAN.fetch_add(1, Ordering::Relaxed)
}

/// Stable handle to an occurrence within the set that produced it.
///
/// A handle pairs the tag of the scan that created it with the occurrence's
/// position in that scan's result. It stays valid for the life of the
/// [`DuplicateSet`](super::DuplicateSet), whatever gets removed, and is
/// rejected by every other set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OccurrenceId {
    scan: u64,
    slot: usize,
}

impl OccurrenceId {
    pub(crate) fn new(scan: u64, slot: usize) -> Self {
        Self { scan, slot }
    }

    /// Position of the occurrence in its scan result.
    pub fn get(self) -> usize {
        self.slot
    }

    /// Tag of the scan that produced this handle.
    pub fn scan(self) -> u64 {
        self.scan
    }
}

impl fmt::Display for OccurrenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.scan, self.slot)
    }
}

/// One position in the sequence holding a duplicated value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateOccurrence<T> {
    id: OccurrenceId,
    value: T,
    index: usize,
    first: bool,
    last: bool,
    removed: bool,
}

impl<T> DuplicateOccurrence<T> {
    pub(crate) fn new(value: T, index: usize, first: bool, last: bool) -> Self {
        Self {
            id: OccurrenceId::new(0, 0),
            value,
            index,
            first,
            last,
            removed: false,
        }
    }

    /// Handle used to address this occurrence through its set.
    pub fn id(&self) -> OccurrenceId {
        self.id
    }

    /// The element found at this position (the whole element in field mode).
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the record and returns the element.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Current position in the live sequence.
    ///
    /// Once the occurrence is removed this is the position it was removed
    /// from and is no longer updated.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Lowest-index member of its group.
    pub fn is_first(&self) -> bool {
        self.first
    }

    /// Highest-index member of its group.
    pub fn is_last(&self) -> bool {
        self.last
    }

    /// Whether the occurrence has been removed from the sequence.
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    pub(crate) fn assign_id(&mut self, id: OccurrenceId) {
        self.id = id;
    }

    pub(crate) fn shift_down(&mut self) {
        self.index -= 1;
    }

    pub(crate) fn mark_removed(&mut self) {
        self.removed = true;
    }
}
