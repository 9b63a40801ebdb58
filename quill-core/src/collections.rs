//! Slice conveniences: keyed lookup tables, chunking and shuffling.

use std::collections::HashMap;
use std::hash::Hash;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{Result, UtilError};

/// Indexes `items` by the key `key_fn` extracts.
///
/// Items for which `key_fn` returns `None` are left out. When two items share
/// a key the later one wins.
pub fn array_to_dict<T, K, F>(items: &[T], mut key_fn: F) -> HashMap<K, T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> Option<K>,
{
    items
        .iter()
        .filter_map(|item| key_fn(item).map(|key| (key, item.clone())))
        .collect()
}

/// Splits `items` into consecutive chunks of `size`; the last chunk may be
/// shorter.
pub fn split_array_chunk<T: Clone>(
    items: &[T],
    size: usize,
) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(UtilError::InvalidChunkSize(size));
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Returns a shuffled copy of `items` using the thread-local generator.
pub fn shuffle_array<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_array_with(items, &mut rand::rng())
}

/// Returns a shuffled copy of `items` using `rng`.
pub fn shuffle_array_with<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
