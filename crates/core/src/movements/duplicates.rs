//! Duplicate movement id detection.

use std::collections::{BTreeSet, HashSet};

/// Returns every id that occurs more than once, ascending and distinct.
///
/// Single pass: an id already seen goes into the duplicate set. The input is
/// not modified and an empty result means every id is unique.
pub fn find_duplicate_ids<I>(ids: I) -> Vec<u64>
where
    I: IntoIterator<Item = u64>,
{
    let mut seen = HashSet::new();
    let mut duplicates = BTreeSet::new();

    for id in ids {
        if !seen.insert(id) {
            duplicates.insert(id);
        }
    }

    duplicates.into_iter().collect()
}
