use std::collections::BTreeMap;

use crate::analyzers::types::Counted;

/// Counts occurrences of each value, keyed in ascending order.
pub fn tally<K: Ord, I: IntoIterator<Item = K>>(values: I) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Most frequent value. On a tie the smallest value wins, so months and
/// weekdays resolve by ordinal, hours numerically and text lexicographically.
/// Returns `None` for empty input.
pub fn mode<K: Ord, I: IntoIterator<Item = K>>(values: I) -> Option<Counted<K>> {
    tally(values)
        .into_iter()
        .fold(None, |best: Option<Counted<K>>, (value, count)| match best {
            Some(best) if best.count >= count => Some(best),
            _ => Some(Counted { value, count }),
        })
}

/// Frequency table ordered by count descending, then value ascending.
pub fn count_table<K: Ord, I: IntoIterator<Item = K>>(values: I) -> Vec<Counted<K>> {
    let mut table: Vec<_> = tally(values)
        .into_iter()
        .map(|(value, count)| Counted { value, count })
        .collect();
    // stable sort keeps the ascending key order within equal counts
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}
