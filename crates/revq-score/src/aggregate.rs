//! Score aggregation: sums sparse signal maps per item identity.
//!
//! Per key, contributions are gathered and summed in ascending value order, so
//! the floating-point total is identical for every ordering of the input maps.

use std::collections::BTreeMap;

use revq_core::{ItemKey, WorkItem};

use crate::ContributionMap;

/// Merge contribution maps by summation, absent entries counting as zero.
#[must_use]
pub fn merge<'a, I>(maps: I) -> ContributionMap
where
    I: IntoIterator<Item = &'a ContributionMap>,
{
    let mut parts: BTreeMap<ItemKey, Vec<f64>> = BTreeMap::new();
    for map in maps {
        for (key, value) in map.iter() {
            parts.entry(*key).or_default().push(*value);
        }
    }

    parts
        .into_iter()
        .map(|(key, mut values)| {
            values.sort_by(f64::total_cmp);
            (key, values.into_iter().fold(0.0, |total, value| total + value))
        })
        .collect()
}

/// Write each item's total onto `WorkItem::score`. Items with no entry get 0.
pub fn apply(items: &mut [WorkItem], totals: &ContributionMap) {
    for item in items {
        item.score = totals.get(&item.key);
    }
}
