//! Sparse per-item contribution maps.
//!
//! Every signal emits one of these. A missing key means "contributes zero",
//! never "unknown".

use std::collections::BTreeMap;

use revq_core::ItemKey;

/// Mapping from item identity to one signal's numeric contribution.
///
/// Backed by a `BTreeMap` so iteration order is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContributionMap(BTreeMap<ItemKey, f64>);

impl ContributionMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` for `key`, replacing any previous entry.
    pub fn insert(&mut self, key: ItemKey, value: f64) {
        self.0.insert(key, value);
    }

    /// Contribution for `key`, zero when absent.
    #[must_use]
    pub fn get(&self, key: &ItemKey) -> f64 {
        self.0.get(key).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn contains(&self, key: &ItemKey) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemKey, &f64)> {
        self.0.iter()
    }
}

impl FromIterator<(ItemKey, f64)> for ContributionMap {
    fn from_iter<I: IntoIterator<Item = (ItemKey, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<(ItemKey, f64)> for ContributionMap {
    fn extend<I: IntoIterator<Item = (ItemKey, f64)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}
