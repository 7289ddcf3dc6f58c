//! Filter stage: runs before scoring so no signal work is spent on items
//! that will never be shown.

use std::collections::HashSet;

use revq_core::WorkItem;

/// Keep only open, non-draft items. Order-preserving and idempotent.
#[must_use]
pub fn retain_actionable(items: Vec<WorkItem>) -> Vec<WorkItem> {
    items
        .into_iter()
        .filter(WorkItem::is_actionable)
        .collect()
}

/// Keep the first item of each identity.
///
/// Several pending to-dos can point at the same target; contribution maps are
/// keyed by identity, so later duplicates would otherwise collide.
#[must_use]
pub fn dedupe_by_key(items: Vec<WorkItem>) -> Vec<WorkItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.key))
        .collect()
}
