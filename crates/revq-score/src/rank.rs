//! Ranking by total score.

use revq_core::WorkItem;

/// Stable sort by score, descending. Ties keep their incoming order.
pub fn rank(items: &mut [WorkItem]) {
    items.sort_by(|a, b| b.score.total_cmp(&a.score));
}
