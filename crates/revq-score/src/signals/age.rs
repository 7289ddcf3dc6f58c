//! Age signal: grows exponentially with hours since creation, capped.
//!
//! Relative to the `now` handed in, so two runs over the same items differ.

use chrono::{DateTime, Utc};
use revq_core::WorkItem;

use crate::ContributionMap;

/// Upper bound of the age contribution.
pub const AGE_CAP: f64 = 300.0;

/// `exp(hours)` clamped to [`AGE_CAP`].
#[must_use]
pub fn age_score(hours: f64) -> f64 {
    hours.exp().min(AGE_CAP)
}

/// Score every item by its age at `now`.
#[must_use]
pub fn age(items: &[WorkItem], now: DateTime<Utc>) -> ContributionMap {
    items
        .iter()
        .map(|item| (item.key, age_score(hours_between(item.created_at, now))))
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn hours_between(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - created_at).num_milliseconds() as f64 / 3_600_000.0
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use revq_core::{ItemKey, ItemKind, ReviewState};
    use rstest::rstest;

    use super::*;

    fn item_aged(now: DateTime<Utc>, age: TimeDelta) -> WorkItem {
        WorkItem {
            key: ItemKey::new(1, 1),
            target_url: String::new(),
            title: String::new(),
            body: String::new(),
            created_at: now - age,
            state: ReviewState::Opened,
            draft: false,
            kind: ItemKind::Issue,
            project_path: String::new(),
            author: None,
            score: 0.0,
        }
    }

    #[test]
    fn fresh_item_scores_one() {
        assert!((age_score(0.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn two_hours_is_e_squared() {
        let now = Utc::now();
        let map = age(&[item_aged(now, TimeDelta::hours(2))], now);
        let expected = 2.0_f64.exp();
        assert!((map.get(&ItemKey::new(1, 1)) - expected).abs() < 1e-9);
    }

    #[test]
    fn fractional_hours_count() {
        let now = Utc::now();
        let map = age(&[item_aged(now, TimeDelta::minutes(30))], now);
        assert!((map.get(&ItemKey::new(1, 1)) - 0.5_f64.exp()).abs() < 1e-9);
    }

    #[rstest]
    #[case::just_under_cap(5.7)]
    #[case::at_crossover(300.0_f64.ln())]
    #[case::one_week(168.0)]
    #[case::overflow(1.0e6)]
    fn never_exceeds_cap(#[case] hours: f64) {
        let score = age_score(hours);
        assert!(score <= AGE_CAP);
        assert!(score.is_finite());
    }

    #[test]
    fn old_items_hit_the_cap_exactly() {
        let now = Utc::now();
        let map = age(&[item_aged(now, TimeDelta::days(400))], now);
        assert!((map.get(&ItemKey::new(1, 1)) - AGE_CAP).abs() < f64::EPSILON);
    }

    #[test]
    fn every_item_gets_an_entry() {
        let now = Utc::now();
        let mut other = item_aged(now, TimeDelta::zero());
        other.key = ItemKey::new(1, 2);
        let map = age(&[item_aged(now, TimeDelta::hours(1)), other], now);
        assert_eq!(map.len(), 2);
    }
}
