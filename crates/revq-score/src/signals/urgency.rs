//! Urgency keywords in the title or body.

use revq_core::WorkItem;

use crate::ContributionMap;

/// Default keywords: English plus Japanese "urgent", "important", "rush".
pub const URGENT_KEYWORDS: [&str; 5] = ["URGENT", "EMERGENCY", "緊急", "重要", "急ぎ"];

/// Flat contribution for any keyword hit. Repeats do not add up.
pub const URGENCY_SCORE: f64 = 1000.0;

/// Score every item whose body or title contains at least one keyword.
#[must_use]
pub fn urgency<K: AsRef<str>>(items: &[WorkItem], keywords: &[K]) -> ContributionMap {
    items
        .iter()
        .filter(|item| is_urgent(item, keywords))
        .map(|item| (item.key, URGENCY_SCORE))
        .collect()
}

fn is_urgent<K: AsRef<str>>(item: &WorkItem, keywords: &[K]) -> bool {
    keywords.iter().any(|keyword| {
        let keyword: &str = keyword.as_ref();
        !keyword.is_empty() && (item.body.contains(keyword) || item.title.contains(keyword))
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use revq_core::{ItemKey, ItemKind, ReviewState};
    use rstest::rstest;

    use super::*;

    fn item(title: &str, body: &str) -> WorkItem {
        WorkItem {
            key: ItemKey::new(1, 1),
            target_url: String::new(),
            title: title.into(),
            body: body.into(),
            created_at: Utc::now(),
            state: ReviewState::Opened,
            draft: false,
            kind: ItemKind::MergeRequest,
            project_path: String::new(),
            author: None,
            score: 0.0,
        }
    }

    #[rstest]
    #[case::title("URGENT: fix prod", "")]
    #[case::body("", "EMERGENCY rollback needed")]
    #[case::japanese_body("", "緊急対応お願いします")]
    #[case::japanese_title("急ぎ: レビュー", "")]
    fn keyword_in_either_field_scores(#[case] title: &str, #[case] body: &str) {
        let map = urgency(&[item(title, body)], &URGENT_KEYWORDS);
        assert!((map.get(&ItemKey::new(1, 1)) - URGENCY_SCORE).abs() < f64::EPSILON);
    }

    #[test]
    fn many_keywords_still_score_once() {
        let map = urgency(
            &[item("URGENT URGENT 重要", "EMERGENCY 緊急 急ぎ")],
            &URGENT_KEYWORDS,
        );
        assert!((map.get(&ItemKey::new(1, 1)) - URGENCY_SCORE).abs() < f64::EPSILON);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let map = urgency(&[item("urgent-ish", "")], &URGENT_KEYWORDS);
        assert!(map.is_empty());
    }

    #[test]
    fn no_keyword_means_no_entry() {
        let map = urgency(&[item("Refactor", "tidy up")], &URGENT_KEYWORDS);
        assert!(!map.contains(&ItemKey::new(1, 1)));
    }

    #[test]
    fn custom_keywords_replace_defaults() {
        let keywords = vec!["HOTFIX".to_string(), String::new()];
        assert!(urgency(&[item("HOTFIX for login", "")], &keywords).len() == 1);
        assert!(urgency(&[item("URGENT", "")], &keywords).is_empty());
    }
}
