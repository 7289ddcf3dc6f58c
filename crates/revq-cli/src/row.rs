//! Output row for one ranked work item.

use chrono::{DateTime, Utc};
use revq_core::{ItemKind, WorkItem};
use revq_score::{Ranking, SignalScores};
use schemars::JsonSchema;
use serde::Serialize;

/// One ranked work item as printed by `revq rank`.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct RankedRow {
    /// 1-based position in the ranking.
    pub rank: usize,
    /// Total priority score.
    pub score: f64,
    /// Web URL of the merge request or issue.
    pub url: String,
    /// Project path with namespace.
    pub project: String,
    /// Project-scoped iid.
    pub iid: u64,
    pub kind: ItemKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Per-signal contributions, present with `--explain`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signals: Option<SignalScores>,
}

impl RankedRow {
    fn new(rank: usize, item: &WorkItem, signals: Option<SignalScores>) -> Self {
        Self {
            rank,
            score: item.score,
            url: item.target_url.clone(),
            project: item.project_path.clone(),
            iid: item.key.iid,
            kind: item.kind,
            title: item.title.clone(),
            author: item.author.clone(),
            created_at: item.created_at,
            signals,
        }
    }
}

/// Rows for the first `limit` ranked items.
#[must_use]
pub fn ranked_rows(ranking: &Ranking, explain: bool, limit: Option<u32>) -> Vec<RankedRow> {
    let limit = limit.map_or(usize::MAX, |limit| limit as usize);
    ranking
        .items
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, item)| {
            let signals = explain.then(|| ranking.breakdown.signals_for(&item.key));
            RankedRow::new(index + 1, item, signals)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use revq_core::{ItemKey, ReviewState};
    use revq_score::Breakdown;

    use super::*;

    fn item(iid: u64, score: f64) -> WorkItem {
        WorkItem {
            key: ItemKey::new(7, iid),
            target_url: format!("https://gitlab.example.com/g/app/-/merge_requests/{iid}"),
            title: format!("MR {iid}"),
            body: String::new(),
            created_at: Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap(),
            state: ReviewState::Opened,
            draft: false,
            kind: ItemKind::MergeRequest,
            project_path: "g/app".into(),
            author: Some("tarou".into()),
            score,
        }
    }

    fn ranking() -> Ranking {
        let mut breakdown = Breakdown::default();
        breakdown.urgency.insert(ItemKey::new(7, 2), 1000.0);
        breakdown.age.insert(ItemKey::new(7, 2), 51.0);
        breakdown.age.insert(ItemKey::new(7, 1), 12.0);
        Ranking {
            items: vec![item(2, 1051.0), item(1, 12.0), item(3, 0.0)],
            breakdown,
            fetched: 4,
        }
    }

    #[test]
    fn rows_are_numbered_from_one() {
        let rows = ranked_rows(&ranking(), false, None);
        let ranks: Vec<(usize, u64)> = rows.iter().map(|r| (r.rank, r.iid)).collect();
        assert_eq!(ranks, vec![(1, 2), (2, 1), (3, 3)]);
        assert!(rows.iter().all(|r| r.signals.is_none()));
    }

    #[test]
    fn limit_truncates_after_ranking() {
        let rows = ranked_rows(&ranking(), false, Some(2));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].iid, 2);
    }

    #[test]
    fn explain_attaches_signal_breakdown() {
        let rows = ranked_rows(&ranking(), true, None);
        let top = rows[0].signals.expect("signals present");
        assert!((top.urgency - 1000.0).abs() < f64::EPSILON);
        assert!((top.age - 51.0).abs() < f64::EPSILON);
        assert!(top.commit.abs() < f64::EPSILON);
    }

    #[test]
    fn json_omits_absent_optionals() {
        let mut ranking = ranking();
        ranking.items[0].author = None;
        let rows = ranked_rows(&ranking, false, Some(1));
        let value = serde_json::to_value(&rows[0]).unwrap();
        assert!(value.get("author").is_none());
        assert!(value.get("signals").is_none());
        assert_eq!(value["kind"], "MergeRequest");
        assert_eq!(value["project"], "g/app");
    }
}
