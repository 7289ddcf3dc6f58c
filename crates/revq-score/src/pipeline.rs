//! End-to-end scoring run.
//!
//! fetch → filter → five signals → merge → apply → rank. Any fetch failure
//! aborts the run; there is no partial ranking.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use revq_core::{ItemKey, ItemSource, WorkItem};
use schemars::JsonSchema;
use serde::Serialize;

use crate::signals::commit::CommitRatioCache;
use crate::signals::diff::DEFAULT_PRIORITY_EXTENSIONS;
use crate::signals::urgency::URGENT_KEYWORDS;
use crate::{ContributionMap, ScoreError, aggregate, filter, rank, signals};

/// Default commit lookback window in days.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 365;

/// Default number of concurrent auxiliary fetches.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Inputs the scoring engine consumes. Owned by the caller's configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringOptions {
    /// Target username for mention and authorship matching.
    pub username: String,
    /// Path suffixes that earn diff points, in order.
    pub priority_extensions: Vec<String>,
    /// Keywords that mark an item urgent.
    pub urgent_keywords: Vec<String>,
    /// Commit history window.
    pub lookback_days: u32,
    /// Maximum in-flight commit/diff fetches.
    pub concurrency: usize,
}

impl ScoringOptions {
    /// Options for `username` with every other field at its default.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            priority_extensions: DEFAULT_PRIORITY_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            urgent_keywords: URGENT_KEYWORDS.iter().map(ToString::to_string).collect(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

/// The five scoring signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Urgency,
    Mention,
    Age,
    Diff,
    Commit,
}

impl Signal {
    pub const ALL: [Self; 5] = [
        Self::Urgency,
        Self::Mention,
        Self::Age,
        Self::Diff,
        Self::Commit,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Urgency => "urgency",
            Self::Mention => "mention",
            Self::Age => "age",
            Self::Diff => "diff",
            Self::Commit => "commit",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every intermediate contribution map of a run, for diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Breakdown {
    pub urgency: ContributionMap,
    pub mention: ContributionMap,
    pub age: ContributionMap,
    pub diff: ContributionMap,
    pub commit: ContributionMap,
}

impl Breakdown {
    #[must_use]
    pub const fn map(&self, signal: Signal) -> &ContributionMap {
        match signal {
            Signal::Urgency => &self.urgency,
            Signal::Mention => &self.mention,
            Signal::Age => &self.age,
            Signal::Diff => &self.diff,
            Signal::Commit => &self.commit,
        }
    }

    pub fn maps(&self) -> impl Iterator<Item = &ContributionMap> {
        Signal::ALL.into_iter().map(move |signal| self.map(signal))
    }

    /// Per-signal contributions for one item, zero where a signal had no entry.
    #[must_use]
    pub fn signals_for(&self, key: &ItemKey) -> SignalScores {
        SignalScores {
            urgency: self.urgency.get(key),
            mention: self.mention.get(key),
            age: self.age.get(key),
            diff: self.diff.get(key),
            commit: self.commit.get(key),
        }
    }
}

/// One item's contribution from each signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, JsonSchema)]
pub struct SignalScores {
    pub urgency: f64,
    pub mention: f64,
    pub age: f64,
    pub diff: f64,
    pub commit: f64,
}

/// Result of a scoring run.
#[derive(Debug, Clone)]
pub struct Ranking {
    /// Filtered items, highest score first.
    pub items: Vec<WorkItem>,
    /// Intermediate per-signal maps.
    pub breakdown: Breakdown,
    /// Items returned by the source before filtering.
    pub fetched: usize,
}

/// Drives a scoring run against an [`ItemSource`].
#[derive(Debug, Clone)]
pub struct Scorer {
    options: ScoringOptions,
}

impl Scorer {
    #[must_use]
    pub const fn new(options: ScoringOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &ScoringOptions {
        &self.options
    }

    /// Fetch pending items from `source` and rank them.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError`] if any fetch fails.
    pub async fn run<S: ItemSource>(&self, source: &S) -> Result<Ranking, ScoreError> {
        let items = source
            .fetch_todos()
            .await
            .map_err(|error| ScoreError::Todos {
                source: Box::new(error),
            })?;
        tracing::debug!(count = items.len(), "fetched work items");
        self.score_at(source, items, Utc::now()).await
    }

    /// Rank already-fetched `items`, measuring age against `now`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError`] if a commit or diff fetch fails.
    pub async fn score_at<S: ItemSource>(
        &self,
        source: &S,
        items: Vec<WorkItem>,
        now: DateTime<Utc>,
    ) -> Result<Ranking, ScoreError> {
        let fetched = items.len();
        let mut items = filter::dedupe_by_key(filter::retain_actionable(items));
        tracing::debug!(fetched, kept = items.len(), "filtered work items");

        let options = &self.options;
        let since = lookback_start(now, options.lookback_days);
        let cache = CommitRatioCache::new();

        let urgency = signals::urgency(&items, &options.urgent_keywords);
        let mention = signals::mention(&items, &options.username);
        let age = signals::age(&items, now);
        let (diff, commit) = tokio::try_join!(
            signals::diff(
                source,
                &items,
                &options.priority_extensions,
                options.concurrency
            ),
            signals::commit(
                source,
                &items,
                &cache,
                &options.username,
                since,
                options.concurrency
            ),
        )?;

        let breakdown = Breakdown {
            urgency,
            mention,
            age,
            diff,
            commit,
        };

        let totals = aggregate::merge(breakdown.maps());
        aggregate::apply(&mut items, &totals);
        rank::rank(&mut items);

        tracing::info!(
            fetched,
            ranked = items.len(),
            projects = cache.len(),
            "ranked work items"
        );

        Ok(Ranking {
            items,
            breakdown,
            fetched,
        })
    }
}

/// Start of the commit window, saturating at the earliest representable time.
fn lookback_start(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    TimeDelta::try_days(i64::from(days))
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
