//! Commit-authorship signal.
//!
//! Share of a project's recent commits made by the user, as a percentage.
//! History is fetched once per project per run through [`CommitRatioCache`];
//! every later item of the same project reuses the cached ratio.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use futures::{StreamExt, TryStreamExt, stream};
use revq_core::{CommitRecord, ItemSource, ProjectId, WorkItem};
use tokio::sync::OnceCell;

use crate::{ContributionMap, ScoreError};

/// Percentage of `commits` whose committer e-mail contains `username`.
///
/// `None` for an empty window: the ratio is undefined and the project
/// contributes nothing.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn commit_ratio(commits: &[CommitRecord], username: &str) -> Option<f64> {
    if commits.is_empty() {
        return None;
    }
    let authored = commits
        .iter()
        .filter(|commit| commit.committer_email.contains(username))
        .count();
    Some(100.0 * authored as f64 / commits.len() as f64)
}

/// Per-run memo of commit ratios, keyed by project.
///
/// Each project owns a [`OnceCell`], so concurrent lookups for the same
/// project wait on a single in-flight fetch instead of issuing their own.
#[derive(Debug, Default)]
pub struct CommitRatioCache {
    cells: Mutex<HashMap<ProjectId, Arc<OnceCell<Option<f64>>>>>,
}

impl CommitRatioCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ratio for `project`, fetching its history on first access.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::Commits`] if the source fails to fetch the
    /// history. The cell stays empty, so nothing is cached for that project.
    pub async fn ratio<S: ItemSource>(
        &self,
        source: &S,
        project: ProjectId,
        username: &str,
        since: DateTime<Utc>,
    ) -> Result<Option<f64>, ScoreError> {
        let cell = self.cell(project);
        let ratio = cell
            .get_or_try_init(|| async {
                tracing::debug!(%project, %since, "fetching commit history");
                let commits = source.fetch_commits(project, since).await.map_err(|error| {
                    ScoreError::Commits {
                        project,
                        source: Box::new(error),
                    }
                })?;
                let ratio = commit_ratio(&commits, username);
                if ratio.is_none() {
                    tracing::debug!(%project, "no commits in window; project contributes nothing");
                }
                Ok::<_, ScoreError>(ratio)
            })
            .await?;
        Ok(*ratio)
    }

    /// Number of projects looked up so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn cell(&self, project: ProjectId) -> Arc<OnceCell<Option<f64>>> {
        Arc::clone(self.lock().entry(project).or_default())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<ProjectId, Arc<OnceCell<Option<f64>>>>> {
        self.cells.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Score every item by its project's commit ratio.
///
/// Lookups run `concurrency` at a time. The first failure aborts the signal.
///
/// # Errors
///
/// Returns [`ScoreError::Commits`] when any project history fetch fails.
pub async fn commit<S: ItemSource>(
    source: &S,
    items: &[WorkItem],
    cache: &CommitRatioCache,
    username: &str,
    since: DateTime<Utc>,
    concurrency: usize,
) -> Result<ContributionMap, ScoreError> {
    let entries: Vec<_> = stream::iter(items)
        .map(|item| async move {
            let ratio = cache.ratio(source, item.project(), username, since).await?;
            Ok::<_, ScoreError>(ratio.map(|ratio| (item.key, ratio)))
        })
        .buffer_unordered(concurrency.max(1))
        .try_collect()
        .await?;

    Ok(entries.into_iter().flatten().collect())
}
