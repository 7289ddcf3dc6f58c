//! Diff-relevance signal: merge requests touching priority file types rank
//! slightly higher. Capped so it never outweighs urgency or mentions.

use futures::{StreamExt, TryStreamExt, stream};
use revq_core::{ChangedFile, ItemSource, WorkItem};

use crate::{ContributionMap, ScoreError};

/// Points per `(file, extension)` match.
pub const POINTS_PER_MATCH: u32 = 10;

/// Upper bound of the diff contribution.
pub const DIFF_CAP: u32 = 50;

/// Default priority extensions.
pub const DEFAULT_PRIORITY_EXTENSIONS: [&str; 3] = [".go", ".tf", ".py"];

/// Score a changeset. Every extension a path ends with counts separately.
#[must_use]
pub fn diff_score<E: AsRef<str>>(files: &[ChangedFile], extensions: &[E]) -> f64 {
    let matches = files
        .iter()
        .map(|file| {
            extensions
                .iter()
                .filter(|extension| {
                    let extension: &str = extension.as_ref();
                    !extension.is_empty() && file.new_path.ends_with(extension)
                })
                .count()
        })
        .sum::<usize>();

    let points = u32::try_from(matches)
        .unwrap_or(u32::MAX)
        .saturating_mul(POINTS_PER_MATCH)
        .min(DIFF_CAP);
    f64::from(points)
}

/// Score every merge request by its changed files.
///
/// Items without a changeset are not evaluated and get no entry. Fetches run
/// `concurrency` at a time; the first failure aborts the signal.
///
/// # Errors
///
/// Returns [`ScoreError::Diffs`] when any changeset fetch fails.
pub async fn diff<S: ItemSource, E: AsRef<str> + Sync>(
    source: &S,
    items: &[WorkItem],
    extensions: &[E],
    concurrency: usize,
) -> Result<ContributionMap, ScoreError> {
    let entries: Vec<_> = stream::iter(items.iter().filter(|item| item.kind.has_changeset()))
        .map(|item| async move {
            tracing::debug!(key = %item.key, "fetching changeset");
            let files = source
                .fetch_diffs(item.project(), item.key.iid)
                .await
                .map_err(|error| ScoreError::Diffs {
                    key: item.key,
                    source: Box::new(error),
                })?;
            Ok::<_, ScoreError>((item.key, diff_score(&files, extensions)))
        })
        .buffer_unordered(concurrency.max(1))
        .try_collect()
        .await?;

    Ok(entries.into_iter().collect())
}
