//! Scoring error types.

use revq_core::{ItemKey, ProjectId};
use thiserror::Error;

/// Boxed data-source error.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that abort a scoring run. There is no partial output.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// Fetching the work item list failed.
    #[error("failed to fetch work items")]
    Todos {
        #[source]
        source: BoxError,
    },

    /// Fetching a project's commit history failed.
    #[error("failed to fetch commits for project {project}")]
    Commits {
        project: ProjectId,
        #[source]
        source: BoxError,
    },

    /// Fetching a merge request's changed files failed.
    #[error("failed to fetch diffs for {key}")]
    Diffs {
        key: ItemKey,
        #[source]
        source: BoxError,
    },
}
