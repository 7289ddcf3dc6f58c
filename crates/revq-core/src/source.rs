//! The data-source contract consumed by the scoring engine.
//!
//! Any non-success response or transport failure surfaces as a single
//! `Self::Error`; callers do not interpret status codes.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::entities::{ChangedFile, CommitRecord, ProjectId, WorkItem};

/// Supplies work items and the auxiliary records the signals need.
pub trait ItemSource: Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch every pending work item for the authenticated user.
    fn fetch_todos(&self) -> impl Future<Output = Result<Vec<WorkItem>, Self::Error>> + Send;

    /// Fetch the commits of `project` created at or after `since`.
    fn fetch_commits(
        &self,
        project: ProjectId,
        since: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<CommitRecord>, Self::Error>> + Send;

    /// Fetch the files changed by merge request `iid` of `project`.
    fn fetch_diffs(
        &self,
        project: ProjectId,
        iid: u64,
    ) -> impl Future<Output = Result<Vec<ChangedFile>, Self::Error>> + Send;
}
