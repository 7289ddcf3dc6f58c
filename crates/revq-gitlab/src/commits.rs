//! Project commit history.

use chrono::{DateTime, SecondsFormat, Utc};
use revq_core::{CommitRecord, ProjectId};

use crate::{GitLabClient, error::GitLabError};

#[derive(serde::Deserialize)]
struct CommitResponse {
    #[serde(default)]
    committer_email: Option<String>,
}

impl From<CommitResponse> for CommitRecord {
    fn from(commit: CommitResponse) -> Self {
        Self {
            committer_email: commit.committer_email.unwrap_or_default(),
        }
    }
}

fn commits_path(project: ProjectId, since: DateTime<Utc>) -> String {
    let since = since.to_rfc3339_opts(SecondsFormat::Secs, true);
    format!(
        "/projects/{project}/repository/commits?since={}",
        urlencoding::encode(&since)
    )
}

impl GitLabClient {
    /// Fetch the commits of `project` since `since` (filtered server side).
    ///
    /// # Errors
    ///
    /// Returns [`GitLabError`] if the HTTP request fails, GitLab returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn commits_since(
        &self,
        project: ProjectId,
        since: DateTime<Utc>,
    ) -> Result<Vec<CommitRecord>, GitLabError> {
        let commits: Vec<CommitResponse> =
            self.get_paginated(&commits_path(project, since)).await?;
        tracing::debug!(%project, count = commits.len(), "fetched commits");
        Ok(commits.into_iter().map(CommitRecord::from).collect())
    }
}
