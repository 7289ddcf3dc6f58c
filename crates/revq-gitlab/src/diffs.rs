//! Merge request changesets.

use revq_core::{ChangedFile, ProjectId};

use crate::{GitLabClient, error::GitLabError};

#[derive(serde::Deserialize)]
struct DiffResponse {
    new_path: String,
}

impl GitLabClient {
    /// Fetch the files changed by merge request `iid` of `project`.
    ///
    /// # Errors
    ///
    /// Returns [`GitLabError`] if the HTTP request fails, GitLab returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn merge_request_diffs(
        &self,
        project: ProjectId,
        iid: u64,
    ) -> Result<Vec<ChangedFile>, GitLabError> {
        let path = format!("/projects/{project}/merge_requests/{iid}/diffs");
        let diffs: Vec<DiffResponse> = self.get_paginated(&path).await?;
        Ok(diffs
            .into_iter()
            .map(|d| ChangedFile {
                new_path: d.new_path,
            })
            .collect())
    }
}
