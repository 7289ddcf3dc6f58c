//! Pending to-dos of the authenticated user.

use chrono::{DateTime, Utc};
use revq_core::{ItemKey, ItemKind, ProjectId, ReviewState, WorkItem};

use crate::{GitLabClient, error::GitLabError};

#[derive(serde::Deserialize)]
struct TodoResponse {
    #[serde(default)]
    target_url: String,
    created_at: DateTime<Utc>,
    body: Option<String>,
    target_type: ItemKind,
    target: Option<TargetResponse>,
    project: Option<ProjectResponse>,
}

#[derive(serde::Deserialize)]
struct TargetResponse {
    iid: Option<u64>,
    title: Option<String>,
    state: Option<ReviewState>,
    draft: Option<bool>,
    work_in_progress: Option<bool>,
    author: Option<AuthorResponse>,
}

#[derive(serde::Deserialize)]
struct AuthorResponse {
    username: String,
}

#[derive(serde::Deserialize)]
struct ProjectResponse {
    id: u64,
    #[serde(default)]
    path_with_namespace: String,
}

impl TodoResponse {
    /// Map to a work item. `None` when the to-do has no project-scoped target.
    fn into_work_item(self) -> Option<WorkItem> {
        let project = self.project?;
        let target = self.target?;
        let iid = target.iid?;

        Some(WorkItem {
            key: ItemKey {
                project: ProjectId(project.id),
                iid,
            },
            target_url: self.target_url,
            title: target.title.unwrap_or_default(),
            body: self.body.unwrap_or_default(),
            created_at: self.created_at,
            state: target.state.unwrap_or(ReviewState::Other),
            draft: target.draft.or(target.work_in_progress).unwrap_or(false),
            kind: self.target_type,
            project_path: project.path_with_namespace,
            author: target.author.map(|a| a.username),
            score: 0.0,
        })
    }
}

fn to_work_items(todos: Vec<TodoResponse>) -> Vec<WorkItem> {
    todos
        .into_iter()
        .filter_map(|todo| {
            let url = todo.target_url.clone();
            let item = todo.into_work_item();
            if item.is_none() {
                tracing::warn!(%url, "skipping to-do without a project-scoped target");
            }
            item
        })
        .collect()
}

impl GitLabClient {
    /// Fetch every pending to-do, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`GitLabError`] if the HTTP request fails, GitLab returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn pending_todos(&self) -> Result<Vec<WorkItem>, GitLabError> {
        let todos: Vec<TodoResponse> = self.get_paginated("/todos?state=pending").await?;
        Ok(to_work_items(todos))
    }
}
