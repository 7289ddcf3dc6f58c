//! # revq-gitlab
//!
//! GitLab REST v4 client implementing [`revq_core::ItemSource`].
//!
//! Endpoints used:
//! - `GET /todos`: pending to-dos of the authenticated user
//! - `GET /projects/:id/repository/commits`: commit history window
//! - `GET /projects/:id/merge_requests/:iid/diffs`: changed files
//!
//! Lists follow GitLab's offset pagination (`x-next-page`) up to a page cap.

pub mod commits;
pub mod diffs;
pub mod todos;

mod error;
mod http;

pub use error::GitLabError;

use std::time::Duration;

use chrono::{DateTime, Utc};
use revq_config::GitLabConfig;
use revq_core::{ChangedFile, CommitRecord, ItemSource, ProjectId, WorkItem};
use serde::de::DeserializeOwned;

use crate::http::{check_response, next_page};

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for one GitLab instance, authenticated with a bearer token.
pub struct GitLabClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    per_page: u32,
    max_pages: u32,
}

impl GitLabClient {
    /// Create a client from the `[gitlab]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`GitLabError::InvalidHost`] if the host is empty, or
    /// [`GitLabError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &GitLabConfig) -> Result<Self, GitLabError> {
        let base_url = api_base_url(&config.host)?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("revq/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            token: config.token.clone(),
            per_page: config.per_page.clamp(1, 100),
            max_pages: config.max_pages.max(1),
        })
    }

    /// API root, e.g. `https://gitlab.com/api/v4`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET every page of a JSON list endpoint.
    ///
    /// `path` is relative to the API root and may already carry a query.
    async fn get_paginated<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, GitLabError> {
        let separator = if path.contains('?') { '&' } else { '?' };
        let mut results = Vec::new();
        let mut page = 1u32;

        loop {
            let url = format!(
                "{}{path}{separator}per_page={}&page={page}",
                self.base_url, self.per_page
            );
            tracing::debug!(path, page, "GET");
            let resp = check_response(
                self.http
                    .get(&url)
                    .bearer_auth(&self.token)
                    .send()
                    .await?,
            )
            .await?;

            let next = next_page(resp.headers());
            let body = resp.text().await?;
            let batch: Vec<T> = serde_json::from_str(&body)
                .map_err(|source| GitLabError::Parse {
                    path: path.to_string(),
                    source,
                })?;
            results.extend(batch);

            match following_page(path, page, next, self.max_pages) {
                Some(next) => page = next,
                None => break,
            }
        }

        Ok(results)
    }
}

/// Page to request after `page`, or `None` to stop.
///
/// A next page that does not move forward ends the list, as does `max_pages`.
fn following_page(path: &str, page: u32, next: Option<u32>, max_pages: u32) -> Option<u32> {
    let next = next?;
    if next <= page {
        tracing::warn!(path, page, next, "x-next-page did not advance; stopping");
        return None;
    }
    if page >= max_pages {
        tracing::warn!(path, pages = page, "page limit reached; list truncated");
        return None;
    }
    Some(next)
}

/// Build the API root from a bare host or a full base URL.
fn api_base_url(host: &str) -> Result<String, GitLabError> {
    let host = host.trim().trim_end_matches('/');
    if host.is_empty() || host.chars().any(char::is_whitespace) {
        return Err(GitLabError::InvalidHost(host.to_string()));
    }

    let root = if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{host}")
    };

    if root.ends_with("/api/v4") {
        Ok(root)
    } else {
        Ok(format!("{root}/api/v4"))
    }
}

impl ItemSource for GitLabClient {
    type Error = GitLabError;

    async fn fetch_todos(&self) -> Result<Vec<WorkItem>, GitLabError> {
        self.pending_todos().await
    }

    async fn fetch_commits(
        &self,
        project: ProjectId,
        since: DateTime<Utc>,
    ) -> Result<Vec<CommitRecord>, GitLabError> {
        self.commits_since(project, since).await
    }

    async fn fetch_diffs(
        &self,
        project: ProjectId,
        iid: u64,
    ) -> Result<Vec<ChangedFile>, GitLabError> {
        self.merge_request_diffs(project, iid).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn config(host: &str) -> GitLabConfig {
        GitLabConfig {
            host: host.to_string(),
            token: "glpat-test".to_string(),
            user_name: "hiromu".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn bare_host_gets_https_and_api_prefix() {
        assert_eq!(
            api_base_url("gitlab.example.com").unwrap(),
            "https://gitlab.example.com/api/v4"
        );
    }

    #[test]
    fn explicit_scheme_is_kept() {
        assert_eq!(
            api_base_url("http://localhost:8080/").unwrap(),
            "http://localhost:8080/api/v4"
        );
    }

    #[test]
    fn full_api_root_is_not_doubled() {
        assert_eq!(
            api_base_url("https://gitlab.com/api/v4").unwrap(),
            "https://gitlab.com/api/v4"
        );
    }

    #[test]
    fn empty_host_is_rejected() {
        assert!(matches!(api_base_url("  "), Err(GitLabError::InvalidHost(_))));
        assert!(matches!(
            api_base_url("gitlab example.com"),
            Err(GitLabError::InvalidHost(_))
        ));
    }

    #[test]
    fn pagination_follows_next_page_header() {
        assert_eq!(following_page("/todos", 1, Some(2), 20), Some(2));
        assert_eq!(following_page("/todos", 3, None, 20), None);
    }

    #[test]
    fn pagination_stops_at_page_limit() {
        assert_eq!(following_page("/todos", 20, Some(21), 20), None);
        assert_eq!(following_page("/todos", 19, Some(20), 20), Some(20));
    }

    #[test]
    fn pagination_stops_when_next_page_does_not_advance() {
        assert_eq!(following_page("/todos", 2, Some(2), 20), None);
        assert_eq!(following_page("/todos", 3, Some(1), 20), None);
    }

    #[test]
    fn client_builds_from_config() {
        let client = GitLabClient::new(&config("gitlab.com")).unwrap();
        assert_eq!(client.base_url(), "https://gitlab.com/api/v4");
        assert_eq!(client.per_page, 100);
    }

    #[test]
    fn per_page_is_clamped_to_gitlab_maximum() {
        let mut cfg = config("gitlab.com");
        cfg.per_page = 500;
        cfg.max_pages = 0;
        let client = GitLabClient::new(&cfg).unwrap();
        assert_eq!(client.per_page, 100);
        assert_eq!(client.max_pages, 1);
    }

    #[tokio::test]
    #[ignore] // requires network and GITLAB_HOST / GITLAB_TOKEN
    async fn live_fetch_todos() {
        let cfg = GitLabConfig {
            host: std::env::var("GITLAB_HOST").unwrap(),
            token: std::env::var("GITLAB_TOKEN").unwrap(),
            ..Default::default()
        };
        let client = GitLabClient::new(&cfg).unwrap();
        let todos = client.fetch_todos().await.unwrap();
        println!("\n── {} pending to-dos", todos.len());
        for todo in &todos {
            println!("  [{}] {} {}", todo.key, todo.state, todo.target_url);
        }
    }
}
