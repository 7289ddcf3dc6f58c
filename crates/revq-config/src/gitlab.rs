//! GitLab connection configuration.

use serde::{Deserialize, Serialize};

/// Default page size (GitLab's maximum).
const fn default_per_page() -> u32 {
    100
}

/// Default cap on pages followed per list request.
const fn default_max_pages() -> u32 {
    20
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct GitLabConfig {
    /// Instance host (e.g., `gitlab.com`) or base URL with scheme.
    #[serde(default)]
    pub host: String,

    /// Personal access token, sent as a bearer token.
    #[serde(default)]
    pub token: String,

    /// Username to rank for: matched against `@mentions` and committer e-mails.
    #[serde(default)]
    pub user_name: String,

    /// Items per page for list endpoints.
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Maximum pages followed per list request.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GitLabConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            token: String::new(),
            user_name: String::new(),
            per_page: default_per_page(),
            max_pages: default_max_pages(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GitLabConfig {
    /// Check if host, token and user name are all set.
    pub fn is_configured(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of required fields that are empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("host", &self.host),
            ("token", &self.token),
            ("user_name", &self.user_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Copy with the token masked, for display.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let token = if self.token.is_empty() {
            String::new()
        } else {
            "********".to_string()
        };
        Self {
            token,
            ..self.clone()
        }
    }
}
