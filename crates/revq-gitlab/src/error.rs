//! Failures talking to a GitLab instance.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitLabError {
    /// Transport failure, timeout, or a body that could not be read.
    #[error("request to GitLab failed")]
    Http(#[from] reqwest::Error),

    /// Any non-2xx status other than 429. `message` is the raw body.
    #[error("GitLab responded {status}: {message}")]
    Api { status: u16, message: String },

    /// The body was not the JSON shape the endpoint documents.
    #[error("unexpected response from {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("GitLab rate limit hit; retry in {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("cannot build an API URL from host {0:?}")]
    InvalidHost(String),
}
