//! Response checks and pagination headers shared by every endpoint.

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, RETRY_AFTER};

use crate::error::GitLabError;

/// Set by GitLab on offset-paginated lists; empty on the last page.
const NEXT_PAGE_HEADER: &str = "x-next-page";

/// Fallback wait when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Pass successful responses through, turn everything else into an error.
///
/// A 429 becomes [`GitLabError::RateLimited`]; any other non-2xx status
/// becomes [`GitLabError::Api`] carrying the response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GitLabError> {
    match resp.status() {
        status if status.is_success() => Ok(resp),
        StatusCode::TOO_MANY_REQUESTS => Err(GitLabError::RateLimited {
            retry_after_secs: retry_after_secs(resp.headers()),
        }),
        status => Err(GitLabError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        }),
    }
}

/// `Retry-After` in delta-seconds form. HTTP dates fall back to the default.
fn retry_after_secs(headers: &HeaderMap) -> u64 {
    header_number(headers, RETRY_AFTER.as_str()).unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

/// Page to request next, `None` once the list is exhausted.
pub fn next_page(headers: &HeaderMap) -> Option<u32> {
    header_number(headers, NEXT_PAGE_HEADER)
}

fn header_number<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn response(status: u16, headers: &[(&str, &str)], body: &'static str) -> reqwest::Response {
        let mut builder = ::http::Response::builder().status(status);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        reqwest::Response::from(builder.body(body).unwrap())
    }

    #[test]
    fn retry_after_seconds_are_read() {
        let resp = response(429, &[("Retry-After", " 120 ")], "");
        assert_eq!(retry_after_secs(resp.headers()), 120);
    }

    #[test]
    fn retry_after_defaults_when_missing_or_a_date() {
        assert_eq!(retry_after_secs(response(429, &[], "").headers()), 60);
        let dated = response(429, &[("Retry-After", "Wed, 21 Oct 2015 07:28:00 GMT")], "");
        assert_eq!(retry_after_secs(dated.headers()), 60);
    }

    #[test]
    fn next_page_follows_header() {
        let middle = response(200, &[("X-Next-Page", "3"), ("X-Page", "2")], "[]");
        assert_eq!(next_page(middle.headers()), Some(3));

        let last = response(200, &[("X-Next-Page", "")], "[]");
        assert_eq!(next_page(last.headers()), None);
        assert_eq!(next_page(response(200, &[], "[]").headers()), None);
    }

    #[tokio::test]
    async fn too_many_requests_is_rate_limited() {
        let err = check_response(response(429, &[("Retry-After", "30")], ""))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GitLabError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn unauthorized_keeps_gitlab_message() {
        let err = check_response(response(401, &[], r#"{"message":"401 Unauthorized"}"#))
            .await
            .unwrap_err();
        match err {
            GitLabError::Api { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("Unauthorized"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn not_found_and_server_errors_are_api_errors() {
        for status in [404, 502] {
            let err = check_response(response(status, &[], "")).await.unwrap_err();
            assert!(matches!(err, GitLabError::Api { status: s, .. } if s == status));
        }
    }

    #[tokio::test]
    async fn success_passes_through() {
        let resp = check_response(response(200, &[], "[]")).await.unwrap();
        assert_eq!(resp.text().await.unwrap(), "[]");
    }
}
