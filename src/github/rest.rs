use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde_json::Value;
use tracing::debug;

use crate::{
    config::GithubSettings,
    github::GithubApi,
    models::{GithubApiError, GithubRepo, GithubUser, Result, TrophyError},
};

/// Map a failed response's status and message onto the error taxonomy.
/// GitHub reports both the primary and secondary rate limits as a 403
/// whose message contains "rate limit exceeded"; that exact phrase is
/// matched, case-sensitively.
fn classify_failure(status: StatusCode, message: String) -> TrophyError {
    if status == StatusCode::FORBIDDEN && message.contains("rate limit exceeded") {
        return TrophyError::RateLimitExceeded;
    }

    TrophyError::UpstreamError {
        status: status.as_u16(),
        message,
    }
}

/// REST client for api.github.com. Works unauthenticated, but anonymous
/// requests exhaust the rate limit quickly; a token raises the ceiling and
/// additionally exposes `total_private_repos` on the token owner's profile.
pub struct GithubRestClient {
    http_client: Client,
    base_url: Url,
    token: Option<String>,
    per_page: u32,
}

impl GithubRestClient {
    pub fn new(settings: &GithubSettings) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| {
                TrophyError::ConfigError(format!("Failed to create HTTP client: {}", e))
            })?;

        let base_url = Url::parse(&settings.api_base)
            .map_err(|e| TrophyError::ConfigError(format!("Invalid API base URL: {}", e)))?;

        Ok(Self {
            http_client,
            base_url,
            token: settings.token.clone(),
            per_page: settings.per_page,
        })
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TrophyError::ConfigError("API base URL cannot carry paths".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get(&self, url: Url) -> reqwest::RequestBuilder {
        let request = self.http_client.get(url);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Classify a non-success response, preferring the JSON body's
    /// `message` over the per-endpoint fallback.
    async fn upstream_error(response: Response, fallback: &str) -> TrophyError {
        let status = response.status();
        let message = response
            .json::<GithubApiError>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| fallback.to_string());

        classify_failure(status, message)
    }
}

#[async_trait]
impl GithubApi for GithubRestClient {
    async fn fetch_user(&self, username: &str) -> Result<GithubUser> {
        let url = self.endpoint(&["users", username])?;
        debug!("GET {}", url);

        let response = self.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Self::upstream_error(response, "GitHub user fetch failed.").await);
        }

        Ok(response.json().await?)
    }

    async fn fetch_repos_page(&self, username: &str, page: u32) -> Result<Vec<GithubRepo>> {
        let mut url = self.endpoint(&["users", username, "repos"])?;
        url.query_pairs_mut()
            .append_pair("per_page", &self.per_page.to_string())
            .append_pair("page", &page.to_string());
        debug!("GET {}", url);

        let response = self.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Self::upstream_error(response, "Initial repos fetch failed.").await);
        }

        // A success status can still carry an object body, e.g. an error
        // proxied through with 200. Only an array is a repository listing.
        let body: Value = response.json().await?;
        if !body.is_array() {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Unexpected repos response")
                .to_string();
            return Err(TrophyError::MalformedResponse(message));
        }

        Ok(serde_json::from_value(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_with_rate_limit_phrase_is_distinguished() {
        let err = classify_failure(
            StatusCode::FORBIDDEN,
            "API rate limit exceeded for 203.0.113.7.".to_string(),
        );

        assert!(matches!(err, TrophyError::RateLimitExceeded));
        assert_eq!(
            err.to_string(),
            "GitHub API rate limit exceeded. Set GITHUB_TOKEN for higher limits."
        );
    }

    #[test]
    fn test_forbidden_without_phrase_stays_upstream() {
        let err = classify_failure(
            StatusCode::FORBIDDEN,
            "Resource protected by organization SAML enforcement.".to_string(),
        );

        assert!(matches!(err, TrophyError::UpstreamError { status: 403, .. }));
    }

    #[test]
    fn test_rate_limit_phrase_on_other_statuses_stays_upstream() {
        let err = classify_failure(
            StatusCode::TOO_MANY_REQUESTS,
            "API rate limit exceeded for user ID 1.".to_string(),
        );

        assert!(matches!(err, TrophyError::UpstreamError { status: 429, .. }));
    }

    #[test]
    fn test_endpoint_fallbacks_pass_through() {
        let user = classify_failure(StatusCode::NOT_FOUND, "GitHub user fetch failed.".to_string());
        assert_eq!(user.to_string(), "GitHub user fetch failed.");

        let repos =
            classify_failure(StatusCode::BAD_GATEWAY, "Initial repos fetch failed.".to_string());
        assert_eq!(repos.to_string(), "Initial repos fetch failed.");
        assert!(matches!(repos, TrophyError::UpstreamError { status: 502, .. }));
    }
}
