use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::models::{GithubRepo, GithubUser, Result};

/// GitHub API surface the aggregator consumes. The profile and the first
/// repository page are requested concurrently, so implementations must be
/// shareable across tasks.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GithubApi: Send + Sync {
    /// Fetch the public profile for a username
    async fn fetch_user(&self, username: &str) -> Result<GithubUser>;

    /// Fetch one page of the user's repository listing (pages are 1-based)
    async fn fetch_repos_page(&self, username: &str, page: u32) -> Result<Vec<GithubRepo>>;
}
