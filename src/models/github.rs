use serde::{Deserialize, Serialize};

/// Profile payload from `GET /users/{username}`. Only the fields the
/// pipeline consumes are modeled; missing counts deserialize as absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubUser {
    #[serde(default)]
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub followers: Option<u64>,
    pub public_repos: Option<u64>,
    /// Only present on authenticated requests for the token owner. Fork
    /// counting is enabled only when this is reported as zero.
    pub total_private_repos: Option<u64>,
}

/// One entry of `GET /users/{username}/repos`. Missing counts are zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubRepo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
}

/// Error body the API returns on non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubApiError {
    pub message: Option<String>,
}
