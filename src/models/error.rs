use thiserror::Error;

/// Failure taxonomy for the stats pipeline. `Display` carries the
/// user-facing message that ends up on the fallback error card.
#[derive(Error, Debug)]
pub enum TrophyError {
    #[error("Username required")]
    UsernameRequired,

    #[error("GitHub API rate limit exceeded. Set GITHUB_TOKEN for higher limits.")]
    RateLimitExceeded,

    #[error("{message}")]
    UpstreamError { status: u16, message: String },

    #[error("{0}")]
    MalformedResponse(String),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, TrophyError>;
