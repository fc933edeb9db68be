use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub github: GithubSettings,
    pub cache: CacheSettings,
    pub render: RenderSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubSettings {
    pub api_base: String,
    /// Optional API token. Unauthenticated requests are allowed but rate
    /// limited to 60 per hour.
    pub token: Option<String>,
    pub per_page: u32,
    pub max_pages: u32,
    pub timeout_seconds: u64,
    /// GitHub rejects requests without a User-Agent header.
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    pub ttl_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSettings {
    pub default_theme: String,
    pub default_columns: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "github-trophy".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                log_level: "info".to_string(),
            },
            github: GithubSettings {
                api_base: "https://api.github.com".to_string(),
                token: None,
                per_page: 100,
                max_pages: 50,
                timeout_seconds: 10,
                user_agent: format!("github-trophy/{}", env!("CARGO_PKG_VERSION")),
            },
            cache: CacheSettings {
                ttl_seconds: 21600, // 6 hours
            },
            render: RenderSettings {
                default_theme: "dark_high_contrast".to_string(),
                default_columns: 3,
            },
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("TROPHY"))
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;

        // GITHUB_TOKEN is the conventional variable for this; it only
        // applies when no token was configured explicitly.
        if settings.github.token.is_none() {
            settings.github.token = std::env::var("GITHUB_TOKEN")
                .ok()
                .filter(|t| !t.is_empty());
        }

        Ok(settings)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .build()?;

        s.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.github.per_page == 0 || self.github.per_page > 100 {
            return Err(format!(
                "per_page must be between 1 and 100, got {}",
                self.github.per_page
            ));
        }

        if self.github.max_pages == 0 {
            return Err("max_pages must be at least 1".to_string());
        }

        if self.github.timeout_seconds == 0 {
            return Err("timeout_seconds must be at least 1".to_string());
        }

        if !(1..=4).contains(&self.render.default_columns) {
            return Err(format!(
                "default_columns must be between 1 and 4, got {}",
                self.render.default_columns
            ));
        }

        Ok(())
    }
}
