pub mod settings;

pub use settings::{AppSettings, CacheSettings, GithubSettings, RenderSettings, Settings};
