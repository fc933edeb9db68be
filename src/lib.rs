pub mod config;
pub mod github;
pub mod models;
pub mod render;
pub mod scoring;
pub mod service;
pub mod utils;

pub use config::Settings;
pub use models::{Grade, ProfileStats, Result, SvgCache, Tier, TrophyError};
pub use render::Theme;
pub use service::TrophyService;
