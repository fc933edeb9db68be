use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::{CacheKey, SvgCache};
use crate::render::{render_error_card, render_trophy, Theme};
use crate::scoring::StatsAggregator;

/// Front door of the pipeline: resolves the theme, consults the SVG cache
/// and turns aggregation failures into error cards, so callers always get
/// a presentable document.
pub struct TrophyService {
    aggregator: StatsAggregator,
    cache: Arc<SvgCache>,
}

impl TrophyService {
    pub fn new(aggregator: StatsAggregator, cache: Arc<SvgCache>) -> Self {
        Self { aggregator, cache }
    }

    /// Produce the trophy card for a user, or an error card when stats
    /// cannot be aggregated. Error cards are never cached, so a transient
    /// upstream failure does not stick around for the full TTL.
    pub async fn card(&self, username: &str, theme_id: &str, columns: u32) -> String {
        let username = username.trim();
        let theme = Theme::parse(theme_id);
        let columns = columns.clamp(1, 4);

        let key = CacheKey::trophy(username, theme.id(), columns);
        if let Some(svg) = self.cache.get(&key) {
            debug!("Cache hit for {}", key);
            return svg;
        }

        match self.aggregator.aggregate(username).await {
            Ok(stats) => {
                let svg = render_trophy(&stats, theme, columns);
                self.cache.set(key, svg.clone());
                svg
            }
            Err(e) => {
                warn!("Trophy generation failed for {}: {}", username, e);
                render_error_card(&e.to_string())
            }
        }
    }
}
