pub mod aggregator;
pub mod score;

pub use aggregator::StatsAggregator;
pub use score::ScoreSummary;
