use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::{
    config::GithubSettings,
    github::GithubApi,
    models::{GithubRepo, ProfileStats, Result, TrophyError},
    scoring::ScoreSummary,
    utils::format_count,
};

/// What one repository listing page means for the pagination loop.
#[derive(Debug)]
enum PageOutcome {
    /// Exactly a full page; more may follow.
    Full(Vec<GithubRepo>),
    /// A short page; nothing follows.
    Last(Vec<GithubRepo>),
    /// Empty page, keep what was collected so far.
    Stop,
}

fn classify_batch(batch: Vec<GithubRepo>, per_page: usize) -> PageOutcome {
    if batch.is_empty() {
        PageOutcome::Stop
    } else if batch.len() < per_page {
        PageOutcome::Last(batch)
    } else {
        PageOutcome::Full(batch)
    }
}

/// Fetches a user's profile and repository listing and reduces them to
/// render-ready [`ProfileStats`].
pub struct StatsAggregator {
    api: Arc<dyn GithubApi>,
    per_page: u32,
    max_pages: u32,
}

impl StatsAggregator {
    pub fn new(api: Arc<dyn GithubApi>, settings: &GithubSettings) -> Self {
        Self {
            api,
            per_page: settings.per_page,
            max_pages: settings.max_pages,
        }
    }

    /// Collect and score a user's public footprint.
    ///
    /// The profile and the first repository page are fetched concurrently
    /// and both must succeed. Failures on any later page only stop
    /// pagination; whatever was collected up to that point still counts.
    pub async fn aggregate(&self, username: &str) -> Result<ProfileStats> {
        let username = username.trim();
        if username.is_empty() {
            return Err(TrophyError::UsernameRequired);
        }

        info!("Aggregating GitHub stats for {}", username);

        let (user, first_page) = tokio::try_join!(
            self.api.fetch_user(username),
            self.api.fetch_repos_page(username, 1),
        )?;

        let per_page = self.per_page as usize;
        let first_page_full = first_page.len() == per_page;
        let mut kept: Vec<GithubRepo> = first_page.into_iter().filter(|r| !r.fork).collect();

        if first_page_full {
            for page in 2..=self.max_pages {
                let outcome = match self.api.fetch_repos_page(username, page).await {
                    Ok(batch) => classify_batch(batch, per_page),
                    Err(e) => {
                        warn!(
                            "Repos page {} fetch failed for {}: {}; keeping partial results",
                            page, username, e
                        );
                        PageOutcome::Stop
                    }
                };

                match outcome {
                    PageOutcome::Full(batch) => {
                        kept.extend(batch.into_iter().filter(|r| !r.fork));
                    }
                    PageOutcome::Last(batch) => {
                        kept.extend(batch.into_iter().filter(|r| !r.fork));
                        break;
                    }
                    PageOutcome::Stop => break,
                }
            }
        }

        let stars: u64 = kept.iter().map(|r| r.stargazers_count).sum();

        // Fork totals from the listing are only trusted when the profile
        // proves the listing is complete: an authenticated owner reporting
        // zero private repositories. An absent field also suppresses them.
        let forks: u64 = if user.total_private_repos == Some(0) {
            kept.iter().map(|r| r.forks_count).sum()
        } else {
            0
        };

        let followers = user.followers.unwrap_or(0);
        let repos = user.public_repos.unwrap_or(kept.len() as u64);

        let summary = ScoreSummary::from_score(stars + forks + followers);

        info!(
            "Aggregated {}: score {} (stars {}, forks {}, followers {})",
            username, summary.score, stars, forks, followers
        );

        Ok(ProfileStats {
            username: user.login,
            display_name: user.name.unwrap_or_default(),
            avatar_url: user.avatar_url,
            stars,
            repos,
            followers,
            formatted_stars: format_count(stars),
            formatted_repos: format_count(repos),
            formatted_followers: format_count(followers),
            score: summary.score,
            level: summary.level,
            xp_percent: summary.xp_percent,
            grade: summary.grade,
            tier: summary.tier,
            fetched_at: Utc::now(),
        })
    }
}
