use async_trait::async_trait;
use github_trophy::{
    config::Settings,
    github::GithubApi,
    models::{GithubRepo, GithubUser, Result, SvgCache, TrophyError},
    render::{render_trophy, Theme},
    scoring::StatsAggregator,
    service::TrophyService,
    Grade, ProfileStats, Tier,
};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Canned API responses for exercising the pipeline without a network.
struct FixtureApi {
    user: GithubUser,
    pages: Vec<Vec<GithubRepo>>,
    repo_calls: AtomicU32,
}

impl FixtureApi {
    fn new(user: GithubUser, pages: Vec<Vec<GithubRepo>>) -> Self {
        Self {
            user,
            pages,
            repo_calls: AtomicU32::new(0),
        }
    }
}

#[async_trait]
impl GithubApi for FixtureApi {
    async fn fetch_user(&self, _username: &str) -> Result<GithubUser> {
        Ok(self.user.clone())
    }

    async fn fetch_repos_page(&self, _username: &str, page: u32) -> Result<Vec<GithubRepo>> {
        self.repo_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default())
    }
}

struct FailingApi;

#[async_trait]
impl GithubApi for FailingApi {
    async fn fetch_user(&self, _username: &str) -> Result<GithubUser> {
        Err(TrophyError::UpstreamError {
            status: 404,
            message: "Not Found".to_string(),
        })
    }

    async fn fetch_repos_page(&self, _username: &str, _page: u32) -> Result<Vec<GithubRepo>> {
        Ok(vec![])
    }
}

fn octocat() -> GithubUser {
    GithubUser {
        login: "octocat".to_string(),
        name: Some("The Octocat".to_string()),
        avatar_url: Some("https://example.test/avatar.png".to_string()),
        followers: Some(120),
        public_repos: Some(8),
        total_private_repos: Some(0),
    }
}

fn repo(stars: u64, forks: u64, fork: bool) -> GithubRepo {
    GithubRepo {
        name: String::new(),
        fork,
        stargazers_count: stars,
        forks_count: forks,
    }
}

#[tokio::test]
async fn test_pipeline_produces_trophy_card() {
    let api = Arc::new(FixtureApi::new(
        octocat(),
        vec![vec![repo(90, 10, false), repo(30, 5, false), repo(500, 50, true)]],
    ));
    let settings = Settings::default();
    let aggregator = StatsAggregator::new(api, &settings.github);
    let service = TrophyService::new(aggregator, Arc::new(SvgCache::new(Duration::from_secs(60))));

    let svg = service.card("octocat", "dark_high_contrast", 3).await;

    // stars 120 + forks 15 + followers 120 = 255, grade A / Legendary
    assert!(svg.contains("GitHub Trophy for octocat"));
    assert!(svg.contains("TIER: LEGENDARY"));
    assert!(svg.contains(">255<"));
    assert!(svg.contains("#FFD700"));
}

#[tokio::test]
async fn test_aggregate_reports_formatted_stats() {
    let api = Arc::new(FixtureApi::new(
        GithubUser {
            followers: Some(2500),
            public_repos: None,
            ..octocat()
        },
        vec![vec![repo(1200, 0, false), repo(48, 0, false)]],
    ));
    let settings = Settings::default();
    let aggregator = StatsAggregator::new(api, &settings.github);

    let stats = aggregator.aggregate("octocat").await.unwrap();

    assert_eq!(stats.stars, 1248);
    assert_eq!(stats.repos, 2);
    assert_eq!(stats.formatted_stars, "1,248");
    assert_eq!(stats.formatted_followers, "2,500");
    assert_eq!(stats.grade, Grade::APlus);
    assert_eq!(stats.tier, Tier::Mythic);
    assert_eq!(stats.level, 74);
}

#[tokio::test]
async fn test_pagination_collects_across_pages() {
    let full_page: Vec<GithubRepo> = (0..100).map(|_| repo(1, 0, false)).collect();
    let api = Arc::new(FixtureApi::new(
        GithubUser {
            public_repos: None,
            total_private_repos: None,
            ..octocat()
        },
        vec![full_page.clone(), full_page, vec![repo(1, 0, false); 7]],
    ));
    let settings = Settings::default();
    let aggregator = StatsAggregator::new(api.clone(), &settings.github);

    let stats = aggregator.aggregate("octocat").await.unwrap();

    assert_eq!(stats.stars, 207);
    // public_repos was absent, so the collected count stands in
    assert_eq!(stats.repos, 207);
    // page 3 came back short, so page 4 was never requested
    assert_eq!(api.repo_calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_failed_fetch_falls_back_to_error_card() {
    let settings = Settings::default();
    let aggregator = StatsAggregator::new(Arc::new(FailingApi), &settings.github);
    let service = TrophyService::new(aggregator, Arc::new(SvgCache::default()));

    let svg = service.card("ghost", "classic_gamer", 3).await;

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Error: Not Found"));
}

#[test]
fn test_render_defaults_are_total() {
    let svg = render_trophy(&ProfileStats::default(), Theme::default(), 3);

    assert!(svg.contains("GitHub Trophy for unknown"));
    assert!(svg.contains("TIER: IRON"));
}

#[test]
fn test_default_settings_are_valid() {
    let settings = Settings::default();

    assert!(settings.validate().is_ok());
    assert_eq!(settings.github.per_page, 100);
    assert_eq!(settings.github.max_pages, 50);
    assert_eq!(settings.cache.ttl_seconds, 21600);
    assert_eq!(settings.render.default_columns, 3);

    // The configured level seeds the log filter when RUST_LOG is unset,
    // so it has to parse as a filter directive
    assert!(EnvFilter::try_new(&settings.app.log_level).is_ok());
}
