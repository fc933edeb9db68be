use clap::{Parser, Subcommand};
use github_trophy::{
    config::Settings,
    github::{GithubApi, GithubRestClient},
    models::SvgCache,
    scoring::StatsAggregator,
    service::TrophyService,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(name = "github-trophy")]
#[clap(about = "Render GitHub profile trophy cards as SVG", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the trophy card for a user
    Card {
        /// GitHub username
        #[clap(short, long)]
        username: String,

        /// Card theme (dark_high_contrast, classic_gamer)
        #[clap(short, long)]
        theme: Option<String>,

        /// Badge columns, 1 to 4
        #[clap(short, long)]
        columns: Option<u32>,

        /// Write the SVG here instead of stdout
        #[clap(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the aggregated score for a user
    Score {
        /// GitHub username
        #[clap(short, long)]
        username: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let (settings, using_defaults) = match Settings::new() {
        Ok(settings) => (settings, false),
        Err(_) => (Settings::default(), true),
    };

    // Initialize logging; RUST_LOG takes precedence over the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.app.log_level)),
        )
        .init();

    if using_defaults {
        info!("Using default settings");
    }

    // Validate settings
    if let Err(e) = settings.validate() {
        error!("Invalid settings: {}", e);
        return Err(anyhow::anyhow!(e));
    }

    let api: Arc<dyn GithubApi> = Arc::new(GithubRestClient::new(&settings.github)?);
    let aggregator = StatsAggregator::new(api, &settings.github);

    match cli.command {
        Commands::Card {
            username,
            theme,
            columns,
            output,
        } => {
            let theme_id = theme.unwrap_or_else(|| settings.render.default_theme.clone());
            let columns = columns.unwrap_or(settings.render.default_columns);

            let cache = Arc::new(SvgCache::new(Duration::from_secs(settings.cache.ttl_seconds)));
            let service = TrophyService::new(aggregator, cache);

            let svg = service.card(&username, &theme_id, columns).await;

            match output {
                Some(path) => {
                    std::fs::write(&path, &svg)?;
                    info!("Wrote trophy card to {}", path.display());
                }
                None => println!("{}", svg),
            }
        }

        Commands::Score { username } => match aggregator.aggregate(&username).await {
            Ok(stats) => {
                println!("\n=== GitHub Trophy Score ===");
                println!("User: {}", stats.username);
                if !stats.display_name.is_empty() {
                    println!("Name: {}", stats.display_name);
                }
                println!("Score: {}", stats.score);
                println!("Grade: {}", stats.grade.as_str());
                println!("Tier: {}", stats.tier.as_str());
                println!(
                    "Level: {} ({}% XP to Level {})",
                    stats.level,
                    stats.xp_percent,
                    stats.level + 1
                );
                println!("\nStats:");
                println!("  Stars: {}", stats.formatted_stars);
                println!("  Repositories: {}", stats.formatted_repos);
                println!("  Followers: {}", stats.formatted_followers);
            }
            Err(e) => {
                error!("Failed to aggregate stats: {}", e);
            }
        },
    }

    Ok(())
}
