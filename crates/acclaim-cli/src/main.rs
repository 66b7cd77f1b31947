use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use acclaim_client::{HtmlExtractor, ReqwestFetcher};
use acclaim_core::{BadgeService, SiteConfig};

#[derive(Parser)]
#[command(name = "acclaim", version, about = "Fetch the public badges of a Your Acclaim profile")]
struct Cli {
    /// Profile identifier, as in /users/<PROFILE_ID>/badges
    profile_id: String,

    /// Also fetch each badge page (large image, organisation link, skills)
    #[arg(short, long, default_value_t = false)]
    detail: bool,

    /// Site origin (overrides ACCLAIM_BASE_URL)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Max badge pages fetched at once (overrides ACCLAIM_DETAIL_CONCURRENCY)
    #[arg(short, long)]
    concurrency: Option<usize>,

    /// Per-request timeout in seconds (overrides ACCLAIM_TIMEOUT_SECS)
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Print JSON on a single line
    #[arg(long, default_value_t = false)]
    compact: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("acclaim=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    let fetcher = ReqwestFetcher::from_config(&config).context("Failed to create HTTP client")?;
    let service = BadgeService::new(fetcher, HtmlExtractor::new(), config);

    let badges = service
        .fetch_badges(&cli.profile_id, cli.detail)
        .await
        .with_context(|| format!("Failed to fetch badges for profile '{}'", cli.profile_id))?;

    tracing::info!(count = badges.len(), "Done");

    let json = if cli.compact {
        serde_json::to_string(&badges)?
    } else {
        serde_json::to_string_pretty(&badges)?
    };
    println!("{json}");

    Ok(())
}

/// Environment first, then command-line overrides.
fn build_config(cli: &Cli) -> Result<SiteConfig> {
    let env = SiteConfig::from_env().context("Invalid ACCLAIM_* environment configuration")?;

    let base_url = cli.base_url.as_deref().unwrap_or(&env.base_url);
    let concurrency = cli.concurrency.unwrap_or(env.detail_concurrency);
    let timeout = cli.timeout.map(Duration::from_secs).unwrap_or(env.timeout);

    SiteConfig::new(base_url, concurrency, timeout).context("Invalid command-line configuration")
}
