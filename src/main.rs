//! Command-line entry point: one build, one route map.
//!
//! # Usage
//!
//! ```bash
//! # Build from the delivery API, print the route map
//! BLOG_LIST_ID=... CONTENT_HUB_NAME=my-hub blog-path-map
//!
//! # Build from an exported content snapshot into a file
//! blog-path-map --fixtures ./content --blog-list-id blog-list -o out/routes.json
//! ```
//!
//! Logs go to stderr; the route map goes to stdout unless `--output` is given.

use blog_path_map::application::services::RouteMapService;
use blog_path_map::config::{self, Config, ConfigOverrides, ContentSource};
use blog_path_map::domain::repositories::ContentDelivery;
use blog_path_map::infrastructure::delivery::{FixtureContentDelivery, HttpContentDelivery};
use blog_path_map::infrastructure::export::write_route_map;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Build the static-export route map for the blog.
#[derive(Parser)]
#[command(name = "blog-path-map")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Blog list content item id (overrides BLOG_LIST_ID)
    #[arg(long)]
    blog_list_id: Option<String>,

    /// Read content items from `{dir}/{id}.json` (overrides CONTENT_FIXTURES_DIR)
    #[arg(long, value_name = "DIR")]
    fixtures: Option<PathBuf>,

    /// Write the route map here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let overrides = ConfigOverrides {
        blog_list_id: cli.blog_list_id,
        fixtures_dir: cli.fixtures,
    };
    let config = config::load(&overrides).context("Invalid configuration")?;

    init_tracing(&config);
    config.print_summary();

    let client: Arc<dyn ContentDelivery> = match &config.content_source {
        ContentSource::Delivery { base_url } => Arc::new(HttpContentDelivery::new(
            base_url,
            Duration::from_secs(config.request_timeout_seconds),
        )?),
        ContentSource::Fixtures { dir } => Arc::new(FixtureContentDelivery::new(dir)),
    };

    let service = RouteMapService::new(client, config.build_config());
    let report = service.build().await?;

    write_route_map(&report.route_map, cli.output.as_deref(), !cli.compact).await?;

    let summary = format!(
        "{} routes ({} blog posts)",
        report.route_map.len(),
        report.route_map.blog_routes().count()
    );
    if report.skipped.is_empty() {
        eprintln!("{} {}", "✓".green().bold(), summary);
    } else {
        eprintln!(
            "{} {}, {} missing post(s) skipped",
            "!".yellow().bold(),
            summary,
            report.skipped.len()
        );
    }

    Ok(())
}

/// Initializes the global subscriber on stderr, text or JSON per `LOG_FORMAT`.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
