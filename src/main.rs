//! Site-Outliner main entry point
//!
//! This is the command-line interface for the Site-Outliner heading crawler.

use anyhow::Context;
use clap::Parser;
use site_outliner::config::{load_config_with_hash, Config};
use site_outliner::report::write_report;
use site_outliner::Coordinator;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Site-Outliner: a heading-structure crawler
///
/// Site-Outliner crawls a website's internal pages while respecting
/// robots.txt, extracts each page's h1-h6 heading hierarchy, and writes a
/// combined HTML report of heading structures and nesting problems.
#[derive(Parser, Debug)]
#[command(name = "site-outliner")]
#[command(version)]
#[command(about = "Map a website's heading structures", long_about = None)]
struct Cli {
    /// Absolute URL of the site to crawl (e.g. https://example.com)
    #[arg(value_name = "URL")]
    url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Write the report here instead of the configured path
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    // Seed precondition: absolute http(s) URL with a host. Everything past
    // this point assumes it.
    let seed = parse_seed(&cli.url)?;

    let report_path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.report_path));

    if let Some(parent) = report_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory {}", parent.display())
            })?;
        }
    }

    tracing::info!(
        "Starting crawl of {} (max {} pages, depth {})",
        seed,
        config.crawler.max_pages,
        config.crawler.max_depth
    );

    let mut coordinator = Coordinator::new(config)?;
    let pages = coordinator.run(&seed).await?;

    tracing::info!("Collected heading structures for {} pages", pages.len());

    write_report(&pages, &report_path)
        .with_context(|| format!("Failed to write report to {}", report_path.display()))?;

    println!("Report written to {}", report_path.display());

    Ok(())
}

/// Validates the seed URL before any crawling begins.
fn parse_seed(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw.trim())
        .with_context(|| format!("'{}' is not an absolute URL (e.g. https://example.com)", raw))?;

    anyhow::ensure!(
        url.scheme() == "http" || url.scheme() == "https",
        "Seed URL scheme must be http or https, got '{}'",
        url.scheme()
    );
    anyhow::ensure!(url.host_str().is_some(), "Seed URL must include a host");

    Ok(url)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_outliner=info,warn"),
            1 => EnvFilter::new("site_outliner=debug,info"),
            2 => EnvFilter::new("site_outliner=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
