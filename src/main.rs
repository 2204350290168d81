mod config;
mod crawler;
mod db;
mod enrich;
mod extract;
mod fetch;
mod slug;

use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::crawler::CrawlOutcome;
use crate::fetch::{Fetcher, HttpFetcher};

#[derive(Parser)]
#[command(name = "quote_scraper", about = "Quotes site crawler with author enrichment")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl, enrich, and replace the destination table
    Run {
        /// Max listing pages to crawl (default: until the site runs out)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Crawl and print a summary without touching the database
    Crawl {
        /// Max listing pages to crawl (default: until the site runs out)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Check connectivity to the destination database
    Probe,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    match cli.command {
        Commands::Run { limit } => {
            let fetcher = HttpFetcher::new();
            run(&config, &fetcher, limit).await;
        }
        Commands::Crawl { limit } => {
            let fetcher = HttpFetcher::new();
            let outcome = crawler::crawl(&fetcher, &config, limit).await;
            print_summary(&outcome);
            for row in outcome.rows.iter().take(5) {
                println!("  {} — {}", truncate(&row.quote, 60), row.author);
            }
        }
        Commands::Probe => match db::probe(&config).await {
            Ok(()) => println!("Successfully connected to {}", config.db_name),
            Err(e) => println!("Connection failed: {e:#}"),
        },
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }
    Ok(())
}

/// Full pipeline: probe (informational), crawl, bulk-replace.
///
/// Nothing here fails the process. A failed probe does not gate the crawl,
/// and a failed write still leaves the run "complete" with the crawl summary
/// on stdout.
async fn run(config: &AppConfig, fetcher: &dyn Fetcher, limit: Option<usize>) {
    match db::probe(config).await {
        Ok(()) => info!("Successfully connected to {}", config.db_name),
        Err(e) => warn!("Database probe failed: {e:#}"),
    }

    let outcome = crawler::crawl(fetcher, config, limit).await;
    print_summary(&outcome);

    match db::persist(config, &outcome.rows).await {
        Ok(()) => info!(
            "Sent {} rows to table {} in {}",
            outcome.rows.len(),
            config.table_name,
            config.db_name
        ),
        Err(e) => error!("Saving to table {} failed: {e:#}", config.table_name),
    }
}

fn print_summary(outcome: &CrawlOutcome) {
    println!(
        "{} quotes from {} pages ({} skipped: no author data)",
        outcome.rows.len(),
        outcome.pages,
        outcome.skipped
    );
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

// ── Tests ──
