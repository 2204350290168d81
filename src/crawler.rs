use std::time::Duration;

use tracing::{error, info};

use crate::config::AppConfig;
use crate::db::QuoteRow;
use crate::enrich;
use crate::extract;
use crate::fetch::Fetcher;
use crate::slug::author_slug;

/// What a crawl produced: rows in discovery order plus loop counters.
pub struct CrawlOutcome {
    pub rows: Vec<QuoteRow>,
    /// Listing pages that yielded at least one quote.
    pub pages: usize,
    /// Quotes dropped because their author could not be resolved.
    pub skipped: usize,
}

/// Walk listing pages from 1 until the site runs out (or `limit` pages),
/// enriching every quote with its author's biography.
///
/// Errors never escape. A failed page fetch ends the loop and whatever has
/// accumulated is returned; an unresolvable author drops that one quote.
pub async fn crawl(
    fetcher: &dyn Fetcher,
    config: &AppConfig,
    limit: Option<usize>,
) -> CrawlOutcome {
    let mut outcome = CrawlOutcome {
        rows: Vec::new(),
        pages: 0,
        skipped: 0,
    };
    let base = config.base_page_url.trim_end_matches('/');

    let mut page_number = 1usize;
    loop {
        let url = format!("{base}/{page_number}");
        info!("Downloading page {page_number}: {url}");

        let page = match fetcher.get(&url).await {
            Ok(page) => page,
            Err(e) => {
                error!("Fetching page {page_number} failed: {e:#}");
                break;
            }
        };
        if !page.is_success() {
            error!("Page {page_number} returned {}", page.status);
            break;
        }

        let quotes = extract::quotes(&page.body);
        if quotes.is_empty() {
            info!("No quotes on page {page_number}; end of pagination");
            break;
        }
        outcome.pages += 1;

        for quote in quotes {
            let slug = author_slug(&quote.author);
            match enrich::fetch_author(fetcher, config, &slug).await {
                Some(author) => outcome.rows.push(QuoteRow::merge(quote, author)),
                None => outcome.skipped += 1,
            }
        }

        if let Some(max) = limit {
            if outcome.pages >= max {
                info!("Reached page limit ({max})");
                break;
            }
        }
        if config.inter_page_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(config.inter_page_delay_ms)).await;
        }
        page_number += 1;
    }

    info!(
        "Crawl finished: {} rows from {} pages, {} quotes skipped",
        outcome.rows.len(),
        outcome.pages,
        outcome.skipped
    );
    outcome
}

// ── Tests ──
