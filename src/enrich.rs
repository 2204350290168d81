use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::extract::{self, AuthorInfo};
use crate::fetch::Fetcher;

/// Fetch and parse the detail page for one author slug.
///
/// Every failure mode degrades to `None`: a 404 is the normal outcome for an
/// author without a detail page, other statuses and transport errors are
/// logged, and a 2xx page without a details block counts for nothing.
pub async fn fetch_author(
    fetcher: &dyn Fetcher,
    config: &AppConfig,
    slug: &str,
) -> Option<AuthorInfo> {
    let url = format!("{}/{}", config.base_author_url.trim_end_matches('/'), slug);
    debug!("Fetching author page: {url}");

    let page = match fetcher.get(&url).await {
        Ok(page) => page,
        Err(e) => {
            warn!("Fetching author page for {slug} failed: {e:#}");
            return None;
        }
    };

    if page.status == StatusCode::NOT_FOUND {
        debug!("No author page for {slug} (404)");
        return None;
    }
    if !page.is_success() {
        warn!("Author page for {slug} returned {}", page.status);
        return None;
    }

    let details = extract::author_details(&page.body);
    if details.is_none() {
        warn!("No author details found for {slug}");
    }
    details
}

// ── Tests ──
