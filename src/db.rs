use std::sync::LazyLock;

use anyhow::{bail, Context, Result};
use regex::Regex;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::AppConfig;
use crate::extract::{AuthorInfo, Quote};

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// One row of the destination table: a quote merged with its author's bio.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRow {
    pub quote: String,
    pub author: String,
    pub tags: String,
    pub born_date: String,
    pub born_location: String,
    pub description: String,
}

impl QuoteRow {
    /// Flatten a quote and its resolved author into a persistable row.
    /// Tags are rendered as a comma-joined string.
    pub fn merge(quote: Quote, author: AuthorInfo) -> Self {
        Self {
            quote: quote.text,
            author: quote.author,
            tags: quote.tags.join(", "),
            born_date: author.born_date,
            born_location: author.born_location,
            description: author.description,
        }
    }
}

pub async fn connect(config: &AppConfig) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database_url())
        .await
        .with_context(|| format!("Failed to connect to database {}", config.db_name))
}

/// Startup connectivity check. The outcome is informational only; callers
/// log it and proceed either way.
pub async fn probe(config: &AppConfig) -> Result<()> {
    let pool = connect(config).await?;
    sqlx::query("SELECT 1").execute(&pool).await?;
    pool.close().await;
    Ok(())
}

/// Replace the destination table with `rows`: drop, recreate, and insert in
/// order, all inside one transaction.
pub async fn replace_all(pool: &PgPool, table: &str, rows: &[QuoteRow]) -> Result<()> {
    if !IDENTIFIER_RE.is_match(table) {
        bail!("Invalid table name: {table:?}");
    }

    let mut tx = pool.begin().await?;

    sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
        .execute(&mut *tx)
        .await?;
    sqlx::query(&format!(
        "CREATE TABLE {table} (
            quote         TEXT NOT NULL,
            author        TEXT NOT NULL,
            tags          TEXT NOT NULL,
            born_date     TEXT NOT NULL,
            born_location TEXT NOT NULL,
            description   TEXT NOT NULL
        )"
    ))
    .execute(&mut *tx)
    .await?;

    let insert = format!(
        "INSERT INTO {table} (quote, author, tags, born_date, born_location, description)
         VALUES ($1, $2, $3, $4, $5, $6)"
    );
    for row in rows {
        sqlx::query(&insert)
            .bind(&row.quote)
            .bind(&row.author)
            .bind(&row.tags)
            .bind(&row.born_date)
            .bind(&row.born_location)
            .bind(&row.description)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    info!("Replaced table {table} with {} rows", rows.len());
    Ok(())
}

/// Connect, bulk-replace, release. The caller decides what a failure means.
pub async fn persist(config: &AppConfig, rows: &[QuoteRow]) -> Result<()> {
    let pool = connect(config).await?;
    let result = replace_all(&pool, &config.table_name, rows).await;
    pool.close().await;
    result
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::testutil::test_config;

    fn quote(tags: &[&str]) -> Quote {
        Quote {
            text: "Quote text".into(),
            author: "Author Name".into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn author() -> AuthorInfo {
        AuthorInfo {
            name: "Author Name".into(),
            born_date: "Born Date".into(),
            born_location: "Born Location".into(),
            description: "Description".into(),
        }
    }

    #[test]
    fn merge_joins_tags_with_comma_space() {
        let row = QuoteRow::merge(quote(&["tag1", "tag2"]), author());
        assert_eq!(row.tags, "tag1, tag2");
    }

    #[test]
    fn merge_with_no_tags_renders_empty_string() {
        let row = QuoteRow::merge(quote(&[]), author());
        assert_eq!(row.tags, "");
    }

    #[test]
    fn merge_keeps_listing_author_name() {
        let mut info = author();
        info.name = "Unknown".into();
        let row = QuoteRow::merge(quote(&[]), info);
        assert_eq!(row.author, "Author Name");
    }

    #[test]
    fn table_names_are_validated() {
        assert!(IDENTIFIER_RE.is_match("all_quotes_data"));
        assert!(IDENTIFIER_RE.is_match("_staging"));
        assert!(!IDENTIFIER_RE.is_match("1table"));
        assert!(!IDENTIFIER_RE.is_match(""));
        assert!(!IDENTIFIER_RE.is_match("quotes; DROP TABLE users"));
        assert!(!IDENTIFIER_RE.is_match("bad-name"));
    }

    #[tokio::test]
    async fn unreachable_store_surfaces_an_error() {
        // test_config points at a port nothing listens on.
        let rows = vec![QuoteRow::merge(quote(&["tag1"]), author())];
        assert!(persist(&test_config(), &rows).await.is_err());
        assert!(probe(&test_config()).await.is_err());
    }
}
