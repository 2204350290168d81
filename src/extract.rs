//! HTML extraction: pure functions over already-fetched documents.
//!
//! The selectors encode the contract with the source site. A listing page
//! holds zero or more `div.quote` blocks; an author page holds at most one
//! `div.author-details` block. Anything missing degrades to fewer records
//! (listing side) or sentinel defaults (author side), never to an error.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static QUOTE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.quote").unwrap());
static TEXT_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.text").unwrap());
static AUTHOR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("small.author").unwrap());
static TAG_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a.tag").unwrap());

static DETAILS_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.author-details").unwrap());
static TITLE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h3.author-title").unwrap());
static BORN_DATE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.author-born-date").unwrap());
static BORN_LOCATION_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.author-born-location").unwrap());
static DESCRIPTION_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.author-description").unwrap());

pub const UNKNOWN: &str = "Unknown";
pub const NO_DESCRIPTION: &str = "No description";

/// One quote block from a listing page. Tags keep document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub tags: Vec<String>,
}

/// Biography block from an author page. Always fully populated; fields the
/// page lacked carry their sentinel default.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorInfo {
    pub name: String,
    pub born_date: String,
    pub born_location: String,
    pub description: String,
}

/// All quote blocks on a listing page, in document order. Blocks missing a
/// text span or an author name are skipped.
pub fn quotes(html: &str) -> Vec<Quote> {
    let doc = Html::parse_document(html);
    let mut out = Vec::new();

    for block in doc.select(&QUOTE_SEL) {
        let Some(text) = first_text(block, &TEXT_SEL) else {
            continue;
        };
        let Some(author) = first_text(block, &AUTHOR_SEL) else {
            continue;
        };
        let tags = block.select(&TAG_SEL).map(element_text).collect();
        out.push(Quote { text, author, tags });
    }

    out
}

/// The author detail block, if the page has one. `None` means the page
/// carried no `author-details` container at all.
pub fn author_details(html: &str) -> Option<AuthorInfo> {
    let doc = Html::parse_document(html);
    let details = doc.select(&DETAILS_SEL).next()?;

    let field = |sel: &Selector, default: &str| {
        first_text(details, sel).unwrap_or_else(|| default.to_string())
    };

    Some(AuthorInfo {
        name: field(&TITLE_SEL, UNKNOWN),
        born_date: field(&BORN_DATE_SEL, UNKNOWN),
        born_location: field(&BORN_LOCATION_SEL, UNKNOWN),
        description: field(&DESCRIPTION_SEL, NO_DESCRIPTION),
    })
}

fn first_text(scope: ElementRef, sel: &Selector) -> Option<String> {
    scope.select(sel).next().map(element_text)
}

fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

// ── Tests ──
