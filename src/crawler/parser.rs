//! HTML parser for extracting links, titles, and headings
//!
//! This module handles parsing fetched HTML to extract:
//! - Outbound links from `<a href>` anchors
//! - The page title
//! - The ordered h1-h6 heading sequence
//!
//! Parsing is best effort and never fails: malformed HTML yields whatever
//! the parser can recover, and absent elements yield empty values.

use crate::outline::Heading;
use crate::url::{is_internal, normalize};
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use url::Url;

/// Extracted information from an HTML page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// The page title (from the `<title>` tag), if present and non-empty
    pub title: Option<String>,

    /// All followable links found on the page, as absolute http(s) URLs,
    /// in document order and not yet filtered by domain
    pub links: Vec<String>,

    /// All h1-h6 headings in document order, recorded verbatim:
    /// duplicates and out-of-order levels included
    pub headings: Vec<Heading>,
}

/// Parses HTML content and extracts links, title, and headings.
///
/// # Link Extraction Rules
///
/// **Include:** `<a href="...">` anchors, resolved against `base_url`.
///
/// **Exclude:** `javascript:`, `mailto:`, `tel:` and `data:` hrefs,
/// fragment-only hrefs (same-page anchors), and anything that does not
/// resolve to an http(s) URL.
pub fn parse_html(html: &str, base_url: &Url) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: extract_title(&document),
        links: extract_links(&document, base_url),
        headings: extract_headings(&document),
    }
}

/// Filters a parsed page's links down to normalized in-domain URLs.
///
/// A link is internal when its resolved authority equals `base_authority`.
/// The result is a set: order-free and already normalized, ready for
/// comparison against the visited set.
pub fn extract_internal_links(page: &ParsedPage, base_authority: &str) -> BTreeSet<String> {
    page.links
        .iter()
        .filter_map(|link| Url::parse(link).ok())
        .filter(|url| is_internal(url, base_authority))
        .map(|url| normalize(url.as_str(), None))
        .collect()
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| collapse_whitespace(&element.text().collect::<String>()))
        .filter(|title| !title.is_empty())
}

/// Extracts all followable links from the HTML document
fn extract_links(document: &Html, base_url: &Url) -> Vec<String> {
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute) = resolve_link(href, base_url) {
                    links.push(absolute);
                }
            }
        }
    }

    links
}

/// Extracts h1-h6 headings in document order
fn extract_headings(document: &Html) -> Vec<Heading> {
    let mut headings = Vec::new();

    // A compound selector visits matches in document order, not grouped by
    // level.
    if let Ok(selector) = Selector::parse("h1, h2, h3, h4, h5, h6") {
        for element in document.select(&selector) {
            if let Some(level) = heading_level(element.value().name()) {
                let text = collapse_whitespace(&element.text().collect::<String>());
                headings.push(Heading::new(level, text));
            }
        }
    }

    headings
}

fn heading_level(tag_name: &str) -> Option<u8> {
    match tag_name {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// Trims and collapses internal whitespace runs to single spaces
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolves a link href to an absolute URL and validates it.
///
/// Returns None if the link should be excluded:
/// - `javascript:`, `mailto:`, `tel:` schemes and `data:` URIs
/// - Fragment-only hrefs (same-page anchors)
/// - Invalid URLs or non-http(s) URLs after resolution
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    if href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute) => {
            if absolute.scheme() == "http" || absolute.scheme() == "https" {
                Some(absolute.to_string())
            } else {
                None
            }
        }
        Err(_) => None,
    }
}
