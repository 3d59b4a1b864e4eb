//! URL handling module for Site-Outliner
//!
//! This module provides URL normalization, authority extraction, and the
//! internal-link test used to keep the crawl on one site.

mod normalize;

pub use normalize::normalize;

use url::Url;

/// Extracts the authority (host, plus port if present) from a URL
///
/// The host is lowercased. URLs without a host (which shouldn't happen for
/// valid HTTP(S) URLs) yield an empty string.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_outliner::url::authority;
///
/// let url = Url::parse("https://Example.COM/path").unwrap();
/// assert_eq!(authority(&url), "example.com");
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(authority(&url), "127.0.0.1:8080");
/// ```
pub fn authority(url: &Url) -> String {
    let host = url.host_str().unwrap_or("").to_lowercase();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host,
    }
}

/// Returns true if `url` belongs to the crawl's base site.
///
/// A link is internal when its resolved authority equals the base authority.
/// Relative and protocol-relative hrefs inherit the current page's authority
/// during resolution, so they classify as internal automatically.
pub fn is_internal(url: &Url, base_authority: &str) -> bool {
    authority(url) == base_authority
}
