use crate::url::authority;
use url::Url;

/// Normalizes a URL into its canonical string form for dedup and comparison.
///
/// # Normalization Steps
///
/// 1. Resolve `raw` against `base` if it is relative (no base: parse as absolute)
/// 2. Remove the fragment (everything after #)
/// 3. Drop the query string
/// 4. Strip trailing slashes from the path
/// 5. Empty path becomes /
///
/// The result is always `scheme://authority/path`. Normalization is
/// idempotent: normalizing an already-normalized URL returns it unchanged.
///
/// There is no error path. Input that cannot be parsed is returned as-is
/// minus its fragment, best effort.
///
/// # Arguments
///
/// * `raw` - The URL or href to normalize
/// * `base` - Base URL to resolve relative hrefs against
///
/// # Examples
///
/// ```
/// use site_outliner::url::normalize;
/// use url::Url;
///
/// let base = Url::parse("https://example.com").unwrap();
/// assert_eq!(normalize("/about/", Some(&base)), "https://example.com/about");
/// ```
pub fn normalize(raw: &str, base: Option<&Url>) -> String {
    let resolved = match base {
        Some(base) => base.join(raw),
        None => Url::parse(raw),
    };

    let url = match resolved {
        Ok(url) => url,
        // Best effort for malformed input: at least the fragment goes away.
        Err(_) => return strip_fragment(raw).to_string(),
    };

    format!(
        "{}://{}{}",
        url.scheme(),
        authority(&url),
        normalize_path(url.path())
    )
}

/// Strips trailing slashes from a path, keeping the root as `/`.
fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

fn strip_fragment(raw: &str) -> &str {
    match raw.find('#') {
        Some(idx) => &raw[..idx],
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com").unwrap()
    }

    #[test]
    fn test_resolve_relative_with_trailing_slash() {
        assert_eq!(
            normalize("/about/", Some(&base())),
            "https://example.com/about"
        );
    }

    #[test]
    fn test_bare_domain_root_keeps_slash() {
        assert_eq!(normalize("https://example.com", None), "https://example.com/");
        assert_eq!(
            normalize("https://example.com/", None),
            "https://example.com/"
        );
    }

    #[test]
    fn test_strip_fragment() {
        assert_eq!(
            normalize("https://example.com/page#section", None),
            "https://example.com/page"
        );
    }

    #[test]
    fn test_fragment_only_href_resolves_to_base_page() {
        assert_eq!(normalize("#top", Some(&base())), "https://example.com/");
    }

    #[test]
    fn test_drop_query() {
        assert_eq!(
            normalize("https://example.com/search?q=rust", None),
            "https://example.com/search"
        );
    }

    #[test]
    fn test_multiple_trailing_slashes() {
        assert_eq!(
            normalize("https://example.com/a//", None),
            "https://example.com/a"
        );
    }

    #[test]
    fn test_relative_path_resolution() {
        let base = Url::parse("https://example.com/docs/intro").unwrap();
        assert_eq!(normalize("guide", Some(&base)), "https://example.com/docs/guide");
    }

    #[test]
    fn test_protocol_relative_href_inherits_scheme() {
        assert_eq!(
            normalize("//example.com/page", Some(&base())),
            "https://example.com/page"
        );
    }

    #[test]
    fn test_port_preserved_in_authority() {
        assert_eq!(
            normalize("http://127.0.0.1:8080/page/", None),
            "http://127.0.0.1:8080/page"
        );
    }

    #[test]
    fn test_host_lowercased() {
        assert_eq!(
            normalize("https://EXAMPLE.COM/Page", None),
            "https://example.com/Page"
        );
    }

    #[test]
    fn test_malformed_input_best_effort() {
        assert_eq!(normalize("not a url#frag", None), "not a url");
        assert_eq!(normalize("not a url", None), "not a url");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "https://example.com",
            "https://example.com/about/",
            "https://example.com/page#frag",
            "https://example.com/search?q=1",
            "http://127.0.0.1:8080///",
        ];
        for input in inputs {
            let once = normalize(input, None);
            let twice = normalize(&once, None);
            assert_eq!(once, twice, "normalize not idempotent for {}", input);
        }
    }
}
