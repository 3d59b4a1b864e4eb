//! Per-crawl robots.txt policy cache
//!
//! Policies are keyed by authority and live for the duration of one crawl
//! session only; nothing is shared across separate crawl invocations.

use robotstxt::DefaultMatcher;
use std::collections::HashMap;

/// The robots decision function for one authority.
///
/// Wraps the robotstxt crate's matcher. An authority whose robots.txt could
/// not be fetched or read gets the fail-closed policy: every URL disallowed.
#[derive(Debug, Clone)]
pub struct RobotsPolicy {
    /// Raw robots.txt content; None means the file was unreachable
    content: Option<String>,
}

impl RobotsPolicy {
    /// Policy backed by successfully fetched robots.txt content.
    ///
    /// Empty or permissive content allows everything, matching standard
    /// robots.txt semantics.
    pub fn from_content(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
        }
    }

    /// Fail-closed policy for an authority whose robots.txt was unreachable
    /// or unreadable: disallows every URL.
    pub fn unavailable() -> Self {
        Self { content: None }
    }

    /// Checks whether `user_agent` may fetch `url` under this policy.
    pub fn is_allowed(&self, url: &str, user_agent: &str) -> bool {
        match &self.content {
            Some(content) => {
                let mut matcher = DefaultMatcher::default();
                matcher.one_agent_allowed_by_robots(content, user_agent, url)
            }
            None => false,
        }
    }
}

/// Cache of robots policies keyed by authority.
#[derive(Debug, Default)]
pub struct RobotsCache {
    policies: HashMap<String, RobotsPolicy>,
}

impl RobotsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, authority: &str) -> Option<&RobotsPolicy> {
        self.policies.get(authority)
    }

    pub fn insert(&mut self, authority: String, policy: RobotsPolicy) {
        self.policies.insert(authority, policy);
    }

    pub fn contains(&self, authority: &str) -> bool {
        self.policies.contains_key(authority)
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_allows_all() {
        let policy = RobotsPolicy::from_content("");
        assert!(policy.is_allowed("https://example.com/any", "OutlinerBot"));
    }

    #[test]
    fn test_disallow_all() {
        let policy = RobotsPolicy::from_content("User-agent: *\nDisallow: /");
        assert!(!policy.is_allowed("https://example.com/", "OutlinerBot"));
        assert!(!policy.is_allowed("https://example.com/page", "OutlinerBot"));
    }

    #[test]
    fn test_disallow_prefix() {
        let policy = RobotsPolicy::from_content("User-agent: *\nDisallow: /admin");
        assert!(policy.is_allowed("https://example.com/page", "OutlinerBot"));
        assert!(!policy.is_allowed("https://example.com/admin", "OutlinerBot"));
        assert!(!policy.is_allowed("https://example.com/admin/users", "OutlinerBot"));
    }

    #[test]
    fn test_allow_overrides_disallow() {
        let policy =
            RobotsPolicy::from_content("User-agent: *\nDisallow: /private\nAllow: /private/public");
        assert!(!policy.is_allowed("https://example.com/private", "OutlinerBot"));
        assert!(policy.is_allowed("https://example.com/private/public", "OutlinerBot"));
    }

    #[test]
    fn test_specific_user_agent_group() {
        let policy = RobotsPolicy::from_content(
            "User-agent: BadBot\nDisallow: /\n\nUser-agent: *\nAllow: /",
        );
        assert!(policy.is_allowed("https://example.com/page", "GoodBot"));
        assert!(!policy.is_allowed("https://example.com/page", "BadBot"));
    }

    #[test]
    fn test_unavailable_fails_closed() {
        let policy = RobotsPolicy::unavailable();
        assert!(!policy.is_allowed("https://example.com/", "OutlinerBot"));
        assert!(!policy.is_allowed("https://example.com/anything", "OutlinerBot"));
    }

    #[test]
    fn test_cache_round_trip() {
        let mut cache = RobotsCache::new();
        assert!(cache.is_empty());
        assert!(!cache.contains("example.com"));

        cache.insert("example.com".to_string(), RobotsPolicy::unavailable());
        assert!(cache.contains("example.com"));
        assert_eq!(cache.len(), 1);

        let policy = cache.get("example.com").expect("cached policy");
        assert!(!policy.is_allowed("https://example.com/", "OutlinerBot"));
    }

    #[test]
    fn test_cache_keyed_by_authority() {
        let mut cache = RobotsCache::new();
        cache.insert("a.com".to_string(), RobotsPolicy::from_content(""));
        cache.insert("b.com".to_string(), RobotsPolicy::unavailable());

        assert!(cache
            .get("a.com")
            .is_some_and(|p| p.is_allowed("https://a.com/", "Bot")));
        assert!(cache
            .get("b.com")
            .is_some_and(|p| !p.is_allowed("https://b.com/", "Bot")));
    }
}
