//! Robots.txt handling module
//!
//! This module decides fetch permission per URL. The robots.txt for each
//! authority is fetched once per crawl at `{scheme}://{authority}/robots.txt`
//! and cached; any fetch failure (timeout, connection error, non-2xx status)
//! fails closed, disallowing the whole authority for the rest of the crawl.

mod cache;

pub use cache::{RobotsCache, RobotsPolicy};

use crate::url::authority;
use reqwest::Client;
use url::Url;

/// Gate that answers "may we fetch this URL?" for the crawl.
pub struct RobotsGate {
    client: Client,
    user_agent: String,
    cache: RobotsCache,
}

impl RobotsGate {
    /// Creates a gate backed by the given HTTP client.
    ///
    /// `user_agent` is the full identifying string also sent on content
    /// fetches; robots directives are matched against it.
    pub fn new(client: Client, user_agent: String) -> Self {
        Self {
            client,
            user_agent,
            cache: RobotsCache::new(),
        }
    }

    /// Checks whether `url` may be fetched, consulting the cached per-domain
    /// policy and fetching robots.txt on first contact with an authority.
    ///
    /// Never returns an error: unreachable or unparsable robots.txt yields
    /// `false` (disallowed).
    pub async fn is_allowed(&mut self, url: &Url) -> bool {
        let authority = authority(url);
        if authority.is_empty() {
            return false;
        }

        if !self.cache.contains(&authority) {
            let policy = self.fetch_policy(url.scheme(), &authority).await;
            self.cache.insert(authority.clone(), policy);
        }

        self.cache
            .get(&authority)
            .is_some_and(|policy| policy.is_allowed(url.as_str(), &self.user_agent))
    }

    /// Number of authorities with a cached decision.
    pub fn cached_authorities(&self) -> usize {
        self.cache.len()
    }

    async fn fetch_policy(&self, scheme: &str, authority: &str) -> RobotsPolicy {
        let robots_url = format!("{}://{}/robots.txt", scheme, authority);
        tracing::debug!("Fetching robots.txt from {}", robots_url);

        match self.client.get(&robots_url).send().await {
            Ok(response) if response.status().is_success() => match response.text().await {
                Ok(body) => RobotsPolicy::from_content(&body),
                Err(e) => {
                    tracing::warn!("Failed to read robots.txt from {}: {}", robots_url, e);
                    RobotsPolicy::unavailable()
                }
            },
            Ok(response) => {
                tracing::warn!(
                    "robots.txt at {} returned HTTP {}, treating {} as disallowed",
                    robots_url,
                    response.status(),
                    authority
                );
                RobotsPolicy::unavailable()
            }
            Err(e) => {
                tracing::warn!("Failed to fetch robots.txt from {}: {}", robots_url, e);
                RobotsPolicy::unavailable()
            }
        }
    }
}
