//! Crawler coordinator - main crawl orchestration logic
//!
//! The coordinator drives the two phases of a crawl session:
//!
//! 1. **Link-graph walk**: breadth-first traversal of the seed's site,
//!    gated per URL by robots.txt and bounded by `max_pages`/`max_depth`,
//!    producing the visited set in discovery order.
//! 2. **Outline collection**: one content fetch per visited URL to extract
//!    its title and heading sequence, producing the immutable `PageResult`
//!    collection the report renderer consumes.
//!
//! Everything is strictly sequential: one fetch completes (or fails) before
//! the next begins, with a fixed politeness delay between fetch attempts.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_page, FetchOutcome};
use crate::crawler::frontier::{Frontier, FrontierEntry};
use crate::crawler::parser::{extract_internal_links, parse_html};
use crate::outline::PageResult;
use crate::robots::RobotsGate;
use crate::url::{authority, normalize};
use crate::{OutlinerError, Result};
use reqwest::Client;
use std::time::{Duration, Instant};
use url::Url;

/// Main crawler coordinator structure
pub struct Coordinator {
    config: Config,
    client: Client,
    robots: RobotsGate,
}

impl Coordinator {
    /// Creates a coordinator from a validated configuration.
    pub fn new(config: Config) -> Result<Self> {
        let user_agent = config.user_agent.full_string();
        let client = build_http_client(&user_agent, config.crawler.fetch_timeout_secs)?;
        let robots = RobotsGate::new(client.clone(), user_agent);

        Ok(Self {
            config,
            client,
            robots,
        })
    }

    /// Runs a full crawl session from `seed` and returns one `PageResult`
    /// per discovered URL, in discovery order.
    ///
    /// The seed must already be an absolute http(s) URL with a host; the
    /// CLI layer validates this before calling in.
    pub async fn run(&mut self, seed: &Url) -> Result<Vec<PageResult>> {
        if seed.host_str().is_none() {
            return Err(OutlinerError::InvalidSeed(seed.to_string()));
        }

        let discovered = self.crawl_site(seed).await;
        tracing::info!("Crawl discovered {} URLs", discovered.len());

        let mut pages = Vec::with_capacity(discovered.len());
        for entry in discovered {
            tracing::info!("Collecting outline for {}", entry.url);
            pages.push(self.collect_outline(&entry).await);
        }

        Ok(pages)
    }

    /// Phase 1: breadth-first walk of the site's internal link graph.
    ///
    /// Per dequeued entry: discard past `max_depth` (it stays in the
    /// visited set), discard when robots.txt disallows, discard on fetch
    /// failure; otherwise extract internal links and admit unseen ones at
    /// depth + 1 until the visited set reaches `max_pages`. The walk ends
    /// when the queue drains.
    async fn crawl_site(&mut self, seed: &Url) -> Vec<FrontierEntry> {
        let base_authority = authority(seed);
        let max_depth = self.config.crawler.max_depth;
        let delay = Duration::from_millis(self.config.crawler.politeness_delay_ms);

        let mut frontier = Frontier::new(
            normalize(seed.as_str(), None),
            self.config.crawler.max_pages,
        );

        let start = Instant::now();
        let mut fetch_attempts: u32 = 0;

        while let Some(entry) = frontier.pop() {
            if entry.depth > max_depth {
                tracing::debug!(
                    "Skipping {} (depth {} exceeds limit {})",
                    entry.url,
                    entry.depth,
                    max_depth
                );
                continue;
            }

            let url = match Url::parse(&entry.url) {
                Ok(url) => url,
                Err(e) => {
                    tracing::debug!("Skipping unparsable frontier URL {}: {}", entry.url, e);
                    continue;
                }
            };

            if !self.robots.is_allowed(&url).await {
                tracing::info!("Skipping {} (disallowed by robots.txt)", entry.url);
                continue;
            }

            tracing::info!("Crawling {} (depth {})", entry.url, entry.depth);
            let outcome = fetch_page(&self.client, &entry.url).await;
            fetch_attempts += 1;

            match outcome {
                FetchOutcome::Success { body, .. } => {
                    let parsed = parse_html(&body, &url);
                    for link in extract_internal_links(&parsed, &base_authority) {
                        if frontier.enqueue(link.clone(), entry.depth + 1) {
                            tracing::debug!("Found internal link: {}", link);
                        }
                    }
                }
                FetchOutcome::HttpStatus { status } => {
                    tracing::warn!("Fetch of {} returned HTTP {}", entry.url, status);
                }
                FetchOutcome::Network { error } => {
                    tracing::warn!("Fetch of {} failed: {}", entry.url, error);
                }
            }

            // Politeness delay between consecutive fetch attempts
            tokio::time::sleep(delay).await;
        }

        tracing::info!(
            "Link walk complete: {} URLs discovered, {} fetch attempts, {} robots decisions cached, {:?} elapsed",
            frontier.visited_count(),
            fetch_attempts,
            self.robots.cached_authorities(),
            start.elapsed()
        );

        frontier.into_discovered()
    }

    /// Phase 2: fetches one discovered URL for content and extracts its
    /// outline.
    ///
    /// Entries past the depth bound, disallowed by robots.txt, or failing
    /// to fetch yield a placeholder result with no headings; the page still
    /// appears in the report.
    async fn collect_outline(&mut self, entry: &FrontierEntry) -> PageResult {
        let fallback_title = format!("Heading Structure for {}", entry.url);

        if entry.depth > self.config.crawler.max_depth {
            return PageResult::empty(entry.url.clone(), fallback_title);
        }

        let url = match Url::parse(&entry.url) {
            Ok(url) => url,
            Err(_) => return PageResult::empty(entry.url.clone(), fallback_title),
        };

        // The per-domain robots decision is already cached from phase 1, so
        // this costs no extra robots.txt fetch.
        if !self.robots.is_allowed(&url).await {
            return PageResult::empty(entry.url.clone(), fallback_title);
        }

        match fetch_page(&self.client, &entry.url).await {
            FetchOutcome::Success { body, .. } => {
                let parsed = parse_html(&body, &url);
                let title = parsed.title.unwrap_or(fallback_title);
                PageResult::new(entry.url.clone(), title, parsed.headings)
            }
            FetchOutcome::HttpStatus { status } => {
                tracing::warn!("Outline fetch of {} returned HTTP {}", entry.url, status);
                PageResult::empty(entry.url.clone(), fallback_title)
            }
            FetchOutcome::Network { error } => {
                tracing::warn!("Outline fetch of {} failed: {}", entry.url, error);
                PageResult::empty(entry.url.clone(), fallback_title)
            }
        }
    }
}
