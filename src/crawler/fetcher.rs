//! HTTP fetcher implementation
//!
//! This module handles all content requests for the crawler:
//! - Building the HTTP client with the identifying user agent
//! - GET requests with a bounded timeout
//! - Error classification into non-fatal fetch outcomes

use reqwest::Client;
use std::time::Duration;

/// Result of a fetch operation.
///
/// Every variant is non-fatal to the crawl; a failed fetch skips the single
/// URL it was for.
#[derive(Debug)]
pub enum FetchOutcome {
    /// 2xx response with a readable body
    Success {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// Response arrived with a non-2xx status
    HttpStatus {
        /// HTTP status code
        status: u16,
    },

    /// No usable response (timeout, connection failure, body read error)
    Network {
        /// Error description
        error: String,
    },
}

impl FetchOutcome {
    /// Returns true for a 2xx response with a body.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Builds the HTTP client used for both content and robots.txt fetches.
///
/// The client sends the fixed identifying `user_agent` on every request,
/// bounds each request with `timeout_secs`, and validates TLS certificates
/// (the rustls default is kept).
pub fn build_http_client(user_agent: &str, timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.to_string())
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the outcome.
///
/// | Condition | Outcome |
/// |-----------|---------|
/// | 2xx with readable body | `Success` |
/// | Any other status | `HttpStatus` |
/// | Timeout | `Network("request timeout")` |
/// | Connection refused / DNS / TLS | `Network("connection failed: ...")` |
/// | Body read error | `Network` |
pub async fn fetch_page(client: &Client, url: &str) -> FetchOutcome {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            if !status.is_success() {
                return FetchOutcome::HttpStatus {
                    status: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchOutcome::Success {
                    status: status.as_u16(),
                    body,
                },
                Err(e) => FetchOutcome::Network {
                    error: format!("failed to read body: {}", e),
                },
            }
        }
        Err(e) => {
            if e.is_timeout() {
                FetchOutcome::Network {
                    error: "request timeout".to_string(),
                }
            } else if e.is_connect() {
                FetchOutcome::Network {
                    error: format!("connection failed: {}", e),
                }
            } else {
                FetchOutcome::Network {
                    error: e.to_string(),
                }
            }
        }
    }
}
