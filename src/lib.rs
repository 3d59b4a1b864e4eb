//! Site-Outliner: a heading-structure crawler
//!
//! This crate implements a polite single-site crawler that walks a website's
//! internal link graph breadth-first, extracts the h1-h6 heading hierarchy of
//! every discovered page, validates heading nesting, and renders a combined
//! HTML report.

pub mod config;
pub mod crawler;
pub mod outline;
pub mod report;
pub mod robots;
pub mod url;

use thiserror::Error;

/// Main error type for Site-Outliner operations
#[derive(Debug, Error)]
pub enum OutlinerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Invalid seed URL: {0}")]
    InvalidSeed(String),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Site-Outliner operations
pub type Result<T> = std::result::Result<T, OutlinerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::Coordinator;
pub use outline::{build_tree, has_structural_error, Heading, HeadingNode, PageResult};
pub use url::normalize;
