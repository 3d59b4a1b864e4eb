//! Configuration module for Site-Outliner
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every section is optional; absent keys fall back to defaults.
//!
//! # Example
//!
//! ```no_run
//! use site_outliner::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Crawler will visit at most {} pages", config.crawler.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
