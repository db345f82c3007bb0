//! llms-mirror: a local mirror for llms.txt documentation manifests
//!
//! This crate discovers `llms.txt` / `llms-full.txt` manifests published by
//! third-party sites, follows cross-references among them up to a bounded
//! depth, stores everything under a per-host directory tree, rewrites
//! absolute references into relative local paths, and maintains a persisted
//! index of everything fetched across repeated invocations.

pub mod config;
pub mod crawler;
pub mod output;
pub mod paths;
pub mod rewrite;
pub mod storage;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for llms-mirror operations
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid source URL {url}: {source}")]
    InvalidSource {
        url: String,
        source: ::url::ParseError,
    },

    #[error("Source URL has no host: {0}")]
    MissingHost(String),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Link pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Failed to persist {path}: {source}")]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Metadata serialization error: {0}")]
    Json(#[from] serde_json::Error),

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
}

/// Result type alias for llms-mirror operations
pub type Result<T> = std::result::Result<T, MirrorError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{mirror_source, run_mirror, MirrorSummary, SourceReport};
pub use storage::Metadata;
