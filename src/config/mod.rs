//! Configuration module for llms-mirror
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. All fields have defaults, so a missing file simply
//! means the default configuration.

mod parser;
mod types;

// Re-export types
pub use types::{Config, FetchConfig, OutputConfig, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::{load_config, validate};
