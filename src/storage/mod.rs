//! Filesystem side of the mirror
//!
//! This module owns everything that touches the documentation root: the
//! destructive per-host reset before a source is re-fetched, saving
//! individual files with their parent directories, and the persisted
//! metadata document.

mod metadata;

pub use metadata::{Metadata, METADATA_FILE};

use std::io;
use std::path::Path;

/// Removes a host's directory under the documentation root, if present
///
/// Every traversal starts from a clean slate for its host. This is a
/// destructive, non-idempotent operation: whatever a previous run stored
/// for the host is gone before the new fetch begins, and concurrent runs
/// sharing a root are undefined.
///
/// # Arguments
///
/// * `root` - The documentation root directory
/// * `hostname` - Hostname whose subdirectory is wiped
pub fn reset_host_dir(root: &Path, hostname: &str) -> io::Result<()> {
    let host_dir = root.join(hostname);
    if host_dir.exists() {
        tracing::info!("Cleaning up existing documentation for {}", hostname);
        std::fs::remove_dir_all(&host_dir)?;
    }
    Ok(())
}

/// Writes content to a path, creating parent directories as needed
pub fn save_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}
