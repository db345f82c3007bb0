//! The persisted metadata document
//!
//! `metadata.json` lives at the documentation root and accumulates across
//! runs: the list of sources ever mirrored (append-once, exact-string
//! membership) and the mapping from every fetched URL to the root-relative
//! path of its saved copy. It is read once at the start of a run and
//! overwritten wholesale at the end; a missing or corrupt file falls back
//! to the empty structure.

use crate::{MirrorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use url::Url;

/// Filename of the metadata document under the documentation root
pub const METADATA_FILE: &str = "metadata.json";

/// Persisted record of everything mirrored across runs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metadata {
    /// Source URLs ever mirrored, in first-seen order
    #[serde(default)]
    pub sources: Vec<String>,

    /// Fetched URL to root-relative path of its saved copy
    #[serde(default)]
    pub files: BTreeMap<String, String>,
}

impl Metadata {
    /// Loads the metadata document from the documentation root
    ///
    /// A missing file yields the empty structure; a corrupt file does too,
    /// with a warning, and will be overwritten at the end of the run.
    pub fn load(root: &Path) -> Self {
        let path = root.join(METADATA_FILE);

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };

        match serde_json::from_str(&content) {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::warn!(
                    "Ignoring corrupt metadata at {}: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Writes the metadata document back to the documentation root
    pub fn save(&self, root: &Path) -> Result<()> {
        let path = root.join(METADATA_FILE);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json).map_err(|source| MirrorError::Persist { path, source })
    }

    /// Records a source URL, appending only if not already present
    ///
    /// Membership is exact-string: no normalization of trailing slashes or
    /// scheme case is attempted.
    pub fn record_source(&mut self, source_url: &str) {
        if !self.sources.iter().any(|s| s == source_url) {
            self.sources.push(source_url.to_string());
        }
    }

    /// Records the saved location of a fetched URL, overwriting any earlier
    /// entry for the same URL
    pub fn record_file(&mut self, url: &str, rel_path: &str) {
        self.files.insert(url.to_string(), rel_path.to_string());
    }

    /// Distinct hostnames across all recorded files, sorted
    ///
    /// Keys that no longer parse as URLs are skipped.
    pub fn hostnames(&self) -> BTreeSet<String> {
        self.files
            .keys()
            .filter_map(|url| Url::parse(url).ok())
            .filter_map(|url| url.host_str().map(str::to_string))
            .collect()
    }
}
