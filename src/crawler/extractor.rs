//! Manifest link extraction
//!
//! This module scans fetched manifest text for references to further
//! manifest files. Two textual shapes are recognized: markdown-style links
//! whose target carries a manifest marker, and bare `http(s)` URLs carrying
//! the same markers. Matches are resolved against the URL the content was
//! fetched from; anything that fails to resolve is discarded silently.

use regex::Regex;
use url::Url;

/// Filename markers that identify a documentation manifest
pub const MANIFEST_MARKERS: &[&str] = &["llms.txt", "llms-full.txt"];

/// Returns true if the value contains one of the manifest filename markers
pub fn has_manifest_marker(value: &str) -> bool {
    MANIFEST_MARKERS.iter().any(|marker| value.contains(marker))
}

/// Scanner for manifest references embedded in fetched text
///
/// The pattern is compiled once and reused across every file of a run.
pub struct LinkExtractor {
    pattern: Regex,
}

impl LinkExtractor {
    /// Compiles the link pattern
    pub fn new() -> Result<Self, regex::Error> {
        // Markdown link targets or plain URLs that include llms.txt or
        // llms-full.txt
        let pattern = Regex::new(
            r"\[.*?\]\((.*?llms(?:-full)?\.txt.*?)\)|(https?://\S*?llms(?:-full)?\.txt\S*)",
        )?;
        Ok(Self { pattern })
    }

    /// Extracts manifest references from content, resolved to absolute URLs
    ///
    /// Results follow the order of first occurrence in the text. Duplicates
    /// are kept; the scheduler's visited set is the single place where
    /// de-duplication happens.
    ///
    /// # Arguments
    ///
    /// * `content` - The fetched manifest text
    /// * `base_url` - The URL the content was fetched from, used to resolve
    ///   relative references
    pub fn extract_links(&self, content: &str, base_url: &Url) -> Vec<String> {
        let mut links = Vec::new();

        for capture in self.pattern.captures_iter(content) {
            let target = match capture.get(1).or_else(|| capture.get(2)) {
                Some(target) => target,
                None => continue,
            };

            if let Ok(absolute) = base_url.join(target.as_str()) {
                links.push(absolute.to_string());
            }
        }

        links
    }
}
