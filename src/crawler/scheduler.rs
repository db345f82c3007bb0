//! Breadth-first traversal over the candidate queue
//!
//! This module owns the work queue, the visited set, and the per-source
//! counters. One fetch is in flight at a time: the loop suspends at each
//! fetch call and resumes with its result before dequeuing the next item.
//! A hard depth ceiling bounds fan-out on pathological or cyclic manifest
//! graphs.

use crate::crawler::candidates::Candidate;
use crate::crawler::extractor::{has_manifest_marker, LinkExtractor};
use crate::crawler::fetcher::{fetch_manifest, FetchOutcome};
use crate::paths::local_path_for;
use crate::storage;
use reqwest::Client;
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use url::Url;

/// Hard ceiling on traversal depth. Deliberately not configurable.
pub const MAX_DEPTH: u32 = 5;

/// Running counters for one source's traversal
#[derive(Debug, Clone, Copy, Default)]
pub struct CrawlStats {
    /// URLs dequeued and actually probed
    pub checked: u32,

    /// Manifests saved to disk
    pub saved: u32,

    /// URLs rejected because they answered with HTML
    pub skipped: u32,
}

/// A manifest saved during the traversal
///
/// `content` holds what was fetched; the rewrite pass mutates it in place
/// before it is written back.
#[derive(Debug, Clone)]
pub struct SavedFile {
    /// The URL the content was fetched from
    pub url: String,

    /// Local path of the saved copy, relative to the documentation root
    pub rel_path: PathBuf,

    /// File content
    pub content: String,
}

/// Result of one source's traversal
#[derive(Debug, Default)]
pub struct CrawlOutcome {
    pub stats: CrawlStats,
    pub files: Vec<SavedFile>,
}

/// Runs the breadth-first traversal for one source
///
/// The queue starts with the candidate list and grows as manifest files
/// reference further manifests. Policy per dequeued (url, depth) pair:
///
/// - already visited or deeper than [`MAX_DEPTH`]: discarded, not counted
/// - HTML response: counted as skipped, traversal continues
/// - non-success or transport failure: treated as absence, not counted
/// - usable text: saved under the documentation root and recorded; links
///   are followed at depth + 1 only for manifest-named URLs below the
///   ceiling
///
/// A filesystem write failure is logged and the file is not recorded as
/// saved; the traversal continues.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `extractor` - Compiled link scanner
/// * `root` - The documentation root directory
/// * `seeds` - Initial depth-0 candidates
pub async fn crawl_source(
    client: &Client,
    extractor: &LinkExtractor,
    root: &Path,
    seeds: Vec<Candidate>,
) -> CrawlOutcome {
    let mut queue: VecDeque<Candidate> = seeds.into();
    let mut visited: HashSet<String> = HashSet::new();
    let mut outcome = CrawlOutcome::default();

    while let Some(Candidate { url, depth }) = queue.pop_front() {
        if depth > MAX_DEPTH || visited.contains(&url) {
            continue;
        }
        visited.insert(url.clone());
        outcome.stats.checked += 1;

        tracing::debug!(
            "Probing {} (depth {}): {} checked, {} saved, {} skipped",
            url,
            depth,
            outcome.stats.checked,
            outcome.stats.saved,
            outcome.stats.skipped
        );

        let content = match fetch_manifest(client, &url).await {
            FetchOutcome::Found(content) => content,
            FetchOutcome::HtmlRejected => {
                outcome.stats.skipped += 1;
                continue;
            }
            FetchOutcome::Missing => continue,
        };

        let parsed = match Url::parse(&url) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Fetched URL no longer parses ({}), dropping: {}", e, url);
                continue;
            }
        };

        // Manifest files below the ceiling are scanned for further
        // references before the content is handed to storage.
        if has_manifest_marker(&url) && depth < MAX_DEPTH {
            for link in extractor.extract_links(&content, &parsed) {
                if !visited.contains(&link) {
                    queue.push_back(Candidate {
                        url: link,
                        depth: depth + 1,
                    });
                }
            }
        }

        let rel_path = match local_path_for(&parsed) {
            Some(rel_path) => rel_path,
            None => {
                tracing::warn!("No local path for {}, dropping", url);
                continue;
            }
        };

        match storage::save_file(&root.join(&rel_path), &content) {
            Ok(()) => {
                outcome.stats.saved += 1;
                outcome.files.push(SavedFile {
                    url,
                    rel_path,
                    content,
                });
            }
            Err(e) => {
                tracing::warn!("Failed to save {}: {}", rel_path.display(), e);
            }
        }
    }

    outcome
}
