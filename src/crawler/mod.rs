//! Crawler module for manifest discovery and mirroring
//!
//! This module contains the core mirroring logic, including:
//! - Candidate URL generation for a source
//! - HTTP fetching with HTML rejection
//! - Breadth-first traversal with depth bounding and de-duplication
//! - Manifest link extraction
//! - Per-source orchestration and the whole-run entry point

mod candidates;
mod extractor;
mod fetcher;
mod scheduler;

pub use candidates::{initial_candidates, Candidate};
pub use extractor::{has_manifest_marker, LinkExtractor, MANIFEST_MARKERS};
pub use fetcher::{build_http_client, fetch_manifest, FetchOutcome};
pub use scheduler::{crawl_source, CrawlOutcome, CrawlStats, SavedFile, MAX_DEPTH};

use crate::config::Config;
use crate::output::write_index;
use crate::rewrite::rewrite_links;
use crate::storage::{self, Metadata};
use crate::{MirrorError, Result};
use reqwest::Client;
use std::path::Path;
use url::Url;

/// Per-source result reported back to the terminal
#[derive(Debug, Clone)]
pub struct SourceReport {
    /// The source URL as supplied
    pub source: String,

    /// Traversal counters; all zero when the source failed outright
    pub stats: CrawlStats,
}

/// Whole-run result
#[derive(Debug, Default)]
pub struct MirrorSummary {
    /// Files saved across all sources
    pub total_saved: u32,

    /// One report per source, in invocation order
    pub reports: Vec<SourceReport>,
}

/// Mirrors a single source URL into the documentation root
///
/// Records the source in the metadata, wipes the host directory, runs the
/// traversal from the initial candidates, rewrites cross-references in the
/// saved files, and merges the saved locations into the metadata.
///
/// The caller owns metadata persistence; this function only mutates the
/// in-memory document.
///
/// # Arguments
///
/// * `client` - The HTTP client shared across the run
/// * `extractor` - Compiled link scanner shared across the run
/// * `root` - The documentation root directory
/// * `source_url` - The source to mirror
/// * `metadata` - The run's metadata document
pub async fn mirror_source(
    client: &Client,
    extractor: &LinkExtractor,
    root: &Path,
    source_url: &str,
    metadata: &mut Metadata,
) -> Result<CrawlStats> {
    // The source joins the list before anything else happens; membership is
    // exact-string and survives even a failed traversal.
    metadata.record_source(source_url);

    let source = Url::parse(source_url).map_err(|source| MirrorError::InvalidSource {
        url: source_url.to_string(),
        source,
    })?;
    let hostname = source
        .host_str()
        .ok_or_else(|| MirrorError::MissingHost(source_url.to_string()))?
        .to_string();

    storage::reset_host_dir(root, &hostname)?;

    tracing::info!("Discovering and fetching documentation for: {}", source_url);

    let seeds = initial_candidates(source_url, &source);
    let mut outcome = crawl_source(client, extractor, root, seeds).await;

    rewrite_links(&mut outcome.files);

    for file in &outcome.files {
        if let Err(e) = storage::save_file(&root.join(&file.rel_path), &file.content) {
            // The pre-rewrite content stays on disk; the mapping is still
            // recorded since the file exists.
            tracing::warn!(
                "Failed to write rewritten {}: {}",
                file.rel_path.display(),
                e
            );
        }
        metadata.record_file(&file.url, &file.rel_path.to_string_lossy());
    }

    tracing::info!(
        "{}: {} checked, {} saved, {} skipped",
        source_url,
        outcome.stats.checked,
        outcome.stats.saved,
        outcome.stats.skipped
    );

    Ok(outcome.stats)
}

/// Runs a complete mirror operation over one or more sources
///
/// Sources are processed strictly one after another. The metadata document
/// is loaded once at the start, merged as each source completes, and
/// written back once at the very end together with the regenerated index
/// document. A source that fails outright (invalid URL, host directory
/// wipe failure) is logged and does not stop the remaining sources.
///
/// # Arguments
///
/// * `config` - The run configuration
/// * `sources` - Source URLs, in invocation order
pub async fn run_mirror(config: &Config, sources: &[String]) -> Result<MirrorSummary> {
    let root = config.output.root.as_path();
    std::fs::create_dir_all(root)?;

    let mut metadata = Metadata::load(root);
    let client = build_http_client(&config.fetch)?;
    let extractor = LinkExtractor::new()?;

    let mut summary = MirrorSummary::default();

    for source_url in sources {
        let stats = match mirror_source(&client, &extractor, root, source_url, &mut metadata).await
        {
            Ok(stats) => stats,
            Err(e) => {
                tracing::error!("Failed to mirror {}: {}", source_url, e);
                CrawlStats::default()
            }
        };

        summary.total_saved += stats.saved;
        summary.reports.push(SourceReport {
            source: source_url.clone(),
            stats,
        });
    }

    metadata.save(root)?;
    write_index(root, &metadata)?;

    Ok(summary)
}
