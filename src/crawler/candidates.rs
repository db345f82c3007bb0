//! Initial candidate URLs for a source
//!
//! Sites publish manifests at the root, under `/.well-known/`, or at a
//! sub-path matching the given source URL. The generator hedges against all
//! three by probing a fixed set of locations before any links are followed.

use url::Url;

/// A URL queued for fetching, with its traversal depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The URL to fetch
    pub url: String,

    /// Breadth-first depth; initial candidates start at 0
    pub depth: u32,
}

impl Candidate {
    /// Creates a depth-0 candidate
    fn seed(url: String) -> Self {
        Self { url, depth: 0 }
    }
}

/// Probe paths appended to the source base and, when distinct, its origin
const PROBE_PATHS: &[&str] = &[
    "llms.txt",
    "llms-full.txt",
    ".well-known/llms.txt",
    ".well-known/llms-full.txt",
];

/// Builds the ordered list of initial candidates for a source URL
///
/// The source URL itself comes first, verbatim. Then the four probe paths
/// are appended to the source string (minus one trailing slash), and, when
/// the source is not already its own origin, to the origin as well. The
/// list contains no duplicates by construction; the scheduler's visited set
/// guards against any overlap with followed links.
///
/// # Arguments
///
/// * `source_url` - The raw source string as supplied by the caller
/// * `source` - The parsed form of the same URL
pub fn initial_candidates(source_url: &str, source: &Url) -> Vec<Candidate> {
    let base = source_url.strip_suffix('/').unwrap_or(source_url);
    let origin = source.origin().ascii_serialization();

    let mut candidates = Vec::with_capacity(1 + 2 * PROBE_PATHS.len());
    candidates.push(Candidate::seed(source_url.to_string()));

    for probe in PROBE_PATHS {
        candidates.push(Candidate::seed(format!("{}/{}", base, probe)));
    }

    if base != origin {
        for probe in PROBE_PATHS {
            candidates.push(Candidate::seed(format!("{}/{}", origin, probe)));
        }
    }

    candidates
}
