//! Local path derivation for mirrored manifests
//!
//! This module maps a fetched URL to a deterministic path under the
//! documentation root, and computes relative paths between two such paths
//! for the link rewriter.
//!
//! Layout: `<hostname>/<path-segments>/<filename>`. A path segment that is
//! itself named after a manifest (`llms.txt` / `llms-full.txt`) is not used
//! as a directory; its name (minus the extension) is folded into the
//! filename as a `<prefix>-` instead, so repeated manifest directories never
//! nest and same-named files from different manifest locations stay
//! distinguishable.

use crate::crawler::has_manifest_marker;
use std::path::{Component, Path, PathBuf};
use url::Url;

/// Filename used when a URL has an empty path
const DEFAULT_FILENAME: &str = "llms.txt";

/// Derives the local path for a URL, relative to the documentation root
///
/// Deterministic and pure: the same URL always yields the same path.
/// Returns `None` for URLs without a host.
///
/// # Examples
///
/// ```
/// use llms_mirror::paths::local_path_for;
/// use std::path::PathBuf;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/docs/llms.txt").unwrap();
/// assert_eq!(local_path_for(&url), Some(PathBuf::from("example.com/docs/llms.txt")));
/// ```
pub fn local_path_for(url: &Url) -> Option<PathBuf> {
    let host = url.host_str()?;

    let mut segments: Vec<&str> = url.path().split('/').filter(|s| !s.is_empty()).collect();

    let mut filename = segments
        .pop()
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string());

    let mut path = PathBuf::from(host);
    for segment in segments {
        if has_manifest_marker(segment) {
            // A manifest-named directory folds into the filename instead of
            // nesting. Later segments wrap earlier prefixes.
            let prefix = segment.replacen(".txt", "", 1);
            filename = format!("{}-{}", prefix, filename);
        } else {
            path.push(segment);
        }
    }

    if Path::new(&filename).extension().is_none() {
        filename.push_str(".txt");
    }
    path.push(filename);

    Some(path)
}

/// Computes the relative path from one directory to a target path
///
/// Both arguments must be relative to the same base (the documentation
/// root). The result steps up with `..` past the unshared part of
/// `from_dir` and then down into `to`.
///
/// # Arguments
///
/// * `from_dir` - The directory the relative path starts from
/// * `to` - The target path
pub fn relative_path(from_dir: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component> = from_dir.components().collect();
    let to: Vec<Component> = to.components().collect();

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..from.len() {
        relative.push("..");
    }
    for component in &to[common..] {
        relative.push(component.as_os_str());
    }

    relative
}
