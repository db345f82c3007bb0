//! Post-traversal link rewriting
//!
//! After a source's traversal completes, every saved file has each fetched
//! URL's literal text replaced with the relative local path of that URL's
//! saved copy, turning the tree into a self-contained mirror.
//!
//! Ordering invariant: URLs are applied longest-first. A shorter URL that
//! is a prefix of a longer one would otherwise match inside the longer
//! URL's occurrences and corrupt references that should have resolved to
//! the longer URL's target.

use crate::crawler::SavedFile;
use crate::paths::relative_path;
use std::cmp::Reverse;
use std::path::Path;

/// Rewrites fetched-URL references in every saved file to relative paths
///
/// Mutates each file's content in place; callers persist the result.
/// Replacement is literal substring matching, no pattern semantics.
pub fn rewrite_links(files: &mut [SavedFile]) {
    let mut targets: Vec<(String, std::path::PathBuf)> = files
        .iter()
        .map(|file| (file.url.clone(), file.rel_path.clone()))
        .collect();

    // Longest URL first so prefix URLs cannot corrupt longer matches.
    targets.sort_by_key(|(url, _)| Reverse(url.len()));

    for file in files.iter_mut() {
        let dir = file.rel_path.parent().unwrap_or_else(|| Path::new(""));

        for (url, target) in &targets {
            let relative = relative_path(dir, target);
            file.content = file
                .content
                .replace(url.as_str(), &relative.to_string_lossy());
        }
    }
}
