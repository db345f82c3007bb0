//! Index document generation
//!
//! `GEMINI.md` at the documentation root is the human- and agent-readable
//! entry point into the mirror: a heading, a pointer to `metadata.json`,
//! and one bullet per mirrored hostname linking to its subdirectory. It is
//! regenerated wholesale from the metadata on every run, never patched.

use crate::storage::{Metadata, METADATA_FILE};
use crate::{MirrorError, Result};
use std::path::Path;

/// Filename of the index document under the documentation root
pub const INDEX_FILE: &str = "GEMINI.md";

/// Renders the index document from the merged metadata
pub fn format_index(metadata: &Metadata) -> String {
    let mut md = String::new();

    md.push_str("# Project Documentation Index\n\n");
    md.push_str(&format!(
        "This directory contains documentation fetched via llms.txt discovery. \
         Detailed URL mappings can be found in [{0}]({0}).\n\n",
        METADATA_FILE
    ));
    md.push_str("## Imported Libraries\n\n");

    for host in metadata.hostnames() {
        md.push_str(&format!("- **{}**: [View Files](./{})\n", host, host));
    }

    md
}

/// Writes the regenerated index document to the documentation root
pub fn write_index(root: &Path, metadata: &Metadata) -> Result<()> {
    let path = root.join(INDEX_FILE);
    std::fs::write(&path, format_index(metadata))
        .map_err(|source| MirrorError::Persist { path, source })
}
