//! Output module for the generated mirror artifacts
//!
//! The mirror's navigable entry point is the index document, regenerated
//! from the metadata at the end of every run.

mod index;

pub use index::{format_index, write_index, INDEX_FILE};
