//! llms-mirror main entry point
//!
//! Command-line interface for mirroring llms.txt documentation manifests
//! into a local directory tree.

use clap::Parser;
use llms_mirror::config::{load_config, Config};
use llms_mirror::output::INDEX_FILE;
use llms_mirror::run_mirror;
use llms_mirror::storage::METADATA_FILE;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Discover and mirror llms.txt documentation manifests
///
/// Probes each source URL and its origin for llms.txt / llms-full.txt
/// manifests, follows references among them, and stores everything under a
/// per-host directory tree with cross-references rewritten to relative
/// local paths.
#[derive(Parser, Debug)]
#[command(name = "llms-mirror")]
#[command(version)]
#[command(about = "Mirror llms.txt documentation manifests locally", long_about = None)]
struct Cli {
    /// Source URLs to discover documentation for
    #[arg(value_name = "URL", required = true, num_args = 1..)]
    sources: Vec<String>,

    /// Documentation root directory (overrides the config file)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };
    if let Some(root) = cli.root {
        config.output.root = root;
    }

    let summary = run_mirror(&config, &cli.sources).await?;

    if !cli.quiet {
        println!();
        for report in &summary.reports {
            println!(
                "{}: {} checked, {} saved, {} skipped",
                report.source, report.stats.checked, report.stats.saved, report.stats.skipped
            );
        }
        println!();

        if summary.total_saved == 0 {
            println!("No llms.txt or llms-full.txt found for any provided URLs.");
        } else {
            println!("Documentation fetch complete.");
            println!("- Total files saved: {}", summary.total_saved);
            println!("- Documentation root: {}", config.output.root.display());
            println!("- Index file: {}", INDEX_FILE);
            println!("- Metadata file: {}", METADATA_FILE);
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("llms_mirror=info,warn"),
            1 => EnvFilter::new("llms_mirror=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
