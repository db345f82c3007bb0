//! Integration tests for the mirror
//!
//! These tests use wiremock to stand in for documentation sites and run the
//! full mirror cycle end-to-end against a temporary documentation root.

use llms_mirror::config::Config;
use llms_mirror::output::INDEX_FILE;
use llms_mirror::run_mirror;
use llms_mirror::storage::{Metadata, METADATA_FILE};
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration rooted at the given directory
fn create_test_config(root: &Path) -> Config {
    let mut config = Config::default();
    config.output.root = root.to_path_buf();
    config
}

async fn mount_text(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/plain"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_discovery_saves_and_rewrites() {
    let server = MockServer::start().await;
    let base = server.uri();

    // Root manifest references the full manifest under /docs; both are
    // plain text.
    mount_text(
        &server,
        "/llms.txt",
        format!("# Docs\n\nFull reference: [full]({}/docs/llms-full.txt)\n", base),
    )
    .await;
    mount_text(&server, "/docs/llms-full.txt", "# Full reference\n".to_string()).await;

    let root = tempfile::tempdir().unwrap();
    let config = create_test_config(root.path());

    let source = format!("{}/docs", base);
    let summary = run_mirror(&config, &[source.clone()]).await.unwrap();

    assert_eq!(summary.total_saved, 2);
    assert_eq!(summary.reports.len(), 1);
    assert_eq!(summary.reports[0].stats.saved, 2);

    // Both files live under the host directory
    let index_file = root.path().join("127.0.0.1/llms.txt");
    let full_file = root.path().join("127.0.0.1/docs/llms-full.txt");
    assert!(index_file.is_file());
    assert!(full_file.is_file());

    // The absolute reference was rewritten to a relative local path
    let content = std::fs::read_to_string(&index_file).unwrap();
    assert!(content.contains("[full](docs/llms-full.txt)"));
    assert!(!content.contains(&format!("{}/docs/llms-full.txt", base)));

    // Metadata maps exactly the two fetched URLs to their saved paths
    let metadata = Metadata::load(root.path());
    assert_eq!(metadata.sources, vec![source]);
    assert_eq!(metadata.files.len(), 2);
    assert_eq!(
        metadata.files.get(&format!("{}/llms.txt", base)).unwrap(),
        "127.0.0.1/llms.txt"
    );
    assert_eq!(
        metadata
            .files
            .get(&format!("{}/docs/llms-full.txt", base))
            .unwrap(),
        "127.0.0.1/docs/llms-full.txt"
    );

    // The index lists the host
    let index = std::fs::read_to_string(root.path().join(INDEX_FILE)).unwrap();
    assert!(index.contains("- **127.0.0.1**: [View Files](./127.0.0.1)"));
}

#[tokio::test]
async fn test_reference_chain_followed_from_manifest() {
    let server = MockServer::start().await;
    let base = server.uri();

    // The linked manifest sits at a path no initial candidate probes, so
    // saving it proves the reference was followed.
    mount_text(
        &server,
        "/llms.txt",
        format!("see {}/docs/api/llms-full.txt", base),
    )
    .await;
    mount_text(&server, "/docs/api/llms-full.txt", "# API\n".to_string()).await;

    let root = tempfile::tempdir().unwrap();
    let config = create_test_config(root.path());

    let summary = run_mirror(&config, &[base.clone()]).await.unwrap();

    assert_eq!(summary.total_saved, 2);
    assert!(root
        .path()
        .join("127.0.0.1/docs/api/llms-full.txt")
        .is_file());

    // The bare URL was rewritten relative to the referencing file
    let content = std::fs::read_to_string(root.path().join("127.0.0.1/llms.txt")).unwrap();
    assert!(content.contains("see docs/api/llms-full.txt"));
}

#[tokio::test]
async fn test_html_candidate_skipped_but_others_probed() {
    let server = MockServer::start().await;
    let base = server.uri();

    // llms.txt answers with an HTML page despite the text/plain header;
    // llms-full.txt is a real manifest.
    mount_text(
        &server,
        "/llms.txt",
        "<html><body>Pretty docs portal</body></html>".to_string(),
    )
    .await;
    mount_text(&server, "/llms-full.txt", "# Real manifest\n".to_string()).await;

    let root = tempfile::tempdir().unwrap();
    let config = create_test_config(root.path());

    let summary = run_mirror(&config, &[base.clone()]).await.unwrap();

    assert_eq!(summary.reports[0].stats.skipped, 1);
    assert_eq!(summary.total_saved, 1);
    assert!(!root.path().join("127.0.0.1/llms.txt").exists());
    assert!(root.path().join("127.0.0.1/llms-full.txt").is_file());

    let metadata = Metadata::load(root.path());
    assert_eq!(metadata.files.len(), 1);
    assert!(metadata
        .files
        .contains_key(&format!("{}/llms-full.txt", base)));
}

#[tokio::test]
async fn test_declared_html_content_type_rejected() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/llms.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("# Looks like a manifest")
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let root = tempfile::tempdir().unwrap();
    let config = create_test_config(root.path());

    let summary = run_mirror(&config, &[base]).await.unwrap();

    assert_eq!(summary.reports[0].stats.skipped, 1);
    assert_eq!(summary.total_saved, 0);
}

#[tokio::test]
async fn test_nothing_found_is_not_an_error() {
    let server = MockServer::start().await;
    let base = server.uri();
    // No mocks: every candidate 404s.

    let root = tempfile::tempdir().unwrap();
    let config = create_test_config(root.path());

    let summary = run_mirror(&config, &[base.clone()]).await.unwrap();

    assert_eq!(summary.total_saved, 0);
    assert_eq!(summary.reports[0].stats.skipped, 0);

    // The source is still recorded and both artifacts exist
    let metadata = Metadata::load(root.path());
    assert_eq!(metadata.sources, vec![base]);
    assert!(metadata.files.is_empty());
    assert!(root.path().join(METADATA_FILE).is_file());
    assert!(root.path().join(INDEX_FILE).is_file());
}

#[tokio::test]
async fn test_metadata_accumulates_across_runs() {
    let root = tempfile::tempdir().unwrap();
    let config = create_test_config(root.path());

    let first = MockServer::start().await;
    mount_text(&first, "/llms.txt", "# First\n".to_string()).await;
    let first_source = first.uri();
    run_mirror(&config, &[first_source.clone()]).await.unwrap();

    let second = MockServer::start().await;
    mount_text(&second, "/llms.txt", "# Second\n".to_string()).await;
    let second_source = second.uri();
    run_mirror(&config, &[second_source.clone()]).await.unwrap();

    // Repeating an earlier source must not duplicate it
    run_mirror(&config, &[first_source.clone()]).await.unwrap();

    let metadata = Metadata::load(root.path());
    assert_eq!(
        metadata.sources,
        vec![first_source.clone(), second_source.clone()]
    );

    // The files union keeps both runs' URLs
    assert!(metadata
        .files
        .contains_key(&format!("{}/llms.txt", first_source)));
    assert!(metadata
        .files
        .contains_key(&format!("{}/llms.txt", second_source)));
}

#[tokio::test]
async fn test_failed_source_does_not_stop_later_sources() {
    let server = MockServer::start().await;
    mount_text(&server, "/llms.txt", "# Docs\n".to_string()).await;

    let root = tempfile::tempdir().unwrap();
    let config = create_test_config(root.path());

    let summary = run_mirror(
        &config,
        &["not a url".to_string(), server.uri()],
    )
    .await
    .unwrap();

    assert_eq!(summary.reports.len(), 2);
    assert_eq!(summary.reports[0].stats.saved, 0);
    assert_eq!(summary.reports[1].stats.saved, 1);

    // Both sources are recorded, the invalid one included
    let metadata = Metadata::load(root.path());
    assert_eq!(metadata.sources.len(), 2);
    assert_eq!(metadata.sources[0], "not a url");
}

#[tokio::test]
async fn test_rerun_wipes_host_directory_first() {
    let root = tempfile::tempdir().unwrap();
    let config = create_test_config(root.path());

    let server = MockServer::start().await;
    mount_text(&server, "/llms.txt", "# Docs\n".to_string()).await;
    mount_text(&server, "/extra/llms.txt", "ignored".to_string()).await;

    // First run saves an extra file by probing it directly as the source
    let extra_source = format!("{}/extra/llms.txt", server.uri());
    run_mirror(&config, &[extra_source]).await.unwrap();
    assert!(root.path().join("127.0.0.1/extra").exists());

    // Second run against the site root wipes the whole host directory, so
    // only the new traversal's files remain on disk
    run_mirror(&config, &[server.uri()]).await.unwrap();
    assert!(!root.path().join("127.0.0.1/extra").exists());
    assert!(root.path().join("127.0.0.1/llms.txt").is_file());
}
