//! Tests for filesystem overrides of the embedded names, config and templates.

mod common;

use common::{assert_colour_page, assert_html, assert_resolved, fixtures, TestApp};
use std::fs;

#[tokio::test]
async fn test_names_file_replaces_embedded_names() {
    let dir = tempfile::tempdir().unwrap();
    let names = dir.path().join("names.txt");
    fs::write(&names, fixtures::CUSTOM_NAMES).unwrap();

    let app = TestApp::with_files(None, Some(names), None);

    assert_eq!(app.colours.names().len(), 2);
    assert_resolved(&app.get("/api/colour/MidnightInk").await, "#010203", "name");
    assert_resolved(&app.get("/api/colour/red").await, "#0A141E", "name");
    // "beige" is no longer a name, so it reads as loose hex
    assert_resolved(&app.get("/api/colour/beige").await, "#BBEEEE", "hex");
}

#[tokio::test]
async fn test_config_file_changes_fallback_and_site_name() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.yaml");
    fs::write(&config, fixtures::CUSTOM_CONFIG).unwrap();

    let app = TestApp::with_files(Some(config), None, None);

    assert_resolved(
        &app.get("/api/colour/nope?format=rgb").await,
        "#00AA00",
        "fallback",
    );
    let html = assert_html(&app.get("/cmyk/1").await);
    assert!(html.contains("<title>#00AA00 - Test Swatches</title>"));
}

#[tokio::test]
async fn test_broken_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.yaml");
    fs::write(&config, "featured: [").unwrap();

    let app = TestApp::with_files(Some(config), None, None);

    assert_colour_page(&app.get("/rgb/x").await, "F27878", "#000000");
}

#[tokio::test]
async fn test_templates_dir_overrides_page() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("colour.html"),
        "<p>{{ hex }} on {{ foreground }}</p>",
    )
    .unwrap();

    let app = TestApp::with_files(None, None, Some(dir.path().to_path_buf()));

    let html = assert_html(&app.get("/0000FF").await);
    assert_eq!(html, "<p>0000FF on #FFFFFF</p>");
    // index.html is missing from the directory and comes from the binary
    assert!(assert_html(&app.get("/").await).contains("<title>Pinea Colours</title>"));
}
