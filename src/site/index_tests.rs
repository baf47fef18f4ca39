use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::error::DocqError;

use super::SiteIndex;

fn write_page(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("not-here");

    let result = SiteIndex::load(&missing);

    assert!(matches!(result, Err(DocqError::DocsNotFound(_))));
}

#[test]
fn empty_directory_yields_empty_index() {
    let dir = TempDir::new().unwrap();

    let index = SiteIndex::load(dir.path()).unwrap();

    assert!(index.is_empty());
    assert_eq!(index.len(), 0);
}

#[test]
fn collects_markdown_pages_recursively() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), "install.md", "# Installation\n\nSteps.");
    write_page(dir.path(), "guides/quick-start.md", "# Quick Start\n");
    write_page(dir.path(), "guides/scaling.md", "body without heading");

    let index = SiteIndex::load(dir.path()).unwrap();

    let paths: Vec<&str> = index.pages().iter().map(|p| p.rel_path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["guides/quick-start.md", "guides/scaling.md", "install.md"]
    );
}

#[test]
fn ignores_non_markdown_files() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), "install.md", "# Install\n");
    write_page(dir.path(), "logo.png", "not really a png");
    write_page(dir.path(), "styles.css", "body {}");

    let index = SiteIndex::load(dir.path()).unwrap();

    assert_eq!(index.len(), 1);
    assert_eq!(index.pages()[0].rel_path, "install.md");
}

#[test]
fn title_comes_from_first_heading() {
    let dir = TempDir::new().unwrap();
    write_page(
        dir.path(),
        "guide.md",
        "intro paragraph\n\n# The Real Title\n\n# Second Heading\n",
    );

    let index = SiteIndex::load(dir.path()).unwrap();

    assert_eq!(index.pages()[0].title, "The Real Title");
}

#[test]
fn title_falls_back_to_display_cased_stem() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), "api-reference.md", "no heading here\n");

    let index = SiteIndex::load(dir.path()).unwrap();

    assert_eq!(index.pages()[0].title, "Api Reference");
}

#[test]
fn read_content_round_trips() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), "install.md", "# Install\n\ncargo install docq\n");

    let index = SiteIndex::load(dir.path()).unwrap();
    let content = index.pages()[0].read_content().unwrap();

    assert!(content.contains("cargo install docq"));
}

#[test]
fn read_content_degrades_to_none_when_page_vanishes() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), "install.md", "# Install\n");

    let index = SiteIndex::load(dir.path()).unwrap();
    fs::remove_file(dir.path().join("install.md")).unwrap();

    assert!(index.pages()[0].read_content().is_none());
}
