use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::DocqError;

use super::breadcrumb::display_case;

/// A single Markdown page discovered under the docs directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Path relative to the docs root, forward-slash separated
    pub rel_path: String,
    /// Display title: first `# ` heading, else the display-cased file stem
    pub title: String,
    abs_path: PathBuf,
}

impl Page {
    /// Read the page body from disk. Pages can disappear between indexing and
    /// selection; that degrades to `None` rather than an error.
    pub fn read_content(&self) -> Option<String> {
        fs::read_to_string(&self.abs_path).ok()
    }
}

/// The set of pages under one docs directory, in stable path order
#[derive(Debug, Default)]
pub struct SiteIndex {
    pages: Vec<Page>,
}

impl SiteIndex {
    pub fn load(docs_dir: &Path) -> Result<Self, DocqError> {
        if !docs_dir.is_dir() {
            return Err(DocqError::DocsNotFound(docs_dir.to_path_buf()));
        }

        let mut pages = Vec::new();

        for entry in WalkDir::new(docs_dir)
            .into_iter()
            .filter_map(|entry| entry.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.path().extension().and_then(|ext| ext.to_str()) != Some("md") {
                continue;
            }

            let rel_path = match entry.path().strip_prefix(docs_dir) {
                Ok(rel) => rel
                    .components()
                    .map(|component| component.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/"),
                Err(_) => continue,
            };

            // Unreadable pages are skipped, not fatal
            let title = match fs::read_to_string(entry.path()) {
                Ok(content) => page_title(&content, &rel_path),
                Err(_) => continue,
            };

            pages.push(Page {
                rel_path,
                title,
                abs_path: entry.path().to_path_buf(),
            });
        }

        pages.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));

        Ok(SiteIndex { pages })
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[cfg(test)]
    pub fn from_pages(pages: Vec<Page>) -> Self {
        SiteIndex { pages }
    }
}

/// First `# ` heading wins; otherwise fall back to the file stem
fn page_title(content: &str, rel_path: &str) -> String {
    for line in content.lines() {
        if let Some(heading) = line.strip_prefix("# ") {
            let heading = heading.trim();
            if !heading.is_empty() {
                return heading.to_string();
            }
        }
    }

    let stem = rel_path
        .rsplit('/')
        .next()
        .unwrap_or(rel_path)
        .trim_end_matches(".md");
    display_case(stem)
}

#[cfg(test)]
impl Page {
    pub fn fixture(rel_path: &str, title: &str) -> Self {
        Page {
            rel_path: rel_path.to_string(),
            title: title.to_string(),
            abs_path: PathBuf::from(rel_path),
        }
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod index_tests;
