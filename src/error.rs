use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for docq
#[derive(Debug, Error)]
pub enum DocqError {
    #[error("Docs directory not found: {0}\n\nPoint docq at a directory containing Markdown pages.")]
    DocsNotFound(PathBuf),

    #[error("Invalid config file: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
