use crate::config::ClipboardBackend;

use super::{osc52, system};

/// Result type for clipboard operations
pub type ClipboardResult = Result<(), ClipboardError>;

/// Errors that can occur during clipboard operations
#[derive(Debug)]
pub enum ClipboardError {
    /// System clipboard is not available
    SystemUnavailable,
    /// Error writing to clipboard
    WriteError,
}

/// Copy text using the configured backend.
///
/// `Auto` tries the system clipboard first and falls back to OSC 52 when no
/// display server or clipboard service is reachable.
pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|_| osc52::copy(text)),
    }
}
