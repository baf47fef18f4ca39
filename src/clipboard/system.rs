//! System clipboard backend via arboard

use arboard::Clipboard;

use super::backend::{ClipboardError, ClipboardResult};

/// Copy text to the OS clipboard.
///
/// Opening the clipboard fails in headless environments (no display server);
/// that is reported as `SystemUnavailable` so the caller can fall back.
pub fn copy(text: &str) -> ClipboardResult {
    let mut clipboard = Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?;

    clipboard
        .set_text(text)
        .map_err(|_| ClipboardError::WriteError)
}
