//! Clipboard support
//!
//! Copying goes through the OS clipboard when one is reachable, with an
//! OSC 52 escape-sequence fallback for SSH sessions and headless terminals.

mod backend;
mod osc52;
mod system;

pub use backend::{ClipboardError, ClipboardResult, copy_to_clipboard};
