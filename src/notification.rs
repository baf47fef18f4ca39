//! Transient notifications
//!
//! Short-lived messages (clipboard feedback and the like) shown in the
//! top-right corner and dismissed automatically after a few seconds.

mod render;
mod state;

pub use render::render_notification;
pub use state::{NotificationKind, NotificationState};
