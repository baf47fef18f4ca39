//! Search suggestion panel
//!
//! A fixed list of popular search terms shown beneath the search input while
//! it is focused and empty. Hiding after focus loss happens on a grace delay
//! so that a pending selection still lands first.

mod suggest_render;
mod suggest_state;
mod tracker;

pub use suggest_render::render_panel;
pub use suggest_state::{Panel, SuggestState};
pub use tracker::{JsonlTracker, LogTracker, NullTracker, QueryTracker, should_track};

#[cfg(test)]
pub use tracker::RecordingTracker;
