use std::time::{Duration, Instant};

/// Panel visibility, an explicit two-state machine.
///
/// Transitions are driven by focus changes, input edits, selection, and the
/// grace-delay deadline. Selection is always processed before the deadline in
/// the same event-loop iteration, so a selection inside the grace window wins
/// over the pending hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Hidden,
    Visible,
}

pub struct SuggestState {
    terms: Vec<String>,
    grace_delay: Duration,
    panel: Panel,
    selected: usize,
    hide_at: Option<Instant>,
}

impl SuggestState {
    /// Bind the panel to a fixed term list.
    ///
    /// An empty list is the "no search input on this page" case: construction
    /// still succeeds and every operation is a silent no-op.
    pub fn new(terms: Vec<String>, grace_delay: Duration) -> Self {
        Self {
            terms,
            grace_delay,
            panel: Panel::Hidden,
            selected: 0,
            hide_at: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.panel == Panel::Visible
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The input gained focus. Shows the panel only while the input is empty.
    pub fn focus_gained(&mut self, input_is_empty: bool) {
        if self.terms.is_empty() || !input_is_empty {
            return;
        }

        self.panel = Panel::Visible;
        self.selected = 0;
        // Regaining focus cancels a pending grace-delay hide
        self.hide_at = None;
    }

    /// The input lost focus. The panel stays up for the grace delay so a
    /// selection already in flight can still be processed.
    pub fn focus_lost(&mut self, now: Instant) {
        if self.panel == Panel::Visible {
            self.hide_at = Some(now + self.grace_delay);
        }
    }

    /// The input's value changed. Visibility is derived: non-empty hides the
    /// panel, empty-while-focused shows it again.
    pub fn input_changed(&mut self, value: &str, input_has_focus: bool) {
        if value.is_empty() {
            if input_has_focus {
                self.focus_gained(true);
            }
        } else {
            self.hide();
        }
    }

    /// Apply the grace-delay deadline. Called once per event-loop iteration.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.hide_at {
            if now >= deadline {
                self.hide();
            }
        }
    }

    pub fn hide(&mut self) {
        self.panel = Panel::Hidden;
        self.hide_at = None;
    }

    pub fn select_next(&mut self) {
        if self.is_visible() && self.selected + 1 < self.terms.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        if self.is_visible() {
            self.selected = self.selected.saturating_sub(1);
        }
    }

    /// Take the highlighted term and hide the panel.
    ///
    /// Returns `None` once the panel is hidden, which is what makes the
    /// blur/select ordering deterministic: a select after the deadline has
    /// been applied simply does nothing.
    pub fn take_selected(&mut self) -> Option<String> {
        if !self.is_visible() {
            return None;
        }

        let term = self.terms.get(self.selected).cloned();
        if term.is_some() {
            self.hide();
        }
        term
    }
}

#[cfg(test)]
#[path = "suggest_state_tests.rs"]
mod suggest_state_tests;
