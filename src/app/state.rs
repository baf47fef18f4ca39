use std::time::Instant;

use crate::config::{ClipboardBackend, Config, MarkerRule, SiteConfig};
use crate::input::InputState;
use crate::notification::NotificationState;
use crate::search::PageMatcher;
use crate::site::{SiteIndex, breadcrumb_trail, edit_url};
use crate::suggest::{QueryTracker, SuggestState, should_track};
use crate::validate::{ValidationError, validate};

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SearchInput,
    ResultsPane,
}

/// The filtered result list and its highlight
pub struct ResultsState {
    indices: Vec<usize>,
    selected: usize,
}

impl ResultsState {
    fn all(count: usize) -> Self {
        Self {
            indices: (0..count).collect(),
            selected: 0,
        }
    }

    fn set_indices(&mut self, indices: Vec<usize>) {
        self.indices = indices;
        self.selected = 0;
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Highlighted row position within the filtered list
    pub fn cursor(&self) -> usize {
        self.selected
    }

    /// Page index (into the site index) under the highlight
    pub fn selected_page_index(&self) -> Option<usize> {
        self.indices.get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        if !self.indices.is_empty() && self.selected + 1 < self.indices.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

/// The page currently open in the preview pane
pub struct SelectedPage {
    pub rel_path: String,
    pub title: String,
    pub trail: Vec<String>,
    pub content: Option<String>,
    pub validation: Result<(), ValidationError>,
}

/// Application state
pub struct App {
    pub input: InputState,
    pub suggest: SuggestState,
    pub notification: NotificationState,
    pub results: ResultsState,
    pub selected_page: Option<SelectedPage>,
    pub focus: Focus,
    pub should_quit: bool,
    index: SiteIndex,
    matcher: PageMatcher,
    tracker: Box<dyn QueryTracker>,
    track_threshold: usize,
    clipboard_backend: ClipboardBackend,
    site: SiteConfig,
    markers: Vec<MarkerRule>,
}

impl App {
    pub fn new(index: SiteIndex, config: &Config, tracker: Box<dyn QueryTracker>) -> Self {
        let mut suggest = SuggestState::new(
            config.suggestions.terms.clone(),
            config.suggestions.grace_delay(),
        );

        // The search input starts focused and empty
        suggest.focus_gained(true);

        let results = ResultsState::all(index.len());

        Self {
            input: InputState::new(),
            suggest,
            notification: NotificationState::new(),
            results,
            selected_page: None,
            focus: Focus::SearchInput,
            should_quit: false,
            index,
            matcher: PageMatcher::new(),
            tracker,
            track_threshold: config.suggestions.track_threshold,
            clipboard_backend: config.clipboard.backend,
            site: config.site.clone(),
            markers: config.validate.markers.clone(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn query(&self) -> &str {
        self.input.value()
    }

    pub fn index(&self) -> &SiteIndex {
        &self.index
    }

    pub fn clipboard_backend(&self) -> ClipboardBackend {
        self.clipboard_backend
    }

    /// Advance the timers: the suggestion panel's grace-delay hide and the
    /// notification dismissal. Called once per event-loop iteration.
    pub fn tick(&mut self, now: Instant) {
        self.suggest.tick(now);
        self.notification.tick(now);
    }

    /// The input-changed pipeline: every path that alters the search value
    /// funnels through here, whether a keystroke or a suggestion selection.
    pub fn apply_input_change(&mut self) {
        let value = self.query().to_string();

        if should_track(&value, self.track_threshold) {
            self.tracker.track(&value);
        }

        self.suggest
            .input_changed(&value, self.focus == Focus::SearchInput);

        self.refresh_results();
    }

    fn refresh_results(&mut self) {
        let indices = self.matcher.filter(self.query(), self.index.pages());
        self.results.set_indices(indices);
    }

    /// Accept the highlighted suggestion: set the input value to the term,
    /// re-run the input-changed pipeline as if it had been typed, and return
    /// focus to the input.
    pub fn select_suggestion(&mut self) -> bool {
        let Some(term) = self.suggest.take_selected() else {
            return false;
        };

        self.input.set_value(&term);
        self.focus = Focus::SearchInput;
        self.apply_input_change();
        true
    }

    /// Move focus to the results pane; this is the input's blur event
    pub fn focus_results(&mut self, now: Instant) {
        if self.focus != Focus::ResultsPane {
            self.focus = Focus::ResultsPane;
            self.suggest.focus_lost(now);
        }
    }

    /// Move focus back to the search input; its focus event
    pub fn focus_search(&mut self) {
        if self.focus != Focus::SearchInput {
            self.focus = Focus::SearchInput;
            self.suggest.focus_gained(self.input.is_empty());
        }
    }

    /// Open the highlighted result in the preview pane
    pub fn open_selected_result(&mut self) {
        let Some(page_index) = self.results.selected_page_index() else {
            return;
        };
        let Some(page) = self.index.pages().get(page_index) else {
            return;
        };

        let content = page.read_content();
        let validation = validate(content.as_deref().unwrap_or(""), &self.markers);

        self.selected_page = Some(SelectedPage {
            rel_path: page.rel_path.clone(),
            title: page.title.clone(),
            trail: breadcrumb_trail(&page.rel_path),
            content,
            validation,
        });
    }

    /// Copy the open page's path, with notification feedback
    pub fn copy_page_path(&mut self, now: Instant) {
        let Some(page) = &self.selected_page else {
            return;
        };
        let path = page.rel_path.clone();

        self.copy_with_feedback(&path, "Copied page path!", now);
    }

    /// Copy the open page's edit link, with notification feedback
    pub fn copy_edit_link(&mut self, now: Instant) {
        let Some(page) = &self.selected_page else {
            return;
        };

        let Some(repo_url) = self.site.repo_url.clone() else {
            self.notification
                .error("Set site.repo_url to enable edit links", now);
            return;
        };

        let url = edit_url(&repo_url, &self.site.edit_branch, &page.rel_path);
        self.copy_with_feedback(&url, "Copied edit link!", now);
    }

    fn copy_with_feedback(&mut self, text: &str, success_message: &str, now: Instant) {
        match crate::clipboard::copy_to_clipboard(text, self.clipboard_backend) {
            Ok(()) => self.notification.success(success_message, now),
            Err(_) => self.notification.error("Copy failed", now),
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
