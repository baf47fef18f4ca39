use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{App, Focus};

impl App {
    /// Handle a key press. `now` drives the grace-delay and notification
    /// timers so tests can supply their own clock.
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        // Ctrl+C: exit from anywhere
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.focus {
            Focus::SearchInput => self.handle_search_input_key(key, now),
            Focus::ResultsPane => self.handle_results_pane_key(key, now),
        }
    }

    fn handle_search_input_key(&mut self, key: KeyEvent, now: Instant) {
        // Suggestion panel keys take priority while it is up
        if self.suggest.is_visible() {
            match key.code {
                KeyCode::Down => {
                    self.suggest.select_next();
                    return;
                }
                KeyCode::Up => {
                    self.suggest.select_previous();
                    return;
                }
                KeyCode::Enter | KeyCode::Tab => {
                    self.select_suggestion();
                    return;
                }
                KeyCode::Esc => {
                    self.suggest.hide();
                    return;
                }
                _ => {}
            }
        }

        match key.code {
            // Blur: hand focus to the results pane and open the highlighted page
            KeyCode::Enter => {
                self.focus_results(now);
                self.open_selected_result();
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus_results(now);
            }
            // Esc clears the query; the panel re-shows via the input pipeline
            KeyCode::Esc => {
                if !self.input.is_empty() {
                    self.input.set_value("");
                    self.apply_input_change();
                }
            }
            _ => {
                if self.input.textarea.input(key) {
                    self.apply_input_change();
                }
            }
        }
    }

    fn handle_results_pane_key(&mut self, key: KeyEvent, now: Instant) {
        // Right after the input blurs the panel is still up for the grace
        // delay; a selection landing in that window wins over the pending hide
        if self.suggest.is_visible() && key.code == KeyCode::Enter {
            self.select_suggestion();
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.results.select_next();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.results.select_previous();
            }
            KeyCode::Enter => {
                self.open_selected_result();
            }
            KeyCode::Char('y') => {
                self.copy_page_path(now);
            }
            KeyCode::Char('e') => {
                self.copy_edit_link(now);
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus_search();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
