use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

/// The single-line search input
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        textarea.set_cursor_line_style(Style::default());

        Self { textarea }
    }

    pub fn value(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.value().is_empty()
    }

    /// Replace the whole value, cursor at the end
    pub fn set_value(&mut self, text: &str) {
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(text);
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
