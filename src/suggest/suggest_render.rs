//! Suggestion panel rendering
//!
//! The panel floats directly above the search input, sized to the widest
//! visible term.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::widgets::popup;

use super::SuggestState;

// Suggestion panel display constants
const MAX_VISIBLE_TERMS: usize = 8;
const MAX_POPUP_WIDTH: usize = 40;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 2;

/// Render the suggestion panel above the search input
pub fn render_panel(state: &SuggestState, frame: &mut Frame, input_area: Rect) {
    if !state.is_visible() {
        return;
    }

    let terms = state.terms();
    if terms.is_empty() {
        return;
    }

    let visible_count = terms.len().min(MAX_VISIBLE_TERMS);
    let popup_height = (visible_count as u16) + POPUP_BORDER_HEIGHT;

    // Width of the widest visible term, display columns not bytes
    let max_text_width = terms
        .iter()
        .take(MAX_VISIBLE_TERMS)
        .map(|term| term.width())
        .max()
        .unwrap_or(16)
        .min(MAX_POPUP_WIDTH);
    let popup_width = (max_text_width as u16) + POPUP_PADDING;

    let popup_area =
        popup::popup_above_anchor(input_area, popup_width, popup_height, POPUP_OFFSET_X);

    let items: Vec<ListItem> = terms
        .iter()
        .take(MAX_VISIBLE_TERMS)
        .enumerate()
        .map(|(i, term)| {
            let line = if i == state.selected_index() {
                Line::from(Span::styled(
                    format!("► {term}"),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {term}"),
                    Style::default().fg(Color::White),
                ))
            };

            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(list, popup_area);
}

#[cfg(test)]
#[path = "suggest_render_tests.rs"]
mod suggest_render_tests;
