use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::notification::render_notification;
use crate::suggest::render_panel;
use crate::validate::ValidationError;

use super::state::{App, Focus};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1), // Breadcrumb bar
            Constraint::Min(5),    // Results + preview
            Constraint::Length(3), // Search input
        ])
        .split(frame.area());

        let breadcrumb_area = layout[0];
        let middle_area = layout[1];
        let input_area = layout[2];

        let middle = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(middle_area);

        self.render_breadcrumbs(frame, breadcrumb_area);
        self.render_results(frame, middle[0]);
        self.render_preview(frame, middle[1]);
        self.render_input(frame, input_area);

        // Overlays go last so they sit on top
        render_panel(&self.suggest, frame, input_area);
        render_notification(&self.notification, frame);
    }

    fn render_breadcrumbs(&self, frame: &mut Frame, area: Rect) {
        let trail: &[String] = match &self.selected_page {
            Some(page) => &page.trail,
            None => &[],
        };

        let mut spans = vec![Span::raw(" ")];
        if trail.is_empty() {
            spans.push(Span::styled("Home", Style::default().fg(Color::DarkGray)));
        } else {
            for (index, segment) in trail.iter().enumerate() {
                let is_last = index == trail.len() - 1;
                if index > 0 {
                    spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
                }
                let style = if is_last {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                spans.push(Span::styled(segment.as_str(), style));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_results(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::ResultsPane;
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };

        let items: Vec<ListItem> = self
            .results
            .indices()
            .iter()
            .enumerate()
            .filter_map(|(row, &page_index)| {
                let page = self.index().pages().get(page_index)?;

                let line = if focused && row == self.results.cursor() {
                    Line::from(vec![
                        Span::styled(
                            format!("► {}", page.title),
                            Style::default()
                                .fg(Color::Black)
                                .bg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("  {}", page.rel_path),
                            Style::default().fg(Color::Black).bg(Color::Cyan),
                        ),
                    ])
                } else {
                    Line::from(vec![
                        Span::styled(
                            format!("  {}", page.title),
                            Style::default().fg(Color::White),
                        ),
                        Span::styled(
                            format!("  {}", page.rel_path),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ])
                };

                Some(ListItem::new(line))
            })
            .collect();

        let title = format!(" Pages ({}) ", self.results.len());
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(list, area);
    }

    fn render_preview(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Preview ")
            .border_style(Style::default().fg(Color::DarkGray));

        let Some(page) = &self.selected_page else {
            let hint = Paragraph::new("Search, then press Enter to open a page.")
                .block(block)
                .style(Style::default().fg(Color::Gray));
            frame.render_widget(hint, area);
            return;
        };

        let mut lines = vec![validation_line(&page.validation), Line::from("")];

        let body = page
            .content
            .as_deref()
            .unwrap_or("(page could not be read)");
        let visible_rows = area.height.saturating_sub(4) as usize;
        for line in body.lines().take(visible_rows) {
            lines.push(Line::from(line.to_string()));
        }

        let paragraph = Paragraph::new(lines).block(block.title(format!(" {} ", page.title)));

        frame.render_widget(paragraph, area);
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::SearchInput {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        self.input.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.input.textarea, area);
    }
}

fn validation_line(validation: &Result<(), ValidationError>) -> Line<'static> {
    match validation {
        Ok(()) => Line::from(Span::styled(
            "✓ front matter ok".to_string(),
            Style::default().fg(Color::Green),
        )),
        Err(err) => Line::from(Span::styled(
            format!("✗ {err}"),
            Style::default().fg(Color::Red),
        )),
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
