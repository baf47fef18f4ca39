use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Anchor a popup directly above a widget, clamped to the space available.
pub fn popup_above_anchor(anchor: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let popup_x = anchor.x + x_offset;
    let popup_y = anchor.y.saturating_sub(height);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(anchor.width.saturating_sub(x_offset * 2)),
        height: height.min(anchor.y),
    }
}

/// Anchor a popup in the top-right corner of the frame, one cell in from the
/// edges.
pub fn popup_top_right(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width.saturating_sub(2));
    let popup_height = height.min(frame_area.height.saturating_sub(2));

    Rect {
        x: frame_area
            .width
            .saturating_sub(popup_width)
            .saturating_sub(1),
        y: frame_area.y + 1,
        width: popup_width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
