//! Shared rendering helpers: scrollbar, centered rect, input windowing.

use ratatui::{
    layout::{Margin, Rect},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render a vertical scrollbar inside a bordered area (1px vertical margin).
pub fn render_scrollbar_bordered(frame: &mut Frame, area: Rect, total: usize, position: usize) {
    let visible_height = area.height.saturating_sub(2) as usize;
    if total <= visible_height {
        return;
    }
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("▲"))
        .end_symbol(Some("▼"));
    let mut scrollbar_state = ScrollbarState::new(total).position(position);
    frame.render_stateful_widget(
        scrollbar,
        area.inner(Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut scrollbar_state,
    );
}

/// Return a `Rect` centered within `area` with the given dimensions.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Slice of `input` to show in a box `width` columns wide so the cursor
/// (byte offset `cursor`) stays visible. Returns the visible text and the
/// cursor's column within it.
pub fn visible_input(input: &str, cursor: usize, width: usize) -> (&str, usize) {
    let mut start = 0;
    if width == 0 {
        return (&input[cursor..cursor], 0);
    }
    while input[start..cursor].width() >= width {
        match input[start..].chars().next() {
            Some(c) => start += c.len_utf8(),
            None => break,
        }
    }
    (&input[start..], input[start..cursor].width())
}

/// Wrap each line of `text` to `width` columns, keeping leading indentation
/// on the first segment.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    text.lines()
        .flat_map(|line| {
            if line.is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(line, width)
                    .into_iter()
                    .map(|seg| seg.into_owned())
                    .collect()
            }
        })
        .collect()
}
