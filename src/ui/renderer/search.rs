//! Flight number input box.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::state::{AppState, SearchPhase};

use super::helpers::visible_input;

pub fn render_search_box(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;

    let border_style = match state.phase {
        SearchPhase::Pending => Style::default().fg(t.flight_accent),
        SearchPhase::Failure => Style::default().fg(t.danger),
        SearchPhase::Success | SearchPhase::Idle => t.border_highlight_style(),
    };

    let block = Block::default()
        .title(Span::styled(
            t!("search.title").to_string(),
            Style::default()
                .fg(t.flight_accent)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(Span::styled(
            t!("search.hint").to_string(),
            Style::default().fg(t.text_muted),
        )))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.flight_input.is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            t!("search.placeholder").to_string(),
            Style::default().fg(t.text_muted),
        ));
        frame.render_widget(placeholder, inner);
        frame.set_cursor_position((inner.x, inner.y));
        return;
    }

    let (shown, cursor_col) =
        visible_input(&state.flight_input, state.cursor_pos, inner.width as usize);
    let input = Paragraph::new(Span::styled(
        shown.to_string(),
        Style::default().fg(t.text_primary),
    ));
    frame.render_widget(input, inner);
    frame.set_cursor_position((inner.x + cursor_col as u16, inner.y));
}
