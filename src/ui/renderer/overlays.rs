//! Popup overlays.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{HELP_POPUP_HEIGHT, HELP_POPUP_WIDTH};
use crate::ui::state::AppState;

use super::helpers::centered_rect;

pub fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let popup = centered_rect(HELP_POPUP_WIDTH, HELP_POPUP_HEIGHT, area);
    frame.render_widget(Clear, popup);

    let key_line = |key: &str, desc: String| -> Line {
        Line::from(vec![
            Span::styled(
                format!("  {:<12}", key),
                Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(desc, Style::default().fg(t.text_primary)),
        ])
    };

    let lines = vec![
        Line::raw(""),
        key_line("Enter", t!("help.search").to_string()),
        key_line("← → Home End", t!("help.edit").to_string()),
        key_line("Ctrl+U", t!("help.clear").to_string()),
        key_line("↑ ↓ PgUp PgDn", t!("help.scroll").to_string()),
        key_line("Ctrl+R", t!("help.recheck").to_string()),
        key_line("F1", t!("help.toggle").to_string()),
        key_line("Esc / Ctrl+C", t!("help.quit").to_string()),
        Line::raw(""),
        Line::from(Span::styled(
            format!("  {}", t!("help.context_note")),
            Style::default().fg(t.text_dim),
        )),
    ];

    let block = Block::default()
        .title(Span::styled(t!("help.title").to_string(), t.header_style()))
        .borders(Borders::ALL)
        .border_style(t.border_highlight_style());

    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
