//! Header bar: logo, endpoint, backend health.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::state::{AppState, BackendStatus};
use crate::utils::{spinner_char, truncate_str};

pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(18), // Logo
            Constraint::Min(20),    // Endpoint
            Constraint::Length(28), // Backend health
        ])
        .split(area);

    let pulse = if state.is_pending() {
        spinner_char(state.tick_count)
    } else {
        "●"
    };
    let logo = Paragraph::new(Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(pulse, Style::default().fg(t.flight_accent)),
        Span::styled(t!("app.name").to_string(), t.header_style()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style()),
    );
    frame.render_widget(logo, chunks[0]);

    let max_endpoint = chunks[1].width.saturating_sub(4) as usize;
    let endpoint = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", t!("header.endpoint")),
            Style::default().fg(t.text_dim),
        ),
        Span::styled(
            truncate_str(&state.endpoint, max_endpoint),
            Style::default().fg(t.text_primary),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style()),
    );
    frame.render_widget(endpoint, chunks[1]);

    let (label, color) = match state.backend {
        BackendStatus::Unknown => (t!("backend.unknown").to_string(), t.text_muted),
        BackendStatus::Checking => (
            format!("{} {}", spinner_char(state.tick_count), t!("backend.checking")),
            t.text_dim,
        ),
        BackendStatus::Online {
            api_key_configured: true,
        } => (t!("backend.online").to_string(), t.success),
        BackendStatus::Online {
            api_key_configured: false,
        } => (t!("backend.online_no_key").to_string(), t.warning),
        BackendStatus::Offline => (t!("backend.offline").to_string(), t.danger),
    };
    let health = Paragraph::new(Line::from(Span::styled(label, Style::default().fg(color))))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(t.border_style()),
        );
    frame.render_widget(health, chunks[2]);
}
