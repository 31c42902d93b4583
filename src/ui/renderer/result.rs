//! Result panel: context summary plus the raw `flight_info` payload.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::mcp::QueryResponse;
use crate::ui::state::{AppState, SearchPhase};
use crate::ui::theme::Theme;
use crate::utils::{loading_dots, spinner_char};

use super::helpers::{render_scrollbar_bordered, wrap_text};

pub fn render_result(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let t = state.theme.clone();

    let title = if state.is_pending() {
        t!("result.title_pending", spinner = spinner_char(state.tick_count)).to_string()
    } else {
        t!("result.title").to_string()
    };
    let border_style = if state.phase == SearchPhase::Failure {
        Style::default().fg(t.danger)
    } else {
        t.border_style()
    };

    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(t.flight_accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let wrap_width = inner.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = match state.last_result.as_ref() {
        Some(result) => result_lines(result, state, &t, wrap_width),
        None => placeholder_lines(state, &t),
    };

    if state.phase == SearchPhase::Failure {
        lines.insert(
            0,
            Line::from(Span::styled(
                format!(" {}", t!("search.failed")),
                Style::default().fg(t.danger).add_modifier(Modifier::BOLD),
            )),
        );
        lines.insert(1, Line::raw(""));
    }

    let visible_height = inner.height as usize;
    let total_lines = lines.len();
    state.clamp_scroll(total_lines, visible_height);
    let scroll = state.result_scroll;

    let paragraph = Paragraph::new(lines).scroll((scroll as u16, 0));
    frame.render_widget(paragraph, inner);
    render_scrollbar_bordered(frame, area, total_lines, scroll);
}

fn placeholder_lines(state: &AppState, t: &Theme) -> Vec<Line<'static>> {
    let text = if state.is_pending() {
        format!(
            " {}{}",
            t!("result.waiting"),
            loading_dots(state.tick_count)
        )
    } else {
        format!(" {}", t!("result.empty"))
    };
    vec![
        Line::raw(""),
        Line::from(Span::styled(text, Style::default().fg(t.text_dim))),
    ]
}

fn result_lines(
    result: &QueryResponse,
    state: &AppState,
    t: &Theme,
    wrap_width: usize,
) -> Vec<Line<'static>> {
    let ctx = &result.context;
    let field = |label: String, value: Option<&str>| -> Line<'static> {
        Line::from(vec![
            Span::styled(format!(" {:<14}", label), t.label_style()),
            Span::styled(
                value.unwrap_or("-").to_string(),
                Style::default().fg(t.text_primary),
            ),
        ])
    };

    let mut lines = vec![
        field(t!("result.last_query").to_string(), ctx.last_query()),
        field(t!("result.last_flight").to_string(), ctx.last_flight()),
        field(t!("result.timestamp").to_string(), ctx.timestamp()),
        field(t!("result.status").to_string(), Some(result.status.as_str())),
    ];
    if let Some(updated) = state.last_updated {
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<14}", t!("result.updated")), t.label_style()),
            Span::styled(
                updated.format("%H:%M:%S").to_string(),
                Style::default().fg(t.text_muted),
            ),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        format!(" {}", t!("result.flight_info")),
        t.header_style(),
    )));
    for segment in wrap_text(&result.pretty_flight_info(), wrap_width) {
        lines.push(Line::from(Span::styled(
            format!(" {}", segment),
            Style::default().fg(t.json_text),
        )));
    }
    lines
}
