//! Renderer module: split into focused submodules.
//!
//! - `header`: Logo, endpoint, backend health
//! - `search`: Flight number input box
//! - `result`: Last response (context summary + flight_info)
//! - `status_bar`: Bottom status bar with keybinds
//! - `overlays`: Help popup
//! - `helpers`: Shared rendering utilities

mod header;
pub mod helpers;
mod overlays;
mod result;
mod search;
mod status_bar;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use super::state::AppState;

/// Top-level render function.
///
/// Takes the state mutably so the result panel can clamp its scroll offset
/// to what was actually drawn.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let size = frame.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header bar
            Constraint::Length(3), // Input box
            Constraint::Min(6),    // Result panel
            Constraint::Length(1), // Status bar
        ])
        .split(size);

    header::render_header(frame, main_chunks[0], state);
    search::render_search_box(frame, main_chunks[1], state);
    result::render_result(frame, main_chunks[2], state);
    status_bar::render_status_bar(frame, main_chunks[3], state);

    if state.show_help {
        overlays::render_help_overlay(frame, size, state);
    }
}
