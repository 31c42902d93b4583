use chrono::{DateTime, Local};

use crate::constants::RESULT_PAGE_STEP;
use crate::mcp::{BackendHealth, ConversationContext, HealthEvent, QueryResponse, SearchEvent};

use super::theme::Theme;

/// Where the screen is in the search cycle.
///
/// Idle → Pending → (Success | Failure) → Idle. Editing the input after an
/// outcome returns to Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Pending,
    Success,
    Failure,
}

/// Last known reachability of the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendStatus {
    Unknown,
    Checking,
    Online { api_key_configured: bool },
    Offline,
}

/// All mutable screen state. Only the main loop touches it.
#[derive(Debug)]
pub struct AppState {
    pub theme: Theme,
    pub current_lang: String,
    /// Endpoint shown in the header.
    pub endpoint: String,
    pub tick_count: u64,
    pub status_message: Option<(String, std::time::Instant)>,
    pub show_help: bool,

    // Input box
    pub flight_input: String,
    pub cursor_pos: usize,

    // Search cycle
    pub phase: SearchPhase,
    /// Searches dispatched whose completion has not arrived yet.
    pub in_flight: usize,
    /// Context echoed on the next request. Replaced, never merged.
    pub context: ConversationContext,
    /// Last successful response; kept across failures.
    pub last_result: Option<QueryResponse>,
    pub last_updated: Option<DateTime<Local>>,
    pub result_scroll: usize,

    pub backend: BackendStatus,
}

impl AppState {
    pub fn new(theme: Theme, endpoint: String, lang: &str) -> Self {
        Self {
            theme,
            current_lang: lang.to_string(),
            endpoint,
            tick_count: 0,
            status_message: None,
            show_help: false,
            flight_input: String::new(),
            cursor_pos: 0,
            phase: SearchPhase::Idle,
            in_flight: 0,
            context: ConversationContext::new(),
            last_result: None,
            last_updated: None,
            result_scroll: 0,
            backend: BackendStatus::Unknown,
        }
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    pub fn set_status(&mut self, msg: String) {
        self.status_message = Some((msg, std::time::Instant::now()));
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight > 0
    }

    /// `last_flight` from the displayed result's context.
    pub fn displayed_last_flight(&self) -> Option<&str> {
        self.last_result.as_ref().and_then(|r| r.context.last_flight())
    }

    // ── Input editing ────────────────────────────────────────────

    pub fn input_char(&mut self, c: char) {
        self.flight_input.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
        self.settle_phase();
    }

    pub fn input_backspace(&mut self) {
        if self.cursor_pos > 0 {
            let prev = self.flight_input[..self.cursor_pos]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.flight_input.remove(prev);
            self.cursor_pos = prev;
            self.settle_phase();
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos = self.flight_input[..self.cursor_pos]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor_pos < self.flight_input.len() {
            self.cursor_pos = self.flight_input[self.cursor_pos..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_pos + i)
                .unwrap_or(self.flight_input.len());
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.flight_input.len();
    }

    pub fn clear_input(&mut self) {
        self.flight_input.clear();
        self.cursor_pos = 0;
        self.settle_phase();
    }

    /// An outcome stays on screen until the user edits the input.
    fn settle_phase(&mut self) {
        if matches!(self.phase, SearchPhase::Success | SearchPhase::Failure) {
            self.phase = SearchPhase::Idle;
        }
    }

    // ── Search cycle ─────────────────────────────────────────────

    /// Start a search and return the request inputs: the raw flight number
    /// and a snapshot of the current context. The input is kept in the box.
    pub fn begin_search(&mut self) -> (String, ConversationContext) {
        self.in_flight += 1;
        self.phase = SearchPhase::Pending;
        (self.flight_input.clone(), self.context.clone())
    }

    /// Apply one completed search. Completions apply in arrival order, so
    /// the last one to arrive wins.
    ///
    /// On success the context is replaced wholesale by the response's
    /// context. On failure nothing displayed changes except the phase and
    /// the status message.
    pub fn apply_search_event(&mut self, event: SearchEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let outcome = match event {
            SearchEvent::Completed(response) => {
                self.context = response.context.clone();
                self.last_result = Some(*response);
                self.last_updated = Some(Local::now());
                self.result_scroll = 0;
                SearchPhase::Success
            }
            SearchEvent::Failed(_) => {
                self.set_status(t!("search.failed").to_string());
                SearchPhase::Failure
            }
        };
        self.phase = if self.is_pending() {
            SearchPhase::Pending
        } else {
            outcome
        };
    }

    pub fn begin_health_check(&mut self) {
        self.backend = BackendStatus::Checking;
    }

    pub fn apply_health_event(&mut self, event: HealthEvent) {
        self.backend = match event {
            HealthEvent::Online(BackendHealth {
                api_key_configured, ..
            }) => BackendStatus::Online { api_key_configured },
            HealthEvent::Offline(_) => BackendStatus::Offline,
        };
    }

    // ── Result scrolling ─────────────────────────────────────────

    pub fn scroll_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.result_scroll += 1;
    }

    pub fn page_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(RESULT_PAGE_STEP);
    }

    pub fn page_down(&mut self) {
        self.result_scroll += RESULT_PAGE_STEP;
    }

    /// Keep the scroll offset inside the rendered content.
    pub fn clamp_scroll(&mut self, total_lines: usize, visible_height: usize) {
        let max = total_lines.saturating_sub(visible_height);
        if self.result_scroll > max {
            self.result_scroll = max;
        }
    }
}
