//! Application struct and event loop.
//!
//! Owns the terminal, the screen state, the backend client, and the
//! completion channels for in-flight searches and health probes.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::constants::*;
use crate::mcp::{HealthEvent, QueryClient, SearchEvent};
use crate::ui::{self, AppState};

/// Main application struct.
pub struct App {
    state: AppState,
    client: QueryClient,

    // Channels
    search_tx: mpsc::UnboundedSender<SearchEvent>,
    search_rx: mpsc::UnboundedReceiver<SearchEvent>,
    health_tx: mpsc::UnboundedSender<HealthEvent>,
    health_rx: mpsc::UnboundedReceiver<HealthEvent>,
}

impl App {
    /// Create a new App from resolved configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = QueryClient::new(&config.base_url)?;

        let theme = ui::Theme::by_name(&config.theme)
            .or_else(|| ui::Theme::from_toml_file(&custom_theme_path(&config.theme)))
            .unwrap_or_else(|| {
                warn!(
                    "Unknown theme {:?} (built-ins: {}), using default",
                    config.theme,
                    ui::theme::BUILTIN_THEME_NAMES.join(", ")
                );
                ui::Theme::default()
            });

        let state = AppState::new(theme, client.endpoint(), &config.lang);

        let (search_tx, search_rx) = mpsc::unbounded_channel::<SearchEvent>();
        let (health_tx, health_rx) = mpsc::unbounded_channel::<HealthEvent>();

        info!(
            "Client ready: endpoint={} theme={} lang={}",
            client.endpoint(),
            state.theme.name,
            config.lang
        );

        Ok(Self {
            state,
            client,
            search_tx,
            search_rx,
            health_tx,
            health_rx,
        })
    }

    /// Run the main event loop. Returns when the user quits.
    pub async fn run(&mut self) -> Result<()> {
        // Terminal init
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        self.dispatch_health_check();

        let outcome = self.event_loop(&mut terminal);

        // Cleanup runs even if the loop failed.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        outcome?;
        println!("\n{}\n", t!("app.stopped"));
        Ok(())
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|frame| ui::render(frame, &mut self.state))?;

            self.drain_search_events();
            self.drain_health_events();

            if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key(key) {
                        return Ok(()); // quit requested
                    }
                }
            }

            self.state.tick();
        }
    }

    // ── Channel draining ─────────────────────────────────────────

    /// Apply completed searches in arrival order.
    fn drain_search_events(&mut self) {
        while let Ok(event) = self.search_rx.try_recv() {
            if let SearchEvent::Failed(err) = &event {
                warn!("Error fetching flight info: {}", err);
            }
            let succeeded = matches!(event, SearchEvent::Completed(_));
            self.state.apply_search_event(event);
            if succeeded {
                info!(
                    "Search completed: last_flight={:?} in_flight={}",
                    self.state.displayed_last_flight(),
                    self.state.in_flight
                );
            }
        }
    }

    fn drain_health_events(&mut self) {
        while let Ok(event) = self.health_rx.try_recv() {
            match &event {
                HealthEvent::Online(h) => info!(
                    "Backend health: status={} api_key_configured={}",
                    h.status, h.api_key_configured
                ),
                HealthEvent::Offline(err) => info!("Backend unreachable: {}", err),
            }
            self.state.apply_health_event(event);
        }
    }

    // ── Dispatch ─────────────────────────────────────────────────

    /// Spawn one independent search for the current input and context.
    fn dispatch_search(&mut self) {
        let (flight_number, context) = self.state.begin_search();
        debug!(
            "Dispatching search flight_iata={:?} in_flight={}",
            flight_number, self.state.in_flight
        );
        let client = self.client.clone();
        let tx = self.search_tx.clone();

        tokio::spawn(async move {
            let event = client.search_event(&flight_number, &context).await;
            let _ = tx.send(event);
        });
    }

    fn dispatch_health_check(&mut self) {
        self.state.begin_health_check();
        debug!("Probing backend health at {}", self.client.base_url());
        let client = self.client.clone();
        let tx = self.health_tx.clone();

        tokio::spawn(async move {
            let _ = tx.send(client.health_event().await);
        });
    }

    // ── Keyboard handling ────────────────────────────────────────

    /// Handle a key event. Returns `true` if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if self.state.show_help {
            if matches!(key.code, KeyCode::F(1) | KeyCode::Esc | KeyCode::Enter) {
                self.state.show_help = false;
            }
            return false;
        }

        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if ctrl => return true,
            KeyCode::Char('r') if ctrl => self.dispatch_health_check(),
            KeyCode::Char('u') if ctrl => self.state.clear_input(),
            KeyCode::F(1) => self.state.show_help = true,
            KeyCode::Enter => self.dispatch_search(),
            KeyCode::Backspace => self.state.input_backspace(),
            KeyCode::Left => self.state.cursor_left(),
            KeyCode::Right => self.state.cursor_right(),
            KeyCode::Home => self.state.cursor_home(),
            KeyCode::End => self.state.cursor_end(),
            KeyCode::Up => self.state.scroll_up(),
            KeyCode::Down => self.state.scroll_down(),
            KeyCode::PageUp => self.state.page_up(),
            KeyCode::PageDown => self.state.page_down(),
            KeyCode::Char(c) if !ctrl => self.state.input_char(c),
            _ => {}
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::SearchPhase;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char(c))
        }
    }

    fn make_app(base_url: &str) -> App {
        rust_i18n::set_locale("en");
        let config = Config {
            base_url: base_url.to_string(),
            ..Config::default()
        };
        App::new(&config).unwrap()
    }

    /// A base URL nothing listens on.
    fn dead_backend() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{}", port)
    }

    #[test]
    fn rejects_invalid_base_url() {
        let config = Config {
            base_url: "localhost without scheme".to_string(),
            ..Config::default()
        };
        assert!(App::new(&config).is_err());
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme: "does-not-exist".to_string(),
            ..Config::default()
        };
        let app = App::new(&config).unwrap();
        assert_eq!(app.state.theme.name, "default");
    }

    #[tokio::test]
    async fn typing_edits_input_and_quit_keys_quit() {
        let mut app = make_app("http://localhost:8000");
        for c in "TK123".chars() {
            assert!(!app.handle_key(key(KeyCode::Char(c))));
        }
        assert_eq!(app.state.flight_input, "TK123");

        app.handle_key(ctrl('u'));
        assert_eq!(app.state.flight_input, "");

        assert!(app.handle_key(ctrl('c')));
        assert!(app.handle_key(key(KeyCode::Esc)));
    }

    #[tokio::test]
    async fn help_overlay_swallows_keys() {
        let mut app = make_app("http://localhost:8000");
        app.handle_key(key(KeyCode::F(1)));
        assert!(app.state.show_help);

        // Esc closes help instead of quitting.
        assert!(!app.handle_key(key(KeyCode::Esc)));
        assert!(!app.state.show_help);
    }

    #[tokio::test]
    async fn failed_search_surfaces_without_panicking() {
        let mut app = make_app(&dead_backend());
        for c in "TK123".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state.phase, SearchPhase::Pending);

        let event = app.search_rx.recv().await.unwrap();
        assert!(matches!(event, SearchEvent::Failed(_)));
        app.state.apply_search_event(event);

        assert_eq!(app.state.phase, SearchPhase::Failure);
        assert!(app.state.last_result.is_none());
        assert_eq!(app.state.flight_input, "TK123");
    }
}
