//! Application-wide constants.
//!
//! Centralizes endpoint paths, wire-format templates, timing values and
//! filesystem locations.

use std::path::PathBuf;

// ── Backend ───────────────────────────────────────────────────────
/// Fixed local endpoint used when nothing overrides `base_url`.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Path of the query endpoint, relative to the base URL.
pub const QUERY_PATH: &str = "/mcp/query";
/// Path of the health endpoint, relative to the base URL.
pub const HEALTH_PATH: &str = "/health";
/// Prefix of the natural-language question sent with every search.
pub const QUERY_TEMPLATE_PREFIX: &str = "Get information for flight ";
/// Maximum characters of an error body kept in `QueryError::Server`.
pub const ERROR_BODY_EXCERPT_LEN: usize = 300;

// ── Context fields (display only) ─────────────────────────────────
pub const CONTEXT_LAST_QUERY: &str = "last_query";
pub const CONTEXT_LAST_FLIGHT: &str = "last_flight";
pub const CONTEXT_TIMESTAMP: &str = "timestamp";

// ── Timing ────────────────────────────────────────────────────────
/// Event poll timeout (ms) -- how often the UI checks for input.
pub const EVENT_POLL_MS: u64 = 50;
/// Status message display duration (seconds).
pub const STATUS_MESSAGE_TIMEOUT_SECS: u64 = 5;

// ── UI Layout ─────────────────────────────────────────────────────
/// Scroll step for PageUp/PageDown in the result panel.
pub const RESULT_PAGE_STEP: usize = 10;
/// Help overlay width.
pub const HELP_POPUP_WIDTH: u16 = 52;
/// Help overlay height.
pub const HELP_POPUP_HEIGHT: u16 = 16;

// ── Spinner Animation ─────────────────────────────────────────────
/// Spinner character sequence for loading indicators.
pub const SPINNER_CHARS: &[&str] = &["◐", "◓", "◑", "◒"];

// ── Supported Languages ───────────────────────────────────────────
pub const LANGUAGES: &[&str] = &["en", "tr"];

// ── Logging ───────────────────────────────────────────────────────
/// Environment variable holding the env_logger filter.
pub const LOG_FILTER_ENV: &str = "TRANSPORTAI_LOG";
/// Filter used when `LOG_FILTER_ENV` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

// ── Paths ─────────────────────────────────────────────────────────

/// Returns the user's home directory, falling back to /tmp.
pub fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string()))
}

/// Returns `~/.config/transportai/`.
pub fn config_dir() -> PathBuf {
    home_dir().join(".config").join("transportai")
}

/// Returns `~/.config/transportai/config.toml`.
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns `~/.config/transportai/themes/<name>.toml`.
pub fn custom_theme_path(name: &str) -> PathBuf {
    config_dir().join("themes").join(format!("{}.toml", name))
}

/// Returns `~/.config/transportai/.env`.
pub fn env_file_path() -> PathBuf {
    config_dir().join(".env")
}

/// Returns `~/.local/share/transportai/`.
pub fn data_dir() -> PathBuf {
    home_dir().join(".local").join("share").join("transportai")
}

/// Returns `~/.local/share/transportai/transportai.log`.
pub fn default_log_path() -> PathBuf {
    data_dir().join("transportai.log")
}
