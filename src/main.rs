//! # TransportAI - Terminal Flight Search Client
//!
//! A terminal client for a flight-information assistant backend. Each search
//! posts the typed flight number to the backend's MCP query endpoint together
//! with the conversation context returned by the previous answer.

#[macro_use]
extern crate rust_i18n;

// Load locale files from `locales/` directory, default to English
i18n!("locales", fallback = "en");

mod app;
mod config;
pub mod constants;
mod logging;
mod mcp;
mod ui;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use config::Config;
use constants::{default_log_path, env_file_path, LANGUAGES};

/// TransportAI - Terminal flight search client
#[derive(Parser, Debug)]
#[command(
    name = "transportai",
    version,
    about = "A terminal client for the TransportAI flight information backend"
)]
struct Cli {
    /// Backend base URL (e.g. "http://localhost:8000")
    #[arg(long, value_name = "URL", env = "TRANSPORTAI_BASE_URL")]
    base_url: Option<String>,

    /// Color theme (default, gruvbox, nord, or a custom theme file name)
    #[arg(long, short = 't', env = "TRANSPORTAI_THEME")]
    theme: Option<String>,

    /// UI language (en, tr)
    #[arg(long, short = 'l', value_name = "LANG", env = "TRANSPORTAI_LANG")]
    lang: Option<String>,

    /// Write the log to this file instead of the default location
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env files feed the clap `env` fallbacks; the config dir wins over cwd
    let _ = dotenvy::from_path(env_file_path());
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // defaults < config file < env < CLI
    let mut config = Config::load();
    config.apply_overrides(
        cli.base_url.as_deref(),
        cli.theme.as_deref(),
        cli.lang.as_deref(),
    );

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(e) = logging::init(&log_path) {
        eprintln!("Warning: logging disabled ({}): {:#}", log_path.display(), e);
    }

    if !LANGUAGES.contains(&config.lang.as_str()) {
        warn!("Unsupported language {:?}, falling back to en", config.lang);
        config.lang = "en".to_string();
    }

    // Set UI language (CLI > env > config > default "en")
    rust_i18n::set_locale(&config.lang);

    info!(
        "Starting transportai v{} base_url={} theme={} lang={}",
        env!("CARGO_PKG_VERSION"),
        config.base_url,
        config.theme,
        config.lang
    );

    // Build and run the application
    let mut app = app::App::new(&config)?;
    app.run().await
}
