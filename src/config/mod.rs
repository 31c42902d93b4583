use std::path::Path;

use serde::Deserialize;

use crate::constants::*;

/// Application configuration with sensible defaults.
///
/// Can be overridden via ~/.config/transportai/config.toml, then by
/// `TRANSPORTAI_*` environment variables and command-line flags (see `main`).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the MCP backend; `/mcp/query` is appended to it.
    pub base_url: String,
    /// Theme name (built-in or custom)
    pub theme: String,
    /// UI language (en, tr)
    pub lang: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            theme: "default".to_string(),
            lang: "en".to_string(),
        }
    }
}

/// TOML-deserializable config file format.
/// All fields are optional. Missing fields use defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileConfig {
    #[serde(alias = "baseUrl")]
    base_url: Option<String>,
    theme: Option<String>,
    lang: Option<String>,
}

impl Config {
    /// Load config from ~/.config/transportai/config.toml, falling back to
    /// defaults for any missing fields.
    pub fn load() -> Self {
        Self::load_from(&config_file_path())
    }

    /// Load config from `path`. A missing file yields pure defaults; a file
    /// that fails to parse prints a warning and also yields defaults.
    pub fn load_from(path: &Path) -> Self {
        let config = Config::default();

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return config, // No config file, use defaults
        };

        match toml::from_str::<FileConfig>(&content) {
            Ok(file_config) => config.merge(file_config),
            Err(e) => {
                eprintln!(
                    "Warning: Failed to parse {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                config
            }
        }
    }

    /// Merge file values over `self`. Empty strings are ignored.
    fn merge(mut self, file_config: FileConfig) -> Self {
        if let Some(v) = non_empty(file_config.base_url) {
            self.base_url = v;
        }
        if let Some(v) = non_empty(file_config.theme) {
            self.theme = v;
        }
        if let Some(v) = non_empty(file_config.lang) {
            self.lang = v;
        }
        self
    }

    /// Apply command-line / environment overrides. `None` and empty values
    /// leave the current setting alone.
    pub fn apply_overrides(
        &mut self,
        base_url: Option<&str>,
        theme: Option<&str>,
        lang: Option<&str>,
    ) {
        if let Some(v) = base_url.filter(|s| !s.trim().is_empty()) {
            self.base_url = v.trim().to_string();
        }
        if let Some(v) = theme.filter(|s| !s.is_empty()) {
            self.theme = v.to_string();
        }
        if let Some(v) = lang.filter(|s| !s.is_empty()) {
            self.lang = v.to_string();
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_point_at_local_backend() {
        let c = Config::default();
        assert_eq!(c.base_url, "http://localhost:8000");
        assert_eq!(c.theme, "default");
        assert_eq!(c.lang, "en");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let c = Config::load_from(&dir.path().join("nope.toml"));
        assert_eq!(c, Config::default());
    }

    #[test]
    fn file_overrides_base_url() {
        let f = write_config("base_url = \"https://mcp.example.com\"\n");
        let c = Config::load_from(f.path());
        assert_eq!(c.base_url, "https://mcp.example.com");
        assert_eq!(c.theme, "default");
    }

    #[test]
    fn camel_case_base_url_is_recognized() {
        let f = write_config("baseUrl = \"http://10.0.2.2:8000\"\n");
        let c = Config::load_from(f.path());
        assert_eq!(c.base_url, "http://10.0.2.2:8000");
    }

    #[test]
    fn empty_values_are_ignored() {
        let f = write_config("base_url = \"  \"\ntheme = \"\"\nlang = \"tr\"\n");
        let c = Config::load_from(f.path());
        assert_eq!(c.base_url, DEFAULT_BASE_URL);
        assert_eq!(c.theme, "default");
        assert_eq!(c.lang, "tr");
    }

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        let f = write_config("base_url = [unterminated");
        let c = Config::load_from(f.path());
        assert_eq!(c, Config::default());
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let f = write_config("theme = \"nord\"\nrefresh = 5\n");
        let c = Config::load_from(f.path());
        assert_eq!(c.theme, "nord");
    }

    #[test]
    fn overrides_win_over_file() {
        let f = write_config("base_url = \"http://file:1\"\ntheme = \"nord\"\n");
        let mut c = Config::load_from(f.path());
        c.apply_overrides(Some("http://cli:2"), None, Some("tr"));
        assert_eq!(c.base_url, "http://cli:2");
        assert_eq!(c.theme, "nord");
        assert_eq!(c.lang, "tr");
    }

    #[test]
    fn empty_overrides_are_ignored() {
        let mut c = Config::default();
        c.apply_overrides(Some(""), Some(""), Some(""));
        assert_eq!(c, Config::default());
    }
}
