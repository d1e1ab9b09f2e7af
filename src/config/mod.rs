//! Configuration loading
//!
//! Settings come from (lowest to highest precedence): built-in defaults,
//! the TOML config file, the `TRIAGE_API_BASE_URL` environment variable,
//! and CLI flags. A broken config file is logged and ignored rather than
//! aborting startup.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TriageError;

mod types;

pub use types::{ApiConfig, Config, UiConfig, DEFAULT_BASE_URL, DEFAULT_TICK_MS};

/// Environment variable overriding the service base URL.
pub const BASE_URL_ENV: &str = "TRIAGE_API_BASE_URL";

/// Default config file location: `<config dir>/triage/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("triage").join("config.toml"))
}

/// Load configuration from the given path, or the default location when
/// none is given. A missing file yields defaults silently; an unreadable or
/// unparseable file yields defaults with a warning.
pub fn load(path_override: Option<&Path>) -> Config {
    let path = match path_override {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) => path,
            None => return Config::default(),
        },
    };

    match read_config(&path) {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(err) => {
            log::warn!("{err}; using defaults");
            Config::default()
        }
    }
}

/// Read and parse a config file. `Ok(None)` means the file does not exist.
fn read_config(path: &Path) -> Result<Option<Config>, TriageError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents).map_err(|e| TriageError::Config {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(Some(config))
}

/// Resolve the service base URL: CLI flag, then environment, then config
/// file (which already defaulted). Trailing slashes are stripped so path
/// joins stay predictable.
pub fn resolve_base_url(cli_override: Option<&str>, config: &Config) -> String {
    let url = cli_override
        .map(str::to_string)
        .or_else(|| std::env::var(BASE_URL_ENV).ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| config.api.base_url.clone());
    url.trim_end_matches('/').to_string()
}
