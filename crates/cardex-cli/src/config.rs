//! TOML configuration for the cdx CLI.
//!
//! The config file lives at the XDG config path (on Unix,
//! `~/.config/cdx/config.toml`) and currently carries a single key:
//!
//! ```toml
//! cards = "/home/user/decks/cards.json"
//! ```
//!
//! A missing or unreadable file simply yields the defaults; the catalog path
//! resolution falls through to `cards.json` in the working directory.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;

/// Application name (for XDG paths).
const APPLICATION: &str = "cdx";

/// cdx configuration file contents.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Config {
    /// Default catalog path, used when neither `--cards` nor `CARDEX_CARDS`
    /// provides one.
    #[serde(default)]
    pub cards: Option<PathBuf>,
}

/// Returns the config file path.
///
/// The `CDX_CONFIG` environment variable overrides the XDG location; tests
/// rely on this to point at a temp directory.
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var("CDX_CONFIG") {
        return Some(PathBuf::from(path));
    }
    ProjectDirs::from("", "", APPLICATION).map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Loads the config file, treating an absent or malformed file as defaults.
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    let Ok(contents) = fs::read_to_string(&path) else {
        return Config::default();
    };
    toml::from_str(&contents).unwrap_or_default()
}
