use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::domain::nav::DEFAULT_MAX_DEPTH;
use crate::store::{MENU_STATE_KEY, MIN_QUIET_PERIOD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Sqlite,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_key")]
    pub key: String,

    #[serde(default)]
    pub backend: BackendKind,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: default_storage_key(),
            backend: BackendKind::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuConfig {
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    #[serde(default = "default_scroll_debounce_ms")]
    pub scroll_debounce_ms: u64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            scroll_debounce_ms: default_scroll_debounce_ms(),
        }
    }
}

impl MenuConfig {
    /// Never shorter than the store's minimum quiet period
    pub fn scroll_debounce(&self) -> Duration {
        Duration::from_millis(self.scroll_debounce_ms).max(MIN_QUIET_PERIOD)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationSpec {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub menu: MenuConfig,

    /// Route title overrides, path -> title
    #[serde(default)]
    pub labels: BTreeMap<String, String>,

    #[serde(default)]
    pub locations: Vec<LocationSpec>,
}

fn default_storage_key() -> String {
    MENU_STATE_KEY.to_string()
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_scroll_debounce_ms() -> u64 {
    MIN_QUIET_PERIOD.as_millis() as u64
}

pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => Config::default(),
    }
}

pub fn load_from(path: &Path) -> Config {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    parse(&content).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), error = %err, "ignoring invalid config");
        Config::default()
    })
}

pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(content)
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("DINEBOARD_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("dineboard").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("dineboard").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "dineboard", "dineboard")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("dineboard"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("dineboard"));
    }
    directories::ProjectDirs::from("io", "dineboard", "dineboard")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn state_db_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("state.sqlite3"))
}

pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("dineboard.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.storage.key, MENU_STATE_KEY);
        assert_eq!(config.storage.backend, BackendKind::Sqlite);
        assert_eq!(config.menu.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.menu.scroll_debounce(), MIN_QUIET_PERIOD);
        assert!(config.locations.is_empty());
    }

    #[test]
    fn test_full_config() {
        let config = parse(
            r#"
            [storage]
            key = "outlet-42-menu"
            backend = "memory"

            [menu]
            max_depth = 2
            scroll_debounce_ms = 40

            [labels]
            "/reports" = "All Reports"

            [[locations]]
            id = "pune-kp"
            name = "Pune - Koregaon Park"
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.key, "outlet-42-menu");
        assert_eq!(config.storage.backend, BackendKind::Memory);
        assert_eq!(config.menu.max_depth, 2);
        assert_eq!(config.menu.scroll_debounce(), MIN_QUIET_PERIOD);
        assert_eq!(config.labels.get("/reports").map(String::as_str), Some("All Reports"));
        assert_eq!(config.locations[0].id, "pune-kp");
    }

    #[test]
    fn test_unknown_backend_is_an_error() {
        assert!(parse("[storage]\nbackend = \"redis\"").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = load_from(Path::new("/definitely/not/here/config.toml"));
        assert_eq!(config.storage.key, MENU_STATE_KEY);
    }
}
