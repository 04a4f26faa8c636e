use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::keymap::KeyBindings;

const CONFIG_FILE: &str = "keycmd.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Page shown at start-up; also the root of the key context stack.
    #[serde(default = "default_page")]
    pub default_page: String,
    #[serde(default = "default_pages")]
    pub pages: Vec<String>,
    /// Key bindings per context: context name -> key -> command string.
    #[serde(default)]
    pub bindings: HashMap<String, HashMap<String, String>>,
    /// Command strings run once after the built-ins are registered.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub startup: Vec<String>,
}

fn default_page() -> String {
    "browser".to_string()
}

fn default_pages() -> Vec<String> {
    ["browser", "queue", "playlist", "search", "log"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_page: default_page(),
            pages: default_pages(),
            bindings: HashMap::new(),
            startup: Vec::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Invalid JSON in config: {0}")]
    InvalidJson(String),
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(CONFIG_FILE))
}

/// Load the config from the default location.
pub fn load_config() -> Result<Config, ConfigError> {
    let path = config_path().ok_or_else(|| ConfigError::NotFound(PathBuf::from(CONFIG_FILE)))?;
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| ConfigError::InvalidJson(e.to_string()))
}

impl Config {
    pub fn key_bindings(&self) -> KeyBindings {
        KeyBindings::new(self.bindings.clone())
    }

    pub fn has_page(&self, name: &str) -> bool {
        self.pages.iter().any(|p| p == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_config() {
        let json = r#"{
            "default_page": "queue",
            "pages": ["browser", "queue"],
            "bindings": {
                "global": { "q": "quit" },
                "queue": { "d": "clear-queue", "p": "pause-playback" }
            },
            "startup": ["echo 'ready'"]
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_page, "queue");
        assert_eq!(config.pages, vec!["browser", "queue"]);
        assert_eq!(config.bindings.len(), 2);
        assert_eq!(config.bindings["queue"]["d"], "clear-queue");
        assert_eq!(config.startup, vec!["echo 'ready'"]);
    }

    #[test]
    fn empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.default_page, "browser");
        assert!(config.has_page("queue"));
        assert!(!config.has_page("settings"));
        assert!(config.bindings.is_empty());
        assert!(config.startup.is_empty());
    }

    #[test]
    fn invalid_json_is_reported() {
        let dir = std::env::temp_dir().join(format!("keycmd-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJson(_)));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_not_found() {
        let path = std::env::temp_dir().join("keycmd-definitely-missing.json");
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }
}
