use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the stored list. Default: the platform data dir.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Key of the slot the list is stored under
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            dir: None,
            key: default_key(),
        }
    }
}

fn default_key() -> String {
    "todos".to_string()
}

fn default_route() -> String {
    "#/".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Route the TUI opens on (`#/`, `#/active`, `#/completed`)
    #[serde(default = "default_route")]
    pub default_route: String,
    /// Capture mouse events (click to toggle/remove, hover to reveal remove)
    #[serde(default = "default_true")]
    pub mouse: bool,
    /// Color overrides as `#RRGGBB`, keyed by theme slot name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            default_route: default_route(),
            mouse: true,
            colors: HashMap::new(),
        }
    }
}
