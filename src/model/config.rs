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
    /// Storage file override. Default: `$XDG_DATA_HOME/taskos/storage.json`
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Key the task collection is stored under
    #[serde(default = "default_storage_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            path: None,
            key: default_storage_key(),
        }
    }
}

fn default_storage_key() -> String {
    "tasks".to_string()
}

fn default_true() -> bool {
    true
}

fn default_header_color() -> String {
    "#1C1C1E".to_string()
}

fn default_date_format() -> String {
    "%-d %b".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color handed to the host for the header bar
    #[serde(default = "default_header_color")]
    pub header_color: String,
    /// Ring the terminal bell for haptic notifications
    #[serde(default = "default_true")]
    pub haptics: bool,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// chrono format string for due dates on cards
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            header_color: default_header_color(),
            haptics: true,
            show_key_hints: true,
            date_format: default_date_format(),
            colors: HashMap::new(),
        }
    }
}
