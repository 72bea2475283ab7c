use crate::error::{CatalogError, Result};
use crate::filter::FilterMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_FILTER_MODE: &str = "filter-mode";
pub const KEY_FIXTURES_DIR: &str = "fixtures-dir";

/// Configuration for shelfz, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfzConfig {
    /// Whether filters replace each other or combine
    #[serde(default)]
    pub filter_mode: FilterMode,

    /// Directory with users.json, categories.json and products.json.
    /// The built-in catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixtures_dir: Option<PathBuf>,
}

impl ShelfzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CatalogError::Io)?;
        let config: ShelfzConfig =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CatalogError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CatalogError::Serialization)?;
        fs::write(config_path, content).map_err(CatalogError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_FILTER_MODE => Some(self.filter_mode.to_string()),
            KEY_FIXTURES_DIR => Some(
                self.fixtures_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    /// Set a key from its string form. An empty `fixtures-dir` unsets it.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            KEY_FILTER_MODE => {
                self.filter_mode = value.parse().map_err(|e: CatalogError| e.to_string())?;
                Ok(())
            }
            KEY_FIXTURES_DIR => {
                let trimmed = value.trim();
                self.fixtures_dir = if trimmed.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(trimmed))
                };
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        [KEY_FILTER_MODE, KEY_FIXTURES_DIR]
            .iter()
            .filter_map(|k| self.get(k).map(|v| (k.to_string(), v)))
            .collect()
    }
}
