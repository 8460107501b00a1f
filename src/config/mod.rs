use crate::utils::DATE_FORMAT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

fn default_date_format() -> String {
    DATE_FORMAT.to_string()
}

/// Inventory helper configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryConfig {
    /// Locale used for money formatting (e.g. "de-DE"). Unset means en-US.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// chrono format string for due dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            locale: None,
            date_format: default_date_format(),
        }
    }
}

/// Read the configuration file, `Ok(None)` if it does not exist
pub fn read_config(config_path: &Path) -> Result<Option<InventoryConfig>, ConfigError> {
    if !config_path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(config_path)?;
    let config: InventoryConfig = serde_json::from_str(&content)?;
    Ok(Some(config))
}

/// Write the configuration file
pub fn write_config(config_path: &Path, config: &InventoryConfig) -> Result<(), ConfigError> {
    let content = serde_json::to_string_pretty(config)?;
    fs::write(config_path, content)?;
    Ok(())
}
