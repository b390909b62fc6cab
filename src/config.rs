use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// CLI fallback configuration, loaded from a JSON file via `--config`.
///
/// Only consulted when a document carries no checked selection of its own
/// and no query was given.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Show paragraphs removed before the baseline
    pub show_deleted: bool,
    /// Version to select when the document has no checked `newest` radio;
    /// dot or hyphen form
    pub default_version: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),
}

impl RenderConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
