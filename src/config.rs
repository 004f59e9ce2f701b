use crate::chunker::ChunkingOptions;
use crate::hierarchy::Ruleset;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for the full postprocessing pass.
///
/// Both sections are optional in JSON; missing ones take their defaults.
///
/// ```json
/// {
///   "ruleset": { "ListItem": ["Title", "ListItem"] },
///   "chunking": { "max_characters": 1000, "combine_text_under_n_chars": 200 }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostprocessConfig {
    /// Allowed parent types per child type
    #[serde(default)]
    pub ruleset: Ruleset,
    #[serde(default)]
    pub chunking: ChunkingOptions,
}

impl PostprocessConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PostprocessConfig =
            serde_json::from_str(json).context("Failed to parse postprocess configuration")?;
        config
            .chunking
            .validate()
            .context("Invalid chunking options")?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .context(format!("Failed to read configuration: {}", path.display()))?;
        Self::from_json_str(&json)
            .context(format!("Failed to load configuration: {}", path.display()))
    }
}
