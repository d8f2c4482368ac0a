//! Configuration for pipelines built by [`Pipeline::from_config`].
//!
//! [`Pipeline::from_config`]: crate::pipeline::Pipeline::from_config
//!
//! Every section and field is optional in the serialized form and falls back
//! to its documented default. Unknown keys are rejected.
//!
//! ```
//! use miniparse::config::MiniparseConfig;
//!
//! let config = MiniparseConfig::from_json_str(r#"{"tokenizer": {"lowercase": false}}"#).unwrap();
//! assert!(!config.tokenizer.lowercase);
//! assert!(config.extraction.extract_emails);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MiniparseError, Result};
use crate::extract::ExtractionConfig;
use crate::speech::SpeechOptions;
use crate::tokenizer::TokenizerConfig;

/// Which built-in stages a configured pipeline registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineOptions {
    /// Register [`CleanStage`](crate::stage::CleanStage) (default: true).
    pub enable_cleaning: bool,

    /// Register [`EntityExtractor`](crate::extract::EntityExtractor) (default: true).
    pub enable_extraction: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            enable_cleaning: true,
            enable_extraction: true,
        }
    }
}

/// Complete configuration of the toolkit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MiniparseConfig {
    pub pipeline: PipelineOptions,
    pub tokenizer: TokenizerConfig,
    pub speech: SpeechOptions,
    pub extraction: ExtractionConfig,
}

impl MiniparseConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    ///
    /// Paths with an extension other than `.json` are rejected before the
    /// file is read; extension-less paths are accepted.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(ext) = path.extension()
            && !ext.eq_ignore_ascii_case("json")
        {
            return Err(MiniparseError::config(format!(
                "unsupported configuration file '{}': expected a .json file",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Serialize this configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
