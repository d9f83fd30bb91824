//! Demo inputs, optionally loaded from a TOML file
//!
//! Every field has a default, so an empty file (or no file at all) reproduces
//! the stock demo output.

use crate::error::{ErrorCode, FnkitError, Result};
use crate::functions::MAX_SQUARES;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Sequence fed to the aggregation demo
    pub numbers: Vec<i32>,
    /// Argument passed to `inc` and `dec`
    pub probe: i32,
    /// Text handed to the string consumer
    pub greeting: String,
    /// Length of the squares table
    pub squares: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            numbers: vec![1, 2, 3],
            probe: 10,
            greeting: "Hello".to_string(),
            squares: 5,
        }
    }
}

impl DemoConfig {
    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| {
            FnkitError::config_with_code(ErrorCode::CONFIG_PARSE_ERROR, "invalid config file")
                .with_source(e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the demos cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.squares > MAX_SQUARES {
            return Err(FnkitError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                format!("squares = {} exceeds the maximum of {MAX_SQUARES}", self.squares),
            ));
        }
        Ok(())
    }

    /// Render the config back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| {
            FnkitError::config_with_code(ErrorCode::CONFIG_PARSE_ERROR, "cannot render config")
                .with_source(e)
        })
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| {
            FnkitError::config_with_code(ErrorCode::CONFIG_NOT_FOUND, "cannot read config file")
                .with_path(path)
                .with_source(e)
        })?;

        Self::from_toml_str(&content).map_err(|e| e.with_path(path))
    }

    /// Load `path` when given, otherwise fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
