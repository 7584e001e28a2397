//! Suite configuration.
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables (`ARVAK_CONFORMANCE_*`)
//! 2. Configuration file (YAML)
//! 3. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::check::Check;

/// Overrides the shot count.
pub const ENV_SHOTS: &str = "ARVAK_CONFORMANCE_SHOTS";
/// Fixes the sampling seed.
pub const ENV_SEED: &str = "ARVAK_CONFORMANCE_SEED";

/// How a suite runs its checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Shots for the run-circuit check.
    pub shots: u32,
    /// Sampling seed forwarded to the backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Checks to run, in order.
    pub checks: Vec<Check>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            shots: 1024,
            seed: None,
            checks: Check::ALL.to_vec(),
        }
    }
}

impl SuiteConfig {
    /// `~/.arvak/conformance.yaml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".arvak").join("conformance.yaml"))
    }

    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {e}", path.display())))?;

        let config: SuiteConfig = serde_yaml_ng::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration: the given file, else the default file if it
    /// exists, else defaults; then environment overrides.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(path)?,
                None => Self::default(),
            },
        };

        let config = config.merge_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn merge_env(self) -> Result<Self, ConfigError> {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up through `var`.
    pub fn merge_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(v) = var(ENV_SHOTS) {
            self.shots = v
                .parse()
                .map_err(|e| ConfigError::ParseError(format!("{ENV_SHOTS}={v}: {e}")))?;
        }
        if let Some(v) = var(ENV_SEED) {
            self.seed = Some(
                v.parse()
                    .map_err(|e| ConfigError::ParseError(format!("{ENV_SEED}={v}: {e}")))?,
            );
        }
        Ok(self)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shots == 0 {
            return Err(ConfigError::ValidationError(
                "shots must be at least 1".into(),
            ));
        }
        if self.checks.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one check must be enabled".into(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
