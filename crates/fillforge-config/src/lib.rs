//! Configuration system for FillForge.
//!
//! Load filler configuration from TOML or YAML to control tie-breaking,
//! termination and invariant checking without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use fillforge_config::{FillerConfig, TieBreak};
//! use std::time::Duration;
//!
//! let config = FillerConfig::from_toml_str(r#"
//!     tie_break = "id"
//!
//!     [termination]
//!     millis_spent_limit = 250
//!     best_amount_limit = "9.5"
//! "#).unwrap();
//!
//! assert_eq!(config.tie_break, TieBreak::Id);
//! assert_eq!(config.time_limit(), Some(Duration::from_millis(250)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use fillforge_config::FillerConfig;
//!
//! let config = FillerConfig::load("fillforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main filler configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FillerConfig {
    /// Environment mode affecting invariant checking.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Ordering among items of equal amount.
    #[serde(default)]
    pub tie_break: TieBreak,

    /// Termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,
}

impl FillerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Sets the tie-break rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets the termination time limit in milliseconds.
    pub fn with_termination_millis(mut self, millis: u64) -> Self {
        self.termination = Some(TerminationConfig {
            millis_spent_limit: Some(millis),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the termination step limit.
    pub fn with_step_count_limit(mut self, steps: u64) -> Self {
        self.termination = Some(TerminationConfig {
            step_count_limit: Some(steps),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the best amount at which solving stops early.
    pub fn with_best_amount_limit(mut self, amount: impl Into<String>) -> Self {
        self.termination = Some(TerminationConfig {
            best_amount_limit: Some(amount.into()),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Returns the step count limit, if configured.
    pub fn step_count_limit(&self) -> Option<u64> {
        self.termination.as_ref().and_then(|t| t.step_count_limit)
    }

    /// Returns the best amount limit, if configured.
    pub fn best_amount_limit(&self) -> Option<&str> {
        self.termination
            .as_ref()
            .and_then(|t| t.best_amount_limit.as_deref())
    }

    /// Returns true if invariants are checked after every step.
    pub fn is_asserting(&self) -> bool {
        self.environment_mode == EnvironmentMode::FullAssert
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(limit) = self.best_amount_limit() {
            if limit.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "best_amount_limit must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Environment mode affecting filler behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Deterministic run without extra checks.
    #[default]
    Reproducible,

    /// Verifies solution invariants after every step.
    FullAssert,
}

/// Ordering among items of equal amount after the descending sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Equal amounts keep their input order.
    #[default]
    InputOrder,

    /// Equal amounts are ordered by ascending identifier.
    Id,
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend filling.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend filling.
    pub millis_spent_limit: Option<u64>,

    /// Maximum number of steps (items pulled from the remaining list).
    pub step_count_limit: Option<u64>,

    /// Stop once the best amount reaches this value (parsed by the solver's
    /// amount type, e.g. "9.5" or "480").
    pub best_amount_limit: Option<String>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let millis = self.seconds_spent_limit.unwrap_or(0) * 1000
            + self.millis_spent_limit.unwrap_or(0);
        if millis > 0 {
            Some(Duration::from_millis(millis))
        } else {
            None
        }
    }
}
