//! Display and solver configuration for the `hanoi` binary.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_hanoi::DEFAULT_MAX_DISK_COUNT;
use tracing::{debug, info, instrument};

/// Order in which a peg's disks are listed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StackOrder {
    /// Largest disk first.
    #[default]
    BottomToTop,
    /// Smallest disk first.
    TopToBottom,
}

/// Shape of the printed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum OutputFormat {
    /// Divider line followed by one `name: sizes` line per peg.
    #[default]
    Text,
    /// One JSON object per state (JSON Lines).
    Json,
}

/// Configuration for the `hanoi` binary.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HanoiConfig {
    /// Source, intermediate, and destination peg names.
    #[serde(default = "default_peg_names")]
    peg_names: [String; 3],

    /// Line printed before each state.
    #[serde(default = "default_divider")]
    divider: String,

    /// Text placed between disk sizes.
    #[serde(default = "default_separator")]
    separator: String,

    /// Order in which disks are listed.
    #[serde(default)]
    order: StackOrder,

    /// Largest disk count the solver accepts.
    #[serde(default = "default_max_disk_count")]
    max_disk_count: usize,
}

#[instrument]
fn default_peg_names() -> [String; 3] {
    ["A".to_string(), "B".to_string(), "C".to_string()]
}

#[instrument]
fn default_divider() -> String {
    "==========".to_string()
}

#[instrument]
fn default_separator() -> String {
    " - ".to_string()
}

#[instrument]
fn default_max_disk_count() -> usize {
    DEFAULT_MAX_DISK_COUNT
}

impl Default for HanoiConfig {
    fn default() -> Self {
        Self {
            peg_names: default_peg_names(),
            divider: default_divider(),
            separator: default_separator(),
            order: StackOrder::default(),
            max_disk_count: default_max_disk_count(),
        }
    }
}

impl HanoiConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Missing keys fall back to their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(peg_names = ?config.peg_names, order = %config.order, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces the stack order.
    pub fn with_order(mut self, order: StackOrder) -> Self {
        self.order = order;
        self
    }

    /// Returns the peg names as string slices.
    pub fn peg_name_refs(&self) -> [&str; 3] {
        [
            self.peg_names[0].as_str(),
            self.peg_names[1].as_str(),
            self.peg_names[2].as_str(),
        ]
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.peg_names.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::new("Peg names must not be empty".to_string()));
        }
        let [a, b, c] = &self.peg_names;
        if a == b || b == c || a == c {
            return Err(ConfigError::new(format!(
                "Peg names must be distinct, got {:?}",
                self.peg_names
            )));
        }
        if self.max_disk_count == 0 {
            return Err(ConfigError::new(
                "max_disk_count must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HanoiConfig::default();
        assert_eq!(config.peg_name_refs(), ["A", "B", "C"]);
        assert_eq!(config.divider(), "==========");
        assert_eq!(config.separator(), " - ");
        assert_eq!(*config.order(), StackOrder::BottomToTop);
        assert_eq!(*config.max_disk_count(), DEFAULT_MAX_DISK_COUNT);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(HanoiConfig::from_toml("").unwrap(), HanoiConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = HanoiConfig::from_toml(
            r#"
            peg_names = ["Left", "Middle", "Right"]
            order = "top-to-bottom"
            "#,
        )
        .unwrap();
        assert_eq!(config.peg_name_refs(), ["Left", "Middle", "Right"]);
        assert_eq!(*config.order(), StackOrder::TopToBottom);
        assert_eq!(config.divider(), "==========");
    }

    #[test]
    fn test_repeated_peg_names_rejected() {
        let result = HanoiConfig::from_toml(r#"peg_names = ["A", "B", "A"]"#);
        assert!(result.unwrap_err().message.contains("distinct"));
    }

    #[test]
    fn test_blank_peg_name_rejected() {
        assert!(HanoiConfig::from_toml(r#"peg_names = ["A", " ", "C"]"#).is_err());
    }

    #[test]
    fn test_zero_max_disk_count_rejected() {
        assert!(HanoiConfig::from_toml("max_disk_count = 0").is_err());
    }

    #[test]
    fn test_unknown_order_rejected() {
        assert!(HanoiConfig::from_toml(r#"order = "sideways""#).is_err());
    }

    #[test]
    fn test_with_order_overrides() {
        let config = HanoiConfig::default().with_order(StackOrder::TopToBottom);
        assert_eq!(*config.order(), StackOrder::TopToBottom);
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
