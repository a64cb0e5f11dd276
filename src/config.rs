//! # Configuration
//!
//! Application configuration loading and management.
//!
//! # Configuration Sources
//!
//! Configuration is loaded in the following order (later sources override earlier):
//! 1. Default values
//! 2. Configuration file (if exists)
//! 3. Environment variables (prefixed with `OCF_LEDGER_`)
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `OCF_LEDGER_CONFIG_FILE` | TOML configuration file | `ocf-ledger.toml` |
//! | `OCF_LEDGER_LOG_LEVEL` | Log level | `info` |
//! | `OCF_LEDGER_LOG_FORMAT` | Log format (json/pretty) | `json` |
//! | `OCF_LEDGER_TRIGGER_MODE` | Trigger handling (strict/lenient) | `strict` |
//! | `OCF_LEDGER_DEPRECATION_WARNINGS` | Forward deprecation warnings | `true` |
//! | `OCF_LEDGER_SERVICE_NAME` | Service name for tracing | `ocf-ledger` |
//!
//! The loaded values are turned into the explicit settings objects the
//! library takes: [`TranslationContext`], [`NormalizationOptions`],
//! [`BatchOptions`] and [`CompareOptions`].
//!
//! # Examples
//!
//! ```
//! use ocf_ledger::config::AppConfig;
//!
//! let config: AppConfig = toml::from_str("[translation]\ntrigger_mode = \"lenient\"").unwrap();
//! config.validate().unwrap();
//! assert_eq!(config.translation_context().max_ledger_scale, 10);
//! ```

use crate::application::equivalence::{CompareOptions, DEFAULT_IGNORED_FIELDS};
use crate::application::normalization::{BatchOptions, NormalizationOptions};
use crate::application::translators::TranslationContext;
use crate::application::trigger_mapper::TriggerMode;
use crate::application::variant_mapper::DEFAULT_LEDGER_SCALE;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

/// Environment variable naming the configuration file.
pub const CONFIG_FILE_VAR: &str = "OCF_LEDGER_CONFIG_FILE";

/// Configuration file read when [`CONFIG_FILE_VAR`] is unset.
pub const DEFAULT_CONFIG_FILE: &str = "ocf-ledger.toml";

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse configuration.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// Invalid configuration value.
    #[error("invalid config value for {field}: {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },
}

impl ConfigError {
    fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

// ============================================================================
// Logging Configuration
// ============================================================================

/// Log format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (structured logging).
    #[default]
    Json,
    /// Pretty format (human-readable).
    Pretty,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Json,
        }
    }
}

// ============================================================================
// Translation Configuration
// ============================================================================

/// Translator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Handling of triggers without a conversion right.
    #[serde(default)]
    pub trigger_mode: TriggerMode,

    /// Fractional digits a ledger numeric can hold.
    #[serde(default = "default_ledger_scale")]
    pub max_ledger_scale: u32,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            trigger_mode: TriggerMode::Strict,
            max_ledger_scale: default_ledger_scale(),
        }
    }
}

// ============================================================================
// Normalization Configuration
// ============================================================================

/// Deprecated-field handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationConfig {
    /// Forward deprecation warnings to the log.
    #[serde(default = "default_warnings_enabled")]
    pub warnings_enabled: bool,

    /// List affected items in batch reports.
    #[serde(default)]
    pub include_affected_items: bool,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            warnings_enabled: default_warnings_enabled(),
            include_affected_items: false,
        }
    }
}

// ============================================================================
// Comparison Configuration
// ============================================================================

/// Equivalence comparison settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Keys ignored at every depth.
    #[serde(default = "default_ignored_fields")]
    pub ignored_fields: Vec<String>,

    /// Ignore fields the registry lists as deprecated.
    #[serde(default = "default_true")]
    pub ignore_deprecated_fields: bool,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            ignored_fields: default_ignored_fields(),
            ignore_deprecated_fields: true,
        }
    }
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,

    /// Translator configuration.
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Normalization configuration.
    #[serde(default)]
    pub normalization: NormalizationConfig,

    /// Comparison configuration.
    #[serde(default)]
    pub comparison: ComparisonConfig,

    /// Service name for tracing.
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            translation: TranslationConfig::default(),
            normalization: NormalizationConfig::default(),
            comparison: ComparisonConfig::default(),
            service_name: default_service_name(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables and optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or an
    /// environment override does not parse.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let config_path =
            std::env::var(CONFIG_FILE_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        if Path::new(&config_path).exists() {
            config = Self::from_file(&config_path)?;
        }

        config.apply_overrides(|name| std::env::var(name).ok())?;

        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Applies `OCF_LEDGER_*` overrides read through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` for an unparsable trigger mode or boolean.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("OCF_LEDGER_LOG_LEVEL") {
            self.log.level = level;
        }
        if let Some(format) = lookup("OCF_LEDGER_LOG_FORMAT") {
            self.log.format = match format.to_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                _ => LogFormat::Json,
            };
        }

        if let Some(mode) = lookup("OCF_LEDGER_TRIGGER_MODE") {
            self.translation.trigger_mode = mode.parse().map_err(|_| {
                ConfigError::invalid(
                    "translation.trigger_mode",
                    format!("'{mode}' is not strict or lenient"),
                )
            })?;
        }

        if let Some(flag) = lookup("OCF_LEDGER_DEPRECATION_WARNINGS") {
            self.normalization.warnings_enabled = parse_flag(&flag).ok_or_else(|| {
                ConfigError::invalid(
                    "normalization.warnings_enabled",
                    format!("'{flag}' is not a boolean"),
                )
            })?;
        }

        if let Some(name) = lookup("OCF_LEDGER_SERVICE_NAME") {
            self.service_name = name;
        }

        Ok(())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log.level.to_lowercase().as_str()) {
            return Err(ConfigError::invalid(
                "log.level",
                format!(
                    "invalid log level '{}', must be one of: {:?}",
                    self.log.level, valid_levels
                ),
            ));
        }

        let scale = self.translation.max_ledger_scale;
        if scale == 0 || scale > Decimal::MAX_SCALE {
            return Err(ConfigError::invalid(
                "translation.max_ledger_scale",
                format!("{scale} is outside 1..={}", Decimal::MAX_SCALE),
            ));
        }

        Ok(())
    }

    /// Settings for translator calls.
    #[must_use]
    pub const fn translation_context(&self) -> TranslationContext {
        TranslationContext::new(self.translation.trigger_mode, self.translation.max_ledger_scale)
    }

    /// Settings for the normalization engine.
    #[must_use]
    pub const fn normalization_options(&self) -> NormalizationOptions {
        NormalizationOptions {
            warnings_enabled: self.normalization.warnings_enabled,
        }
    }

    /// Settings for batch deprecation reports.
    #[must_use]
    pub const fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            include_affected_items: self.normalization.include_affected_items,
        }
    }

    /// Settings for equivalence comparisons.
    #[must_use]
    pub fn compare_options(&self) -> CompareOptions {
        CompareOptions {
            ignored_fields: self.comparison.ignored_fields.iter().cloned().collect(),
            ignore_deprecated_fields: self.comparison.ignore_deprecated_fields,
            extra_deprecated_fields: BTreeSet::new(),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ============================================================================
// Default Value Functions
// ============================================================================

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_ledger_scale() -> u32 {
    DEFAULT_LEDGER_SCALE
}

fn default_warnings_enabled() -> bool {
    !cfg!(test)
}

fn default_ignored_fields() -> Vec<String> {
    DEFAULT_IGNORED_FIELDS.iter().map(|s| (*s).to_string()).collect()
}

fn default_service_name() -> String {
    "ocf-ledger".to_string()
}
