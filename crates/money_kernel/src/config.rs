//! Kernel configuration
//!
//! Settings are read from a configuration file and/or environment variables
//! prefixed with `MONEY_` (e.g. `MONEY_LOG_LEVEL=debug`,
//! `MONEY_DEFAULT_ROUNDING=half_even`). Additional currencies are declared in
//! a file:
//!
//! ```toml
//! default_rounding = "half_even"
//!
//! [[currencies]]
//! code = "GBP"
//! symbol = "£"
//! subunit_code = "penny"
//! subunit_symbol = "p"
//! fraction = 100
//! ```

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CoreError;
use crate::rounding::RoundingMode;

const ENV_PREFIX: &str = "MONEY";

/// A currency declared in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyDefinition {
    /// ISO 4217 code of the major unit
    pub code: String,
    /// Symbol of the major unit
    pub symbol: String,
    /// Name of the minor unit, e.g. "cent"
    pub subunit_code: String,
    pub subunit_symbol: String,
    /// Minor units per major unit: 1, 10, 100 or 1000
    pub fraction: u32,
}

/// Kernel configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Log level
    pub log_level: String,
    /// Rounding mode used by a registry built from this configuration when
    /// multiplying or dividing without an explicit mode
    pub default_rounding: RoundingMode,
    /// Whether the built-in currencies are registered alongside configured ones
    pub include_builtin: bool,
    /// Extra currencies to register
    pub currencies: Vec<CurrencyDefinition>,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            default_rounding: RoundingMode::default(),
            include_builtin: true,
            currencies: Vec::new(),
        }
    }
}

impl KernelConfig {
    /// Loads configuration from environment, reading a `.env` file if present
    pub fn from_env() -> Result<Self, CoreError> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Loads configuration from a file, with environment variables taking precedence
    ///
    /// The format is inferred from the file extension (TOML, JSON, YAML, ...).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Parses configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, CoreError> {
        let config = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KernelConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.default_rounding, RoundingMode::HalfUp);
        assert!(config.include_builtin);
        assert!(config.currencies.is_empty());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = KernelConfig::from_toml_str("").unwrap();
        assert_eq!(config, KernelConfig::default());
    }

    #[test]
    fn test_toml_with_rounding_and_currencies() {
        let config = KernelConfig::from_toml_str(
            r#"
            log_level = "debug"
            default_rounding = "half_even"

            [[currencies]]
            code = "GBP"
            symbol = "£"
            subunit_code = "penny"
            subunit_symbol = "p"
            fraction = 100
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.default_rounding, RoundingMode::HalfEven);
        assert_eq!(config.currencies.len(), 1);
        assert_eq!(config.currencies[0].code, "GBP");
        assert_eq!(config.currencies[0].fraction, 100);
    }

    #[test]
    fn test_unknown_rounding_mode_is_rejected() {
        let result = KernelConfig::from_toml_str(r#"default_rounding = "half_sideways""#);
        assert!(matches!(result, Err(CoreError::Configuration(_))));
    }
}
