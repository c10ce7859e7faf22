//! Config file loading
//!
//! ```toml
//! [converter]
//! decimals = 2
//! max_fahrenheit = 10000.0
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use upskill_thermo::ConverterConfig;

/// Contents of a `thermo` config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Converter settings
    pub converter: ConverterConfig,
}

impl AppConfig {
    /// Load and validate a config file
    ///
    /// # Errors
    /// Fails if the file cannot be read, is not valid TOML, or holds an
    /// invalid converter configuration.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse and validate config text
    ///
    /// # Errors
    /// Fails on malformed TOML or an invalid converter configuration
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.converter.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise defaults
    ///
    /// # Errors
    /// Same as [`load`](Self::load)
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("no config file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_table() {
        let config = AppConfig::from_toml("[converter]\ndecimals = 3\nmax_fahrenheit = 10000.0\n").unwrap();
        assert_eq!(
            config.converter,
            ConverterConfig::new().with_decimals(3).with_max_fahrenheit(10_000.0)
        );
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn invalid_converter_settings_rejected() {
        let err = AppConfig::from_toml("[converter]\ndecimals = 42\n").unwrap_err();
        assert!(err.to_string().contains("decimal places"));
    }

    #[test]
    fn unknown_section_rejected() {
        assert!(AppConfig::from_toml("[server]\nport = 1\n").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = AppConfig::load(Path::new("/nonexistent/thermo.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/thermo.toml"));
    }
}
