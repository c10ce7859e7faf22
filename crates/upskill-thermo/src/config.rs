//! Converter configuration

use crate::error::ConfigError;
use crate::rounding::MAX_DECIMALS;
use crate::units::ABS_ZERO_FAHRENHEIT;
use serde::{Deserialize, Serialize};

/// Decimal places results are rounded to unless configured otherwise
pub const DEFAULT_DECIMALS: u32 = 2;

/// Upper input limit used by the classroom exercise
pub const CLASSROOM_MAX_FAHRENHEIT: f64 = 10_000.0;

/// Converter configuration
///
/// Every field has a default, so a partial `[converter]` table in a TOML
/// file deserializes cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    /// Decimal places of the Celsius result
    pub decimals: u32,
    /// Inclusive upper limit on Fahrenheit input; `None` means unbounded
    pub max_fahrenheit: Option<f64>,
}

impl ConverterConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration matching the classroom exercise: 2 decimals, inputs up to 10000°F
    #[inline]
    #[must_use]
    pub fn classroom() -> Self {
        Self::default().with_max_fahrenheit(CLASSROOM_MAX_FAHRENHEIT)
    }

    /// With decimal places
    #[inline]
    #[must_use]
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// With an inclusive upper input limit
    #[inline]
    #[must_use]
    pub fn with_max_fahrenheit(mut self, limit: f64) -> Self {
        self.max_fahrenheit = Some(limit);
        self
    }

    /// Without an upper input limit
    #[inline]
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.max_fahrenheit = None;
        self
    }

    /// Check that the configuration can be used by a converter
    ///
    /// # Errors
    /// Returns [`ConfigError`] if `decimals` exceeds [`MAX_DECIMALS`] or the
    /// upper limit is not a finite value above absolute zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decimals > MAX_DECIMALS {
            return Err(ConfigError::TooManyDecimals {
                max: MAX_DECIMALS,
                actual: self.decimals,
            });
        }
        if let Some(limit) = self.max_fahrenheit {
            if !limit.is_finite() || limit <= ABS_ZERO_FAHRENHEIT {
                return Err(ConfigError::InvalidMaximum(limit));
            }
        }
        Ok(())
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            max_fahrenheit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = ConverterConfig::new();
        assert_eq!(config.decimals, 2);
        assert_eq!(config.max_fahrenheit, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn classroom_limit() {
        let config = ConverterConfig::classroom();
        assert_eq!(config.max_fahrenheit, Some(10_000.0));
        assert_eq!(config.unbounded(), ConverterConfig::default());
    }

    #[test]
    fn rejects_excess_decimals() {
        let result = ConverterConfig::new().with_decimals(11).validate();
        assert_eq!(
            result,
            Err(ConfigError::TooManyDecimals { max: 10, actual: 11 })
        );
    }

    #[test]
    fn rejects_limit_at_absolute_zero() {
        let result = ConverterConfig::new()
            .with_max_fahrenheit(ABS_ZERO_FAHRENHEIT)
            .validate();
        assert!(matches!(result, Err(ConfigError::InvalidMaximum(_))));

        let result = ConverterConfig::new()
            .with_max_fahrenheit(f64::NAN)
            .validate();
        assert!(matches!(result, Err(ConfigError::InvalidMaximum(_))));
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let config: ConverterConfig = toml::from_str("max_fahrenheit = 500.0").unwrap();
        assert_eq!(config, ConverterConfig::new().with_max_fahrenheit(500.0));

        let config: ConverterConfig = toml::from_str("").unwrap();
        assert_eq!(config, ConverterConfig::default());
    }

    #[test]
    fn unknown_keys_rejected() {
        let result: Result<ConverterConfig, _> = toml::from_str("precision = 3");
        assert!(result.is_err());
    }
}
