//! Fahrenheit to Celsius conversion
//!
//! The conversion is `5 * (f - 32) / 9`, rounded to the configured number
//! of decimal places. Readings at or below absolute zero are rejected with
//! a typed error rather than a panic, so callers can report them.

use crate::config::ConverterConfig;
use crate::error::{ConfigError, ConversionError, ConversionResult};
use crate::rounding::round_to_decimals;
use crate::units::{Celsius, Fahrenheit, ABS_ZERO_FAHRENHEIT};

/// Stateless, configured Fahrenheit to Celsius converter
///
/// Holds only its configuration; it is `Copy` and safe to share between
/// threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TemperatureConverter {
    config: ConverterConfig,
}

impl TemperatureConverter {
    /// Create converter from configuration
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the configuration is invalid
    pub fn new(config: ConverterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Converter with the classroom upper limit of 10000°F
    #[inline]
    #[must_use]
    pub fn classroom() -> Self {
        Self {
            config: ConverterConfig::classroom(),
        }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert a Fahrenheit reading to Celsius
    ///
    /// # Errors
    /// - [`ConversionError::NotFinite`] for NaN or infinite input
    /// - [`ConversionError::BelowAbsoluteZero`] if `fahrenheit <= -459.67`
    /// - [`ConversionError::AboveMaximum`] if an upper limit is configured and exceeded
    pub fn convert(&self, fahrenheit: f64) -> ConversionResult<f64> {
        self.check_range(fahrenheit)?;
        let mut celsius = (5.0 * (fahrenheit - 32.0)) / 9.0;
        if !celsius.is_finite() {
            // 5 * f overflows above ~3.6e307; dividing first stays finite up to f64::MAX
            celsius = (fahrenheit - 32.0) / 9.0 * 5.0;
        }
        Ok(round_to_decimals(celsius, self.config.decimals))
    }

    /// Typed variant of [`convert`](Self::convert)
    ///
    /// # Errors
    /// Same as [`convert`](Self::convert)
    #[inline]
    pub fn convert_typed(&self, reading: Fahrenheit) -> ConversionResult<Celsius> {
        self.convert(reading.degrees()).map(Celsius)
    }

    fn check_range(&self, fahrenheit: f64) -> ConversionResult<()> {
        if !fahrenheit.is_finite() {
            tracing::debug!(fahrenheit, "rejecting non-finite reading");
            return Err(ConversionError::NotFinite(fahrenheit));
        }
        if fahrenheit <= ABS_ZERO_FAHRENHEIT {
            tracing::debug!(fahrenheit, "rejecting reading at or below absolute zero");
            return Err(ConversionError::BelowAbsoluteZero {
                value: fahrenheit,
                limit: ABS_ZERO_FAHRENHEIT,
            });
        }
        if let Some(limit) = self.config.max_fahrenheit {
            if fahrenheit > limit {
                tracing::debug!(fahrenheit, limit, "rejecting reading above configured limit");
                return Err(ConversionError::AboveMaximum {
                    value: fahrenheit,
                    limit,
                });
            }
        }
        Ok(())
    }
}

impl Fahrenheit {
    /// Convert to Celsius with the default converter
    ///
    /// # Errors
    /// Returns [`ConversionError`] if the reading is at or below absolute zero
    /// or not finite
    #[inline]
    pub fn to_celsius(self) -> ConversionResult<Celsius> {
        TemperatureConverter::default().convert_typed(self)
    }
}

/// Convert a Fahrenheit reading to Celsius, rounded to 2 decimal places
///
/// # Errors
/// Returns [`ConversionError::BelowAbsoluteZero`] for readings at or below
/// -459.67 and [`ConversionError::NotFinite`] for NaN or infinite input.
///
/// # Example
///
/// ```rust
/// use upskill_thermo::convert;
///
/// assert_eq!(convert(212.0).unwrap(), 100.0);
/// assert_eq!(convert(105.6).unwrap(), 40.89);
/// assert!(convert(-459.68).is_err());
/// ```
#[inline]
pub fn convert(fahrenheit: f64) -> ConversionResult<f64> {
    TemperatureConverter::default().convert(fahrenheit)
}
