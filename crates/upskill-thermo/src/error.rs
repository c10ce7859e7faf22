//! Error types for temperature conversion
//!
//! Provides error handling for:
//! - Conversion requests outside the physical (or configured) range
//! - Non-finite input
//! - Invalid converter configuration

/// Errors returned when a Fahrenheit reading cannot be converted
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Input is at or below absolute zero
    #[error("Input cannot be below {limit}")]
    BelowAbsoluteZero {
        /// Rejected reading
        value: f64,
        /// Absolute zero in Fahrenheit
        limit: f64,
    },

    /// Input exceeds the configured upper limit
    #[error("Input cannot be greater than {limit}")]
    AboveMaximum {
        /// Rejected reading
        value: f64,
        /// Configured upper limit
        limit: f64,
    },

    /// Input is NaN or infinite
    #[error("Input must be a finite number, got {0}")]
    NotFinite(f64),
}

impl ConversionError {
    /// True when the reading was a number outside the accepted range
    #[inline]
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::BelowAbsoluteZero { .. } | Self::AboveMaximum { .. })
    }

    /// The reading that was rejected
    #[inline]
    #[must_use]
    pub fn value(&self) -> f64 {
        match *self {
            Self::BelowAbsoluteZero { value, .. } | Self::AboveMaximum { value, .. } => value,
            Self::NotFinite(value) => value,
        }
    }
}

/// Errors in converter configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Too many decimal places requested
    #[error("decimal places must be at most {max}, got {actual}")]
    TooManyDecimals {
        /// Largest supported value
        max: u32,
        /// Requested value
        actual: u32,
    },

    /// Upper limit is NaN, infinite, or not above absolute zero
    #[error("upper limit {0} must be a finite value above absolute zero")]
    InvalidMaximum(f64),
}

/// Result type alias for conversions
pub type ConversionResult<T> = Result<T, ConversionError>;
