//! Upskill Thermo
//!
//! Fahrenheit to Celsius conversion with absolute-zero validation and
//! controlled rounding.
//!
//! # Overview
//!
//! - **convert**: pure conversion of an `f64` reading, rounded to 2 decimals
//! - **TemperatureConverter**: configured converter (precision, optional upper limit)
//! - **Fahrenheit / Celsius**: typed readings that cannot be mixed up
//!
//! # Example
//!
//! ```rust
//! use upskill_thermo::{convert, ConversionError, ConverterConfig, TemperatureConverter};
//!
//! // Default converter
//! assert_eq!(convert(32.0).unwrap(), 0.0);
//! assert_eq!(convert(105.6).unwrap(), 40.89);
//!
//! // Physically impossible readings are rejected
//! assert!(matches!(
//!     convert(-459.68),
//!     Err(ConversionError::BelowAbsoluteZero { .. })
//! ));
//!
//! // Configured converter with an upper limit
//! let converter = TemperatureConverter::new(ConverterConfig::classroom()).unwrap();
//! assert!(converter.convert(10_000.1).is_err());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod converter;
pub mod error;
pub mod rounding;
pub mod units;

// Re-exports
pub use config::{ConverterConfig, CLASSROOM_MAX_FAHRENHEIT, DEFAULT_DECIMALS};
pub use converter::{convert, TemperatureConverter};
pub use error::{ConfigError, ConversionError, ConversionResult};
pub use rounding::{round_to_decimals, MAX_DECIMALS};
pub use units::{Celsius, Fahrenheit, ParseReadingError, ABS_ZERO_CELSIUS, ABS_ZERO_FAHRENHEIT};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for conversions
    pub use crate::{
        convert, Celsius, ConversionError, ConverterConfig, Fahrenheit, TemperatureConverter,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
