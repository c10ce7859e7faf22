//! Temperature scale newtypes
//!
//! [`Fahrenheit`] and [`Celsius`] wrap an `f64` so that readings on
//! different scales cannot be mixed up at call sites. Both serialize as
//! bare numbers.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Absolute zero on the Fahrenheit scale
pub const ABS_ZERO_FAHRENHEIT: f64 = -459.67;

/// Absolute zero on the Celsius scale
pub const ABS_ZERO_CELSIUS: f64 = -273.15;

/// A reading in degrees Fahrenheit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fahrenheit(pub f64);

/// A reading in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(pub f64);

impl Fahrenheit {
    /// Absolute zero
    pub const ABSOLUTE_ZERO: Self = Self(ABS_ZERO_FAHRENHEIT);

    /// Freezing point of water
    pub const FREEZING: Self = Self(32.0);

    /// Boiling point of water at sea level
    pub const BOILING: Self = Self(212.0);

    /// Create a reading
    #[inline]
    #[must_use]
    pub const fn new(degrees: f64) -> Self {
        Self(degrees)
    }

    /// Raw degrees
    #[inline]
    #[must_use]
    pub const fn degrees(self) -> f64 {
        self.0
    }
}

impl Celsius {
    /// Absolute zero
    pub const ABSOLUTE_ZERO: Self = Self(ABS_ZERO_CELSIUS);

    /// Create a reading
    #[inline]
    #[must_use]
    pub const fn new(degrees: f64) -> Self {
        Self(degrees)
    }

    /// Raw degrees
    #[inline]
    #[must_use]
    pub const fn degrees(self) -> f64 {
        self.0
    }
}

impl Display for Fahrenheit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}°F", self.0)
    }
}

impl Display for Celsius {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

impl From<f64> for Fahrenheit {
    fn from(degrees: f64) -> Self {
        Self(degrees)
    }
}

impl From<Celsius> for f64 {
    fn from(c: Celsius) -> Self {
        c.0
    }
}

impl FromStr for Fahrenheit {
    type Err = ParseReadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_degrees(s, 'F').map(Self)
    }
}

impl FromStr for Celsius {
    type Err = ParseReadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_degrees(s, 'C').map(Self)
    }
}

/// Parse a number with an optional `F`, `°F` (or `C`, `°C`) suffix
fn parse_degrees(s: &str, unit: char) -> Result<f64, ParseReadingError> {
    let trimmed = s.trim();
    let number = trimmed
        .strip_suffix(unit)
        .or_else(|| trimmed.strip_suffix(unit.to_ascii_lowercase()))
        .map_or(trimmed, |rest| rest.strip_suffix('°').unwrap_or(rest))
        .trim_end();

    number
        .parse::<f64>()
        .map_err(|source| ParseReadingError {
            input: s.to_string(),
            source,
        })
}

/// Error parsing a temperature reading from text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid temperature reading '{input}': {source}")]
pub struct ParseReadingError {
    /// Text that failed to parse
    pub input: String,
    /// Underlying float parse error
    #[source]
    pub source: std::num::ParseFloatError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_and_suffixed() {
        assert_eq!("105.6".parse::<Fahrenheit>().unwrap(), Fahrenheit(105.6));
        assert_eq!("212F".parse::<Fahrenheit>().unwrap(), Fahrenheit(212.0));
        assert_eq!("-40 °F".parse::<Fahrenheit>().unwrap(), Fahrenheit(-40.0));
        assert_eq!("32f".parse::<Fahrenheit>().unwrap(), Fahrenheit(32.0));
        assert_eq!("100°C".parse::<Celsius>().unwrap(), Celsius(100.0));
    }

    #[test]
    fn parse_rejects_wrong_unit() {
        assert!("100C".parse::<Fahrenheit>().is_err());
        assert!("warm".parse::<Fahrenheit>().is_err());
    }

    #[test]
    fn parse_error_mentions_input() {
        let err = "warm".parse::<Fahrenheit>().unwrap_err();
        assert!(err.to_string().contains("'warm'"));
    }

    #[test]
    fn display_units() {
        assert_eq!(Fahrenheit(105.6).to_string(), "105.6°F");
        assert_eq!(Celsius(40.89).to_string(), "40.89°C");
        assert_eq!(Celsius(0.0).to_string(), "0°C");
    }

    #[test]
    fn serde_transparent() {
        let json = serde_json::to_string(&Celsius(40.89)).unwrap();
        assert_eq!(json, "40.89");
        let decoded: Fahrenheit = serde_json::from_str("212.0").unwrap();
        assert_eq!(decoded, Fahrenheit::BOILING);
    }

    #[test]
    fn ordering_follows_degrees() {
        assert!(Fahrenheit::ABSOLUTE_ZERO < Fahrenheit::FREEZING);
        assert!(Fahrenheit::FREEZING < Fahrenheit::BOILING);
    }
}
