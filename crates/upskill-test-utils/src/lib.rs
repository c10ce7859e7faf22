//! Testing utilities for the upskill workspace
//!
//! Shared reference tables, float assertions and config-file fixtures.

#![allow(missing_docs)]

use std::io::Write;
use tempfile::NamedTempFile;

/// Worked Fahrenheit → Celsius cases, rounded to 2 decimals
///
/// Includes the freezing and boiling points, values either side of them,
/// the repeating-fraction case `105.6`, and the floating-point probes
/// `36.815`, `221.1` and `50.009`.
pub const REFERENCE_CASES: &[(f64, f64)] = &[
    (32.0, 0.0),
    (212.0, 100.0),
    (104.0, 40.0),
    (-4.0, -20.0),
    (105.8, 41.0),
    (105.6, 40.89),
    (36.815, 2.67),
    (221.1, 105.06),
    (50.009, 10.01),
    (10_000.0, 5537.78),
    (31.9, -0.06),
    (32.1, 0.06),
    (211.9, 99.94),
    (212.1, 100.06),
    (-459.66, -273.14),
    (9999.9, 5537.72),
    (0.0, -17.78),
    (1.0, -17.22),
    (-40.0, -40.0),
];

/// Readings every converter must reject
pub const REJECTED_READINGS: &[f64] = &[-459.67, -459.68, -500.0, -1.0e9];

/// Assert two floats differ by no more than `tolerance`
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

/// Write `contents` to a temporary `.toml` file that lives as long as the handle
pub fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
