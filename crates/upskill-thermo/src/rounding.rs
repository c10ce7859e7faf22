//! Decimal rounding of conversion results
//!
//! Results are rounded on the exact binary value of the `f64`, not on a
//! scaled copy of it. Scaling by `10^n` before rounding introduces its own
//! representation error, which moves values such as `2.67499999999999...`
//! across the half-way point.

/// Largest number of decimal places a converter may be configured with
pub const MAX_DECIMALS: u32 = 10;

/// Round `value` to `decimals` decimal places, ties to even
///
/// Uses Rust's exact fixed-precision formatting, which rounds the exact
/// binary value of the float. Non-finite values are returned unchanged.
#[must_use]
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let text = format!("{value:.prec$}", prec = decimals as usize);
    // `+ 0.0` turns a `-0.0` result into `0.0`
    text.parse::<f64>().map_or(value, |rounded| rounded + 0.0)
}
