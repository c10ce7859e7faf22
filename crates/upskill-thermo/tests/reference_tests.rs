use proptest::prelude::*;
use upskill_test_utils::{assert_close, REFERENCE_CASES, REJECTED_READINGS};
use upskill_thermo::{convert, ConversionError, TemperatureConverter, ABS_ZERO_FAHRENHEIT};

#[test]
fn test_reference_table() {
    for &(fahrenheit, expected) in REFERENCE_CASES {
        let actual = convert(fahrenheit).unwrap();
        assert_eq!(actual, expected, "convert({fahrenheit})");
    }
}

#[test]
fn test_reference_table_within_classroom_limit() {
    let converter = TemperatureConverter::classroom();
    for &(fahrenheit, expected) in REFERENCE_CASES {
        assert_eq!(converter.convert(fahrenheit).unwrap(), expected);
    }
}

#[test]
fn test_rejected_readings() {
    for &fahrenheit in REJECTED_READINGS {
        let err = convert(fahrenheit).unwrap_err();
        assert!(
            matches!(err, ConversionError::BelowAbsoluteZero { .. }),
            "convert({fahrenheit}) returned {err:?}"
        );
    }
}

#[test]
fn test_largest_readings_are_finite() {
    for fahrenheit in [1.0e308, f64::MAX] {
        assert!(convert(fahrenheit).unwrap().is_finite());
    }
}

#[test]
fn test_fixed_points() {
    assert_eq!(convert(32.0).unwrap(), 0.0);
    assert_eq!(convert(212.0).unwrap(), 100.0);
    assert_eq!(convert(-40.0).unwrap(), -40.0);
}

proptest! {
    #[test]
    fn prop_valid_readings_convert_to_finite(f in -459.669_f64..1.0e9) {
        let c = convert(f).unwrap();
        prop_assert!(c.is_finite());
        // Rounded result stays within half a hundredth of the exact value
        let exact = 5.0 * (f - 32.0) / 9.0;
        prop_assert!((c - exact).abs() <= 0.005 + 1e-9 * exact.abs().max(1.0));
    }

    #[test]
    fn prop_huge_readings_convert_to_finite(f in 1.0e300_f64..=f64::MAX) {
        let c = convert(f).unwrap();
        prop_assert!(c.is_finite(), "convert({}) returned {}", f, c);
        let expected = (f - 32.0) / 9.0 * 5.0;
        prop_assert!((c - expected).abs() <= expected * 1e-12);
    }

    #[test]
    fn prop_readings_at_or_below_absolute_zero_fail(f in -1.0e9_f64..=ABS_ZERO_FAHRENHEIT) {
        prop_assert!(convert(f).is_err());
    }

    #[test]
    fn prop_conversion_is_linear(f1 in -400.0_f64..10_000.0, f2 in -400.0_f64..10_000.0) {
        let delta = convert(f1).unwrap() - convert(f2).unwrap();
        assert_close(delta, (f1 - f2) * 5.0 / 9.0, 0.01 + 1e-9);
    }

    #[test]
    fn prop_conversion_is_deterministic(f in -459.0_f64..10_000.0) {
        prop_assert_eq!(convert(f).unwrap(), convert(f).unwrap());
    }
}
