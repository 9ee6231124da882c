//! Sensor voltage transforms
//!
//! Hubs report raw sensor voltages. Two sensor families are common:
//! - VH400 soil moisture probes: volumetric water content in percent, a
//!   piecewise-linear curve with a 0.01V noise floor
//! - THERM200 temperature probes: degrees Fahrenheit, an affine map
//!
//! Readings arrive from JSON, so the public functions take a
//! [`serde_json::Value`] and return `None` for anything that is not a number,
//! a boolean, or a numeric string.

use serde_json::Value;
use tracing::trace;

/// Voltages at or below this are noise and read as 0%
pub const NOISE_FLOOR: f64 = 0.01;

/// VH400 calibration curve as (volts, percent) pairs
///
/// ```text
/// (0,0) (1.1,10) (1.3,15) (1.82,40) (2.2,50) (3.0,100)
/// ```
pub const VH400_BREAKPOINTS: [(f64, f64); 6] = [
    (0.0, 0.0),
    (1.1, 10.0),
    (1.3, 15.0),
    (1.82, 40.0),
    (2.2, 50.0),
    (3.0, 100.0),
];

/// THERM200 slope in °F per volt
pub const THERM200_SLOPE: f64 = 41.67;

/// THERM200 reading at 0V in °F
pub const THERM200_OFFSET: f64 = -40.0;

/// Interpret a JSON reading as volts
///
/// Booleans count as 0/1 and strings are parsed after trimming whitespace.
pub fn volts(value: &Value) -> Option<f64> {
    let volts = match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    if volts.is_none() {
        trace!("Not a voltage reading: {}", value);
    }

    volts
}

/// Convert a VH400 voltage to volumetric water content (%)
///
/// # Examples
///
/// ```
/// use vegehub_core::transform::percent_from_volts;
///
/// assert_eq!(percent_from_volts(0.005), 0.0);
/// assert!((percent_from_volts(1.2) - 12.5).abs() < 1e-9);
/// assert_eq!(percent_from_volts(3.5), 100.0);
/// ```
pub fn percent_from_volts(volts: f64) -> f64 {
    if volts <= NOISE_FLOOR {
        return 0.0;
    }

    for pair in VH400_BREAKPOINTS.windows(2) {
        let (x1, y1) = pair[0];
        let (x2, y2) = pair[1];

        if volts <= x2 {
            return (y2 - y1) / (x2 - x1) * (volts - x1) + y1;
        }
    }

    100.0
}

/// Convert a THERM200 voltage to degrees Fahrenheit
///
/// No clamping: out-of-range voltages extrapolate linearly.
pub fn fahrenheit_from_volts(volts: f64) -> f64 {
    THERM200_SLOPE * volts + THERM200_OFFSET
}

/// VH400 transform over a JSON reading
///
/// Returns `None` for null, arrays, objects and unparseable strings.
pub fn voltage_to_percent(value: &Value) -> Option<f64> {
    volts(value).map(percent_from_volts)
}

/// THERM200 transform over a JSON reading
///
/// Returns `None` for null, arrays, objects and unparseable strings.
pub fn voltage_to_temperature_f(value: &Value) -> Option<f64> {
    volts(value).map(fahrenheit_from_volts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("expected a value");
        let tolerance = 1e-4 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_percent_table() {
        let cases = [
            (json!(0.005), 0.0),
            (json!(0.011), 0.1),
            (json!(1), 9.090909),
            (json!(1.1), 10.0),
            (json!(1.2), 12.5),
            (json!(1.3), 15.0),
            (json!(1.5), 24.615385),
            (json!(1.82), 40.0),
            (json!(2), 44.736842),
            (json!(2.2), 50.0),
            (json!(2.6), 75.0),
            (json!(3), 100.0),
            (json!(3.5), 100.0),
            (json!("1.5"), 24.615385),
        ];

        for (input, expected) in cases {
            assert_close(voltage_to_percent(&input), expected);
        }
    }

    #[test]
    fn test_percent_invalid_input() {
        assert_eq!(voltage_to_percent(&json!("invalid")), None);
        assert_eq!(voltage_to_percent(&Value::Null), None);
        assert_eq!(voltage_to_percent(&json!([])), None);
        assert_eq!(voltage_to_percent(&json!({"v": 1.0})), None);
    }

    #[test]
    fn test_percent_large_and_negative() {
        assert_eq!(voltage_to_percent(&json!(10)), Some(100.0));
        assert_eq!(voltage_to_percent(&json!(-1)), Some(0.0));
    }

    #[test]
    fn test_temperature_table() {
        let cases = [
            (json!(0), -40.0),
            (json!(1), 1.67),
            (json!(2), 43.34),
            (json!(0.5), -19.165),
            (json!("0.5"), -19.165),
            (json!("2"), 43.34),
            (json!(true), 1.67),
            (json!(false), -40.0),
            (json!(-1), -81.67),
            (json!(1000), 41630.0),
            (json!(-1000), -41710.0),
            (json!(1e-10), -40.0),
        ];

        for (input, expected) in cases {
            assert_close(voltage_to_temperature_f(&input), expected);
        }
    }

    #[test]
    fn test_temperature_zero_is_exact() {
        assert_eq!(voltage_to_temperature_f(&json!(0)), Some(-40.0));
    }

    #[test]
    fn test_temperature_invalid_input() {
        assert_eq!(voltage_to_temperature_f(&json!("invalid")), None);
        assert_eq!(voltage_to_temperature_f(&Value::Null), None);
        assert_eq!(voltage_to_temperature_f(&json!([])), None);
        assert_eq!(voltage_to_temperature_f(&json!([1, 2, 3])), None);
        assert_eq!(voltage_to_temperature_f(&json!({"key": "value"})), None);
    }

    #[test]
    fn test_percent_continuous_at_breakpoints() {
        for &(x, y) in &VH400_BREAKPOINTS[1..] {
            assert!((percent_from_volts(x) - y).abs() < 1e-9);
            assert!((percent_from_volts(x + 1e-9) - y).abs() < 1e-4);
        }
    }

    proptest! {
        #[test]
        fn prop_noise_floor_is_zero(v in -1.0e6f64..=NOISE_FLOOR) {
            prop_assert_eq!(percent_from_volts(v), 0.0);
        }

        #[test]
        fn prop_saturates_above_range(v in 3.0f64..1.0e6) {
            prop_assert_eq!(percent_from_volts(v), 100.0);
        }

        #[test]
        fn prop_monotonic_above_floor(a in 0.02f64..3.5, b in 0.02f64..3.5) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(percent_from_volts(lo) <= percent_from_volts(hi) + 1e-9);
        }

        #[test]
        fn prop_linear_within_segment(segment in 1usize..5, t in 0.0f64..=1.0) {
            let (x1, y1) = VH400_BREAKPOINTS[segment];
            let (x2, y2) = VH400_BREAKPOINTS[segment + 1];
            let v = x1 + t * (x2 - x1);
            let expected = y1 + t * (y2 - y1);
            prop_assert!((percent_from_volts(v) - expected).abs() < 1e-6);
        }

        #[test]
        fn prop_temperature_affine(v in -1.0e6f64..1.0e6) {
            let expected = 41.67 * v - 40.0;
            prop_assert_eq!(fahrenheit_from_volts(v), expected);
        }

        #[test]
        fn prop_numeric_strings_match_numbers(v in -10.0f64..10.0) {
            let as_string = Value::String(v.to_string());
            prop_assert_eq!(voltage_to_percent(&as_string), Some(percent_from_volts(v)));
        }
    }
}
