//! Rendering of evaluation results for a fixed-width display.

use super::evaluation::CalcResult;

/// Character budget of the standard display.
pub const DEFAULT_MAX_CHARS: usize = 12;

/// Narrowest budget that can still hold any finite number in scientific form.
pub const MIN_MAX_CHARS: usize = 8;

/// Shown for invalid input and non-finite results.
pub const ERROR_MESSAGE: &str = "Error";

/// Shown when dividing by zero.
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Error: division by zero";

/// Decimal places kept before rendering, to strip floating-point noise.
const NOISE_DECIMALS: usize = 10;

/// Significant fractional digits in scientific notation.
const SCIENTIFIC_DIGITS: usize = 6;

/// Format a result for the standard 12-character display.
pub fn format_result(result: CalcResult) -> String {
    format_result_within(result, DEFAULT_MAX_CHARS)
}

/// Format a result so that a finite value uses at most `max_chars`
/// characters. Error messages are returned verbatim.
pub fn format_result_within(result: CalcResult, max_chars: usize) -> String {
    let value = match result {
        CalcResult::InvalidInput => return ERROR_MESSAGE.to_string(),
        CalcResult::DivisionByZero => return DIVISION_BY_ZERO_MESSAGE.to_string(),
        CalcResult::Value(value) => value,
    };
    if !value.is_finite() {
        return ERROR_MESSAGE.to_string();
    }
    let max_chars = max_chars.max(MIN_MAX_CHARS);

    let rendered = format_number(round_to(value, NOISE_DECIMALS));
    if rendered.len() <= max_chars {
        return rendered;
    }

    let int_len = format_number(value.abs().trunc()).len();
    if int_len >= max_chars {
        return scientific(value, max_chars);
    }

    let sign_len = usize::from(value < 0.0);
    let decimals = max_chars.saturating_sub(int_len + sign_len + 1);
    let rendered = format_number(round_to(value, decimals));
    if rendered.len() > max_chars {
        return scientific(value, max_chars);
    }
    rendered
}

/// Shortest decimal text that reads back as the same `f64`.
///
/// Negative zero renders as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value)
        .parse()
        .unwrap_or(value)
}

/// Scientific notation with an explicitly signed exponent (`1.234568e+15`).
///
/// Starts at six fractional digits and drops digits until the text fits.
fn scientific(value: f64, max_chars: usize) -> String {
    let mut rendered = String::new();
    for digits in (0..=SCIENTIFIC_DIGITS).rev() {
        rendered = signed_exponent(&format!("{:.*e}", digits, value));
        if rendered.len() <= max_chars {
            break;
        }
    }
    rendered
}

fn signed_exponent(rendered: &str) -> String {
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => rendered.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: f64) -> String {
        format_result(CalcResult::Value(value))
    }

    #[test]
    fn test_error_messages_are_distinct() {
        assert_eq!(format_result(CalcResult::InvalidInput), "Error");
        assert_eq!(
            format_result(CalcResult::DivisionByZero),
            DIVISION_BY_ZERO_MESSAGE
        );
        assert_ne!(ERROR_MESSAGE, DIVISION_BY_ZERO_MESSAGE);
    }

    #[test]
    fn test_non_finite_is_error() {
        assert_eq!(fmt(f64::INFINITY), "Error");
        assert_eq!(fmt(f64::NEG_INFINITY), "Error");
        assert_eq!(fmt(f64::NAN), "Error");
    }

    #[test]
    fn test_short_values_unchanged() {
        assert_eq!(fmt(5.0), "5");
        assert_eq!(fmt(-5.0), "-5");
        assert_eq!(fmt(0.25), "0.25");
        assert_eq!(fmt(123456789012.0), "123456789012");
    }

    #[test]
    fn test_floating_point_noise_stripped() {
        assert_eq!(fmt(0.1 + 0.2), "0.3");
        assert_eq!(fmt(1.1 * 3.0), "3.3");
        assert_eq!(fmt(-0.00000000001), "0");
    }

    #[test]
    fn test_decimals_trimmed_to_fit() {
        assert_eq!(fmt(1.0 / 3.0), "0.3333333333");
        assert_eq!(fmt(2.0 / 3.0), "0.6666666667");
        assert_eq!(fmt(-1.0 / 3.0), "-0.333333333");
        assert_eq!(fmt(12345.678901234), "12345.678901");
        assert_eq!(fmt(-12345.678901234), "-12345.6789");
    }

    #[test]
    fn test_large_integers_use_scientific() {
        assert_eq!(fmt(1234567890123.0), "1.234568e+12");
        assert_eq!(fmt(1e21), "1.000000e+21");
        assert_eq!(fmt(-1234567890123.0), "-1.23457e+12");
        assert_eq!(fmt(1e100), "1.00000e+100");
    }

    #[test]
    fn test_rounding_overflow_falls_back_to_scientific() {
        assert_eq!(fmt(-99999999999.9), "-1.00000e+11");
    }

    #[test]
    fn test_length_bound_for_finite_values() {
        let mut samples = vec![
            0.0,
            f64::MIN_POSITIVE,
            f64::EPSILON,
            f64::MAX,
            f64::MIN,
            1.0 / 7.0,
            -22.0 / 7.0,
            99999999999.99,
            -99999999999.99,
        ];
        let mut magnitude = 1e-12;
        while magnitude < 1e300 {
            samples.push(magnitude * 1.23456789);
            samples.push(-magnitude * 9.87654321);
            magnitude *= 10.0;
        }
        for value in samples {
            let rendered = fmt(value);
            assert!(
                rendered.chars().count() <= DEFAULT_MAX_CHARS,
                "{value} rendered as {rendered}"
            );
        }
    }

    #[test]
    fn test_custom_width() {
        let result = CalcResult::Value(1.0 / 3.0);
        assert_eq!(format_result_within(result, 8), "0.333333");
        assert_eq!(format_result_within(result, 16), "0.3333333333");
        // Budgets below the minimum are widened.
        assert_eq!(format_result_within(result, 2), "0.333333");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.05), "0.05");
        assert_eq!(format_number(-12.5), "-12.5");
    }
}
