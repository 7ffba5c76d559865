//! Binary arithmetic on display operands.
//!
//! Evaluation never fails with an `Err`: the two failure kinds a user can
//! trigger are ordinary [`CalcResult`] variants.

use super::operator::Operator;

/// Outcome of evaluating `a OP b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CalcResult {
    /// The operation produced a number (possibly non-finite).
    Value(f64),
    /// Division with an exactly-zero divisor.
    DivisionByZero,
    /// An operand did not parse as a number, or the operator is unknown.
    InvalidInput,
}

impl CalcResult {
    /// Get the numeric value, if any.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(*value),
            Self::DivisionByZero | Self::InvalidInput => None,
        }
    }
}

/// Parse display text as a floating-point operand.
///
/// Only decimal numerals (optionally signed, optionally with an exponent)
/// are accepted. Words such as `inf` or `NaN`, and error messages shown on
/// the display, are rejected.
pub fn parse_operand(text: &str) -> Option<f64> {
    let text = text.trim();
    let numeric = !text.is_empty()
        && text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'));
    if !numeric {
        return None;
    }
    text.parse::<f64>().ok()
}

/// Evaluate `a OP b` where both operands are display strings and the
/// operator is any accepted glyph (`+ - − * × / ÷`).
pub fn evaluate(a: &str, operator: &str, b: &str) -> CalcResult {
    let (Some(a), Some(b)) = (parse_operand(a), parse_operand(b)) else {
        return CalcResult::InvalidInput;
    };
    match Operator::from_symbol(operator) {
        Some(operator) => compute(a, operator, b),
        None => CalcResult::InvalidInput,
    }
}

/// Evaluate a captured first operand against the text currently on the
/// display.
pub fn evaluate_operands(first: f64, operator: Operator, display: &str) -> CalcResult {
    match parse_operand(display) {
        Some(second) => compute(first, operator, second),
        None => CalcResult::InvalidInput,
    }
}

fn compute(a: f64, operator: Operator, b: f64) -> CalcResult {
    // A NaN operand stands for text that never parsed.
    if a.is_nan() || b.is_nan() {
        return CalcResult::InvalidInput;
    }
    if operator == Operator::Divide && b == 0.0 {
        return CalcResult::DivisionByZero;
    }
    CalcResult::Value(operator.apply(a, b))
}
