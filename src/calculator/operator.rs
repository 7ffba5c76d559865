//! Operator glyphs and their canonical arithmetic meaning.
//!
//! Keypad buttons show `×`, `÷` and the unicode minus `−`, while keyboards
//! produce `*`, `/` and `-`. Everything is normalized to one [`Operator`]
//! at the boundary; the glyph the user actually pressed travels alongside
//! it in an [`OperatorKey`] so the display can echo it back.

use serde::Serialize;

/// Unicode minus sign used on keypads.
pub const UNICODE_MINUS: char = '\u{2212}';

/// Map a visual operator glyph to its ASCII form.
///
/// Unrecognized input (including operators that are already ASCII) is
/// returned unchanged.
pub fn normalize_operator(symbol: &str) -> &str {
    match symbol {
        "×" => "*",
        "÷" => "/",
        "\u{2212}" => "-",
        other => other,
    }
}

/// One of the four basic arithmetic operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Parse an operator from either its ASCII or its visual glyph.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match normalize_operator(symbol.trim()) {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Canonical ASCII symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Glyph shown on the keypad for this operation.
    pub fn glyph(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Apply the operation with plain IEEE-754 semantics.
    ///
    /// Division by zero is not special-cased here; see
    /// [`evaluate_operands`](super::evaluate_operands).
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

/// An operator as pressed: the canonical operation plus the glyph to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperatorKey {
    pub operator: Operator,
    pub glyph: char,
}

impl OperatorKey {
    /// Build a key from the glyph the user pressed, keeping that glyph.
    pub fn parse(symbol: &str) -> Option<Self> {
        let symbol = symbol.trim();
        let operator = Operator::from_symbol(symbol)?;
        let mut chars = symbol.chars();
        let glyph = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => operator.glyph(),
        };
        Some(Self { operator, glyph })
    }
}

impl From<Operator> for OperatorKey {
    fn from(operator: Operator) -> Self {
        Self {
            operator,
            glyph: operator.glyph(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_visual_glyphs() {
        assert_eq!(normalize_operator("×"), "*");
        assert_eq!(normalize_operator("÷"), "/");
        assert_eq!(normalize_operator("−"), "-");
    }

    #[test]
    fn test_normalize_is_identity_otherwise() {
        assert_eq!(normalize_operator("+"), "+");
        assert_eq!(normalize_operator("-"), "-");
        assert_eq!(normalize_operator("*"), "*");
        assert_eq!(normalize_operator("%"), "%");
        assert_eq!(normalize_operator(""), "");
    }

    #[test]
    fn test_from_symbol() {
        assert_eq!(Operator::from_symbol("+"), Some(Operator::Add));
        assert_eq!(Operator::from_symbol("−"), Some(Operator::Subtract));
        assert_eq!(Operator::from_symbol("-"), Some(Operator::Subtract));
        assert_eq!(Operator::from_symbol("×"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("*"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("÷"), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol("/"), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol("^"), None);
        assert_eq!(Operator::from_symbol(""), None);
    }

    #[test]
    fn test_key_keeps_pressed_glyph() {
        let key = OperatorKey::parse("−").unwrap();
        assert_eq!(key.operator, Operator::Subtract);
        assert_eq!(key.glyph, '−');

        let key = OperatorKey::parse("*").unwrap();
        assert_eq!(key.operator, Operator::Multiply);
        assert_eq!(key.glyph, '*');

        assert!(OperatorKey::parse("plus").is_none());
    }
}
