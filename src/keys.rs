//! Key mapping for front ends.
//!
//! Translates physical key names (as a browser or terminal reports them)
//! into [`InputEvent`]s, and parses compact key scripts like `12+3=<bs>`.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::calculator::{InputEvent, Operator, OperatorKey, UNICODE_MINUS};

lazy_static! {
    /// One script token: a named key in angle brackets, a whitespace run,
    /// or any single character.
    static ref SCRIPT_TOKEN: Regex = Regex::new(
        r"<(?P<name>[A-Za-z]+)>|(?P<space>\s+)|(?P<key>.)"
    ).unwrap();
}

/// A key script contained something that is not a calculator key.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum KeyError {
    #[error("unknown key {key:?} at offset {offset}")]
    UnknownKey { key: String, offset: usize },

    #[error("unknown named key <{name}> at offset {offset}")]
    UnknownName { name: String, offset: usize },
}

impl InputEvent {
    /// Map a key name to an event. Returns `None` for keys the calculator
    /// ignores.
    ///
    /// Keyboard operators are shown with their keypad glyphs (`*` as `×`,
    /// `/` as `÷`).
    pub fn from_key(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Some(event) = Self::from_char(c)
        {
            return Some(event);
        }

        match key {
            "Enter" => Some(Self::Equals),
            "Backspace" => Some(Self::Backspace),
            "Escape" => Some(Self::Clear),
            _ => None,
        }
    }

    fn from_char(c: char) -> Option<Self> {
        let event = match c {
            '0'..='9' => return Self::digit(c),
            '.' | ',' => Self::Decimal,
            '+' => Self::Operator(Operator::Add.into()),
            '-' => Self::Operator(OperatorKey {
                operator: Operator::Subtract,
                glyph: '-',
            }),
            UNICODE_MINUS => Self::Operator(OperatorKey {
                operator: Operator::Subtract,
                glyph: UNICODE_MINUS,
            }),
            '*' | '×' | 'x' => Self::Operator(Operator::Multiply.into()),
            '/' | '÷' => Self::Operator(Operator::Divide.into()),
            '=' => Self::Equals,
            '%' => Self::Percent,
            'C' | 'c' => Self::Clear,
            _ => return None,
        };
        Some(event)
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "enter" => Some(Self::Equals),
            "bs" | "backspace" => Some(Self::Backspace),
            "esc" | "escape" | "clear" => Some(Self::Clear),
            "pct" | "percent" => Some(Self::Percent),
            _ => None,
        }
    }
}

/// Parse a key script into events.
///
/// Single characters map through [`InputEvent::from_key`]; named keys are
/// written in angle brackets (`<enter>`, `<bs>`, `<esc>`, `<pct>`).
/// Whitespace is skipped.
pub fn parse_key_script(script: &str) -> Result<Vec<InputEvent>, KeyError> {
    let mut events = Vec::new();

    for caps in SCRIPT_TOKEN.captures_iter(script) {
        if let Some(name) = caps.name("name") {
            let event = InputEvent::from_name(name.as_str()).ok_or_else(|| {
                KeyError::UnknownName {
                    name: name.as_str().to_string(),
                    offset: name.start() - 1,
                }
            })?;
            events.push(event);
        } else if let Some(key) = caps.name("key") {
            let event = InputEvent::from_key(key.as_str()).ok_or_else(|| KeyError::UnknownKey {
                key: key.as_str().to_string(),
                offset: key.start(),
            })?;
            events.push(event);
        }
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Calculator;

    #[test]
    fn test_digit_and_control_keys() {
        assert_eq!(InputEvent::from_key("7"), Some(InputEvent::Digit(7)));
        assert_eq!(InputEvent::from_key("."), Some(InputEvent::Decimal));
        assert_eq!(InputEvent::from_key(","), Some(InputEvent::Decimal));
        assert_eq!(InputEvent::from_key("Enter"), Some(InputEvent::Equals));
        assert_eq!(InputEvent::from_key("="), Some(InputEvent::Equals));
        assert_eq!(InputEvent::from_key("Backspace"), Some(InputEvent::Backspace));
        assert_eq!(InputEvent::from_key("Escape"), Some(InputEvent::Clear));
        assert_eq!(InputEvent::from_key("%"), Some(InputEvent::Percent));
    }

    #[test]
    fn test_keyboard_operators_use_keypad_glyphs() {
        let glyph = |key| match InputEvent::from_key(key) {
            Some(InputEvent::Operator(k)) => Some(k.glyph),
            _ => None,
        };
        assert_eq!(glyph("*"), Some('×'));
        assert_eq!(glyph("/"), Some('÷'));
        assert_eq!(glyph("+"), Some('+'));
        assert_eq!(glyph("-"), Some('-'));
        assert_eq!(glyph("−"), Some('−'));
    }

    #[test]
    fn test_ignored_keys() {
        assert_eq!(InputEvent::from_key("a"), None);
        assert_eq!(InputEvent::from_key("Tab"), None);
        assert_eq!(InputEvent::from_key(""), None);
        assert_eq!(InputEvent::from_key("12"), None);
    }

    #[test]
    fn test_parse_script() {
        let events = parse_key_script("12 + 3 <Enter>").unwrap();
        assert_eq!(events.len(), 5);
        assert_eq!(events[0], InputEvent::Digit(1));
        assert_eq!(events[4], InputEvent::Equals);
    }

    #[test]
    fn test_script_drives_calculator() {
        let mut calc = Calculator::new();
        calc.dispatch_all(parse_key_script("2+3*4=").unwrap());
        assert_eq!(calc.current_display(), "20");

        calc.dispatch_all(parse_key_script("<esc>7/0=").unwrap());
        assert_eq!(calc.current_display(), crate::calculator::DIVISION_BY_ZERO_MESSAGE);

        calc.dispatch_all(parse_key_script("9.5<bs><bs>1").unwrap());
        assert_eq!(calc.current_display(), "91");
    }

    #[test]
    fn test_unknown_key_reports_offset() {
        assert_eq!(
            parse_key_script("1+q"),
            Err(KeyError::UnknownKey {
                key: "q".to_string(),
                offset: 2,
            })
        );
        assert_eq!(
            parse_key_script("1<nope>"),
            Err(KeyError::UnknownName {
                name: "nope".to_string(),
                offset: 1,
            })
        );
    }

    #[test]
    fn test_unterminated_bracket_is_unknown_key() {
        assert!(matches!(
            parse_key_script("1<enter"),
            Err(KeyError::UnknownKey { offset: 1, .. })
        ));
    }
}
