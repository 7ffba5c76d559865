//! Keypad calculator core.
//!
//! This module provides:
//! - Operator glyph normalization
//! - Two-operand evaluation with explicit failure variants
//! - Result formatting under a display character budget
//! - The keypad state machine driving the display
//! - Copying the display to the clipboard

mod clipboard;
mod evaluation;
mod format;
mod operator;
mod state;

pub use clipboard::copy_to_clipboard;
pub use evaluation::{CalcResult, evaluate, evaluate_operands, parse_operand};
pub use format::{
    DEFAULT_MAX_CHARS, DIVISION_BY_ZERO_MESSAGE, ERROR_MESSAGE, MIN_MAX_CHARS, format_number,
    format_result, format_result_within,
};
pub use operator::{Operator, OperatorKey, UNICODE_MINUS, normalize_operator};
pub use state::{Calculator, InputEvent, Snapshot};
