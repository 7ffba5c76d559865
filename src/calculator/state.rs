//! Keypad state machine.
//!
//! ## Flags
//!
//! ```text
//! awaiting_second_operand  set by an operator press; the next digit or
//!                          decimal point replaces the display
//! result_shown             set by `=`, a chained operator, or an error;
//!                          the next digit starts a new computation
//! ```
//!
//! Errors leave the calculator in the `result_shown` state with the error
//! message on the display, so any digit recovers from them.

use serde::Serialize;
use tracing::{debug, trace};

use super::evaluation::{evaluate_operands, parse_operand};
use super::format::{DEFAULT_MAX_CHARS, format_number, format_result_within};
use super::operator::OperatorKey;

/// A single keypad action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// A digit `0`-`9`.
    Digit(u8),
    Decimal,
    Operator(OperatorKey),
    Equals,
    Backspace,
    Percent,
    Clear,
}

impl InputEvent {
    /// Digit event from a character, if it is an ASCII digit.
    pub fn digit(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self::Digit(d as u8))
    }

    /// Operator event from a glyph such as `+`, `−` or `×`.
    pub fn operator(symbol: &str) -> Option<Self> {
        OperatorKey::parse(symbol).map(Self::Operator)
    }
}

/// Read-only copy of the calculator state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub display: String,
    pub first_operand: Option<f64>,
    /// Glyph of the pending operator as the user pressed it.
    pub pending_operator: Option<char>,
    pub awaiting_second_operand: bool,
    pub result_shown: bool,
}

/// Calculator instance: display text plus pending-operation state.
#[derive(Clone, Debug)]
pub struct Calculator {
    display: String,
    first_operand: Option<f64>,
    pending_operator: Option<OperatorKey>,
    awaiting_second_operand: bool,
    result_shown: bool,
    max_chars: usize,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator with the standard 12-character display.
    pub fn new() -> Self {
        Self::with_max_chars(DEFAULT_MAX_CHARS)
    }

    /// Create a calculator whose results are formatted to `max_chars`.
    pub fn with_max_chars(max_chars: usize) -> Self {
        Self {
            display: "0".to_string(),
            first_operand: None,
            pending_operator: None,
            awaiting_second_operand: false,
            result_shown: false,
            max_chars,
        }
    }

    /// Text to render verbatim.
    pub fn current_display(&self) -> &str {
        &self.display
    }

    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    pub fn pending_operator(&self) -> Option<OperatorKey> {
        self.pending_operator
    }

    pub fn is_awaiting_second_operand(&self) -> bool {
        self.awaiting_second_operand
    }

    pub fn is_result_shown(&self) -> bool {
        self.result_shown
    }

    /// The computed result on the display, if one is showing.
    ///
    /// Error messages and numbers still being typed are not results.
    pub fn result(&self) -> Option<&str> {
        (self.result_shown && self.first_operand.is_some()).then_some(self.display.as_str())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display.clone(),
            first_operand: self.first_operand,
            pending_operator: self.pending_operator.map(|key| key.glyph),
            awaiting_second_operand: self.awaiting_second_operand,
            result_shown: self.result_shown,
        }
    }

    /// Apply one event and return the new display.
    ///
    /// Out-of-sequence events are no-ops; this never fails.
    pub fn dispatch(&mut self, event: InputEvent) -> &str {
        match event {
            InputEvent::Digit(d) => self.input_digit(d),
            InputEvent::Decimal => self.input_decimal(),
            InputEvent::Operator(key) => self.input_operator(key),
            InputEvent::Equals => self.input_equals(),
            InputEvent::Backspace => self.backspace(),
            InputEvent::Percent => self.percent(),
            InputEvent::Clear => self.reset(),
        }
        trace!(?event, display = %self.display, "dispatched");
        &self.display
    }

    /// Apply a sequence of events in order.
    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = InputEvent>) -> &str {
        for event in events {
            self.dispatch(event);
        }
        &self.display
    }

    fn input_digit(&mut self, d: u8) {
        if d > 9 {
            return;
        }
        let digit = char::from(b'0' + d);
        if self.awaiting_second_operand {
            self.display = digit.to_string();
            self.awaiting_second_operand = false;
            self.result_shown = false;
        } else if self.result_shown {
            self.start_fresh(digit.to_string());
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
    }

    fn input_decimal(&mut self) {
        if self.awaiting_second_operand {
            self.display = "0.".to_string();
            self.awaiting_second_operand = false;
            self.result_shown = false;
        } else if self.result_shown {
            self.start_fresh("0.".to_string());
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn start_fresh(&mut self, display: String) {
        self.display = display;
        self.result_shown = false;
        self.first_operand = None;
        self.pending_operator = None;
    }

    fn input_operator(&mut self, key: OperatorKey) {
        if self.first_operand.is_none() && !self.awaiting_second_operand {
            // Unparseable text is carried as NaN and reported on evaluation.
            self.first_operand = Some(parse_operand(&self.display).unwrap_or(f64::NAN));
        } else if let Some(pending) = self.pending_operator
            && !self.awaiting_second_operand
        {
            if !self.evaluate_pending(pending) {
                return;
            }
        }
        self.pending_operator = Some(key);
        self.awaiting_second_operand = true;
    }

    fn input_equals(&mut self) {
        let Some(pending) = self.pending_operator else {
            return;
        };
        if self.awaiting_second_operand {
            return;
        }
        if self.evaluate_pending(pending) {
            self.pending_operator = None;
            self.awaiting_second_operand = false;
        }
    }

    /// Evaluate `first OP display`. On success the formatted result becomes
    /// both the display and the new first operand; on failure the error
    /// state is entered. Returns whether evaluation succeeded.
    fn evaluate_pending(&mut self, pending: OperatorKey) -> bool {
        let first = self.first_operand.unwrap_or(f64::NAN);
        let result = evaluate_operands(first, pending.operator, &self.display);
        let formatted = format_result_within(result, self.max_chars);
        if result.value().is_some_and(f64::is_finite) {
            self.first_operand = parse_operand(&formatted);
            self.display = formatted;
            self.result_shown = true;
            true
        } else {
            debug!(
                ?result,
                first,
                operator = pending.operator.symbol(),
                second = %self.display,
                "evaluation failed"
            );
            self.enter_error(formatted);
            false
        }
    }

    fn enter_error(&mut self, message: String) {
        self.display = message;
        self.first_operand = None;
        self.pending_operator = None;
        self.awaiting_second_operand = false;
        self.result_shown = true;
    }

    fn backspace(&mut self) {
        if self.result_shown {
            self.reset();
        } else if self.display.chars().count() <= 1 {
            self.display = "0".to_string();
        } else {
            self.display.pop();
        }
    }

    /// Divide the display by 100. The quotient is rendered as a plain
    /// number and is not fitted to the display width.
    fn percent(&mut self) {
        if let Some(value) = parse_operand(&self.display) {
            self.display = format_number(value / 100.0);
        }
    }

    fn reset(&mut self) {
        self.display = "0".to_string();
        self.first_operand = None;
        self.pending_operator = None;
        self.awaiting_second_operand = false;
        self.result_shown = false;
    }
}
