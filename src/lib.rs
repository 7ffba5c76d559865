//! Keypad calculator core: a display state machine, two-operand
//! arithmetic, and fixed-width result formatting.
//!
//! Front ends translate their own key or button events into
//! [`calculator::InputEvent`]s (see [`keys`]), call
//! [`calculator::Calculator::dispatch`], and render
//! [`calculator::Calculator::current_display`] verbatim.

pub mod calculator;
pub mod config;
pub mod keys;
