//! The evaluator: a pure state machine over a four-field record.
//!
//! Every operation consumes nothing and mutates nothing; it reads the current
//! state and returns the successor state. The surrounding event loop owns the
//! single live instance, so no locking is needed, but independent instances
//! are cheap if ever wanted.

use crate::calc::format::format_number;
use crate::calc::operator::{ArithmeticError, Operator};

/// Sentinel display text for the error state. The display is otherwise
/// always a parseable numeric literal.
pub const ERROR_DISPLAY: &str = "Error";

/// The calculator state.
///
/// Invariants:
/// - `display` parses as a finite decimal, except exactly [`ERROR_DISPLAY`];
/// - `operator` and `previous_value` are present together or absent together;
/// - `display` holds at most one decimal point and no redundant leading zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    display: String,
    previous_value: Option<String>,
    operator: Option<Operator>,
    awaiting_operand: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            operator: None,
            awaiting_operand: false,
        }
    }

    fn error_state() -> Self {
        Self {
            display: ERROR_DISPLAY.to_string(),
            previous_value: None,
            operator: None,
            awaiting_operand: true,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    pub fn awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    /// The pending left operand and operator, rendered for the preview line
    /// above the display. `None` unless an operation is pending.
    pub fn expression_preview(&self) -> Option<String> {
        match (&self.previous_value, self.operator) {
            (Some(prev), Some(op)) => Some(format!("{} {}", prev, op)),
            _ => None,
        }
    }

    /// The display parsed back to a number. The display invariant guarantees
    /// this parses in every non-error state; the error state is screened off
    /// by the callers.
    fn current_value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }

    /// Resets to the initial state unconditionally.
    pub fn clear_all(&self) -> Self {
        Self::new()
    }

    /// Drops the last typed character. A no-op while awaiting a fresh
    /// operand (nothing has been typed into it yet). An emptied display, or
    /// a leftover bare minus sign, canonicalizes to `"0"`.
    pub fn backspace(&self) -> Self {
        if self.awaiting_operand {
            return self.clone();
        }
        let mut next = self.clone();
        next.display.pop();
        if next.display.is_empty() || next.display == "-" {
            next.display = "0".to_string();
        }
        next
    }

    /// Enters one digit. Starts a fresh number when an operand is awaited
    /// (this is also how the error state recovers); otherwise extends the
    /// display, collapsing the redundant leading zero.
    pub fn input_digit(&self, digit: char) -> Self {
        debug_assert!(digit.is_ascii_digit());
        let mut next = self.clone();
        if self.awaiting_operand {
            next.display = digit.to_string();
            next.awaiting_operand = false;
        } else if self.display == "0" {
            next.display = digit.to_string();
        } else {
            next.display.push(digit);
        }
        next
    }

    /// Enters the decimal point. Starts `"0."` when an operand is awaited;
    /// otherwise appends a point only if the display has none yet, so
    /// repeated presses are no-ops.
    pub fn input_decimal(&self) -> Self {
        let mut next = self.clone();
        if self.awaiting_operand {
            next.display = "0.".to_string();
            next.awaiting_operand = false;
        } else if !self.display.contains('.') {
            next.display.push('.');
        }
        next
    }

    /// Negates the displayed value in place. Zero stays `"0"` (no `-0`
    /// display). Pending operation state is untouched. A no-op in the error
    /// state, which holds no number to negate.
    pub fn toggle_sign(&self) -> Self {
        if self.is_error() {
            return self.clone();
        }
        let mut next = self.clone();
        next.display = format_number(-self.current_value());
        next
    }

    /// Divides the displayed value by 100. Same scope as [`toggle_sign`]:
    /// pending operation state untouched, no-op in the error state.
    ///
    /// [`toggle_sign`]: Self::toggle_sign
    pub fn percentage(&self) -> Self {
        if self.is_error() {
            return self.clone();
        }
        let mut next = self.clone();
        next.display = format_number(self.current_value() / 100.0);
        next
    }

    /// An operator key was pressed: resolves any pending operation, then
    /// queues `next_op` with the (possibly fresh) result as the new left
    /// operand.
    ///
    /// Division by zero transitions straight to the error state and drops
    /// `next_op` entirely; the requested operator is not queued for after
    /// recovery. A no-op in the error state.
    pub fn operator_pressed(&self, next_op: Operator) -> Self {
        if self.is_error() {
            return self.clone();
        }
        let mut next = self.clone();
        match (&self.previous_value, self.operator) {
            (Some(prev), Some(op)) => {
                let lhs: f64 = prev.parse().unwrap_or(0.0);
                match op.apply(lhs, self.current_value()) {
                    Ok(result) => {
                        let formatted = format_number(result);
                        next.display = formatted.clone();
                        next.previous_value = Some(formatted);
                    }
                    Err(ArithmeticError::DivisionByZero) => return Self::error_state(),
                }
            }
            _ => {
                next.previous_value = Some(self.display.clone());
            }
        }
        next.operator = Some(next_op);
        next.awaiting_operand = true;
        next
    }

    /// Equals: resolves the pending operation and clears it. A no-op when
    /// nothing is pending, which also makes repeated presses after one
    /// resolution no-ops. Division by zero transitions to the error state.
    pub fn equals(&self) -> Self {
        let (Some(prev), Some(op)) = (&self.previous_value, self.operator) else {
            return self.clone();
        };
        let lhs: f64 = prev.parse().unwrap_or(0.0);
        match op.apply(lhs, self.current_value()) {
            Ok(result) => Self {
                display: format_number(result),
                previous_value: None,
                operator: None,
                awaiting_operand: true,
            },
            Err(ArithmeticError::DivisionByZero) => Self::error_state(),
        }
    }
}
