//! Push-button evaluator
//!
//! A two-operand state machine: the entry being typed, an accumulator
//! holding the left operand, and at most one pending operator. Choosing a
//! second operator evaluates the first, so `5 + 3 - 2 =` is `(5 + 3) - 2`.
//!
//! Every input is a single transition that returns the new [`Readout`].
//! Failures never escape: they put the entry into the error state, which
//! ignores numeric input until a clear.

use crate::config::CalcConfig;
use crate::core::entry::Entry;
use crate::core::format::{exponential, format_result};
use crate::core::history::History;
use crate::core::memory::{Memory, MemoryOp};
use crate::core::modes::{AngleMode, Notation};
use crate::core::{CalcResult, Constant, Operator, ResultGuard};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// One discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// 0-9
    Digit(u8),
    /// "."
    DecimalPoint,
    /// Operator key
    Operator(Operator),
    /// "="
    Equals,
    /// C
    ClearAll,
    /// CE
    ClearEntry,
    /// ⌫
    Backspace,
    /// ±
    ToggleSign,
    /// DEG/RAD
    ToggleAngleMode,
    /// SCI
    ToggleNotation,
    /// 2nd
    ToggleSecondFunction,
    /// MC, MR, MS, M+, M-
    Memory(MemoryOp),
    /// π or e
    InsertConstant(Constant),
}

/// Everything a front end needs to draw after an input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readout {
    /// Main display text
    pub display: String,
    /// Trail of the last operation, e.g. `12 + 7 = 19`
    pub history: String,
    /// Memory register value
    pub memory: f64,
    /// Angle indicator
    pub angle: AngleMode,
    /// Notation indicator
    pub notation: Notation,
    /// Second-function indicator
    pub second_function: bool,
    /// Symbol of the pending operator, if any
    pub pending: Option<String>,
}

/// Calculator state machine
#[derive(Debug, Clone)]
pub struct Evaluator {
    entry: Entry,
    operator: Option<Operator>,
    accumulator: Option<f64>,
    last_result: Option<f64>,
    memory: Memory,
    angle: AngleMode,
    notation: Notation,
    second_function: bool,
    trail: String,
    history: History,
    guard: ResultGuard,
    result_precision: usize,
    scientific_digits: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&CalcConfig::default())
    }

    /// Creates an evaluator from a configuration
    #[must_use]
    pub fn with_config(config: &CalcConfig) -> Self {
        Self {
            entry: Entry::Empty,
            operator: None,
            accumulator: None,
            last_result: None,
            memory: Memory::new(),
            angle: config.angle_mode,
            notation: config.notation,
            second_function: false,
            trail: String::new(),
            history: History::with_capacity(config.history_capacity)
                .with_precision(config.result_precision),
            guard: ResultGuard::new(),
            result_precision: config.result_precision,
            scientific_digits: config.scientific_digits,
        }
    }

    /// Replaces the result guard
    #[must_use]
    pub fn with_guard(mut self, guard: ResultGuard) -> Self {
        self.guard = guard;
        self
    }

    /// Applies one input and returns the new readout
    pub fn apply(&mut self, input: Input) -> Readout {
        match input {
            Input::Digit(d) => self.digit(d),
            Input::DecimalPoint => self.decimal_point(),
            Input::Operator(op) => self.choose_operator(op),
            Input::Equals => self.equals(),
            Input::ClearAll => self.clear_all(),
            Input::ClearEntry => self.clear_entry(),
            Input::Backspace => self.backspace(),
            Input::ToggleSign => self.toggle_sign(),
            Input::ToggleAngleMode => self.toggle_angle_mode(),
            Input::ToggleNotation => self.toggle_notation(),
            Input::ToggleSecondFunction => self.toggle_second_function(),
            Input::Memory(op) => self.memory_op(op),
            Input::InsertConstant(c) => self.insert_constant(c),
        }
    }

    // ===== Entry editing =====

    /// Appends a digit to the entry
    pub fn digit(&mut self, d: u8) -> Readout {
        if self.locked("digit") {
            return self.readout();
        }
        if !self.entry.push_digit(d) {
            trace!(digit = d, "ignored invalid digit");
        }
        self.readout()
    }

    /// Appends a decimal point unless the entry has one
    pub fn decimal_point(&mut self) -> Readout {
        if !self.locked("decimal point") && !self.entry.push_decimal_point() {
            trace!("ignored second decimal point");
        }
        self.readout()
    }

    /// Removes the last entry character
    pub fn backspace(&mut self) -> Readout {
        if !self.locked("backspace") {
            self.entry.backspace();
        }
        self.readout()
    }

    /// Negates the entry
    pub fn toggle_sign(&mut self) -> Readout {
        if !self.locked("sign toggle") {
            self.entry.toggle_sign();
        }
        self.readout()
    }

    /// Replaces the entry with a constant
    pub fn insert_constant(&mut self, constant: Constant) -> Readout {
        if !self.locked("constant") {
            self.set_computed(constant.value());
        }
        self.readout()
    }

    // ===== Operators =====

    /// Selects the pending operator
    ///
    /// An empty entry adopts the last result. A pending operator is
    /// evaluated first, left to right. Constant operators replace the entry
    /// and never become pending.
    pub fn choose_operator(&mut self, op: Operator) -> Readout {
        if self.locked("operator") {
            return self.readout();
        }
        if let Operator::Unary(unary) = op {
            if let Some(constant) = unary.constant() {
                return self.insert_constant(constant);
            }
        }
        if matches!(self.operator, Some(pending) if pending.is_unary()) {
            self.equals();
        }
        if self.entry.is_empty() {
            if let Some(last) = self.last_result {
                self.set_computed(last);
            }
        }
        let Some(left) = self.entry.value() else {
            trace!(op = op.name(), "ignored operator without operand");
            return self.readout();
        };
        if self.operator.is_some() {
            self.equals();
            if self.entry.is_error() {
                return self.readout();
            }
        }
        let left = self.entry.value().unwrap_or(left);

        debug!(op = op.name(), left, "operator pending");
        self.accumulator = Some(left);
        self.operator = Some(op);
        self.entry = Entry::Empty;
        self.trail = match op {
            Operator::Binary(b) => format!("{} {}", self.format(left), b.symbol()),
            Operator::Unary(u) => format!("{}({})", u.symbol(), self.format(left)),
        };
        self.readout()
    }

    /// Evaluates the pending operation
    ///
    /// No-op unless an operator is pending and, for binary operators, the
    /// entry holds a number.
    pub fn equals(&mut self) -> Readout {
        if self.locked("equals") {
            return self.readout();
        }
        let (Some(op), Some(left)) = (self.operator, self.accumulator) else {
            trace!("equals with nothing pending");
            return self.readout();
        };

        let (expression, outcome) = match op {
            Operator::Binary(b) => {
                let Some(right) = self.entry.value() else {
                    trace!(op = b.name(), "equals without right operand");
                    return self.readout();
                };
                let expression =
                    format!("{} {} {}", self.format(left), b.symbol(), self.format(right));
                (expression, b.apply(left, right))
            }
            Operator::Unary(u) => (
                format!("{}({})", u.symbol(), self.format(left)),
                u.apply(left, self.angle),
            ),
        };

        self.accumulator = None;
        self.operator = None;
        match self.checked(outcome) {
            Ok(result) => {
                self.set_computed(result);
                self.last_result = Some(result);
                self.trail = format!("{expression} = {}", self.entry.text());
                debug!(%expression, result, "evaluated");
                self.history.record(expression, result);
            }
            Err(e) => {
                warn!(%expression, error = %e, "evaluation failed");
                self.entry = Entry::Error;
                self.last_result = None;
                self.trail = format!("{expression} = {}", self.entry.text());
            }
        }
        self.readout()
    }

    fn checked(&self, outcome: CalcResult<f64>) -> CalcResult<f64> {
        outcome.and_then(|v| self.guard.check(v))
    }

    // ===== Clearing =====

    /// Resets entry, accumulator, operator and last result
    ///
    /// Memory, modes and the history log are kept.
    pub fn clear_all(&mut self) -> Readout {
        debug!("clear all");
        self.entry = Entry::Empty;
        self.accumulator = None;
        self.operator = None;
        self.last_result = None;
        self.trail.clear();
        self.readout()
    }

    /// Resets the entry only
    pub fn clear_entry(&mut self) -> Readout {
        self.entry = Entry::Empty;
        self.readout()
    }

    // ===== Memory =====

    /// Applies a memory key
    ///
    /// Store, add and subtract count an empty or failed entry as zero.
    pub fn memory_op(&mut self, op: MemoryOp) -> Readout {
        let operand = self.entry.value_or_zero();
        match op {
            MemoryOp::Clear => self.memory.clear(),
            MemoryOp::Recall => {
                if !self.locked("memory recall") {
                    self.set_computed(self.memory.value());
                }
            }
            MemoryOp::Store => self.memory.store(operand),
            MemoryOp::Add | MemoryOp::Subtract => {
                let delta = if op == MemoryOp::Add { operand } else { -operand };
                if let Err(e) = self.memory.add(delta) {
                    warn!(op = op.label(), error = %e, "memory unchanged");
                }
            }
        }
        debug!(op = op.label(), memory = self.memory.value(), "memory");
        self.readout()
    }

    // ===== Modes =====

    /// Switches between radians and degrees
    pub fn toggle_angle_mode(&mut self) -> Readout {
        self.angle = self.angle.toggled();
        debug!(angle = %self.angle, "angle mode");
        self.readout()
    }

    /// Switches between normal and scientific display
    pub fn toggle_notation(&mut self) -> Readout {
        self.notation = self.notation.toggled();
        debug!(notation = %self.notation, "notation");
        self.readout()
    }

    /// Flips second function, which swaps trig keys for their inverses
    pub fn toggle_second_function(&mut self) -> Readout {
        self.second_function = !self.second_function;
        self.readout()
    }

    // ===== Output =====

    /// Current readout
    #[must_use]
    pub fn readout(&self) -> Readout {
        Readout {
            display: self.display(),
            history: self.trail.clone(),
            memory: self.memory.value(),
            angle: self.angle,
            notation: self.notation,
            second_function: self.second_function,
            pending: self.operator.map(|op| op.symbol().to_string()),
        }
    }

    /// Display text for the entry
    #[must_use]
    pub fn display(&self) -> String {
        match (self.notation, self.entry.value()) {
            (Notation::Scientific, Some(value)) => {
                exponential(value, Some(self.scientific_digits))
            }
            _ => self.entry.to_string(),
        }
    }

    /// Trail of the last operation
    #[must_use]
    pub fn history_text(&self) -> &str {
        &self.trail
    }

    /// The entry
    #[must_use]
    pub const fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Stored left operand
    #[must_use]
    pub const fn accumulator(&self) -> Option<f64> {
        self.accumulator
    }

    /// Pending operator
    #[must_use]
    pub const fn pending_operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Most recent result
    #[must_use]
    pub const fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    /// Memory register value
    #[must_use]
    pub const fn memory(&self) -> f64 {
        self.memory.value()
    }

    /// Angle unit
    #[must_use]
    pub const fn angle_mode(&self) -> AngleMode {
        self.angle
    }

    /// Display notation
    #[must_use]
    pub const fn notation(&self) -> Notation {
        self.notation
    }

    /// Second-function flag
    #[must_use]
    pub const fn second_function(&self) -> bool {
        self.second_function
    }

    /// Completed calculations
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Drops the history log
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    // ===== Helpers =====

    fn locked(&self, what: &str) -> bool {
        if self.entry.is_error() {
            trace!(input = what, "ignored until clear");
            true
        } else {
            false
        }
    }

    fn set_computed(&mut self, value: f64) {
        self.entry = Entry::computed(self.format(value), value);
    }

    fn format(&self, value: f64) -> String {
        format_result(value, self.result_precision)
    }
}
