//! Calculator drivers
//!
//! **Write the scenario once, run it through every input path.** A
//! [`CalculatorDriver`] feeds tokens to an [`Evaluator`]; the click driver
//! treats them as button labels, the keyboard driver as key names. The
//! `verify_*` functions are shared scenarios that work with any driver.

use crate::core::evaluator::{Evaluator, Input, Readout};
use crate::core::{CalcError, CalcResult};
use crate::keypad::Keypad;
use tracing::trace;

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use keycalc::driver::{CalculatorDriver, KeypadDriver};
///
/// let mut driver = KeypadDriver::new();
/// driver.run("12 + 7 =").unwrap();
/// assert_eq!(driver.display(), "19");
/// assert_eq!(driver.history_text(), "12 + 7 = 19");
/// ```
pub trait CalculatorDriver {
    /// Presses a single key or button
    fn press(&mut self, token: &str) -> CalcResult<Readout>;

    /// Current display text
    fn display(&self) -> String;

    /// Trail of the last operation
    fn history_text(&self) -> String;

    /// Memory register value
    fn memory(&self) -> f64;

    /// Clears entry, operator and last result
    fn clear(&mut self);

    /// Presses every whitespace-separated token in order
    ///
    /// Tokens made only of digits and `.` (like `12.5`) are typed one
    /// character at a time.
    fn run(&mut self, script: &str) -> CalcResult<Readout> {
        let mut last = None;
        for token in script.split_whitespace() {
            if token.len() > 1 && token.chars().all(|c| c.is_ascii_digit() || c == '.') {
                for ch in token.chars() {
                    let mut buf = [0u8; 4];
                    last = Some(self.press(ch.encode_utf8(&mut buf))?);
                }
            } else {
                last = Some(self.press(token)?);
            }
        }
        last.ok_or_else(|| CalcError::InvalidInput("empty script".into()))
    }
}

fn unknown(token: &str) -> CalcError {
    CalcError::InvalidInput(format!("no key or button for {token:?}"))
}

/// Driver that clicks keypad buttons by label
#[derive(Debug, Default)]
pub struct KeypadDriver {
    evaluator: Evaluator,
    keypad: Keypad,
}

impl KeypadDriver {
    /// Creates a driver around a fresh evaluator
    #[must_use]
    pub fn new() -> Self {
        Self::with_evaluator(Evaluator::new())
    }

    /// Creates a driver around an existing evaluator
    #[must_use]
    pub fn with_evaluator(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            keypad: Keypad::new(),
        }
    }

    /// The underlying evaluator
    #[must_use]
    pub const fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Clicks the element with `id`
    pub fn click(&mut self, id: &str) -> CalcResult<Readout> {
        let input = self
            .keypad
            .handle_click(id, self.evaluator.second_function())
            .ok_or_else(|| unknown(id))?;
        Ok(self.send(input))
    }

    fn send(&mut self, input: Input) -> Readout {
        trace!(?input, "keypad");
        self.evaluator.apply(input)
    }
}

impl CalculatorDriver for KeypadDriver {
    fn press(&mut self, token: &str) -> CalcResult<Readout> {
        let input = self
            .keypad
            .resolve(token, self.evaluator.second_function())
            .ok_or_else(|| unknown(token))?;
        Ok(self.send(input))
    }

    fn display(&self) -> String {
        self.evaluator.display()
    }

    fn history_text(&self) -> String {
        self.evaluator.history_text().to_string()
    }

    fn memory(&self) -> f64 {
        self.evaluator.memory()
    }

    fn clear(&mut self) {
        self.evaluator.clear_all();
    }
}

/// Driver that types keyboard keys
///
/// Keys without a keyboard binding fall back to button labels, so scripts
/// can still reach functions like `sin` or `MS`.
#[derive(Debug, Default)]
pub struct KeyboardDriver {
    evaluator: Evaluator,
    keypad: Keypad,
}

impl KeyboardDriver {
    /// Creates a driver around a fresh evaluator
    #[must_use]
    pub fn new() -> Self {
        Self::with_evaluator(Evaluator::new())
    }

    /// Creates a driver around an existing evaluator
    #[must_use]
    pub fn with_evaluator(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            keypad: Keypad::new(),
        }
    }

    /// The underlying evaluator
    #[must_use]
    pub const fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }
}

impl CalculatorDriver for KeyboardDriver {
    fn press(&mut self, token: &str) -> CalcResult<Readout> {
        let input = Keypad::key_to_input(token)
            .or_else(|| {
                self.keypad
                    .resolve(token, self.evaluator.second_function())
            })
            .ok_or_else(|| unknown(token))?;
        trace!(?input, "keyboard");
        Ok(self.evaluator.apply(input))
    }

    fn display(&self) -> String {
        self.evaluator.display()
    }

    fn history_text(&self) -> String {
        self.evaluator.history_text().to_string()
    }

    fn memory(&self) -> f64 {
        self.evaluator.memory()
    }

    fn clear(&mut self) {
        self.evaluator.clear_all();
    }
}

// ===== Shared scenarios =====
// These work with ANY CalculatorDriver implementation

/// Verifies the four basic operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.run("3 + 4 =").unwrap();
    assert_eq!(driver.display(), "7");
    driver.clear();

    driver.run("10 - 4 =").unwrap();
    assert_eq!(driver.display(), "6");
    driver.clear();

    driver.run("6 * 7 =").unwrap();
    assert_eq!(driver.display(), "42");
    driver.clear();

    driver.run("20 / 4 =").unwrap();
    assert_eq!(driver.display(), "5");
    driver.clear();
}

/// Verifies left-to-right chaining without precedence
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.run("5 + 3 - 2 =").unwrap();
    assert_eq!(driver.display(), "6");
    driver.clear();

    driver.run("2 + 3 * 4 =").unwrap();
    assert_eq!(driver.display(), "20");
    driver.clear();
}

/// Verifies the error display and recovery
pub fn verify_error_handling<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.run("10 / 0 =").unwrap();
    assert_eq!(driver.display(), "Error");
    driver.run("5").unwrap();
    assert_eq!(driver.display(), "Error");
    driver.clear();
    assert_eq!(driver.display(), "0");

    driver.run("2.5 n! =").unwrap();
    assert_eq!(driver.display(), "Error");
    driver.clear();
}

/// Verifies the memory register survives a clear
pub fn verify_memory<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.run("MC 42 MS").unwrap();
    assert_eq!(driver.memory(), 42.0);
    driver.clear();
    assert_eq!(driver.memory(), 42.0);
    driver.run("MR").unwrap();
    assert_eq!(driver.display(), "42");
    driver.run("MC").unwrap();
    assert_eq!(driver.memory(), 0.0);
    driver.clear();
}

/// Verifies the history trail
pub fn verify_history<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.run("12 + 7 =").unwrap();
    assert_eq!(driver.history_text(), "12 + 7 = 19");
    driver.clear();
    assert_eq!(driver.history_text(), "");
}

/// Runs every shared scenario
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_error_handling(driver);
    verify_memory(driver);
    verify_history(driver);
}
