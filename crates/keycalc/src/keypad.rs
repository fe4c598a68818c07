//! Keypad and keyboard adapter
//!
//! Translates button clicks and key names into evaluator [`Input`]s. The
//! evaluator never sees labels or key names; this module is the only place
//! that knows about them.
//!
//! Layout:
//! ```text
//! [ 2nd ] [ DEG ] [ SCI ] [ π   ] [ e   ]
//! [ MC  ] [ MR  ] [ MS  ] [ M+  ] [ M-  ]
//! [ sin ] [ cos ] [ tan ] [ log ] [ ln  ]
//! [ √   ] [ ∛   ] [ x²  ] [ x³  ] [ eˣ  ]
//! [ n!  ] [ %   ] [ xʸ  ] [ ʸ√x ] [ mod ]
//! [ C   ] [ CE  ] [ ⌫   ] [ ±   ] [ ÷   ]
//! [ 7   ] [ 8   ] [ 9   ] [ ×   ] [ -   ]
//! [ 4   ] [ 5   ] [ 6   ] [ +   ] [ =   ]
//! [ 1   ] [ 2   ] [ 3   ] [ 0   ] [ .   ]
//! ```

use crate::core::evaluator::Input;
use crate::core::memory::MemoryOp;
use crate::core::{BinaryOp, Constant, Operator, UnaryOp};

const COLS: usize = 5;

/// Labels in row-major order
const LAYOUT: [&str; 45] = [
    "2nd", "DEG", "SCI", "π", "e", //
    "MC", "MR", "MS", "M+", "M-", //
    "sin", "cos", "tan", "log", "ln", //
    "√", "∛", "x²", "x³", "eˣ", //
    "n!", "%", "xʸ", "ʸ√x", "mod", //
    "C", "CE", "⌫", "±", "÷", //
    "7", "8", "9", "×", "-", //
    "4", "5", "6", "+", "=", //
    "1", "2", "3", "0", ".", //
];

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Label in normal mode
    pub label: &'static str,
    /// Input sent in normal mode
    pub input: Input,
    /// Element id, e.g. `btn-7` or `btn-square-root`
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Input sent when the button is pressed in the given mode
    #[must_use]
    pub fn input_for(&self, second_function: bool) -> Input {
        remap(self.input, second_function)
    }

    /// Label shown in the given mode
    #[must_use]
    pub fn label_for(&self, second_function: bool) -> &'static str {
        match self.input_for(second_function) {
            Input::Operator(Operator::Unary(UnaryOp::Arcsin)) => "asin",
            Input::Operator(Operator::Unary(UnaryOp::Arccos)) => "acos",
            Input::Operator(Operator::Unary(UnaryOp::Arctan)) => "atan",
            _ => self.label,
        }
    }
}

fn remap(input: Input, second_function: bool) -> Input {
    match input {
        Input::Operator(op) if second_function => Input::Operator(op.second_function()),
        other => other,
    }
}

/// Maps a label to the input it sends outside second-function mode
fn label_input(label: &str) -> Option<Input> {
    let input = match label {
        "2nd" => Input::ToggleSecondFunction,
        "DEG" => Input::ToggleAngleMode,
        "SCI" => Input::ToggleNotation,
        "C" => Input::ClearAll,
        "CE" => Input::ClearEntry,
        "⌫" => Input::Backspace,
        "±" => Input::ToggleSign,
        "=" => Input::Equals,
        "." => Input::DecimalPoint,
        "π" => Input::InsertConstant(Constant::Pi),
        "e" => Input::InsertConstant(Constant::E),
        _ => {
            if let Some(d) = single_digit(label) {
                Input::Digit(d)
            } else if let Ok(op) = label.parse::<MemoryOp>() {
                Input::Memory(op)
            } else {
                Input::Operator(label.parse::<Operator>().ok()?)
            }
        }
    };
    Some(input)
}

fn single_digit(s: &str) -> Option<u8> {
    let mut chars = s.chars();
    let d = chars.next()?.to_digit(10)?;
    if chars.next().is_some() {
        return None;
    }
    u8::try_from(d).ok()
}

fn element_id(input: Input) -> String {
    match input {
        Input::Digit(d) => format!("btn-{d}"),
        Input::DecimalPoint => "btn-decimal".to_string(),
        Input::Operator(op) => format!("btn-{}", op.name()),
        Input::Equals => "btn-equals".to_string(),
        Input::ClearAll => "btn-clear".to_string(),
        Input::ClearEntry => "btn-clear-entry".to_string(),
        Input::Backspace => "btn-backspace".to_string(),
        Input::ToggleSign => "btn-sign".to_string(),
        Input::ToggleAngleMode => "btn-angle".to_string(),
        Input::ToggleNotation => "btn-notation".to_string(),
        Input::ToggleSecondFunction => "btn-second".to_string(),
        Input::Memory(op) => format!("btn-{}", op.label().to_ascii_lowercase()),
        Input::InsertConstant(c) => format!("btn-{}", c.name()),
    }
}

/// Calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard scientific keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = LAYOUT
            .iter()
            .enumerate()
            .filter_map(|(i, &label)| {
                let input = label_input(label)?;
                Some(KeypadButton {
                    label,
                    input,
                    id: element_id(input),
                    row: i / COLS,
                    col: i % COLS,
                })
            })
            .collect();
        Self { buttons }
    }

    /// Number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.buttons.len().div_ceil(COLS), COLS)
    }

    /// All buttons, row-major
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Button at a grid position
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if col < COLS {
            self.buttons.get(row * COLS + col)
        } else {
            None
        }
    }

    /// Button by element id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Button by its normal-mode label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.label == label)
    }

    /// Input for a click on the element with `id`
    #[must_use]
    pub fn handle_click(&self, id: &str, second_function: bool) -> Option<Input> {
        self.find_button_by_id(id)
            .map(|b| b.input_for(second_function))
    }

    /// Input for a button label or operator name
    ///
    /// Keypad labels follow the second-function remap. Names that are not
    /// on the keypad (`asin`, `nth-root`, `memory-store`) resolve as-is.
    #[must_use]
    pub fn resolve(&self, label: &str, second_function: bool) -> Option<Input> {
        if let Some(button) = self.find_button_by_label(label) {
            return Some(button.input_for(second_function));
        }
        label_input(label)
    }

    /// Labels as currently shown, row-major
    #[must_use]
    pub fn presented_labels(&self, second_function: bool) -> Vec<&'static str> {
        self.buttons
            .iter()
            .map(|b| b.label_for(second_function))
            .collect()
    }

    /// Maps a keyboard key name to an input
    #[must_use]
    pub fn key_to_input(key: &str) -> Option<Input> {
        let input = match key {
            "." | "," => Input::DecimalPoint,
            "+" => Input::Operator(BinaryOp::Add.into()),
            "-" => Input::Operator(BinaryOp::Subtract.into()),
            "*" => Input::Operator(BinaryOp::Multiply.into()),
            "/" => Input::Operator(BinaryOp::Divide.into()),
            "^" => Input::Operator(BinaryOp::Power.into()),
            "%" => Input::Operator(UnaryOp::Percent.into()),
            "!" => Input::Operator(UnaryOp::Factorial.into()),
            "Enter" | "=" => Input::Equals,
            "Backspace" => Input::Backspace,
            "Escape" => Input::ClearAll,
            "Delete" => Input::ClearEntry,
            _ => Input::Digit(single_digit(key)?),
        };
        Some(input)
    }
}
