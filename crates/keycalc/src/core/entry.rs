//! The operand being typed, kept as text
//!
//! A text buffer can hold states a number cannot ("", "3.", "-0.") so the
//! display shows exactly what was keyed in.

use std::fmt;

/// Text shown while the entry holds the error marker
pub const ERROR_TEXT: &str = "Error";

/// In-progress operand
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Entry {
    /// Digits, at most one `.`, optionally a leading `-`
    Text(String),
    /// A result written back into the entry
    ///
    /// `text` is the rounded display form; `value` keeps full precision
    /// until the text is edited.
    Computed {
        /// Display form
        text: String,
        /// Exact value
        value: f64,
    },
    /// A failed calculation; only a clear leaves this state
    Error,
    /// Nothing typed yet
    #[default]
    Empty,
}

impl Entry {
    /// Creates an entry holding `text`
    ///
    /// An empty string yields [`Entry::Empty`].
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Self::Empty
        } else {
            Self::Text(text)
        }
    }

    /// Creates an entry from a computed value and its display text
    #[must_use]
    pub const fn computed(text: String, value: f64) -> Self {
        Self::Computed { text, value }
    }

    /// Returns true when nothing has been typed
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns true while the error marker is set
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Raw buffer text; empty for [`Entry::Empty`]
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Computed { text, .. } => text,
            Self::Error => ERROR_TEXT,
            Self::Empty => "",
        }
    }

    /// Parsed value, `None` for empty, error or non-numeric text like "."
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Text(text) => parse_number(text),
            Self::Computed { value, .. } => Some(*value),
            Self::Error | Self::Empty => None,
        }
    }

    /// Parsed value with missing or invalid input counted as zero
    #[must_use]
    pub fn value_or_zero(&self) -> f64 {
        self.value().unwrap_or(0.0)
    }

    /// Returns true if the buffer already holds a decimal point
    #[must_use]
    pub fn has_decimal_point(&self) -> bool {
        self.text().contains('.')
    }

    /// Returns true if the buffer holds an exponent, e.g. `1e+21`
    #[must_use]
    pub fn has_exponent(&self) -> bool {
        matches!(self, Self::Text(_) | Self::Computed { .. }) && self.text().contains(|c| matches!(c, 'e' | 'E'))
    }

    /// Appends a digit; returns false if `digit` is not 0-9
    pub fn push_digit(&mut self, digit: u8) -> bool {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return false;
        };
        self.push_char(ch);
        true
    }

    /// Appends "." unless one is already present or the text has an exponent
    pub fn push_decimal_point(&mut self) -> bool {
        if self.has_decimal_point() || self.has_exponent() {
            return false;
        }
        self.push_char('.');
        true
    }

    fn push_char(&mut self, ch: char) {
        match self {
            Self::Text(text) => text.push(ch),
            Self::Computed { text, .. } => {
                let mut text = std::mem::take(text);
                text.push(ch);
                *self = Self::Text(text);
            }
            Self::Empty | Self::Error => *self = Self::Text(ch.to_string()),
        }
    }

    /// Removes the last character; a lone "-" goes with it
    pub fn backspace(&mut self) {
        let mut text = match self {
            Self::Text(text) | Self::Computed { text, .. } => std::mem::take(text),
            Self::Error | Self::Empty => return,
        };
        text.pop();
        *self = if text.is_empty() || text == "-" {
            Self::Empty
        } else {
            Self::Text(text)
        };
    }

    /// Adds or removes the leading minus sign
    ///
    /// The rest of the text is untouched, so "0." becomes "-0.".
    pub fn toggle_sign(&mut self) {
        match self {
            Self::Text(text) => toggle_minus(text),
            Self::Computed { text, value } => {
                if *value != 0.0 {
                    toggle_minus(text);
                    *value = -*value;
                }
            }
            Self::Error | Self::Empty => {}
        }
    }
}

/// Parses entry text, ignoring a dangling exponent marker like `1e+`
fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>()
        .ok()
        .or_else(|| {
            text.trim_end_matches(|c| matches!(c, 'e' | 'E' | '+' | '-'))
                .parse::<f64>()
                .ok()
        })
        .filter(|v| v.is_finite())
}

fn toggle_minus(text: &mut String) {
    if let Some(rest) = text.strip_prefix('-') {
        *text = rest.to_string();
    } else {
        text.insert(0, '-');
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("0"),
            other => f.write_str(other.text()),
        }
    }
}
