//! Evaluator configuration

use crate::core::format::{DEFAULT_RESULT_PRECISION, DEFAULT_SCIENTIFIC_DIGITS};
use crate::core::history::History;
use crate::core::modes::{AngleMode, Notation};
use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Startup modes and display settings
///
/// Every field has a default, so a partial JSON document such as
/// `{"angle_mode": "degrees"}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Initial angle unit
    pub angle_mode: AngleMode,
    /// Initial notation
    pub notation: Notation,
    /// Maximum history entries (0 disables the log)
    pub history_capacity: usize,
    /// Fractional digits kept when a result is written to the entry
    pub result_precision: usize,
    /// Fractional digits shown in scientific notation
    pub scientific_digits: usize,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            angle_mode: AngleMode::Radians,
            notation: Notation::Normal,
            history_capacity: History::DEFAULT_MAX_ENTRIES,
            result_precision: DEFAULT_RESULT_PRECISION,
            scientific_digits: DEFAULT_SCIENTIFIC_DIGITS,
        }
    }
}

impl CalcConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set angle mode
    #[must_use]
    pub const fn with_angle_mode(mut self, angle_mode: AngleMode) -> Self {
        self.angle_mode = angle_mode;
        self
    }

    /// Set notation
    #[must_use]
    pub const fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    /// Set history capacity
    #[must_use]
    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Set result precision
    #[must_use]
    pub const fn with_result_precision(mut self, precision: usize) -> Self {
        self.result_precision = precision;
        self
    }

    /// Set scientific digits
    #[must_use]
    pub const fn with_scientific_digits(mut self, digits: usize) -> Self {
        self.scientific_digits = digits;
        self
    }

    /// Parses a JSON document
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CalcError::Config(e.to_string()))?;
        config.validate()
    }

    /// Reads and parses a JSON file
    pub fn load(path: &Path) -> CalcResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| CalcError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    fn validate(self) -> CalcResult<Self> {
        if self.result_precision > 17 {
            return Err(CalcError::Config(format!(
                "result_precision {} exceeds 17 digits",
                self.result_precision
            )));
        }
        if self.scientific_digits > 17 {
            return Err(CalcError::Config(format!(
                "scientific_digits {} exceeds 17 digits",
                self.scientific_digits
            )));
        }
        Ok(self)
    }
}
