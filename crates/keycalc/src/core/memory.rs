//! Memory register and its key operations

use crate::core::{CalcError, CalcResult};
use std::str::FromStr;

/// Memory key operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryOp {
    /// MC: zero the register
    Clear,
    /// MR: copy the register into the entry
    Recall,
    /// MS: overwrite the register with the entry
    Store,
    /// M+: add the entry to the register
    Add,
    /// M-: subtract the entry from the register
    Subtract,
}

impl MemoryOp {
    /// All memory operations in keypad order
    pub const ALL: [Self; 5] = [
        Self::Clear,
        Self::Recall,
        Self::Store,
        Self::Add,
        Self::Subtract,
    ];

    /// Button label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clear => "MC",
            Self::Recall => "MR",
            Self::Store => "MS",
            Self::Add => "M+",
            Self::Subtract => "M-",
        }
    }
}

impl FromStr for MemoryOp {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mc" | "memory-clear" => Ok(Self::Clear),
            "mr" | "memory-recall" => Ok(Self::Recall),
            "ms" | "memory-store" => Ok(Self::Store),
            "m+" | "memory-add" => Ok(Self::Add),
            "m-" | "m−" | "memory-subtract" => Ok(Self::Subtract),
            _ => Err(CalcError::UnknownOperator(s.to_string())),
        }
    }
}

/// Single-value memory register
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Memory {
    value: f64,
}

impl Memory {
    /// Creates a zeroed register
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 0.0 }
    }

    /// Current value
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Overwrites the register
    pub fn store(&mut self, value: f64) {
        self.value = value;
    }

    /// Adds to the register
    ///
    /// Fails without touching the register if the sum is not finite.
    pub fn add(&mut self, value: f64) -> CalcResult<()> {
        let sum = self.value + value;
        if !sum.is_finite() {
            return Err(CalcError::Overflow);
        }
        self.value = sum;
        Ok(())
    }

    /// Zeroes the register
    pub fn clear(&mut self) {
        self.value = 0.0;
    }
}
