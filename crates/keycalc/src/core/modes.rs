//! Mode flags: angle unit and display notation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit used by the trigonometric operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    /// Radians
    #[default]
    Radians,
    /// Degrees
    Degrees,
}

impl AngleMode {
    /// Returns the other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Radians => Self::Degrees,
            Self::Degrees => Self::Radians,
        }
    }

    /// Converts an angle in this unit to radians
    #[must_use]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Radians => angle,
            Self::Degrees => angle.to_radians(),
        }
    }

    /// Converts an angle in radians to this unit
    #[must_use]
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            Self::Radians => radians,
            Self::Degrees => radians.to_degrees(),
        }
    }

    /// Short indicator label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Radians => "RAD",
            Self::Degrees => "DEG",
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the display renders a numeric entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// Entry text as typed
    #[default]
    Normal,
    /// Exponential form
    Scientific,
}

impl Notation {
    /// Returns the other notation
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Scientific,
            Self::Scientific => Self::Normal,
        }
    }

    /// Short indicator label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "NORM",
            Self::Scientific => "SCI",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
