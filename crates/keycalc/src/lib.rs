//! keycalc - push-button scientific calculator engine
//!
//! The engine models a physical calculator: keys arrive one at a time and
//! each key is a single transition of the [`Evaluator`](core::evaluator::Evaluator)
//! state machine. There is no expression parser and no precedence; chained
//! operators evaluate left to right as they are pressed.
//!
//! - [`core`] holds the evaluator, the operation table and the state pieces
//!   it is built from (entry, memory, history, modes).
//! - [`keypad`] maps button labels and keyboard keys to inputs.
//! - [`driver`] runs scripted key sequences through either input path.
//! - [`config`] loads startup settings from JSON.
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut eval = Evaluator::new();
//! for input in [
//!     Input::Digit(1),
//!     Input::Digit(2),
//!     Input::Operator(BinaryOp::Add.into()),
//!     Input::Digit(7),
//! ] {
//!     eval.apply(input);
//! }
//! let readout = eval.apply(Input::Equals);
//! assert_eq!(readout.display, "19");
//! assert_eq!(readout.history, "12 + 7 = 19");
//!
//! // Failures show "Error" until a clear
//! let mut driver = KeypadDriver::new();
//! driver.run("10 ÷ 0 =").unwrap();
//! assert_eq!(driver.display(), "Error");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::CalcConfig;
    pub use crate::core::entry::Entry;
    pub use crate::core::evaluator::{Evaluator, Input, Readout};
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::memory::{Memory, MemoryOp};
    pub use crate::core::modes::{AngleMode, Notation};
    pub use crate::core::{
        BinaryOp, CalcError, CalcResult, Constant, Operator, ResultGuard, UnaryOp,
    };
    pub use crate::driver::{CalculatorDriver, KeyboardDriver, KeypadDriver};
    pub use crate::keypad::{Keypad, KeypadButton};
}
