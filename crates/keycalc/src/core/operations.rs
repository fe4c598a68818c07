//! Operator table: binary and unary operations over `f64`
//!
//! Operators are plain enums; dispatch is a `match`. Each function returns
//! `CalcResult<f64>` and the caller runs the result through a
//! [`ResultGuard`](crate::core::ResultGuard).

use crate::core::modes::AngleMode;
use crate::core::{CalcError, CalcResult};
use std::fmt;
use std::str::FromStr;

/// Largest n for which n! is finite in `f64`
const MAX_FACTORIAL: f64 = 170.0;

/// Two-operand operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
    /// Truncated remainder (mod)
    Modulo,
    /// Power (^)
    Power,
    /// n-th root of the left operand (ʸ√x)
    NthRoot,
}

impl BinaryOp {
    /// All binary operators
    pub const ALL: [Self; 7] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
        Self::Power,
        Self::NthRoot,
    ];

    /// Canonical name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Modulo => "modulo",
            Self::Power => "power",
            Self::NthRoot => "nth-root",
        }
    }

    /// Symbol used in the history trail
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Modulo => "mod",
            Self::Power => "^",
            Self::NthRoot => "yroot",
        }
    }

    /// Applies the operation to `a` (accumulator) and `b` (entry)
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(a / b)
            }
            Self::Modulo => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(a % b)
            }
            Self::Power => Ok(a.powf(b)),
            Self::NthRoot => nth_root(a, b),
        }
    }
}

/// `n`-th root with real results for odd roots of negatives
fn nth_root(x: f64, n: f64) -> CalcResult<f64> {
    if n == 0.0 {
        return Err(CalcError::domain(BinaryOp::NthRoot.name(), n));
    }
    if x < 0.0 {
        let odd_integer = n.fract() == 0.0 && n % 2.0 != 0.0;
        if !odd_integer {
            return Err(CalcError::domain(BinaryOp::NthRoot.name(), x));
        }
        return Ok(-(-x).powf(1.0 / n));
    }
    Ok(x.powf(1.0 / n))
}

/// One-operand operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// x / 100
    Percent,
    /// √x
    SquareRoot,
    /// ∛x
    CubeRoot,
    /// x²
    Square,
    /// x³
    Cube,
    /// sin
    Sin,
    /// cos
    Cos,
    /// tan
    Tan,
    /// sin⁻¹
    Arcsin,
    /// cos⁻¹
    Arccos,
    /// tan⁻¹
    Arctan,
    /// Base-10 logarithm
    Log10,
    /// Natural logarithm
    Ln,
    /// eˣ
    Exp,
    /// x!
    Factorial,
    /// π, ignores its operand
    ConstantPi,
    /// e, ignores its operand
    ConstantE,
}

impl UnaryOp {
    /// All unary operators
    pub const ALL: [Self; 17] = [
        Self::Percent,
        Self::SquareRoot,
        Self::CubeRoot,
        Self::Square,
        Self::Cube,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Arcsin,
        Self::Arccos,
        Self::Arctan,
        Self::Log10,
        Self::Ln,
        Self::Exp,
        Self::Factorial,
        Self::ConstantPi,
        Self::ConstantE,
    ];

    /// Canonical name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Percent => "percent",
            Self::SquareRoot => "square-root",
            Self::CubeRoot => "cube-root",
            Self::Square => "square",
            Self::Cube => "cube",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Arcsin => "arcsin",
            Self::Arccos => "arccos",
            Self::Arctan => "arctan",
            Self::Log10 => "log10",
            Self::Ln => "ln",
            Self::Exp => "exp",
            Self::Factorial => "factorial",
            Self::ConstantPi => "constant-pi",
            Self::ConstantE => "constant-e",
        }
    }

    /// Function name used in the history trail, e.g. `sqrt(9)`
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Percent => "percent",
            Self::SquareRoot => "sqrt",
            Self::CubeRoot => "cbrt",
            Self::Square => "sqr",
            Self::Cube => "cube",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Arcsin => "asin",
            Self::Arccos => "acos",
            Self::Arctan => "atan",
            Self::Log10 => "log",
            Self::Ln => "ln",
            Self::Exp => "exp",
            Self::Factorial => "fact",
            Self::ConstantPi => "π",
            Self::ConstantE => "e",
        }
    }

    /// The operator shown in place of this one while second function is on
    ///
    /// Trig functions swap with their inverses; everything else maps to
    /// itself.
    #[must_use]
    pub const fn second_function(self) -> Self {
        match self {
            Self::Sin => Self::Arcsin,
            Self::Cos => Self::Arccos,
            Self::Tan => Self::Arctan,
            Self::Arcsin => Self::Sin,
            Self::Arccos => Self::Cos,
            Self::Arctan => Self::Tan,
            other => other,
        }
    }

    /// Returns the constant this operator produces, if any
    #[must_use]
    pub const fn constant(self) -> Option<Constant> {
        match self {
            Self::ConstantPi => Some(Constant::Pi),
            Self::ConstantE => Some(Constant::E),
            _ => None,
        }
    }

    /// Applies the operation; trig functions interpret angles per `angle`
    pub fn apply(self, x: f64, angle: AngleMode) -> CalcResult<f64> {
        match self {
            Self::Percent => Ok(x / 100.0),
            Self::SquareRoot => {
                if x < 0.0 {
                    return Err(CalcError::domain(self.name(), x));
                }
                Ok(x.sqrt())
            }
            Self::CubeRoot => Ok(x.cbrt()),
            Self::Square => Ok(x * x),
            Self::Cube => Ok(x * x * x),
            Self::Sin => Ok(angle.to_radians(x).sin()),
            Self::Cos => Ok(angle.to_radians(x).cos()),
            Self::Tan => Ok(angle.to_radians(x).tan()),
            Self::Arcsin => {
                Self::check_unit_interval(self, x)?;
                Ok(angle.from_radians(x.asin()))
            }
            Self::Arccos => {
                Self::check_unit_interval(self, x)?;
                Ok(angle.from_radians(x.acos()))
            }
            Self::Arctan => Ok(angle.from_radians(x.atan())),
            Self::Log10 => {
                if x <= 0.0 {
                    return Err(CalcError::domain(self.name(), x));
                }
                Ok(x.log10())
            }
            Self::Ln => {
                if x <= 0.0 {
                    return Err(CalcError::domain(self.name(), x));
                }
                Ok(x.ln())
            }
            Self::Exp => Ok(x.exp()),
            Self::Factorial => factorial(x),
            Self::ConstantPi => Ok(Constant::Pi.value()),
            Self::ConstantE => Ok(Constant::E.value()),
        }
    }

    fn check_unit_interval(self, x: f64) -> CalcResult<()> {
        if (-1.0..=1.0).contains(&x) {
            Ok(())
        } else {
            Err(CalcError::domain(self.name(), x))
        }
    }
}

/// n! for non-negative integers up to 170
fn factorial(x: f64) -> CalcResult<f64> {
    if x < 0.0 || x.fract() != 0.0 || !x.is_finite() {
        return Err(CalcError::domain(UnaryOp::Factorial.name(), x));
    }
    if x > MAX_FACTORIAL {
        return Err(CalcError::Overflow);
    }
    let n = x as u32;
    Ok((2..=n).fold(1.0, |acc, k| acc * f64::from(k)))
}

/// Named constants that can be inserted into the entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// π
    Pi,
    /// Euler's number
    E,
}

impl Constant {
    /// Numeric value
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }

    /// Canonical name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
        }
    }
}

impl FromStr for Constant {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pi" | "π" | "constant-pi" => Ok(Self::Pi),
            "e" | "constant-e" => Ok(Self::E),
            _ => Err(CalcError::UnknownOperator(s.to_string())),
        }
    }
}

/// A pending operator: binary or unary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Needs an accumulator and an entry
    Binary(BinaryOp),
    /// Needs only the accumulator
    Unary(UnaryOp),
}

impl Operator {
    /// Canonical name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binary(op) => op.name(),
            Self::Unary(op) => op.name(),
        }
    }

    /// Display symbol
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Binary(op) => op.symbol(),
            Self::Unary(op) => op.symbol(),
        }
    }

    /// Returns true for one-operand operators
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Unary(_))
    }

    /// Operator presented in place of this one while second function is on
    #[must_use]
    pub const fn second_function(self) -> Self {
        match self {
            Self::Unary(op) => Self::Unary(op.second_function()),
            binary => binary,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl From<BinaryOp> for Operator {
    fn from(op: BinaryOp) -> Self {
        Self::Binary(op)
    }
}

impl From<UnaryOp> for Operator {
    fn from(op: UnaryOp) -> Self {
        Self::Unary(op)
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    /// Parses canonical names, symbols and common button labels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        let op: Self = match key {
            "+" => BinaryOp::Add.into(),
            "-" | "−" => BinaryOp::Subtract.into(),
            "*" | "×" | "x" => BinaryOp::Multiply.into(),
            "/" | "÷" => BinaryOp::Divide.into(),
            "^" | "xʸ" | "x^y" => BinaryOp::Power.into(),
            "%" => UnaryOp::Percent.into(),
            "√" => UnaryOp::SquareRoot.into(),
            "∛" => UnaryOp::CubeRoot.into(),
            "x²" => UnaryOp::Square.into(),
            "x³" => UnaryOp::Cube.into(),
            "n!" | "x!" | "!" => UnaryOp::Factorial.into(),
            "π" => UnaryOp::ConstantPi.into(),
            "eˣ" => UnaryOp::Exp.into(),
            "ʸ√x" => BinaryOp::NthRoot.into(),
            _ => return Self::from_name(&key.to_ascii_lowercase()),
        };
        Ok(op)
    }
}

impl Operator {
    fn from_name(name: &str) -> CalcResult<Self> {
        if let Some(op) = BinaryOp::ALL.iter().find(|op| op.name() == name) {
            return Ok((*op).into());
        }
        if let Some(op) = UnaryOp::ALL.iter().find(|op| op.name() == name) {
            return Ok((*op).into());
        }
        let op: Self = match name {
            "mod" => BinaryOp::Modulo.into(),
            "pow" => BinaryOp::Power.into(),
            "root" | "yroot" | "nthroot" => BinaryOp::NthRoot.into(),
            "sqrt" => UnaryOp::SquareRoot.into(),
            "cbrt" => UnaryOp::CubeRoot.into(),
            "sqr" => UnaryOp::Square.into(),
            "asin" => UnaryOp::Arcsin.into(),
            "acos" => UnaryOp::Arccos.into(),
            "atan" => UnaryOp::Arctan.into(),
            "log" => UnaryOp::Log10.into(),
            "fact" => UnaryOp::Factorial.into(),
            "pi" => UnaryOp::ConstantPi.into(),
            "e" => UnaryOp::ConstantE.into(),
            _ => return Err(CalcError::UnknownOperator(name.to_string())),
        };
        Ok(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-10;

    // --- Binary operator tests ---

    #[test]
    fn test_binary_add_subtract_multiply() {
        assert_eq!(BinaryOp::Add.apply(3.0, 4.0), Ok(7.0));
        assert_eq!(BinaryOp::Subtract.apply(3.0, 5.0), Ok(-2.0));
        assert_eq!(BinaryOp::Multiply.apply(-2.0, 3.0), Ok(-6.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(BinaryOp::Divide.apply(10.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(BinaryOp::Divide.apply(12.0, 4.0), Ok(3.0));
    }

    #[test]
    fn test_modulo() {
        assert_eq!(BinaryOp::Modulo.apply(17.0, 5.0), Ok(2.0));
        assert_eq!(BinaryOp::Modulo.apply(-7.0, 3.0), Ok(-1.0));
        assert_eq!(BinaryOp::Modulo.apply(1.0, 0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_power() {
        assert_eq!(BinaryOp::Power.apply(2.0, 10.0), Ok(1024.0));
        assert_eq!(BinaryOp::Power.apply(2.0, -1.0), Ok(0.5));
    }

    #[test]
    fn test_nth_root() {
        let r = BinaryOp::NthRoot.apply(27.0, 3.0).unwrap();
        assert!((r - 3.0).abs() < EPS);
        let r = BinaryOp::NthRoot.apply(-8.0, 3.0).unwrap();
        assert!((r + 2.0).abs() < EPS);
    }

    #[test]
    fn test_nth_root_domain() {
        assert!(matches!(
            BinaryOp::NthRoot.apply(16.0, 0.0),
            Err(CalcError::Domain { op: "nth-root", .. })
        ));
        assert!(matches!(
            BinaryOp::NthRoot.apply(-16.0, 2.0),
            Err(CalcError::Domain { .. })
        ));
    }

    // --- Unary operator tests ---

    #[test]
    fn test_percent_and_powers() {
        let rad = AngleMode::Radians;
        assert_eq!(UnaryOp::Percent.apply(50.0, rad), Ok(0.5));
        assert_eq!(UnaryOp::Square.apply(-3.0, rad), Ok(9.0));
        assert_eq!(UnaryOp::Cube.apply(-2.0, rad), Ok(-8.0));
        assert_eq!(UnaryOp::SquareRoot.apply(9.0, rad), Ok(3.0));
        let r = UnaryOp::CubeRoot.apply(-27.0, rad).unwrap();
        assert!((r + 3.0).abs() < EPS);
    }

    #[test]
    fn test_square_root_negative() {
        assert!(matches!(
            UnaryOp::SquareRoot.apply(-4.0, AngleMode::Radians),
            Err(CalcError::Domain { op: "square-root", .. })
        ));
    }

    #[test]
    fn test_sin_angle_modes() {
        let deg = UnaryOp::Sin.apply(90.0, AngleMode::Degrees).unwrap();
        assert!((deg - 1.0).abs() < EPS);
        let rad = UnaryOp::Sin.apply(90.0, AngleMode::Radians).unwrap();
        assert!((rad - 0.893_996_663_6).abs() < EPS);
    }

    #[test]
    fn test_inverse_trig_degrees() {
        let r = UnaryOp::Arcsin.apply(1.0, AngleMode::Degrees).unwrap();
        assert!((r - 90.0).abs() < EPS);
        let r = UnaryOp::Arctan.apply(1.0, AngleMode::Degrees).unwrap();
        assert!((r - 45.0).abs() < EPS);
        let r = UnaryOp::Arccos.apply(-1.0, AngleMode::Radians).unwrap();
        assert!((r - std::f64::consts::PI).abs() < EPS);
    }

    #[test]
    fn test_inverse_trig_domain() {
        assert!(UnaryOp::Arcsin.apply(1.5, AngleMode::Radians).is_err());
        assert!(UnaryOp::Arccos.apply(-2.0, AngleMode::Degrees).is_err());
    }

    #[test]
    fn test_logarithms() {
        let rad = AngleMode::Radians;
        let r = UnaryOp::Log10.apply(1000.0, rad).unwrap();
        assert!((r - 3.0).abs() < EPS);
        assert_eq!(UnaryOp::Ln.apply(1.0, rad), Ok(0.0));
        assert!(UnaryOp::Ln.apply(0.0, rad).is_err());
        assert!(UnaryOp::Log10.apply(-5.0, rad).is_err());
    }

    #[test]
    fn test_factorial() {
        let rad = AngleMode::Radians;
        assert_eq!(UnaryOp::Factorial.apply(5.0, rad), Ok(120.0));
        assert_eq!(UnaryOp::Factorial.apply(0.0, rad), Ok(1.0));
        assert!(matches!(
            UnaryOp::Factorial.apply(-1.0, rad),
            Err(CalcError::Domain { op: "factorial", .. })
        ));
        assert!(UnaryOp::Factorial.apply(2.5, rad).is_err());
        assert_eq!(UnaryOp::Factorial.apply(171.0, rad), Err(CalcError::Overflow));
    }

    #[test]
    fn test_constants_ignore_operand() {
        let rad = AngleMode::Radians;
        assert_eq!(UnaryOp::ConstantPi.apply(7.0, rad), Ok(std::f64::consts::PI));
        assert_eq!(UnaryOp::ConstantE.apply(-1.0, rad), Ok(std::f64::consts::E));
        assert_eq!(UnaryOp::ConstantPi.constant(), Some(Constant::Pi));
        assert_eq!(UnaryOp::Sin.constant(), None);
    }

    #[test]
    fn test_second_function_swaps_trig() {
        assert_eq!(UnaryOp::Sin.second_function(), UnaryOp::Arcsin);
        assert_eq!(UnaryOp::Arccos.second_function(), UnaryOp::Cos);
        assert_eq!(UnaryOp::Ln.second_function(), UnaryOp::Ln);
        assert_eq!(
            Operator::Binary(BinaryOp::Add).second_function(),
            Operator::Binary(BinaryOp::Add)
        );
    }

    // --- Name table tests ---

    #[test]
    fn test_parse_canonical_names() {
        for op in BinaryOp::ALL {
            assert_eq!(op.name().parse::<Operator>(), Ok(Operator::Binary(op)));
        }
        for op in UnaryOp::ALL {
            assert_eq!(op.name().parse::<Operator>(), Ok(Operator::Unary(op)));
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("+".parse(), Ok(Operator::Binary(BinaryOp::Add)));
        assert_eq!("÷".parse(), Ok(Operator::Binary(BinaryOp::Divide)));
        assert_eq!("SQRT".parse(), Ok(Operator::Unary(UnaryOp::SquareRoot)));
        assert_eq!("asin".parse(), Ok(Operator::Unary(UnaryOp::Arcsin)));
        assert_eq!("%".parse(), Ok(Operator::Unary(UnaryOp::Percent)));
        assert_eq!("mod".parse(), Ok(Operator::Binary(BinaryOp::Modulo)));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "frobnicate".parse::<Operator>(),
            Err(CalcError::UnknownOperator("frobnicate".into()))
        );
    }

    #[test]
    fn test_parse_constant() {
        assert_eq!("PI".parse(), Ok(Constant::Pi));
        assert_eq!("e".parse(), Ok(Constant::E));
        assert!("tau".parse::<Constant>().is_err());
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Operator::Binary(BinaryOp::Add).to_string(), "+");
        assert_eq!(Operator::Unary(UnaryOp::SquareRoot).symbol(), "sqrt");
        assert!(Operator::Unary(UnaryOp::Sin).is_unary());
        assert!(!Operator::Binary(BinaryOp::Power).is_unary());
    }

    // --- Property-based tests ---

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e10f64..1e10f64, b in -1e10f64..1e10f64) {
            let r1 = BinaryOp::Add.apply(a, b).unwrap();
            let r2 = BinaryOp::Add.apply(b, a).unwrap();
            prop_assert!((r1 - r2).abs() < 1e-10);
        }

        #[test]
        fn prop_divide_by_self(a in -1e10f64..1e10f64) {
            prop_assume!(a != 0.0);
            let r = BinaryOp::Divide.apply(a, a).unwrap();
            prop_assert!((r - 1.0).abs() < 1e-10);
        }

        #[test]
        fn prop_factorial_rejects_fractions(n in 0u32..50, frac in 0.01f64..0.99) {
            let x = f64::from(n) + frac;
            prop_assert!(UnaryOp::Factorial.apply(x, AngleMode::Radians).is_err());
        }

        #[test]
        fn prop_square_root_of_square(x in 0.0f64..1e6) {
            let sq = UnaryOp::Square.apply(x, AngleMode::Radians).unwrap();
            let root = UnaryOp::SquareRoot.apply(sq, AngleMode::Radians).unwrap();
            prop_assert!((root - x).abs() < 1e-6);
        }
    }
}
