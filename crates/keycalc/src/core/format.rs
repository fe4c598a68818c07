//! Number formatting for results and the scientific display

/// Default fractional digits kept when a result is written into the entry
pub const DEFAULT_RESULT_PRECISION: usize = 10;

/// Default fractional digits of the scientific display
pub const DEFAULT_SCIENTIFIC_DIGITS: usize = 4;

/// Magnitude at and above which results switch to exponential form
const EXPONENT_UPPER: f64 = 1e21;

/// Formats a computed result as entry text
///
/// Integral values lose the fractional part, others keep at most
/// `precision` fractional digits with trailing zeros trimmed. Very large
/// or very small magnitudes use exponential form.
#[must_use]
pub fn format_result(n: f64, precision: usize) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    let lower = 10f64.powi(-(precision.min(300) as i32));
    let magnitude = n.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < lower {
        return exponential(n, None);
    }
    if n.fract() == 0.0 {
        return format!("{n}");
    }
    let s = format!("{n:.precision$}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Formats a value in exponential form with an explicit exponent sign
///
/// `Some(digits)` fixes the fractional digits (`1.2346e+4`); `None` keeps
/// the shortest round-trip mantissa (`1e+21`).
#[must_use]
pub fn exponential(n: f64, digits: Option<usize>) -> String {
    let raw = match digits {
        Some(d) => format!("{n:.d$e}"),
        None => format!("{n:e}"),
    };
    match raw.split_once('e') {
        Some((mantissa, exp)) if exp.starts_with('-') => format!("{mantissa}e{exp}"),
        Some((mantissa, exp)) => format!("{mantissa}e+{exp}"),
        None => raw,
    }
}
