use std::fmt;

use serde::Serialize;

/// A runtime numeric value.
///
/// Integer literals and `+ - *` over two `Int`s stay `Int`; division always
/// yields `Float`, and a `Float` operand makes the result `Float`. The split
/// only affects formatting (`30` vs `2.0`), never control flow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(n) => n == 0,
            Number::Float(n) => n == 0.0,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(n) => n,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(n) => write!(f, "{n}"),
            // integral floats keep their decimal point: 2.0 prints as "2.0"
            Number::Float(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{n:.1}"),
            Number::Float(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ints_print_without_a_decimal_point() {
        assert_eq!(Number::Int(30).to_string(), "30");
        assert_eq!(Number::Int(-5).to_string(), "-5");
    }

    #[test]
    fn integral_floats_keep_their_decimal_point() {
        assert_eq!(Number::Float(2.0).to_string(), "2.0");
        assert_eq!(Number::Float(-10.0).to_string(), "-10.0");
    }

    #[test]
    fn fractional_floats_print_their_digits() {
        assert_eq!(Number::Float(3.14).to_string(), "3.14");
        assert_eq!(Number::Float(1.0 / 3.0).to_string(), "0.3333333333333333");
    }

    #[test]
    fn serializes_untagged() {
        assert_eq!(serde_json::to_string(&Number::Int(42)).unwrap(), "42");
        assert_eq!(serde_json::to_string(&Number::Float(2.0)).unwrap(), "2.0");
    }
}
