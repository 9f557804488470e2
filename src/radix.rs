//! Integer arithmetic in non-decimal bases
//!
//! Backs the binary/octal/hex calculator pages: operands arrive as signed
//! digit strings in a caller-chosen base (2 to 36), the result is formatted
//! back in the same base. Arithmetic itself is exact BigInt arithmetic, so
//! operands of any length work.

use crate::error::CalcError;
use num_bigint::BigInt;
use num_traits::{Num, Zero};
use wasm_bindgen::prelude::*;

/// Binary operations available in the radix calculators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadixOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl RadixOp {
    /// Parse an operation name string to a RadixOp
    pub fn from_name(name: &str) -> Result<RadixOp, CalcError> {
        match name {
            "add" => Ok(RadixOp::Add),
            "sub" => Ok(RadixOp::Sub),
            "mul" => Ok(RadixOp::Mul),
            "div" => Ok(RadixOp::Div),
            "mod" => Ok(RadixOp::Mod),
            _ => Err(CalcError::parse(format!("unknown radix operation: '{}'", name))),
        }
    }
}

/// Parse a signed digit string in the given base
pub fn parse_radix(text: &str, base: u32) -> Result<BigInt, CalcError> {
    if !(2..=36).contains(&base) {
        return Err(CalcError::constraint("base must be between 2 and 36"));
    }
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CalcError::parse("empty number"));
    }
    BigInt::from_str_radix(trimmed, base).map_err(|_| {
        CalcError::parse(format!("'{}' is not a valid base-{} integer", trimmed, base))
    })
}

/// Format a value as a signed digit string in the given base
pub fn format_radix(value: &BigInt, base: u32) -> Result<String, CalcError> {
    if !(2..=36).contains(&base) {
        return Err(CalcError::constraint("base must be between 2 and 36"));
    }
    Ok(value.to_str_radix(base))
}

/// Parse two operands in `base`, apply `op`, format the result in `base`
///
/// Division truncates toward zero, matching the decimal big-number
/// calculator; division or modulo by zero is a domain error.
pub fn calculate(op: RadixOp, a: &str, b: &str, base: u32) -> Result<String, CalcError> {
    let a = parse_radix(a, base)?;
    let b = parse_radix(b, base)?;

    let result = match op {
        RadixOp::Add => a + b,
        RadixOp::Sub => a - b,
        RadixOp::Mul => a * b,
        RadixOp::Div => {
            if b.is_zero() {
                return Err(CalcError::domain("division by zero"));
            }
            a / b
        }
        RadixOp::Mod => {
            if b.is_zero() {
                return Err(CalcError::domain("modulo by zero"));
            }
            a % b
        }
    };

    format_radix(&result, base)
}

/// Radix calculation from JavaScript
///
/// `op_name` is one of add/sub/mul/div/mod; operands and result are digit
/// strings in `base`.
#[wasm_bindgen(js_name = radixCalculate)]
pub fn radix_calculate_js(op_name: &str, a: &str, b: &str, base: u32) -> Result<String, JsValue> {
    let op = RadixOp::from_name(op_name)?;
    Ok(calculate(op, a, b, base)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_arithmetic() {
        assert_eq!(calculate(RadixOp::Add, "1011", "110", 2).unwrap(), "10001");
        assert_eq!(calculate(RadixOp::Mul, "101", "11", 2).unwrap(), "1111");
        assert_eq!(calculate(RadixOp::Sub, "100", "111", 2).unwrap(), "-11");
    }

    #[test]
    fn test_hex_arithmetic() {
        assert_eq!(calculate(RadixOp::Add, "ff", "1", 16).unwrap(), "100");
        assert_eq!(calculate(RadixOp::Mul, "a", "a", 16).unwrap(), "64");
        assert_eq!(calculate(RadixOp::Div, "100", "10", 16).unwrap(), "10");
    }

    #[test]
    fn test_division_by_zero_is_domain_error() {
        let err = calculate(RadixOp::Div, "1010", "0", 2).unwrap_err();
        assert!(matches!(err, CalcError::Domain(_)));
        assert!(calculate(RadixOp::Mod, "ff", "0", 16).is_err());
    }

    #[test]
    fn test_invalid_digits_for_base() {
        assert!(parse_radix("102", 2).is_err());
        assert!(parse_radix("8", 8).is_err());
        assert!(parse_radix("fg", 16).is_err());
        assert!(parse_radix("", 16).is_err());
    }

    #[test]
    fn test_base_bounds() {
        assert!(parse_radix("10", 1).is_err());
        assert!(parse_radix("10", 37).is_err());
        assert!(parse_radix("z", 36).is_ok());
    }

    #[test]
    fn test_negative_operands() {
        assert_eq!(calculate(RadixOp::Add, "-ff", "ff", 16).unwrap(), "0");
        // Truncation toward zero, as in the decimal calculator
        assert_eq!(calculate(RadixOp::Div, "-111", "10", 2).unwrap(), "-11");
    }

    #[test]
    fn test_round_trip() {
        let value = parse_radix("deadbeef", 16).unwrap();
        assert_eq!(format_radix(&value, 16).unwrap(), "deadbeef");
        assert_eq!(value.to_string(), "3735928559");
    }
}
