//! Arbitrary-precision integer calculator
//!
//! Parses decimal or E-notation strings into exact signed integers and
//! applies one of the big-number operations. All arithmetic is exact except
//! the explicitly truncating operations: division truncates toward zero and
//! the square root returns the integer floor of the true root.
//!
//! E-notation parsing truncates (does not round) fractional mantissa digits:
//! "1.987e3" parses as 1 * 10^3. The use case is order-of-magnitude big
//! numbers, so the digits past the decimal point of the mantissa are treated
//! as noise. This lossy behavior is intended and relied on by callers.

use crate::error::CalcError;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use wasm_bindgen::prelude::*;

/// Largest accepted factorial argument
///
/// A practical compute-time bound, not a mathematical one: 10000! has about
/// 35660 digits and is the largest input the calculator page will serve.
pub const MAX_FACTORIAL_INPUT: u32 = 10_000;

/// Largest accepted power exponent, for the same reason
pub const MAX_POW_EXPONENT: u32 = 1_000_000;

/// Big-number operations offered by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigIntOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Square,
    Sqrt,
    Factorial,
    Gcd,
    Lcm,
}

impl BigIntOp {
    /// Parse an operation name string to a BigIntOp
    pub fn from_name(name: &str) -> Result<BigIntOp, CalcError> {
        match name {
            "add" => Ok(BigIntOp::Add),
            "sub" => Ok(BigIntOp::Sub),
            "mul" => Ok(BigIntOp::Mul),
            "div" => Ok(BigIntOp::Div),
            "mod" => Ok(BigIntOp::Mod),
            "pow" => Ok(BigIntOp::Pow),
            "square" => Ok(BigIntOp::Square),
            "sqrt" => Ok(BigIntOp::Sqrt),
            "factorial" => Ok(BigIntOp::Factorial),
            "gcd" => Ok(BigIntOp::Gcd),
            "lcm" => Ok(BigIntOp::Lcm),
            _ => Err(CalcError::parse(format!(
                "unknown big-number operation: '{}'",
                name
            ))),
        }
    }

    /// True when the operation ignores its second operand
    pub fn is_unary(&self) -> bool {
        matches!(
            self,
            BigIntOp::Square | BigIntOp::Sqrt | BigIntOp::Factorial
        )
    }
}

/// Parse a decimal or E-notation string into an exact integer
///
/// Accepts plain decimal digits with optional sign, or
/// `mantissa[.fraction]e[exponent]`. Fractional mantissa digits are
/// truncated (see module docs); a negative exponent larger than the
/// mantissa's magnitude truncates toward zero as well.
pub fn parse_big(text: &str) -> Result<BigInt, CalcError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CalcError::parse("empty number"));
    }

    if let Some(pos) = trimmed.find(['e', 'E']) {
        let mantissa_str = &trimmed[..pos];
        let exponent_str = &trimmed[pos + 1..];

        // Only the integer part of the mantissa is kept, but the discarded
        // fractional part must still be well-formed digits.
        let mut mantissa_parts = mantissa_str.splitn(2, '.');
        let int_part = mantissa_parts.next().unwrap_or(mantissa_str);
        if let Some(frac_part) = mantissa_parts.next() {
            if frac_part.is_empty() || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(CalcError::parse(format!(
                    "invalid mantissa: '{}'",
                    mantissa_str
                )));
            }
        }
        let mantissa: BigInt = int_part
            .parse()
            .map_err(|_| CalcError::parse(format!("invalid mantissa: '{}'", mantissa_str)))?;
        let exponent: i64 = exponent_str
            .parse()
            .map_err(|_| CalcError::parse(format!("invalid exponent: '{}'", exponent_str)))?;

        return apply_exponent(mantissa, exponent);
    }

    // Plain decimal; a fractional part is not a valid integer.
    trimmed
        .parse()
        .map_err(|_| CalcError::parse(format!("invalid integer: '{}'", trimmed)))
}

/// Scale `mantissa` by 10^exponent using exact integer arithmetic
fn apply_exponent(mantissa: BigInt, exponent: i64) -> Result<BigInt, CalcError> {
    if exponent.unsigned_abs() > MAX_POW_EXPONENT as u64 {
        return Err(CalcError::limit(format!(
            "E-notation exponent exceeds {}",
            MAX_POW_EXPONENT
        )));
    }
    if exponent >= 0 {
        Ok(mantissa * BigInt::from(10).pow(exponent as u32))
    } else {
        // Negative exponent truncates toward zero.
        Ok(mantissa / BigInt::from(10).pow(exponent.unsigned_abs() as u32))
    }
}

/// Apply a big-number operation to two parsed operands
///
/// Unary operations (`square`, `sqrt`, `factorial`) ignore `b`.
pub fn apply(op: BigIntOp, a: &BigInt, b: &BigInt) -> Result<BigInt, CalcError> {
    match op {
        BigIntOp::Add => Ok(a + b),
        BigIntOp::Sub => Ok(a - b),
        BigIntOp::Mul => Ok(a * b),
        BigIntOp::Div => {
            if b.is_zero() {
                Err(CalcError::domain("division by zero"))
            } else {
                // BigInt division truncates toward zero
                Ok(a / b)
            }
        }
        BigIntOp::Mod => {
            if b.is_zero() {
                Err(CalcError::domain("modulo by zero"))
            } else {
                Ok(a % b)
            }
        }
        BigIntOp::Pow => {
            if b.is_negative() {
                return Err(CalcError::domain(
                    "exponent must be a non-negative integer",
                ));
            }
            let exp = b
                .to_u32()
                .filter(|&e| e <= MAX_POW_EXPONENT)
                .ok_or_else(|| {
                    CalcError::limit(format!("exponent exceeds {}", MAX_POW_EXPONENT))
                })?;
            Ok(a.pow(exp))
        }
        BigIntOp::Square => Ok(a * a),
        BigIntOp::Sqrt => isqrt(a),
        BigIntOp::Factorial => factorial(a),
        BigIntOp::Gcd => Ok(a.gcd(b)),
        BigIntOp::Lcm => Ok(lcm(a, b)),
    }
}

/// Integer floor square root by Newton's method
///
/// The iterate `x_{k+1} = (x_k + n/x_k) / 2` decreases monotonically once it
/// is at or above the true root; iteration stops when it stops decreasing.
pub fn isqrt(n: &BigInt) -> Result<BigInt, CalcError> {
    if n.is_negative() {
        return Err(CalcError::domain("square root of a negative number"));
    }
    if n.is_zero() || n.is_one() {
        return Ok(n.clone());
    }

    // Initial guess above the true root: 2^ceil(bits/2)
    let mut x: BigInt = BigInt::one() << ((n.bits() + 1) / 2 + 1) as usize;
    loop {
        let next = (&x + n / &x) >> 1;
        if next >= x {
            return Ok(x);
        }
        x = next;
    }
}

/// Exact factorial of a non-negative integer
///
/// Inputs above [`MAX_FACTORIAL_INPUT`] are rejected as a resource-limit
/// error before any computation starts.
pub fn factorial(n: &BigInt) -> Result<BigInt, CalcError> {
    if n.is_negative() {
        return Err(CalcError::domain("factorial of a negative number"));
    }
    let n = n
        .to_u32()
        .filter(|&v| v <= MAX_FACTORIAL_INPUT)
        .ok_or_else(|| {
            CalcError::limit(format!(
                "factorial input exceeds the maximum of {}",
                MAX_FACTORIAL_INPUT
            ))
        })?;

    let mut acc = BigInt::one();
    for k in 2..=n {
        acc *= k;
    }
    Ok(acc)
}

/// Least common multiple on absolute values; lcm(x, 0) = 0
pub fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() || b.is_zero() {
        return BigInt::zero();
    }
    (a * b).abs() / a.gcd(b)
}

/// GCD of a whole list, folding pairwise; empty input is zero
pub fn gcd_many(values: &[BigInt]) -> BigInt {
    values
        .iter()
        .fold(BigInt::zero(), |acc, v| acc.gcd(v))
}

/// LCM of a whole list, folding pairwise; empty input is zero
pub fn lcm_many(values: &[BigInt]) -> BigInt {
    match values.split_first() {
        None => BigInt::zero(),
        Some((first, rest)) => rest.iter().fold(first.clone(), |acc, v| lcm(&acc, v)),
    }
}

/// Parse two operand strings, apply an operation, return the decimal result
pub fn calculate(op: BigIntOp, a: &str, b: &str) -> Result<String, CalcError> {
    let a = parse_big(a)?;
    let b = if op.is_unary() {
        BigInt::zero()
    } else {
        parse_big(b)?
    };
    Ok(apply(op, &a, &b)?.to_string())
}

/// Big-number calculation from JavaScript
///
/// `op_name` is one of add/sub/mul/div/mod/pow/square/sqrt/factorial/gcd/lcm.
/// For unary operations `b` is ignored and may be empty.
#[wasm_bindgen(js_name = bigCalculate)]
pub fn big_calculate_js(op_name: &str, a: &str, b: &str) -> Result<String, JsValue> {
    let op = BigIntOp::from_name(op_name)?;
    Ok(calculate(op, a, b)?)
}

/// GCD of a whole list of numbers from JavaScript (the GCF calculator page)
#[wasm_bindgen(js_name = gcdOfList)]
pub fn gcd_of_list_js(values: Vec<String>) -> Result<String, JsValue> {
    let parsed = parse_all(&values)?;
    Ok(gcd_many(&parsed).to_string())
}

/// LCM of a whole list of numbers from JavaScript
#[wasm_bindgen(js_name = lcmOfList)]
pub fn lcm_of_list_js(values: Vec<String>) -> Result<String, JsValue> {
    let parsed = parse_all(&values)?;
    Ok(lcm_many(&parsed).to_string())
}

fn parse_all(values: &[String]) -> Result<Vec<BigInt>, CalcError> {
    values.iter().map(|v| parse_big(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        parse_big(s).unwrap()
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(big("12345"), BigInt::from(12345));
        assert_eq!(big("-987"), BigInt::from(-987));
        assert_eq!(big("  42  "), BigInt::from(42));
    }

    #[test]
    fn test_parse_failures_are_distinct_from_zero() {
        assert!(parse_big("").is_err());
        assert!(parse_big("abc").is_err());
        assert!(parse_big("12.5").is_err());
        assert!(parse_big("1e").is_err());
        assert!(parse_big("e5").is_err());
        // Zero itself parses fine
        assert_eq!(big("0"), BigInt::zero());
    }

    #[test]
    fn test_parse_e_notation() {
        assert_eq!(big("1e3"), BigInt::from(1000));
        assert_eq!(big("5E2"), BigInt::from(500));
        assert_eq!(big("-2e4"), BigInt::from(-20000));
        assert_eq!(big("1.23e45").to_string(), format!("1{}", "0".repeat(45)));
    }

    #[test]
    fn test_e_notation_mantissa_truncates() {
        // Fractional mantissa digits are dropped, not rounded
        assert_eq!(big("1.987e3"), BigInt::from(1000));
        assert_eq!(big("9.999e2"), BigInt::from(900));
    }

    #[test]
    fn test_malformed_mantissa_rejected() {
        // Truncation only applies to a well-formed fractional part;
        // garbage after the dot is a parse failure, not silently dropped
        assert!(parse_big("1.2.3e5").is_err());
        assert!(parse_big("1.abce3").is_err());
        assert!(parse_big("1.e5").is_err());
        assert!(parse_big("1.2-3e5").is_err());
    }

    #[test]
    fn test_e_notation_negative_exponent_truncates() {
        assert_eq!(big("12345e-2"), BigInt::from(123));
        assert_eq!(big("99e-3"), BigInt::zero());
    }

    #[test]
    fn test_e_notation_exponent_limit() {
        let err = parse_big("1e5000000000").unwrap_err();
        assert!(matches!(err, CalcError::ResourceLimit(_)));
    }

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(calculate(BigIntOp::Add, "1e20", "1").unwrap(), "100000000000000000001");
        assert_eq!(calculate(BigIntOp::Sub, "100", "101").unwrap(), "-1");
        assert_eq!(
            calculate(BigIntOp::Mul, "123456789", "987654321").unwrap(),
            "121932631112635269"
        );
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(calculate(BigIntOp::Div, "7", "2").unwrap(), "3");
        assert_eq!(calculate(BigIntOp::Div, "-7", "2").unwrap(), "-3");
        assert_eq!(calculate(BigIntOp::Mod, "7", "3").unwrap(), "1");
    }

    #[test]
    fn test_division_by_zero_is_domain_error() {
        let err = calculate(BigIntOp::Div, "1", "0").unwrap_err();
        assert!(matches!(err, CalcError::Domain(_)));
        assert!(calculate(BigIntOp::Mod, "1", "0").is_err());
    }

    #[test]
    fn test_pow() {
        assert_eq!(calculate(BigIntOp::Pow, "2", "64").unwrap(), "18446744073709551616");
        assert_eq!(calculate(BigIntOp::Pow, "7", "0").unwrap(), "1");
        // Negative exponents are outside the exact-integer path
        assert!(calculate(BigIntOp::Pow, "2", "-1").is_err());
    }

    #[test]
    fn test_isqrt_newton() {
        assert_eq!(isqrt(&BigInt::from(0)).unwrap(), BigInt::from(0));
        assert_eq!(isqrt(&BigInt::from(1)).unwrap(), BigInt::from(1));
        assert_eq!(isqrt(&BigInt::from(15)).unwrap(), BigInt::from(3));
        assert_eq!(isqrt(&BigInt::from(16)).unwrap(), BigInt::from(4));
        assert_eq!(isqrt(&BigInt::from(17)).unwrap(), BigInt::from(4));
        // Floor of the root of a 40-digit square plus one
        let n = BigInt::from(10).pow(20);
        assert_eq!(isqrt(&(&n * &n + 1)).unwrap(), n);
        assert!(isqrt(&BigInt::from(-4)).is_err());
    }

    #[test]
    fn test_factorial_boundaries() {
        assert_eq!(calculate(BigIntOp::Factorial, "0", "").unwrap(), "1");
        assert_eq!(calculate(BigIntOp::Factorial, "5", "").unwrap(), "120");
        assert_eq!(calculate(BigIntOp::Factorial, "20", "").unwrap(), "2432902008176640000");

        let err = calculate(BigIntOp::Factorial, "-1", "").unwrap_err();
        assert!(matches!(err, CalcError::Domain(_)));

        let err = calculate(BigIntOp::Factorial, "10001", "").unwrap_err();
        assert!(matches!(err, CalcError::ResourceLimit(_)));
    }

    #[test]
    fn test_gcd_lcm_identities() {
        // gcd(x, 0) = |x|
        assert_eq!(apply(BigIntOp::Gcd, &big("-48"), &big("0")).unwrap(), big("48"));
        // lcm(x, 1) = |x|
        assert_eq!(apply(BigIntOp::Lcm, &big("-21"), &big("1")).unwrap(), big("21"));
        // lcm(anything, 0) = 0
        assert_eq!(apply(BigIntOp::Lcm, &big("7"), &big("0")).unwrap(), BigInt::zero());

        assert_eq!(apply(BigIntOp::Gcd, &big("48"), &big("18")).unwrap(), big("6"));
        assert_eq!(apply(BigIntOp::Lcm, &big("4"), &big("6")).unwrap(), big("12"));
    }

    #[test]
    fn test_multi_operand_lcm_matches_worked_example() {
        // LCM(21, 14, 38) = 798, the documented prime-factorization example
        let values = [big("21"), big("14"), big("38")];
        assert_eq!(lcm_many(&values), big("798"));
        assert_eq!(gcd_many(&values), big("1"));

        let values = [big("12"), big("18"), big("30")];
        assert_eq!(gcd_many(&values), big("6"));
    }

    #[test]
    fn test_string_round_trip() {
        for (a, b) in [("123456789012345678901234567890", "987654321098765432109876543210")] {
            for op in [BigIntOp::Add, BigIntOp::Sub, BigIntOp::Mul] {
                let out = calculate(op, a, b).unwrap();
                let reparsed = parse_big(&out).unwrap();
                assert_eq!(reparsed.to_string(), out);
            }
        }
    }

    #[test]
    fn test_op_from_name() {
        assert_eq!(BigIntOp::from_name("factorial").unwrap(), BigIntOp::Factorial);
        assert!(BigIntOp::from_name("cbrt").is_err());
        assert!(BigIntOp::Sqrt.is_unary());
        assert!(!BigIntOp::Gcd.is_unary());
    }
}
