//! Trigonometric function dispatcher
//!
//! Maps a function identifier plus a numeric input (and an angle unit for the
//! direct/inverse variants) to a result. Reciprocal functions are computed as
//! the multiplicative inverse of their base function, so they share its poles;
//! a non-finite result after computation is reported as a domain error rather
//! than leaking infinity or NaN to the caller.

use crate::angle::AngleUnit;
use crate::error::CalcError;
use wasm_bindgen::prelude::*;

/// The finite set of supported trigonometric functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrigFunction {
    // Direct (angle in, ratio out)
    Sin,
    Cos,
    Tan,
    Cot,
    Sec,
    Csc,
    // Inverse (ratio in, angle out)
    Asin,
    Acos,
    Atan,
    Acot,
    Asec,
    Acsc,
    // Hyperbolic (unitless)
    Sinh,
    Cosh,
    Tanh,
    Coth,
    Sech,
    Csch,
}

impl TrigFunction {
    /// Parse a function name string to a TrigFunction
    pub fn from_name(name: &str) -> Result<TrigFunction, CalcError> {
        match name {
            "sin" => Ok(TrigFunction::Sin),
            "cos" => Ok(TrigFunction::Cos),
            "tan" => Ok(TrigFunction::Tan),
            "cot" => Ok(TrigFunction::Cot),
            "sec" => Ok(TrigFunction::Sec),
            "csc" => Ok(TrigFunction::Csc),
            "asin" => Ok(TrigFunction::Asin),
            "acos" => Ok(TrigFunction::Acos),
            "atan" => Ok(TrigFunction::Atan),
            "acot" => Ok(TrigFunction::Acot),
            "asec" => Ok(TrigFunction::Asec),
            "acsc" => Ok(TrigFunction::Acsc),
            "sinh" => Ok(TrigFunction::Sinh),
            "cosh" => Ok(TrigFunction::Cosh),
            "tanh" => Ok(TrigFunction::Tanh),
            "coth" => Ok(TrigFunction::Coth),
            "sech" => Ok(TrigFunction::Sech),
            "csch" => Ok(TrigFunction::Csch),
            _ => Err(CalcError::parse(format!(
                "unknown trigonometric function: '{}'",
                name
            ))),
        }
    }

    /// Get the function name as a string
    pub fn name(&self) -> &'static str {
        match self {
            TrigFunction::Sin => "sin",
            TrigFunction::Cos => "cos",
            TrigFunction::Tan => "tan",
            TrigFunction::Cot => "cot",
            TrigFunction::Sec => "sec",
            TrigFunction::Csc => "csc",
            TrigFunction::Asin => "asin",
            TrigFunction::Acos => "acos",
            TrigFunction::Atan => "atan",
            TrigFunction::Acot => "acot",
            TrigFunction::Asec => "asec",
            TrigFunction::Acsc => "acsc",
            TrigFunction::Sinh => "sinh",
            TrigFunction::Cosh => "cosh",
            TrigFunction::Tanh => "tanh",
            TrigFunction::Coth => "coth",
            TrigFunction::Sech => "sech",
            TrigFunction::Csch => "csch",
        }
    }

    /// True for the inverse variants (input is a unitless ratio, output an angle)
    pub fn is_inverse(&self) -> bool {
        matches!(
            self,
            TrigFunction::Asin
                | TrigFunction::Acos
                | TrigFunction::Atan
                | TrigFunction::Acot
                | TrigFunction::Asec
                | TrigFunction::Acsc
        )
    }

    /// True for the hyperbolic variants (unit parameter is ignored)
    pub fn is_hyperbolic(&self) -> bool {
        matches!(
            self,
            TrigFunction::Sinh
                | TrigFunction::Cosh
                | TrigFunction::Tanh
                | TrigFunction::Coth
                | TrigFunction::Sech
                | TrigFunction::Csch
        )
    }
}

/// Evaluate a trigonometric function
///
/// Direct functions treat `input` as an angle in `unit`; inverse functions
/// treat it as a ratio and return an angle in `unit`; hyperbolic functions
/// ignore `unit` entirely. The only validation is the finiteness gate on the
/// computed result: poles and out-of-range inverses surface as domain errors.
pub fn evaluate(func: TrigFunction, input: f64, unit: AngleUnit) -> Result<f64, CalcError> {
    let result = match func {
        TrigFunction::Sin => unit.to_radians(input).sin(),
        TrigFunction::Cos => unit.to_radians(input).cos(),
        TrigFunction::Tan => unit.to_radians(input).tan(),
        // Reciprocals inherit the poles of their base function: cot at
        // multiples of pi, sec at pi/2 + k*pi, csc at k*pi.
        TrigFunction::Cot => reciprocal(unit.to_radians(input).tan()),
        TrigFunction::Sec => reciprocal(unit.to_radians(input).cos()),
        TrigFunction::Csc => reciprocal(unit.to_radians(input).sin()),
        TrigFunction::Asin => unit.from_radians(input.asin()),
        TrigFunction::Acos => unit.from_radians(input.acos()),
        TrigFunction::Atan => unit.from_radians(input.atan()),
        // f^-1(x) = g^-1(1/x); undefined at x = 0
        TrigFunction::Acot => unit.from_radians(reciprocal(input).atan()),
        TrigFunction::Asec => unit.from_radians(reciprocal(input).acos()),
        TrigFunction::Acsc => unit.from_radians(reciprocal(input).asin()),
        TrigFunction::Sinh => input.sinh(),
        TrigFunction::Cosh => input.cosh(),
        TrigFunction::Tanh => input.tanh(),
        TrigFunction::Coth => reciprocal(input.tanh()),
        TrigFunction::Sech => reciprocal(input.cosh()),
        TrigFunction::Csch => reciprocal(input.sinh()),
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::domain(format!(
            "{}({}) is undefined",
            func.name(),
            input
        )))
    }
}

/// Multiplicative inverse, mapping an exact zero to NaN so the finiteness
/// gate reports the pole instead of returning infinity
fn reciprocal(x: f64) -> f64 {
    if x == 0.0 {
        f64::NAN
    } else {
        1.0 / x
    }
}

/// Evaluate a trigonometric function from JavaScript
///
/// `func_name` is one of the 18 supported identifiers; `unit_name` is
/// "degrees" or "radians" (ignored for hyperbolic functions).
#[wasm_bindgen(js_name = evaluateTrig)]
pub fn evaluate_trig_js(func_name: &str, input: f64, unit_name: &str) -> Result<f64, JsValue> {
    let func = TrigFunction::from_name(func_name)?;
    let unit = AngleUnit::from_name(unit_name)?;
    Ok(evaluate(func, input, unit)?)
}
