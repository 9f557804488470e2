//! Rounding engine with selectable tie-breaking policies
//!
//! All policies operate on `scaled = value * 10^precision`: the directed
//! policies always move toward their target, the half-* policies pick the
//! nearest integer and consult the tie rule only when the scaled value sits
//! exactly halfway. Negative precision rounds to tens, hundreds, and so on.
//!
//! A separate mode rounds to the nearest multiple of an exact fraction
//! (nearest 1/8, nearest 1/16, ...) by scaling with the fraction instead of
//! a power of ten.

use crate::error::CalcError;
use num_rational::Ratio;
use num_traits::{Signed, ToPrimitive, Zero};
use wasm_bindgen::prelude::*;

/// Tie-breaking policy for values exactly halfway between rounding targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingMode {
    /// Ties toward positive infinity
    HalfUp,
    /// Ties toward negative infinity
    HalfDown,
    /// Always toward positive infinity (ceiling)
    Up,
    /// Always toward negative infinity (floor)
    Down,
    /// Ties to the even neighbor (banker's rounding)
    HalfEven,
    /// Ties to the odd neighbor
    HalfOdd,
    /// Ties away from zero
    HalfAwayFromZero,
    /// Ties toward zero
    HalfTowardZero,
}

impl RoundingMode {
    /// Parse a policy name string to a RoundingMode
    pub fn from_name(name: &str) -> Result<RoundingMode, CalcError> {
        match name {
            "half-up" => Ok(RoundingMode::HalfUp),
            "half-down" => Ok(RoundingMode::HalfDown),
            "up" | "ceiling" => Ok(RoundingMode::Up),
            "down" | "floor" => Ok(RoundingMode::Down),
            "half-even" => Ok(RoundingMode::HalfEven),
            "half-odd" => Ok(RoundingMode::HalfOdd),
            "half-away-from-zero" => Ok(RoundingMode::HalfAwayFromZero),
            "half-toward-zero" => Ok(RoundingMode::HalfTowardZero),
            _ => Err(CalcError::parse(format!(
                "unknown rounding mode: '{}'",
                name
            ))),
        }
    }

    /// Get the policy name as a string
    pub fn name(&self) -> &'static str {
        match self {
            RoundingMode::HalfUp => "half-up",
            RoundingMode::HalfDown => "half-down",
            RoundingMode::Up => "up",
            RoundingMode::Down => "down",
            RoundingMode::HalfEven => "half-even",
            RoundingMode::HalfOdd => "half-odd",
            RoundingMode::HalfAwayFromZero => "half-away-from-zero",
            RoundingMode::HalfTowardZero => "half-toward-zero",
        }
    }

    /// Round an already-scaled value to an integer under this policy
    fn round_scaled(&self, scaled: f64) -> f64 {
        let floor = scaled.floor();
        let diff = scaled - floor;

        match self {
            RoundingMode::Up => scaled.ceil(),
            RoundingMode::Down => floor,
            RoundingMode::HalfUp => {
                if diff >= 0.5 {
                    scaled.ceil()
                } else {
                    floor
                }
            }
            RoundingMode::HalfDown => {
                if diff > 0.5 {
                    scaled.ceil()
                } else {
                    floor
                }
            }
            RoundingMode::HalfEven => {
                if diff == 0.5 {
                    if (floor as i64) % 2 == 0 {
                        floor
                    } else {
                        scaled.ceil()
                    }
                } else {
                    nearest(scaled, floor, diff)
                }
            }
            RoundingMode::HalfOdd => {
                if diff == 0.5 {
                    if (floor as i64) % 2 == 0 {
                        scaled.ceil()
                    } else {
                        floor
                    }
                } else {
                    nearest(scaled, floor, diff)
                }
            }
            RoundingMode::HalfAwayFromZero => {
                if diff == 0.5 {
                    if scaled > 0.0 {
                        scaled.ceil()
                    } else {
                        floor
                    }
                } else {
                    nearest(scaled, floor, diff)
                }
            }
            RoundingMode::HalfTowardZero => {
                if diff == 0.5 {
                    if scaled > 0.0 {
                        floor
                    } else {
                        scaled.ceil()
                    }
                } else {
                    nearest(scaled, floor, diff)
                }
            }
        }
    }
}

/// Nearest integer when not at a tie
fn nearest(scaled: f64, floor: f64, diff: f64) -> f64 {
    if diff > 0.5 {
        scaled.ceil()
    } else {
        floor
    }
}

/// Round `value` to `precision` decimal places under `mode`
///
/// Negative precision rounds to tens/hundreds/etc. (`precision = -2` rounds
/// to the nearest hundred under the half-* policies).
pub fn round(value: f64, precision: i32, mode: RoundingMode) -> Result<f64, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::domain("cannot round a non-finite value"));
    }
    let factor = 10.0_f64.powi(precision);
    Ok(mode.round_scaled(value * factor) / factor)
}

/// Round `value` to the nearest multiple of an exact fraction
///
/// `15.65` to the nearest `1/8` gives `15.625`. Scaling uses the fraction's
/// reciprocal: `round(value / fraction) * fraction`.
pub fn round_to_fraction(
    value: f64,
    fraction: Ratio<i64>,
    mode: RoundingMode,
) -> Result<f64, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::domain("cannot round a non-finite value"));
    }
    if fraction.is_zero() || fraction.is_negative() {
        return Err(CalcError::constraint(
            "the rounding fraction must be positive",
        ));
    }
    let step = fraction
        .to_f64()
        .ok_or_else(|| CalcError::constraint("rounding fraction is not representable"))?;
    Ok(mode.round_scaled(value / step) * step)
}

/// Round a number from JavaScript
///
/// `mode_name` is one of the eight policy names ("half-up", "half-even", ...).
#[wasm_bindgen(js_name = roundNumber)]
pub fn round_js(value: f64, precision: i32, mode_name: &str) -> Result<f64, JsValue> {
    let mode = RoundingMode::from_name(mode_name)?;
    Ok(round(value, precision, mode)?)
}

/// Round to the nearest `numerator/denominator` from JavaScript
#[wasm_bindgen(js_name = roundToFraction)]
pub fn round_to_fraction_js(
    value: f64,
    numerator: i32,
    denominator: i32,
    mode_name: &str,
) -> Result<f64, JsValue> {
    let mode = RoundingMode::from_name(mode_name)?;
    if denominator == 0 {
        return Err(CalcError::constraint("fraction denominator cannot be zero").into());
    }
    let fraction = Ratio::new(numerator as i64, denominator as i64);
    Ok(round_to_fraction(value, fraction, mode)?)
}
