//! Right and oblique triangle solvers
//!
//! Both solvers accept a partial record of the six triangle quantities
//! (sides a/b/c opposite angles alpha/beta/gamma) and complete it when the
//! knowns uniquely determine the triangle. Each field is an explicit
//! `Option`; the solvers count knowns rather than inferring presence from
//! sentinel values.
//!
//! The ambiguous SSA case of the Law of Sines is resolved to the acute-angle
//! solution (the one that always leaves a positive third angle); the obtuse
//! alternative is deliberately not returned.

use crate::angle::AngleUnit;
use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Tolerance for angle-sum and consistency checks, in radians
const ANGLE_EPS: f64 = 1e-9;

/// Partial triangle record as entered in the form
///
/// Sides are lengths; angles are in the unit passed to the solver.
/// Side `a` is opposite angle `alpha`, `b` opposite `beta`, `c` opposite
/// `gamma` (the hypotenuse and the right angle, for the right solver).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TriangleInput {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub gamma: Option<f64>,
}

/// Fully solved triangle
///
/// Angles are reported in the unit the solver was called with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SolvedTriangle {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub area: f64,
    pub perimeter: f64,
}

/// Solve a right triangle (gamma fixed at 90°, c the hypotenuse)
///
/// Needs at least two known values, at least one of them a side. A supplied
/// gamma must equal the right angle; a supplied alpha/beta pair must be
/// complementary.
pub fn solve_right(input: &TriangleInput, unit: AngleUnit) -> Result<SolvedTriangle, CalcError> {
    validate_sides(input)?;

    if let Some(g) = input.gamma {
        if (unit.to_radians(g) - std::f64::consts::FRAC_PI_2).abs() > ANGLE_EPS {
            return Err(CalcError::constraint(
                "the right angle gamma is fixed at 90 degrees",
            ));
        }
    }

    let alpha = input.alpha.map(|v| unit.to_radians(v));
    let beta = input.beta.map(|v| unit.to_radians(v));
    for angle in [alpha, beta].into_iter().flatten() {
        if angle <= 0.0 || angle >= std::f64::consts::FRAC_PI_2 {
            return Err(CalcError::constraint(
                "acute angles of a right triangle must be strictly between 0 and 90 degrees",
            ));
        }
    }

    let sides = [input.a, input.b, input.c];
    let side_count = sides.iter().flatten().count();
    let known = side_count + usize::from(alpha.is_some()) + usize::from(beta.is_some());
    if known < 2 {
        return Err(CalcError::constraint(
            "a right triangle needs at least two known values",
        ));
    }
    if side_count == 0 {
        return Err(CalcError::constraint(
            "at least one side must be known to fix the triangle's scale",
        ));
    }

    // Resolve the acute angle alpha first, then scale from any known side.
    let alpha = match (alpha, beta) {
        (Some(al), Some(be)) => {
            if (al + be - std::f64::consts::FRAC_PI_2).abs() > 1e-7 {
                return Err(CalcError::constraint(
                    "the two acute angles of a right triangle must sum to 90 degrees",
                ));
            }
            Some(al)
        }
        (Some(al), None) => Some(al),
        (None, Some(be)) => Some(std::f64::consts::FRAC_PI_2 - be),
        (None, None) => None,
    };

    let (a, b, c) = match (input.a, input.b, input.c, alpha) {
        // Two or three sides: Pythagoras, with a consistency check when
        // everything was supplied.
        (Some(a), Some(b), c_opt, _) => {
            let c = a.hypot(b);
            if let Some(c_given) = c_opt {
                if (c_given - c).abs() > 1e-7 * c.max(1.0) {
                    return Err(CalcError::constraint(
                        "supplied sides do not satisfy a^2 + b^2 = c^2",
                    ));
                }
            }
            (a, b, c)
        }
        (Some(a), None, Some(c), _) => {
            if c <= a {
                return Err(CalcError::constraint(
                    "the hypotenuse c must be longer than leg a",
                ));
            }
            (a, (c * c - a * a).sqrt(), c)
        }
        (None, Some(b), Some(c), _) => {
            if c <= b {
                return Err(CalcError::constraint(
                    "the hypotenuse c must be longer than leg b",
                ));
            }
            ((c * c - b * b).sqrt(), b, c)
        }
        // One side plus the resolved acute angle.
        (Some(a), None, None, Some(al)) => (a, a / al.tan(), a / al.sin()),
        (None, Some(b), None, Some(al)) => (b * al.tan(), b, b / al.cos()),
        (None, None, Some(c), Some(al)) => (c * al.sin(), c * al.cos(), c),
        _ => {
            return Err(CalcError::constraint(
                "the known values do not determine the triangle",
            ));
        }
    };

    let derived_alpha = (a / c).asin();

    // Sides win the resolution order, but an angle supplied alongside two
    // sides must still agree with them.
    if let Some(al) = alpha {
        if (al - derived_alpha).abs() > 1e-7 {
            return Err(CalcError::constraint(
                "the supplied angle is inconsistent with the supplied sides",
            ));
        }
    }

    let beta = std::f64::consts::FRAC_PI_2 - derived_alpha;

    Ok(build_solved(
        a,
        b,
        c,
        derived_alpha,
        beta,
        std::f64::consts::FRAC_PI_2,
        unit,
    ))
}

/// Solve an oblique triangle from exactly three known values
///
/// Accepts SSS, SAS, ASA, AAS and SSA configurations; at least one known
/// must be a side. SSA inputs whose sine ratio exceeds 1 describe no
/// triangle and fail with a constraint error.
pub fn solve_oblique(input: &TriangleInput, unit: AngleUnit) -> Result<SolvedTriangle, CalcError> {
    validate_sides(input)?;

    let sides = [input.a, input.b, input.c];
    let angles_in = [input.alpha, input.beta, input.gamma];
    let mut angles = [None; 3];
    for (slot, supplied) in angles.iter_mut().zip(angles_in) {
        if let Some(v) = supplied {
            let rad = unit.to_radians(v);
            if rad <= 0.0 {
                return Err(CalcError::constraint("angles must be positive"));
            }
            *slot = Some(rad);
        }
    }

    let supplied_angle_sum: f64 = angles.iter().flatten().sum();
    if supplied_angle_sum >= std::f64::consts::PI - ANGLE_EPS {
        return Err(CalcError::constraint(
            "supplied angles must sum to less than 180 degrees",
        ));
    }

    let side_count = sides.iter().flatten().count();
    let angle_count = angles.iter().flatten().count();
    if side_count + angle_count != 3 {
        return Err(CalcError::constraint(
            "an oblique triangle needs exactly three known values",
        ));
    }
    if side_count == 0 {
        return Err(CalcError::constraint(
            "at least one side must be known to fix the triangle's scale",
        ));
    }

    let solved = match (side_count, angle_count) {
        (3, 0) => solve_sss(sides.map(|s| s.unwrap_or(0.0)))?,
        (2, 1) => solve_two_sides(&sides, &angles)?,
        (1, 2) => solve_one_side(&sides, &angles)?,
        _ => unreachable!("side/angle counts always total 3 here"),
    };

    let [a, b, c] = solved.0;
    let [alpha, beta, gamma] = solved.1;
    Ok(build_solved(a, b, c, alpha, beta, gamma, unit))
}

/// SSS: all angles via the Law of Cosines
fn solve_sss(s: [f64; 3]) -> Result<([f64; 3], [f64; 3]), CalcError> {
    let [a, b, c] = s;
    if a + b <= c || b + c <= a || a + c <= b {
        return Err(CalcError::constraint(
            "sides violate the triangle inequality",
        ));
    }
    let alpha = law_of_cosines_angle(b, c, a);
    let beta = law_of_cosines_angle(a, c, b);
    let gamma = std::f64::consts::PI - alpha - beta;
    Ok(([a, b, c], [alpha, beta, gamma]))
}

/// Two sides and one angle: SAS if the angle is included, SSA otherwise
fn solve_two_sides(
    sides: &[Option<f64>; 3],
    angles: &[Option<f64>; 3],
) -> Result<([f64; 3], [f64; 3]), CalcError> {
    let missing_side = sides.iter().position(|s| s.is_none()).unwrap_or(0);
    let angle_idx = angles.iter().position(|a| a.is_some()).unwrap_or(0);
    let angle = angles[angle_idx].unwrap_or(0.0);

    let mut s = [0.0; 3];
    let mut t = [0.0; 3];

    if angle_idx == missing_side {
        // SAS: the known angle is between the two known sides.
        let (i, j, k) = other_two(missing_side);
        let (si, sj) = (sides[i].unwrap_or(0.0), sides[j].unwrap_or(0.0));
        let sk = (si * si + sj * sj - 2.0 * si * sj * angle.cos()).sqrt();
        let ti = law_of_cosines_angle(sj, sk, si);
        let tj = std::f64::consts::PI - ti - angle;
        s[i] = si;
        s[j] = sj;
        s[k] = sk;
        t[i] = ti;
        t[j] = tj;
        t[k] = angle;
    } else {
        // SSA: the known angle is opposite one of the known sides. The
        // ambiguous case is resolved to the acute second angle.
        let i = angle_idx; // side opposite the known angle
        let j = (0..3)
            .find(|&x| x != i && x != missing_side)
            .unwrap_or(0);
        let (si, sj) = (sides[i].unwrap_or(0.0), sides[j].unwrap_or(0.0));

        let sin_tj = sj * angle.sin() / si;
        if sin_tj > 1.0 + ANGLE_EPS {
            return Err(CalcError::constraint(
                "no triangle exists with these sides and angle (sine ratio exceeds 1)",
            ));
        }
        let tj = sin_tj.min(1.0).asin();
        let tk = std::f64::consts::PI - angle - tj;
        if tk <= ANGLE_EPS {
            return Err(CalcError::constraint(
                "no triangle exists with these sides and angle (angle sum exhausted)",
            ));
        }
        let sk = si * tk.sin() / angle.sin();
        s[i] = si;
        s[j] = sj;
        s[missing_side] = sk;
        t[i] = angle;
        t[j] = tj;
        t[missing_side] = tk;
    }

    Ok((s, t))
}

/// One side and two angles (ASA/AAS): third angle by the angle sum, then the
/// Law of Sines from the single known side
fn solve_one_side(
    sides: &[Option<f64>; 3],
    angles: &[Option<f64>; 3],
) -> Result<([f64; 3], [f64; 3]), CalcError> {
    let side_idx = sides.iter().position(|s| s.is_some()).unwrap_or(0);
    let missing_angle = angles.iter().position(|a| a.is_none()).unwrap_or(0);

    let mut t = [0.0; 3];
    let mut known_sum = 0.0;
    for (idx, angle) in angles.iter().enumerate() {
        if let Some(v) = angle {
            t[idx] = *v;
            known_sum += *v;
        }
    }
    let third = std::f64::consts::PI - known_sum;
    if third <= ANGLE_EPS {
        return Err(CalcError::constraint(
            "supplied angles leave no room for the third angle",
        ));
    }
    t[missing_angle] = third;

    let ratio = sides[side_idx].unwrap_or(0.0) / t[side_idx].sin();
    let s = [ratio * t[0].sin(), ratio * t[1].sin(), ratio * t[2].sin()];
    Ok((s, t))
}

/// Angle opposite `opposite` from the Law of Cosines, clamped against
/// floating-point drift at degenerate inputs
fn law_of_cosines_angle(s1: f64, s2: f64, opposite: f64) -> f64 {
    let cos = (s1 * s1 + s2 * s2 - opposite * opposite) / (2.0 * s1 * s2);
    cos.clamp(-1.0, 1.0).acos()
}

/// The two indices other than `idx`, plus `idx` itself last
fn other_two(idx: usize) -> (usize, usize, usize) {
    match idx {
        0 => (1, 2, 0),
        1 => (0, 2, 1),
        _ => (0, 1, 2),
    }
}

fn validate_sides(input: &TriangleInput) -> Result<(), CalcError> {
    for side in [input.a, input.b, input.c].into_iter().flatten() {
        if side <= 0.0 || !side.is_finite() {
            return Err(CalcError::constraint("side lengths must be positive"));
        }
    }
    Ok(())
}

fn build_solved(
    a: f64,
    b: f64,
    c: f64,
    alpha: f64,
    beta: f64,
    gamma: f64,
    unit: AngleUnit,
) -> SolvedTriangle {
    SolvedTriangle {
        a,
        b,
        c,
        alpha: unit.from_radians(alpha),
        beta: unit.from_radians(beta),
        gamma: unit.from_radians(gamma),
        area: 0.5 * a * b * gamma.sin(),
        perimeter: a + b + c,
    }
}

/// Solve a right triangle from JavaScript
///
/// `input` is an object with optional fields a/b/c/alpha/beta/gamma; angles
/// use `unit_name` ("degrees" or "radians").
#[wasm_bindgen(js_name = solveRightTriangle)]
pub fn solve_right_js(input: JsValue, unit_name: &str) -> Result<JsValue, JsValue> {
    let input: TriangleInput = serde_wasm_bindgen::from_value(input)
        .map_err(|e| JsValue::from_str(&format!("invalid triangle input: {}", e)))?;
    let unit = AngleUnit::from_name(unit_name)?;
    let solved = solve_right(&input, unit)?;
    serde_wasm_bindgen::to_value(&solved).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Solve an oblique triangle from JavaScript
#[wasm_bindgen(js_name = solveObliqueTriangle)]
pub fn solve_oblique_js(input: JsValue, unit_name: &str) -> Result<JsValue, JsValue> {
    let input: TriangleInput = serde_wasm_bindgen::from_value(input)
        .map_err(|e| JsValue::from_str(&format!("invalid triangle input: {}", e)))?;
    let unit = AngleUnit::from_name(unit_name)?;
    let solved = solve_oblique(&input, unit)?;
    serde_wasm_bindgen::to_value(&solved).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> TriangleInput {
        TriangleInput::default()
    }

    #[test]
    fn test_right_triangle_from_two_legs() {
        let mut t = input();
        t.a = Some(3.0);
        t.b = Some(4.0);
        let solved = solve_right(&t, AngleUnit::Degrees).unwrap();
        assert!((solved.c - 5.0).abs() < 1e-10);
        assert!((solved.area - 6.0).abs() < 1e-10);
        assert!((solved.perimeter - 12.0).abs() < 1e-10);
        // Acute angles complement each other
        assert!((solved.alpha + solved.beta - 90.0).abs() < 1e-9);
        assert!((solved.gamma - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_right_triangle_from_leg_and_hypotenuse() {
        let mut t = input();
        t.a = Some(5.0);
        t.c = Some(13.0);
        let solved = solve_right(&t, AngleUnit::Degrees).unwrap();
        assert!((solved.b - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_right_triangle_from_side_and_angle() {
        let mut t = input();
        t.a = Some(1.0);
        t.alpha = Some(30.0);
        let solved = solve_right(&t, AngleUnit::Degrees).unwrap();
        assert!((solved.c - 2.0).abs() < 1e-10);
        assert!((solved.b - 3.0_f64.sqrt()).abs() < 1e-10);
        assert!((solved.beta - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_right_triangle_pythagoras_holds() {
        let mut t = input();
        t.b = Some(7.3);
        t.beta = Some(41.0);
        let solved = solve_right(&t, AngleUnit::Degrees).unwrap();
        let lhs = solved.a * solved.a + solved.b * solved.b;
        assert!((lhs - solved.c * solved.c).abs() < 1e-8 * solved.c * solved.c);
    }

    #[test]
    fn test_right_triangle_rejections() {
        // Too few knowns
        let mut t = input();
        t.a = Some(3.0);
        assert!(solve_right(&t, AngleUnit::Degrees).is_err());

        // No side among the knowns
        let mut t = input();
        t.alpha = Some(30.0);
        t.beta = Some(60.0);
        assert!(solve_right(&t, AngleUnit::Degrees).is_err());

        // Non-positive side
        let mut t = input();
        t.a = Some(-3.0);
        t.b = Some(4.0);
        assert!(solve_right(&t, AngleUnit::Degrees).is_err());

        // Hypotenuse shorter than a leg
        let mut t = input();
        t.a = Some(5.0);
        t.c = Some(4.0);
        assert!(solve_right(&t, AngleUnit::Degrees).is_err());

        // Non-complementary acute angles
        let mut t = input();
        t.a = Some(1.0);
        t.alpha = Some(50.0);
        t.beta = Some(50.0);
        assert!(solve_right(&t, AngleUnit::Degrees).is_err());
    }

    #[test]
    fn test_right_triangle_angle_must_agree_with_sides() {
        // Two legs plus a contradictory angle: alpha is really ~36.87 degrees
        let mut t = input();
        t.a = Some(3.0);
        t.b = Some(4.0);
        t.alpha = Some(45.0);
        let err = solve_right(&t, AngleUnit::Degrees).unwrap_err();
        assert!(matches!(err, CalcError::Constraint(_)));

        // Leg plus hypotenuse plus a contradictory angle
        let mut t = input();
        t.a = Some(5.0);
        t.c = Some(13.0);
        t.alpha = Some(60.0);
        assert!(solve_right(&t, AngleUnit::Degrees).is_err());

        // A contradictory beta is caught through the complement
        let mut t = input();
        t.a = Some(3.0);
        t.b = Some(4.0);
        t.beta = Some(10.0);
        assert!(solve_right(&t, AngleUnit::Degrees).is_err());

        // Consistent over-specification still solves
        let mut t = input();
        t.a = Some(1.0);
        t.b = Some(3.0_f64.sqrt());
        t.alpha = Some(30.0);
        let solved = solve_right(&t, AngleUnit::Degrees).unwrap();
        assert!((solved.c - 2.0).abs() < 1e-10);
        assert!((solved.beta - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_oblique_sss() {
        let mut t = input();
        t.a = Some(7.0);
        t.b = Some(8.0);
        t.c = Some(9.0);
        let solved = solve_oblique(&t, AngleUnit::Degrees).unwrap();
        assert!((solved.alpha + solved.beta + solved.gamma - 180.0).abs() < 1e-8);
        // Largest angle faces the largest side
        assert!(solved.gamma > solved.beta && solved.beta > solved.alpha);
        // Heron's check on the reported area
        let s = solved.perimeter / 2.0;
        let heron = (s * (s - 7.0) * (s - 8.0) * (s - 9.0)).sqrt();
        assert!((solved.area - heron).abs() < 1e-8);
    }

    #[test]
    fn test_oblique_sss_triangle_inequality() {
        let mut t = input();
        t.a = Some(1.0);
        t.b = Some(2.0);
        t.c = Some(10.0);
        assert!(solve_oblique(&t, AngleUnit::Degrees).is_err());
    }

    #[test]
    fn test_oblique_sas() {
        // a=3, b=4, included angle gamma=90 reproduces the 3-4-5 triangle
        let mut t = input();
        t.a = Some(3.0);
        t.b = Some(4.0);
        t.gamma = Some(90.0);
        let solved = solve_oblique(&t, AngleUnit::Degrees).unwrap();
        assert!((solved.c - 5.0).abs() < 1e-10);
        assert!((solved.alpha - (3.0_f64 / 4.0).atan().to_degrees()).abs() < 1e-8);
    }

    #[test]
    fn test_oblique_asa() {
        // Equilateral: two 60-degree angles and the side between them
        let mut t = input();
        t.alpha = Some(60.0);
        t.beta = Some(60.0);
        t.c = Some(2.0);
        let solved = solve_oblique(&t, AngleUnit::Degrees).unwrap();
        assert!((solved.a - 2.0).abs() < 1e-10);
        assert!((solved.b - 2.0).abs() < 1e-10);
        assert!((solved.gamma - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_oblique_aas() {
        let mut t = input();
        t.alpha = Some(40.0);
        t.beta = Some(60.0);
        t.a = Some(5.0);
        let solved = solve_oblique(&t, AngleUnit::Degrees).unwrap();
        assert!((solved.gamma - 80.0).abs() < 1e-9);
        // Law of sines ratio is shared
        let r1 = solved.a / solved.alpha.to_radians().sin();
        let r2 = solved.b / solved.beta.to_radians().sin();
        let r3 = solved.c / solved.gamma.to_radians().sin();
        assert!((r1 - r2).abs() < 1e-8);
        assert!((r2 - r3).abs() < 1e-8);
    }

    #[test]
    fn test_oblique_ssa_acute_policy() {
        // a=6, b=7, alpha=30: both an acute and an obtuse beta satisfy the
        // law of sines; the solver returns the acute one.
        let mut t = input();
        t.a = Some(6.0);
        t.b = Some(7.0);
        t.alpha = Some(30.0);
        let solved = solve_oblique(&t, AngleUnit::Degrees).unwrap();
        assert!(solved.beta < 90.0);
        let expected_beta = (7.0 * 30.0_f64.to_radians().sin() / 6.0).asin().to_degrees();
        assert!((solved.beta - expected_beta).abs() < 1e-8);
        assert!((solved.alpha + solved.beta + solved.gamma - 180.0).abs() < 1e-8);
    }

    #[test]
    fn test_oblique_ssa_no_solution() {
        // sin(beta) would need to exceed 1
        let mut t = input();
        t.a = Some(2.0);
        t.b = Some(10.0);
        t.alpha = Some(60.0);
        let err = solve_oblique(&t, AngleUnit::Degrees).unwrap_err();
        assert!(matches!(err, CalcError::Constraint(_)));
    }

    #[test]
    fn test_oblique_rejections() {
        // Fewer than three knowns
        let mut t = input();
        t.a = Some(3.0);
        t.b = Some(4.0);
        assert!(solve_oblique(&t, AngleUnit::Degrees).is_err());

        // No side (AAA)
        let mut t = input();
        t.alpha = Some(60.0);
        t.beta = Some(60.0);
        t.gamma = Some(60.0);
        assert!(solve_oblique(&t, AngleUnit::Degrees).is_err());

        // Angles summing past 180
        let mut t = input();
        t.a = Some(3.0);
        t.alpha = Some(120.0);
        t.beta = Some(70.0);
        assert!(solve_oblique(&t, AngleUnit::Degrees).is_err());
    }

    #[test]
    fn test_oblique_radians() {
        let mut t = input();
        t.alpha = Some(std::f64::consts::FRAC_PI_3);
        t.beta = Some(std::f64::consts::FRAC_PI_3);
        t.c = Some(1.0);
        let solved = solve_oblique(&t, AngleUnit::Radians).unwrap();
        assert!((solved.gamma - std::f64::consts::FRAC_PI_3).abs() < 1e-9);
        assert!((solved.a - 1.0).abs() < 1e-10);
    }
}
