//! Angle units and conversions
//!
//! Calculator forms let the user pick degrees or radians; every trigonometric
//! routine converts to radians internally and converts inverse results back
//! to the requested unit.

use crate::error::CalcError;
use serde::{Deserialize, Serialize};

/// Unit tag for angle-valued inputs and outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Parse a unit name from the JS boundary ("deg"/"degrees", "rad"/"radians")
    pub fn from_name(name: &str) -> Result<AngleUnit, CalcError> {
        match name {
            "deg" | "degree" | "degrees" => Ok(AngleUnit::Degrees),
            "rad" | "radian" | "radians" => Ok(AngleUnit::Radians),
            _ => Err(CalcError::parse(format!("unknown angle unit: '{}'", name))),
        }
    }

    /// Get the unit name as a string
    pub fn name(&self) -> &'static str {
        match self {
            AngleUnit::Degrees => "degrees",
            AngleUnit::Radians => "radians",
        }
    }

    /// Convert a magnitude in this unit to radians
    pub fn to_radians(&self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => value * std::f64::consts::PI / 180.0,
            AngleUnit::Radians => value,
        }
    }

    /// Convert a magnitude in radians to this unit
    pub fn from_radians(&self, radians: f64) -> f64 {
        match self {
            AngleUnit::Degrees => radians * 180.0 / std::f64::consts::PI,
            AngleUnit::Radians => radians,
        }
    }

    /// The measure of a straight angle (180°) in this unit
    pub fn straight_angle(&self) -> f64 {
        match self {
            AngleUnit::Degrees => 180.0,
            AngleUnit::Radians => std::f64::consts::PI,
        }
    }

    /// The measure of a right angle (90°) in this unit
    pub fn right_angle(&self) -> f64 {
        self.straight_angle() / 2.0
    }
}
