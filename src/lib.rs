//! calc-core - Rust/WASM numeric core for calculator widgets
//!
//! This crate provides the math behind the calculator pages:
//! - Trigonometric function dispatch (direct, inverse, hyperbolic)
//! - Right and oblique triangle solvers
//! - Arbitrary-precision integer arithmetic (decimal and E-notation input)
//! - Rounding with eight tie-breaking policies, plus nearest-fraction mode
//! - Descriptive statistics and z confidence intervals
//! - Augmented-matrix row reduction and linear-system classification
//! - Integer arithmetic in bases 2-36
//!
//! Every routine is a pure, synchronous function: no shared state, no I/O.
//! Each module exposes a thin wasm-bindgen wrapper for the browser and a
//! plain Rust API returning `Result<_, CalcError>` for native callers.

use wasm_bindgen::prelude::*;

pub mod angle;
pub mod bigint;
pub mod error;
pub mod matrix;
pub mod radix;
pub mod rounding;
pub mod stats;
pub mod triangle;
pub mod trig;

// Re-export main types for convenience
pub use angle::AngleUnit;
pub use bigint::BigIntOp;
pub use error::CalcError;
pub use matrix::{LinearSolution, Matrix};
pub use radix::RadixOp;
pub use rounding::RoundingMode;
pub use stats::{ConfidenceInterval, DataSummary};
pub use triangle::{SolvedTriangle, TriangleInput};
pub use trig::TrigFunction;

/// Initialize the WASM module
/// Call this once when loading the module to set up panic hooks
#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages
    console_error_panic_hook::set_once();
}

/// Get the version of the calc-core library
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
