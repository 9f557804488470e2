//! Augmented-matrix row reduction and linear-system classification
//!
//! Reduces an m x n augmented matrix (last column holds the constants) to
//! reduced row-echelon form via Gaussian elimination with partial pivoting,
//! then classifies the system as having a unique solution, infinitely many
//! (free variable present), or none (a zero row with a nonzero constant).

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Pivot threshold: entries below this are treated as zero
const PIVOT_EPS: f64 = 1e-12;

/// Outcome of solving a linear system from its augmented matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LinearSolution {
    /// Exactly one solution, listed per unknown
    Unique { values: Vec<f64> },
    /// At least one free variable
    Infinite,
    /// A row reduced to [0 ... 0 | c] with c != 0
    Inconsistent,
}

/// Dense row-major augmented matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Build from a flat row-major buffer
    pub fn from_flat(rows: usize, cols: usize, data: Vec<f64>) -> Result<Matrix, CalcError> {
        if rows == 0 || cols < 2 {
            return Err(CalcError::constraint(
                "an augmented matrix needs at least one row and two columns",
            ));
        }
        if data.len() != rows * cols {
            return Err(CalcError::constraint(format!(
                "expected {} entries for a {}x{} matrix, got {}",
                rows * cols,
                rows,
                cols,
                data.len()
            )));
        }
        if data.iter().any(|v| !v.is_finite()) {
            return Err(CalcError::domain("matrix entries must be finite"));
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Build from a grid of rows, which must all share one length
    pub fn from_rows(grid: &[Vec<f64>]) -> Result<Matrix, CalcError> {
        let rows = grid.len();
        let cols = grid.first().map(|r| r.len()).unwrap_or(0);
        if grid.iter().any(|r| r.len() != cols) {
            return Err(CalcError::constraint("matrix rows must all have the same length"));
        }
        Matrix::from_flat(rows, cols, grid.concat())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry at (row, col)
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    fn swap_rows(&mut self, r1: usize, r2: usize) {
        if r1 == r2 {
            return;
        }
        for col in 0..self.cols {
            self.data.swap(r1 * self.cols + col, r2 * self.cols + col);
        }
    }

    /// Scale a row by a factor
    fn scale_row(&mut self, row: usize, factor: f64) {
        for col in 0..self.cols {
            let v = self.get(row, col) * factor;
            self.set(row, col, v);
        }
    }

    /// Add `factor` times `src` into `dst`
    fn add_scaled_row(&mut self, dst: usize, src: usize, factor: f64) {
        for col in 0..self.cols {
            let v = self.get(dst, col) + factor * self.get(src, col);
            self.set(dst, col, v);
        }
    }

    /// Reduce in place to reduced row-echelon form
    ///
    /// Uses partial pivoting: each pivot column's largest-magnitude entry is
    /// swapped up before elimination, which keeps the multipliers bounded.
    /// Returns the column index of each pivot, in row order.
    pub fn rref(&mut self) -> Vec<usize> {
        let mut pivot_cols = Vec::new();
        let mut pivot_row = 0;

        for col in 0..self.cols {
            if pivot_row >= self.rows {
                break;
            }

            // Partial pivoting: largest absolute entry at or below pivot_row
            let mut best = pivot_row;
            for row in pivot_row + 1..self.rows {
                if self.get(row, col).abs() > self.get(best, col).abs() {
                    best = row;
                }
            }
            if self.get(best, col).abs() < PIVOT_EPS {
                continue; // no pivot in this column
            }
            self.swap_rows(pivot_row, best);

            // Normalize the pivot row, then clear the column above and below
            let pivot = self.get(pivot_row, col);
            self.scale_row(pivot_row, 1.0 / pivot);
            self.set(pivot_row, col, 1.0); // kill the residual off-by-ulp
            for row in 0..self.rows {
                if row != pivot_row {
                    let factor = -self.get(row, col);
                    if factor != 0.0 {
                        self.add_scaled_row(row, pivot_row, factor);
                        self.set(row, col, 0.0);
                    }
                }
            }

            pivot_cols.push(col);
            pivot_row += 1;
        }

        pivot_cols
    }

    /// Reduce to RREF and classify the augmented system
    ///
    /// The last column is the constants vector; the unknowns are the
    /// remaining `cols - 1` columns.
    pub fn solve(&mut self) -> LinearSolution {
        let unknowns = self.cols - 1;
        let pivot_cols = self.rref();

        // A pivot in the constants column means a row [0 .. 0 | 1]
        if pivot_cols.contains(&unknowns) {
            return LinearSolution::Inconsistent;
        }
        if pivot_cols.len() < unknowns {
            return LinearSolution::Infinite;
        }

        // One pivot per unknown: read the solution off the constants column
        let values = (0..unknowns).map(|row| self.get(row, unknowns)).collect();
        LinearSolution::Unique { values }
    }
}

/// Solve a linear system from JavaScript
///
/// `data` is the augmented matrix in row-major order with `cols` entries per
/// row, the last one the constant. Returns `{kind: "unique", values: [...]}`,
/// `{kind: "infinite"}` or `{kind: "inconsistent"}`.
#[wasm_bindgen(js_name = solveLinearSystem)]
pub fn solve_linear_system_js(rows: usize, cols: usize, data: Vec<f64>) -> Result<JsValue, JsValue> {
    let mut matrix = Matrix::from_flat(rows, cols, data)?;
    let solution = matrix.solve();
    serde_wasm_bindgen::to_value(&solution).map_err(|e| JsValue::from_str(&e.to_string()))
}
