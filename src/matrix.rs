use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cell::Cell;
use crate::vector::Vector3;

/// Calculate the determinant of a 3x3 matrix given as three rows, using the rule of Sarrus.
///
/// This is the full six-term Leibniz expansion. The evaluator in [`crate::numeral`] expands by
/// cofactors instead, so the two serve as independent checks on each other.
pub fn det3(row0: &[f64; 3], row1: &[f64; 3], row2: &[f64; 3]) -> f64 {
    let [a0, a1, a2] = *row0;
    let [b0, b1, b2] = *row1;
    let [c0, c1, c2] = *row2;

    a0 * b1 * c2 + a1 * b2 * c0 + a2 * b0 * c1 - a2 * b1 * c0 - a1 * b0 * c2 - a0 * b2 * c1
}

/// Error type for a grid holding NaN or an infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cell {0} is not a finite number")]
pub struct NonFiniteCell(pub Cell);

/// An immutable 3×3 grid of `f64` values, addressed by [`Cell`].
///
/// Built once per calculation and never mutated afterwards; operations like
/// [`Matrix::swap_rows`] return a new value. [`crate::parser::parse`], [`Matrix::try_from_rows`]
/// and deserialization only produce finite grids. [`Matrix::from_rows`] and
/// [`Matrix::from_row_major`] do not check, and are meant for values already known to be finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[[f64; 3]; 3]")]
pub struct Matrix([[f64; 3]; 3]);

impl Matrix {
    pub const IDENTITY: Self = Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// Create from rows, rejecting NaN and infinities. The first bad cell in row-major order is
    /// reported.
    pub fn try_from_rows(rows: [[f64; 3]; 3]) -> Result<Self, NonFiniteCell> {
        let m = Matrix(rows);
        match Cell::ALL.into_iter().find(|&cell| !m[cell].is_finite()) {
            Some(cell) => Err(NonFiniteCell(cell)),
            None => Ok(m),
        }
    }

    /// Create from rows without checking that they are finite.
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Matrix(rows)
    }

    /// Create from nine values in row-major order, unchecked like [`Matrix::from_rows`].
    pub fn from_row_major(values: [f64; 9]) -> Self {
        let mut rows = [[0.0; 3]; 3];
        for (cell, value) in Cell::ALL.into_iter().zip(values) {
            rows[cell.row() - 1][cell.col() - 1] = value;
        }
        Matrix(rows)
    }

    /// The value at `cell`.
    pub fn get(&self, cell: Cell) -> f64 {
        self.0[cell.row() - 1][cell.col() - 1]
    }

    /// Row `r` (1-based) as a vector. Panics if `r` is not in 1..=3.
    pub fn row(&self, r: usize) -> Vector3 {
        Vector3::from_array(self.0[r - 1])
    }

    /// The underlying rows
    pub fn rows(&self) -> &[[f64; 3]; 3] {
        &self.0
    }

    /// A copy with rows `r1` and `r2` (1-based) exchanged.
    pub fn swap_rows(&self, r1: usize, r2: usize) -> Self {
        let mut rows = self.0;
        rows.swap(r1 - 1, r2 - 1);
        Matrix(rows)
    }

    pub fn transpose(&self) -> Self {
        let mut rows = [[0.0; 3]; 3];
        for (i, row) in self.0.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                rows[j][i] = value;
            }
        }
        Matrix(rows)
    }

    /// Determinant by the rule of Sarrus.
    pub fn leibniz_det(&self) -> f64 {
        det3(&self.0[0], &self.0[1], &self.0[2])
    }
}

impl TryFrom<[[f64; 3]; 3]> for Matrix {
    type Error = NonFiniteCell;
    fn try_from(rows: [[f64; 3]; 3]) -> Result<Self, Self::Error> {
        Matrix::try_from_rows(rows)
    }
}

impl Index<Cell> for Matrix {
    type Output = f64;
    fn index(&self, cell: Cell) -> &Self::Output {
        &self.0[cell.row() - 1][cell.col() - 1]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.0 {
            writeln!(f, "| {} , {} , {} |", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_det3_identity() {
        // Identity matrix has determinant 1
        assert_eq!(Matrix::IDENTITY.leibniz_det(), 1.0);
    }

    #[test]
    fn test_det3_zero() {
        // Matrix with two identical rows has determinant 0
        let m = Matrix::from_rows([[1.0, 2.0, 3.0], [1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(m.leibniz_det(), 0.0);
    }

    #[test]
    fn test_det3_negative() {
        // Swapping two rows of the identity flips the sign
        assert_eq!(Matrix::IDENTITY.swap_rows(2, 3).leibniz_det(), -1.0);
    }

    #[test]
    fn test_transpose_keeps_determinant() {
        let m = Matrix::from_rows([[2.0, -1.0, 0.5], [3.0, 4.0, 1.0], [0.0, 7.0, -2.0]]);
        assert_eq!(m.transpose().transpose(), m);
        assert!((m.transpose().leibniz_det() - m.leibniz_det()).abs() < 1e-12);
    }

    #[test]
    fn test_checked_constructor() {
        let rows = [[1.0, 2.0, 3.0], [4.0, f64::NAN, 6.0], [7.0, 8.0, f64::INFINITY]];
        assert_eq!(Matrix::try_from_rows(rows), Err(NonFiniteCell(Cell::A22)));
        let rows = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, f64::NEG_INFINITY]];
        assert_eq!(Matrix::try_from(rows), Err(NonFiniteCell(Cell::A33)));
        assert_eq!(
            Matrix::try_from_rows(*Matrix::IDENTITY.rows()),
            Ok(Matrix::IDENTITY)
        );
    }

    #[test]
    fn test_serde_uses_plain_rows() {
        let m: Matrix = serde_json::from_str("[[1,0,0],[0,1,0],[0,0,1]]").unwrap();
        assert_eq!(m, Matrix::IDENTITY);
        assert_eq!(
            serde_json::to_string(&Matrix::IDENTITY).unwrap(),
            "[[1.0,0.0,0.0],[0.0,1.0,0.0],[0.0,0.0,1.0]]"
        );
    }

    #[test]
    fn test_cell_addressing() {
        let m = Matrix::from_row_major([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(m[Cell::A11], 1.0);
        assert_eq!(m.get(Cell::A23), 6.0);
        assert_eq!(m[Cell::A32], 8.0);
        assert_eq!(m.row(3), Vector3::new(7.0, 8.0, 9.0));
        assert_eq!(m.swap_rows(2, 3).row(2), Vector3::new(7.0, 8.0, 9.0));
    }
}
