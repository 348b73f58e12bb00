use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for attempts to name a cell outside the 3×3 grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellError {
    /// Row or column was not in 1..=3.
    #[error("cell ({0}, {1}) is outside the 3x3 grid")]
    OutOfRange(usize, usize),
    /// The name did not look like `a{row}{col}`.
    #[error("`{0}` is not a cell name")]
    BadName(String),
}

/// A (row, column) coordinate of the 3×3 grid, both 1-based.
///
/// Values can only be built from the nine associated constants or through
/// [`Cell::try_new`], so every `Cell` is in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    pub const A11: Self = Self { row: 1, col: 1 };
    pub const A12: Self = Self { row: 1, col: 2 };
    pub const A13: Self = Self { row: 1, col: 3 };
    pub const A21: Self = Self { row: 2, col: 1 };
    pub const A22: Self = Self { row: 2, col: 2 };
    pub const A23: Self = Self { row: 2, col: 3 };
    pub const A31: Self = Self { row: 3, col: 1 };
    pub const A32: Self = Self { row: 3, col: 2 };
    pub const A33: Self = Self { row: 3, col: 3 };

    /// All nine cells in row-major order.
    pub const ALL: [Self; 9] = [
        Self::A11,
        Self::A12,
        Self::A13,
        Self::A21,
        Self::A22,
        Self::A23,
        Self::A31,
        Self::A32,
        Self::A33,
    ];

    /// Checked constructor from 1-based coordinates.
    pub fn try_new(row: usize, col: usize) -> Result<Self, CellError> {
        if (1..=3).contains(&row) && (1..=3).contains(&col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(CellError::OutOfRange(row, col))
        }
    }

    /// The 1-based row.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// The 1-based column.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major position in `0..9`.
    pub fn index(self) -> usize {
        (self.row() - 1) * 3 + (self.col() - 1)
    }

    /// Inverse of [`Cell::index`]. Panics if `index >= 9`.
    pub(crate) fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a{}{}", self.row, self.col)
    }
}

impl FromStr for Cell {
    type Err = CellError;

    /// Accepts the names the input form uses, `a11` through `a33`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || CellError::BadName(s.to_string());
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some('a' | 'A'), Some(r), Some(c), None) => {
                let row = r.to_digit(10).ok_or_else(bad)? as usize;
                let col = c.to_digit(10).ok_or_else(bad)? as usize;
                Self::try_new(row, col)
            }
            _ => Err(bad()),
        }
    }
}

impl TryFrom<String> for Cell {
    type Error = CellError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        cell.to_string()
    }
}
