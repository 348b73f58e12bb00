//! Determinant by cofactor expansion along row 1, with the worked-solution trace.
use std::fmt;
use std::ops::Neg;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::matrix::Matrix;

/// The sign a term carries in the expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// `value` with this sign applied.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Sign::Plus => value,
            Sign::Minus => -value,
        }
    }

    /// The sign of `(-1)^(row + col)`.
    fn checkerboard(cell: Cell) -> Self {
        if (cell.row() + cell.col()) % 2 == 0 {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }
}

impl Neg for Sign {
    type Output = Self;
    fn neg(self) -> Self {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }
}

/// Renders as ASCII `+` / `-` so the text pastes anywhere plain text goes.
impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Plus => write!(f, "+"),
            Sign::Minus => write!(f, "-"),
        }
    }
}

/// One of the six signed products of the expansion.
///
/// `coefficient` is the row-1 entry whose minor this product belongs to, `factors` are the two
/// minor entries, and `product` is `factors[0] * factors[1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpansionTerm {
    pub sign: Sign,
    pub coefficient: f64,
    pub factors: [f64; 2],
    pub product: f64,
}

impl ExpansionTerm {
    fn new(sign: Sign, coefficient: f64, left: f64, right: f64) -> Self {
        ExpansionTerm {
            sign,
            coefficient,
            factors: [left, right],
            product: left * right,
        }
    }

    /// `±coefficient · product` on its own. The determinant does not add these up directly; see
    /// [`sum_terms`].
    pub fn value(&self) -> f64 {
        self.sign.apply(self.coefficient * self.product)
    }
}

/// A determinant together with the trace that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumeralResult {
    pub expression: Vec<ExpansionTerm>,
    pub answer: f64,
}

/// The minor of a row-1 entry as its two diagonal products, main diagonal first.
const MINORS: [(Cell, [(Cell, Cell); 2]); 3] = [
    (
        Cell::A11,
        [(Cell::A22, Cell::A33), (Cell::A23, Cell::A32)],
    ),
    (
        Cell::A12,
        [(Cell::A21, Cell::A33), (Cell::A23, Cell::A31)],
    ),
    (
        Cell::A13,
        [(Cell::A21, Cell::A32), (Cell::A22, Cell::A31)],
    ),
];

/// Sums the trace in the shape it is displayed: each pair of products sharing a row-1
/// coefficient becomes `±coefficient·(p ∓ q)`, and the groups are added left to right.
///
/// The minor is reduced before it meets the coefficient, so a minor that cancels to zero gives
/// zero even when `coefficient·p` alone would overflow.
pub fn sum_terms(terms: &[ExpansionTerm]) -> f64 {
    terms.chunks(2).fold(0.0, |acc, group| {
        let lead = group[0].sign;
        let minor = group.iter().fold(0.0, |inner, term| {
            if term.sign == lead {
                inner + term.product
            } else {
                inner - term.product
            }
        });
        acc + lead.apply(group[0].coefficient * minor)
    })
}

/// Expands `det(m)` by cofactors along row 1.
///
/// The six terms come out in the order a reader expands by hand:
/// `a11·a22·a33, a11·a23·a32, a12·a21·a33, a12·a23·a31, a13·a21·a32, a13·a22·a31`, signed
/// `+ − − + + −`. `answer` is `a11·(a22·a33 − a23·a32) − a12·(a21·a33 − a23·a31) +
/// a13·(a21·a32 − a22·a31)`, evaluated through [`sum_terms`] so the trace re-sums to it exactly.
pub fn determinant_with_trace(m: &Matrix) -> NumeralResult {
    let mut expression = Vec::with_capacity(6);
    for (head, [(l1, r1), (l2, r2)]) in MINORS {
        let sign = Sign::checkerboard(head);
        expression.push(ExpansionTerm::new(sign, m[head], m[l1], m[r1]));
        expression.push(ExpansionTerm::new(-sign, m[head], m[l2], m[r2]));
    }
    for term in &expression {
        log::trace!(
            "{} {}·{}·{}",
            term.sign,
            term.coefficient,
            term.factors[0],
            term.factors[1]
        );
    }
    let answer = sum_terms(&expression);
    NumeralResult { expression, answer }
}
