//! Cross product of the vectors held in rows 2 and 3.
//!
//! Row 1 holds the basis symbols `i, j, k` on the form, so its numeric values take no part here.
//! Expanding
//!
//! ```text
//! | i   j   k  |
//! | b1  b2  b3 |
//! | c1  c2  c3 |
//! ```
//!
//! along the first row gives `(b2·c3 − b3·c2) i + (b3·c1 − b1·c3) j + (b1·c2 − b2·c1) k`.
use crate::matrix::Matrix;
use crate::vector::Vector3;

/// `b × c` where `b` is row 2 and `c` is row 3 of `m`.
///
/// Parallel rows give the zero vector, which is a valid result and not a failure.
pub fn cross_product(m: &Matrix) -> Vector3 {
    let b = m.row(2);
    let c = m.row(3);
    b.cross(&c)
}
