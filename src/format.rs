use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::engine::CalculationResult;
use crate::numeral::{ExpansionTerm, NumeralResult, Sign};
use crate::vector::Vector3;

/// More fraction digits than this are noise for an `f64`.
pub const MAX_FRACTION_DIGITS: usize = 15;

/// Formatter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Values are rounded to this many fraction digits before trailing zeros are trimmed.
    /// Clamped to [`MAX_FRACTION_DIGITS`].
    pub max_fraction_digits: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            max_fraction_digits: 6,
        }
    }
}

/// Display strings for a [`CalculationResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormattedResult {
    Vector { x: String, y: String, z: String },
    Numeral { expression: String, answer: String },
}

impl fmt::Display for FormattedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormattedResult::Vector { x, y, z } => write!(f, "x = {x}, y = {y}, z = {z}"),
            FormattedResult::Numeral { expression, answer } => {
                write!(f, "{expression} = {answer}")
            }
        }
    }
}

/// Renders a scalar: `.` separator, no trailing fractional zeros, never a bare point, no `-0`.
///
/// ```
/// use crossdet::format::{format_scalar, FormatOptions};
/// let options = FormatOptions::default();
/// assert_eq!(format_scalar(3.0, &options), "3");
/// assert_eq!(format_scalar(2.50, &options), "2.5");
/// assert_eq!(format_scalar(-0.0, &options), "0");
/// ```
pub fn format_scalar(value: f64, options: &FormatOptions) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let digits = options.max_fraction_digits.min(MAX_FRACTION_DIGITS);
    let mut text = format!("{value:.digits$}");
    if text.contains('.') {
        let len = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(len);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}

/// A number as it appears inside the expression; negatives get parentheses.
fn operand(value: f64, options: &FormatOptions) -> String {
    let text = format_scalar(value, options);
    if text.starts_with('-') {
        format!("({text})")
    } else {
        text
    }
}

/// `c×(p - q)` for the products that share the row-1 coefficient `c`.
fn render_group(group: &[ExpansionTerm], options: &FormatOptions) -> String {
    let lead = group[0].sign;
    let inner = group
        .iter()
        .enumerate()
        .map(|(i, term)| {
            let product = format!(
                "{}×{}",
                operand(term.factors[0], options),
                operand(term.factors[1], options)
            );
            if i == 0 {
                product
            } else {
                let relative = if term.sign == lead {
                    Sign::Plus
                } else {
                    Sign::Minus
                };
                format!("{relative} {product}")
            }
        })
        .join(" ");
    format!("{}×({inner})", operand(group[0].coefficient, options))
}

/// The trace as a left-to-right algebraic string, e.g.
/// `1×(5×9 - 6×8) - 2×(4×9 - 6×7) + 3×(4×8 - 5×7)`.
pub fn render_expression(terms: &[ExpansionTerm], options: &FormatOptions) -> String {
    if terms.is_empty() {
        return "0".to_string();
    }
    let mut out = String::new();
    for (i, group) in terms.chunks(2).enumerate() {
        let sign = group[0].sign;
        match (i, sign) {
            (0, Sign::Plus) => {}
            (0, Sign::Minus) => out.push('-'),
            _ => out.push_str(&format!(" {sign} ")),
        }
        out.push_str(&render_group(group, options));
    }
    out
}

pub fn format_vector(v: &Vector3, options: &FormatOptions) -> FormattedResult {
    FormattedResult::Vector {
        x: format_scalar(v.x, options),
        y: format_scalar(v.y, options),
        z: format_scalar(v.z, options),
    }
}

pub fn format_numeral(result: &NumeralResult, options: &FormatOptions) -> FormattedResult {
    FormattedResult::Numeral {
        expression: render_expression(&result.expression, options),
        answer: format_scalar(result.answer, options),
    }
}

/// Renders either kind of result.
pub fn format(result: &CalculationResult, options: &FormatOptions) -> FormattedResult {
    match result {
        CalculationResult::Vector(v) => format_vector(v, options),
        CalculationResult::Numeral(n) => format_numeral(n, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;
    use crate::numeral::determinant_with_trace;
    use crate::parser::{ParseOptions, parse_scalar};
    use proptest::prelude::*;

    fn opts() -> FormatOptions {
        FormatOptions::default()
    }

    #[test]
    fn test_trimming() {
        assert_eq!(format_scalar(3.0, &opts()), "3");
        assert_eq!(format_scalar(2.5, &opts()), "2.5");
        assert_eq!(format_scalar(-12.125, &opts()), "-12.125");
        assert_eq!(format_scalar(100.0, &opts()), "100");
        assert_eq!(format_scalar(0.0, &opts()), "0");
        assert_eq!(format_scalar(1e20, &opts()), "100000000000000000000");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(format_scalar(0.1 * 0.2, &opts()), "0.02");
        assert_eq!(format_scalar(1.0 / 3.0, &opts()), "0.333333");
        assert_eq!(format_scalar(2.0 / 3.0, &opts()), "0.666667");
        let two = FormatOptions {
            max_fraction_digits: 2,
        };
        assert_eq!(format_scalar(1.999, &two), "2");
        let none = FormatOptions {
            max_fraction_digits: 0,
        };
        assert_eq!(format_scalar(7.25, &none), "7");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_scalar(-0.0, &opts()), "0");
        assert_eq!(format_scalar(-0.0000001, &opts()), "0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_scalar(f64::INFINITY, &opts()), "inf");
        assert_eq!(format_scalar(f64::NEG_INFINITY, &opts()), "-inf");
        assert_eq!(format_scalar(f64::NAN, &opts()), "NaN");
    }

    #[test]
    fn test_vector() {
        let formatted = format(
            &CalculationResult::Vector(Vector3::new(1.0, -0.0, 2.5)),
            &opts(),
        );
        assert_eq!(
            formatted,
            FormattedResult::Vector {
                x: "1".into(),
                y: "0".into(),
                z: "2.5".into()
            }
        );
        assert_eq!(formatted.to_string(), "x = 1, y = 0, z = 2.5");
    }

    #[test]
    fn test_expression() {
        let m = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let formatted = format(
            &CalculationResult::Numeral(determinant_with_trace(&m)),
            &opts(),
        );
        assert_eq!(
            formatted.to_string(),
            "1×(5×9 - 6×8) - 2×(4×9 - 6×7) + 3×(4×8 - 5×7) = 0"
        );
    }

    #[test]
    fn test_expression_with_negatives_and_decimals() {
        let m = Matrix::from_rows([[2.0, -3.0, 1.0], [2.0, 0.0, -1.0], [1.0, 4.0, 5.5]]);
        let formatted = format_numeral(&determinant_with_trace(&m), &opts());
        let FormattedResult::Numeral { expression, answer } = formatted else {
            panic!("expected a numeral");
        };
        assert_eq!(
            expression,
            "2×(0×5.5 - (-1)×4) - (-3)×(2×5.5 - (-1)×1) + 1×(2×4 - 0×1)"
        );
        assert_eq!(answer, "52");
    }

    #[test]
    fn test_displayed_answer_follows_grouped_expression() {
        let m = Matrix::from_rows([[1e300, 0.0, 0.0], [0.0, 1e10, 1e10], [0.0, 1.0, 1.0]]);
        let FormattedResult::Numeral { expression, answer } =
            format_numeral(&determinant_with_trace(&m), &opts())
        else {
            panic!("expected a numeral");
        };
        assert!(expression.contains("×(10000000000×1 - 10000000000×1)"));
        assert_eq!(answer, "0");
    }

    #[test]
    fn test_output_ignores_input_locale() {
        let value = parse_scalar(
            "2,75",
            &ParseOptions::with_separator(',').unwrap(),
        )
        .unwrap();
        assert_eq!(format_scalar(value, &opts()), "2.75");
    }

    proptest! {
        #[test]
        fn prop_reparse_within_precision(value in -1.0e6..1.0e6f64) {
            let text = format_scalar(value, &opts());
            prop_assert!(!text.ends_with('.'));
            let reparsed = parse_scalar(&text, &ParseOptions::default()).unwrap();
            prop_assert!((reparsed - value).abs() <= 0.5e-6 + 1e-9, "{} -> {}", value, text);
            // formatting is a fixed point after one round
            prop_assert_eq!(format_scalar(reparsed, &opts()), text);
        }
    }
}
