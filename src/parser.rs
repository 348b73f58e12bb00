use std::ops::{Index, IndexMut};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::cell::Cell;
use crate::matrix::Matrix;

/// Why a cell's text was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseFailure {
    /// The text was empty or only whitespace. Never read as zero.
    Empty,
    /// The text was not a plain signed decimal number.
    Malformed,
}

/// The only error the engine raises: one cell's text could not be read as a number.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{}", describe(.cell, .raw_text, .reason))]
pub struct ParseError {
    pub cell: Cell,
    pub raw_text: String,
    pub reason: ParseFailure,
}

fn describe(cell: &Cell, raw_text: &str, reason: &ParseFailure) -> String {
    match reason {
        ParseFailure::Empty => format!("cell {cell} is empty"),
        ParseFailure::Malformed => format!("cell {cell} is not a number: `{raw_text}`"),
    }
}

/// Error type for a decimal separator that would clash with the number grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("`{0}` cannot be a decimal separator")]
pub struct BadSeparator(pub char);

fn check_separator(separator: char) -> Result<char, BadSeparator> {
    if separator == '+' || separator == '-' || separator.is_numeric() || separator.is_whitespace()
    {
        Err(BadSeparator(separator))
    } else {
        Ok(separator)
    }
}

fn deserialize_separator<'de, D: Deserializer<'de>>(deserializer: D) -> Result<char, D::Error> {
    let separator = char::deserialize(deserializer)?;
    check_separator(separator).map_err(serde::de::Error::custom)
}

/// Parser settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Locale decimal separator accepted in addition to `.`. Never a sign, digit or whitespace.
    #[serde(deserialize_with = "deserialize_separator")]
    decimal_separator: char,
}

impl ParseOptions {
    /// Options accepting `separator` as well as `.`.
    pub fn with_separator(separator: char) -> Result<Self, BadSeparator> {
        Ok(ParseOptions {
            decimal_separator: check_separator(separator)?,
        })
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            decimal_separator: '.',
        }
    }
}

/// The nine raw input strings of the form, addressed by [`Cell`].
///
/// `RawCells::default()` is the cleared form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawCells([String; 9]);

impl RawCells {
    /// Create from nine strings in row-major order.
    pub fn new(texts: [String; 9]) -> Self {
        RawCells(texts)
    }

    /// Create from anything string-like, in row-major order.
    pub fn from_row_major<S: AsRef<str>>(texts: [S; 9]) -> Self {
        RawCells(texts.map(|s| s.as_ref().to_string()))
    }

    /// A copy with `cell` replaced by `text`.
    pub fn with(mut self, cell: Cell, text: impl Into<String>) -> Self {
        self[cell] = text.into();
        self
    }

    /// Pairs of (cell, text) in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &str)> {
        self.0
            .iter()
            .enumerate()
            .map(|(i, text)| (Cell::from_index(i), text.as_str()))
    }
}

impl TryFrom<Vec<String>> for RawCells {
    type Error = usize;

    /// Fails with the actual length when it is not 9.
    fn try_from(texts: Vec<String>) -> Result<Self, Self::Error> {
        let len = texts.len();
        <[String; 9]>::try_from(texts)
            .map(RawCells)
            .map_err(|_| len)
    }
}

impl Index<Cell> for RawCells {
    type Output = String;
    fn index(&self, cell: Cell) -> &Self::Output {
        &self.0[cell.index()]
    }
}

impl IndexMut<Cell> for RawCells {
    fn index_mut(&mut self, cell: Cell) -> &mut Self::Output {
        &mut self.0[cell.index()]
    }
}

/// Checks the grammar `[+-]? digits? (sep digits?)?` with at least one digit, and returns the
/// text rewritten with `.` as separator.
fn normalize(text: &str, separator: char) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    if let Some(&c) = chars.peek()
        && (c == '+' || c == '-')
    {
        out.push(c);
        chars.next();
    }
    let mut digits = 0;
    let mut seen_point = false;
    for c in chars {
        if c.is_ascii_digit() {
            digits += 1;
            out.push(c);
        } else if (c == '.' || c == separator) && !seen_point {
            seen_point = true;
            out.push('.');
        } else {
            return None;
        }
    }
    (digits > 0).then_some(out)
}

/// Parses one scalar with the same rules the matrix parser applies to each cell.
pub fn parse_scalar(text: &str, options: &ParseOptions) -> Result<f64, ParseFailure> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseFailure::Empty);
    }
    let normalized =
        normalize(trimmed, options.decimal_separator).ok_or(ParseFailure::Malformed)?;
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseFailure::Malformed),
    }
}

/// Parses all nine cells into a [`Matrix`].
///
/// Cells are read in row-major order and the first bad one aborts the whole request; no matrix is
/// built from partially valid input.
pub fn parse(raw: &RawCells, options: &ParseOptions) -> Result<Matrix, ParseError> {
    let mut values = [0.0; 9];
    for (cell, text) in raw.iter() {
        values[cell.index()] = parse_scalar(text, options).map_err(|reason| {
            log::warn!("rejected cell {cell}: {text:?} ({reason:?})");
            ParseError {
                cell,
                raw_text: text.to_string(),
                reason,
            }
        })?;
    }
    Ok(Matrix::from_row_major(values))
}
