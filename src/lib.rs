//! Computation core of a 3×3 matrix calculator.
//!
//! Nine text cells go in; out comes either the cross product of rows 2 and 3 (row 1 holding the
//! basis `i, j, k`) or the determinant with the expansion a reader would write by hand.
//!
//! ```
//! use crossdet::{RawCells, ResultMode, calculate};
//!
//! let raw = RawCells::from_row_major(["1", "2", "3", "4", "5", "6", "7", "8", "10"]);
//! let calc = calculate(&raw, ResultMode::Numeral).unwrap();
//! assert_eq!(
//!     calc.display.to_string(),
//!     "1×(5×10 - 6×8) - 2×(4×10 - 6×7) + 3×(4×8 - 5×7) = -3"
//! );
//! ```
pub mod cell;
pub mod config;
pub mod cross;
pub mod engine;
pub mod format;
pub mod matrix;
pub mod numeral;
pub mod parser;
pub mod report;
pub mod vector;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use cell::{Cell, CellError};
pub use config::EngineConfig;
pub use cross::cross_product;
pub use engine::{Calculation, CalculationResult, Engine, ModeError, ResultMode, calculate, evaluate};
pub use format::{FormatOptions, FormattedResult, format_scalar};
pub use matrix::{Matrix, NonFiniteCell};
pub use numeral::{ExpansionTerm, NumeralResult, Sign, determinant_with_trace};
pub use parser::{BadSeparator, ParseError, ParseFailure, ParseOptions, RawCells, parse, parse_scalar};
pub use report::{ReportLabels, render_report};
pub use vector::Vector3;
