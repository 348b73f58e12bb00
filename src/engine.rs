use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::EngineConfig;
use crate::cross::cross_product;
use crate::format::{FormattedResult, format};
use crate::matrix::Matrix;
use crate::numeral::{NumeralResult, determinant_with_trace};
use crate::parser::{ParseError, RawCells, parse};
use crate::report::render_report;
use crate::vector::Vector3;

/// Which result the caller wants. The caller keeps this alongside the result it got back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultMode {
    /// Cross product of rows 2 and 3.
    #[default]
    Vector,
    /// Determinant with its expansion trace.
    Numeral,
}

/// Error type for unknown mode names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown result mode `{0}` (expected `vector` or `numeral`)")]
pub struct ModeError(pub String);

impl FromStr for ResultMode {
    type Err = ModeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vector" | "cross-product" | "cross_product" => Ok(ResultMode::Vector),
            "numeral" | "determinant" => Ok(ResultMode::Numeral),
            _ => Err(ModeError(s.to_string())),
        }
    }
}

impl fmt::Display for ResultMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultMode::Vector => write!(f, "vector"),
            ResultMode::Numeral => write!(f, "numeral"),
        }
    }
}

/// The raw outcome of one evaluation; exactly one variant per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalculationResult {
    Vector(Vector3),
    Numeral(NumeralResult),
}

impl CalculationResult {
    pub fn mode(&self) -> ResultMode {
        match self {
            CalculationResult::Vector(_) => ResultMode::Vector,
            CalculationResult::Numeral(_) => ResultMode::Numeral,
        }
    }
}

/// What a request hands back to the UI: the mode it ran in, the numbers, and their display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub mode: ResultMode,
    pub result: CalculationResult,
    pub display: FormattedResult,
}

/// Stateless evaluator holding only its configuration; share it freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Engine { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parses `raw`, evaluates it in `mode` and formats the result.
    ///
    /// A bad cell aborts the request with the [`ParseError`] naming it; nothing is computed from
    /// partially valid input.
    pub fn calculate(&self, raw: &RawCells, mode: ResultMode) -> Result<Calculation, ParseError> {
        log::debug!("calculating in {mode} mode");
        let matrix = parse(raw, &self.config.parse)?;
        let result = evaluate(&matrix, mode);
        let display = format(&result, &self.config.format);
        log::debug!("{mode} result: {display}");
        Ok(Calculation {
            mode,
            result,
            display,
        })
    }

    /// The clipboard text for a finished calculation.
    pub fn report(&self, raw: &RawCells, calculation: &Calculation) -> String {
        render_report(raw, &calculation.display, &self.config.labels)
    }
}

/// Runs the evaluator for `mode` on an already-parsed matrix.
pub fn evaluate(matrix: &Matrix, mode: ResultMode) -> CalculationResult {
    match mode {
        ResultMode::Vector => CalculationResult::Vector(cross_product(matrix)),
        ResultMode::Numeral => CalculationResult::Numeral(determinant_with_trace(matrix)),
    }
}

/// [`Engine::calculate`] with the default configuration.
pub fn calculate(raw: &RawCells, mode: ResultMode) -> Result<Calculation, ParseError> {
    Engine::default().calculate(raw, mode)
}
