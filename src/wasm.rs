// Bindings for a JS host (the web/mobile form). Only built with the `wasm` feature.
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::engine::{Engine, ResultMode};
use crate::parser::{ParseError, ParseFailure, RawCells};

#[wasm_bindgen]
extern "C" {
    // Use `js_namespace` here to bind `console.log(..)` instead of just
    // `log(..)`
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

/// What a rejected request looks like on the JS side.
#[derive(Debug, Serialize)]
struct JsError {
    cell: Option<String>,
    raw_text: Option<String>,
    reason: Option<String>,
    message: String,
}

impl JsError {
    fn plain(message: impl ToString) -> JsValue {
        let message = message.to_string();
        console_log!("{message}");
        let err = JsError {
            cell: None,
            raw_text: None,
            reason: None,
            message,
        };
        to_value(&err).unwrap_or_else(|e| JsValue::from_str(&e.to_string()))
    }

    fn parse(err: &ParseError) -> JsValue {
        console_log!("{err}");
        let err = JsError {
            cell: Some(err.cell.to_string()),
            raw_text: Some(err.raw_text.clone()),
            reason: Some(reason_name(err.reason).to_string()),
            message: err.to_string(),
        };
        to_value(&err).unwrap_or_else(|e| JsValue::from_str(&e.to_string()))
    }
}

fn reason_name(reason: ParseFailure) -> &'static str {
    match reason {
        ParseFailure::Empty => "empty",
        ParseFailure::Malformed => "malformed",
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

fn read_request(
    cells: Vec<String>,
    mode: &str,
    config: JsValue,
) -> Result<(Engine, RawCells, ResultMode), JsValue> {
    let config: EngineConfig = if config.is_undefined() || config.is_null() {
        EngineConfig::default()
    } else {
        from_value(config).map_err(JsError::plain)?
    };
    let raw = RawCells::try_from(cells)
        .map_err(|len| JsError::plain(format!("expected 9 cells, got {len}")))?;
    let mode = mode.parse::<ResultMode>().map_err(JsError::plain)?;
    Ok((Engine::new(config), raw, mode))
}

/// Evaluates nine row-major cell texts in `mode` (`"vector"` or `"numeral"`).
/// `config` may be `undefined` or a partial `EngineConfig` object.
#[wasm_bindgen]
pub fn calculate(cells: Vec<String>, mode: String, config: JsValue) -> Result<JsValue, JsValue> {
    let (engine, raw, mode) = read_request(cells, &mode, config)?;
    let calculation = engine
        .calculate(&raw, mode)
        .map_err(|e| JsError::parse(&e))?;
    Ok(to_value(&calculation)?)
}

/// The clipboard text for the same inputs `calculate` takes.
#[wasm_bindgen]
pub fn report(cells: Vec<String>, mode: String, config: JsValue) -> Result<String, JsValue> {
    let (engine, raw, mode) = read_request(cells, &mode, config)?;
    let calculation = engine
        .calculate(&raw, mode)
        .map_err(|e| JsError::parse(&e))?;
    Ok(engine.report(&raw, &calculation))
}
