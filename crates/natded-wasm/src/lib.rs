use natded::json::{check_request, CheckRequestJson, FormulaJson, TruthTableJson};
use natded::{parse, truth_table, Formula, Notation};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct NatDed;

#[wasm_bindgen]
impl NatDed {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        NatDed
    }

    /// Parse a formula; returns the tagged JSON tree or a positioned error.
    #[wasm_bindgen]
    pub fn parse(&self, input: &str) -> Result<JsValue, JsError> {
        let formula = parse(input).map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&FormulaJson::from(&formula))
    }

    /// Render a formula tree, in ASCII or Unicode notation.
    #[wasm_bindgen]
    pub fn print(&self, formula_js: JsValue, ascii: bool) -> Result<String, JsError> {
        let json: FormulaJson = from_js(formula_js)?;
        let notation = if ascii {
            Notation::Ascii
        } else {
            Notation::Unicode
        };
        Ok(Formula::from(&json).to_text(notation))
    }

    /// Build the truth table of a formula tree.
    #[wasm_bindgen]
    pub fn truth_table(&self, formula_js: JsValue) -> Result<JsValue, JsError> {
        let json: FormulaJson = from_js(formula_js)?;
        let table = truth_table(&Formula::from(&json)).map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&TruthTableJson::from(&table))
    }

    /// Check a proof request (steps, premises, conclusion, theorem library).
    ///
    /// Validation failures are part of the returned value, not thrown; only a
    /// malformed request errors.
    #[wasm_bindgen]
    pub fn check(&self, request_js: JsValue) -> Result<JsValue, JsError> {
        let request: CheckRequestJson = from_js(request_js)?;
        to_js(&check_request(&request))
    }
}

impl Default for NatDed {
    fn default() -> Self {
        NatDed::new()
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}
