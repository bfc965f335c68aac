//! WASM bindings for the style engine.
//!
//! Exposes the generators to JavaScript via wasm-bindgen.
//! Build with: `wasm-pack build --target web --features wasm`

use wasm_bindgen::prelude::*;

use crate::patch::StylePatch;
use crate::state::{Breakpoint, StyleState};

fn parse_state(value: JsValue) -> Result<StyleState, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn parse_breakpoint(raw: &str) -> Result<Breakpoint, JsError> {
    raw.parse::<Breakpoint>().map_err(|e| JsError::new(&e))
}

/// Generate the utility-class string for a state at one breakpoint.
///
/// Returns the class string on success, or throws a JS error on failure.
#[wasm_bindgen]
pub fn generate_classes(state: JsValue, breakpoint: &str) -> Result<String, JsError> {
    let state = parse_state(state)?;
    let bp = parse_breakpoint(breakpoint)?;
    Ok(crate::classes::generate_classes(&state, bp))
}

/// Generate the inline-style map for a state as a plain JS object.
#[wasm_bindgen]
pub fn generate_styles(state: JsValue) -> Result<JsValue, JsError> {
    let state = parse_state(state)?;
    let styles = crate::styles::generate_styles(&state);
    serde_wasm_bindgen::to_value(&styles).map_err(|e| JsError::new(&e.to_string()))
}

/// Export the HTML fragment for a state at one breakpoint.
#[wasm_bindgen]
pub fn export_html(state: JsValue, breakpoint: &str) -> Result<String, JsError> {
    let state = parse_state(state)?;
    let bp = parse_breakpoint(breakpoint)?;
    let classes = crate::classes::generate_classes(&state, bp);
    let styles = crate::styles::generate_styles(&state);
    Ok(crate::export::to_html(&state, &classes, &styles))
}

/// Export the CSS rule block for a state.
#[wasm_bindgen]
pub fn export_css(state: JsValue) -> Result<String, JsError> {
    let state = parse_state(state)?;
    Ok(crate::export::to_css(&state))
}

/// Deep-merge a partial-state patch into a state, returning the new state.
/// The input state is not modified.
#[wasm_bindgen]
pub fn apply_patch(state: JsValue, patch: JsValue) -> Result<JsValue, JsError> {
    let mut state = parse_state(state)?;
    let patch: StylePatch =
        serde_wasm_bindgen::from_value(patch).map_err(|e| JsError::new(&e.to_string()))?;
    patch.apply_to(&mut state);
    serde_wasm_bindgen::to_value(&state).map_err(|e| JsError::new(&e.to_string()))
}

/// Validate a state object without generating output.
///
/// Returns a JSON object with:
/// - `valid`: boolean
/// - `error`: string (only if invalid)
/// - `tag`: string — the tag the renderer will use (only if valid)
/// - `warnings`: string[] (only if valid)
#[wasm_bindgen]
pub fn validate(state: JsValue) -> JsValue {
    let obj = js_sys::Object::new();
    match serde_wasm_bindgen::from_value::<StyleState>(state) {
        Ok(state) => {
            let _ = js_sys::Reflect::set(&obj, &"valid".into(), &JsValue::TRUE);
            let _ = js_sys::Reflect::set(
                &obj,
                &"tag".into(),
                &JsValue::from_str(&crate::preview::coerce_tag(&state.tag)),
            );
            let warnings = js_sys::Array::new();
            for w in crate::preview::lint(&state) {
                warnings.push(&JsValue::from_str(&w));
            }
            let _ = js_sys::Reflect::set(&obj, &"warnings".into(), &warnings.into());
        }
        Err(e) => {
            let _ = js_sys::Reflect::set(&obj, &"valid".into(), &JsValue::FALSE);
            let _ = js_sys::Reflect::set(&obj, &"error".into(), &JsValue::from_str(&e.to_string()));
        }
    }
    obj.into()
}
