//! Failures at the browser boundary while mounting the canvas.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why the canvas could not be mounted or driven.
#[derive(Debug, Error)]
pub enum CanvasError {
	/// Not running in a browser window.
	#[error("no global window")]
	NoWindow,
	/// `getContext("2d")` returned nothing usable.
	#[error("canvas has no 2d rendering context")]
	NoContext,
	/// A web API call threw; carries the JS error text.
	#[error("browser call failed: {0}")]
	Js(String),
}

impl From<JsValue> for CanvasError {
	fn from(value: JsValue) -> Self {
		CanvasError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}
