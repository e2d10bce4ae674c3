//! Error type for the browser bindings.
//!
//! The simulation core never fails. Only mounting onto a page can, and even
//! then a missing element makes a component inert instead of raising.

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FxError {
    /// The canvas exists but refused a 2D context.
    #[error("canvas has no 2d context")]
    NoContext,

    /// A DOM call threw.
    #[error("javascript error: {0}")]
    Js(String),

    /// An override in `window.intelxFx` has the wrong type.
    #[error("invalid option `{key}`: {reason}")]
    Option { key: String, reason: String },
}

impl FxError {
    pub fn option(key: &str, reason: impl Into<String>) -> Self {
        Self::Option { key: key.to_string(), reason: reason.into() }
    }
}

impl From<wasm_bindgen::JsValue> for FxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let msg = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js(msg)
    }
}

impl From<FxError> for wasm_bindgen::JsValue {
    fn from(err: FxError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FxError>;
