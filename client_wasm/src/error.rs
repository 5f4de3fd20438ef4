//! Host bootstrap errors

use std::fmt;

/// Why the game could not attach to the host page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    MissingWindow,
    MissingDocument,
    MissingBody,
    MissingElement(String),
    NotACanvas(String),
    /// Exception thrown by a browser API
    Js(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::MissingWindow => write!(f, "no global window"),
            HostError::MissingDocument => write!(f, "window has no document"),
            HostError::MissingBody => write!(f, "document has no body"),
            HostError::MissingElement(id) => write!(f, "no element with id '{}'", id),
            HostError::NotACanvas(id) => write!(f, "element '{}' is not a canvas", id),
            HostError::Js(msg) => write!(f, "browser error: {}", msg),
        }
    }
}

impl std::error::Error for HostError {}

#[cfg(target_arch = "wasm32")]
impl From<HostError> for wasm_bindgen::JsValue {
    fn from(err: HostError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for HostError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        HostError::Js(format!("{:?}", value))
    }
}
