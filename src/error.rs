use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PlaygroundError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("local storage unavailable: {0}")]
    Storage(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("javascript error: {0}")]
    Js(String),
}

impl PlaygroundError {
    /// Wraps a thrown JS value, keeping its debug rendering as the message.
    pub fn js(value: JsValue) -> Self {
        match value.as_string() {
            Some(s) => Self::Js(s),
            None => Self::Js(format!("{:?}", value)),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlaygroundError>;
