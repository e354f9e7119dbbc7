use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures reaching into the host document.
#[derive(Debug, Error, PartialEq)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("style update rejected: {0}")]
    Style(String),
}

impl DomError {
    pub fn style(err: JsValue) -> Self {
        DomError::Style(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site config is missing a value for `{0}`")]
    Invalid(&'static str),
}
