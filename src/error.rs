use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no root element")]
    NoRootElement,
    #[error("no element matches `{selector}`")]
    MissingElement { selector: String },
    #[error("storage: {0}")]
    Storage(String),
    #[error("js: {0}")]
    Js(String),
    #[error("invalid theme config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Best-effort human readable form of a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::Js(describe(&value))
    }
}
