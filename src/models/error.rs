use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThemeError {
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    #[error("DOM unavailable: {0}")]
    DomUnavailable(String),
}

impl From<JsValue> for ThemeError {
    fn from(value: JsValue) -> Self {
        Self::DomUnavailable(format!("{value:?}"))
    }
}
