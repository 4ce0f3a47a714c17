//! Error type shared by configuration, fragment loading and DOM glue.
//!
//! ERROR HANDLING
//! ==============
//! Only initialization errors reach the host page. Everything that happens
//! inside an event listener or a spawned fetch is logged and dropped, so a
//! failure costs one enhancement, never the page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("browser environment unavailable: no {0}")]
    Environment(&'static str),
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error("fetch {url} failed: {message}")]
    Fetch { url: String, message: String },
    #[error("fetch {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("clipboard copy command was refused")]
    Clipboard,
    #[error("analytics payload: {0}")]
    Payload(String),
}

impl SiteError {
    /// Stable short code used as a log prefix.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "E_CONFIG",
            Self::Environment(_) => "E_ENVIRONMENT",
            Self::Dom(_) => "E_DOM",
            Self::Fetch { .. } => "E_FETCH",
            Self::Status { .. } => "E_STATUS",
            Self::Clipboard => "E_CLIPBOARD",
            Self::Payload(_) => "E_PAYLOAD",
        }
    }
}

/// Keep the value of a successful enhancement setup. A failure is logged and
/// becomes `None`, so it costs only `enhancement`.
pub fn setup_or_log<T>(enhancement: &str, result: Result<T, SiteError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{}: {enhancement} setup failed: {err}", err.error_code());
            None
        }
    }
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Dom(message)
    }
}

#[cfg(feature = "browser")]
impl From<SiteError> for wasm_bindgen::JsValue {
    fn from(err: SiteError) -> Self {
        wasm_bindgen::JsValue::from_str(&format!("{}: {err}", err.error_code()))
    }
}
