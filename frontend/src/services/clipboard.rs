//! Clipboard writes via the browser Clipboard API.
//!
//! Requires a browser environment and a user-gesture context (called
//! from a click handler).

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::WidgetError;

/// Errors that can occur when accessing the clipboard.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// No `window` object (not running in a browser page).
    #[error("no global window")]
    NoWindow,

    /// The browser rejected the write (permissions, insecure context...).
    #[error("clipboard API error: {0}")]
    JsError(String),
}

impl From<JsValue> for ClipboardError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{:?}", value))
    }
}

impl From<ClipboardError> for WidgetError {
    fn from(err: ClipboardError) -> Self {
        WidgetError::ClipboardCopyFailed(err.to_string())
    }
}

/// Copy `text` to the system clipboard (`navigator.clipboard.writeText`).
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::NoWindow)?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await?;
    Ok(())
}
