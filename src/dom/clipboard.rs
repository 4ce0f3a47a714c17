//! Clipboard copy with a legacy `execCommand` fallback.

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Clipboard, HtmlDocument, HtmlTextAreaElement, Window};

use crate::error::SiteError;

/// Copy `text` and confirm with a blocking alert showing `confirmation`.
/// Runs in the background; failures are logged.
pub fn copy_to_clipboard(text: String, confirmation: String) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = copy_text(&text, &confirmation).await {
            log::error!("{}: copy to clipboard failed: {err}", err.error_code());
        }
    });
}

/// # Errors
///
/// Returns [`SiteError::Dom`] if the clipboard API rejects the write and
/// [`SiteError::Clipboard`] if the legacy copy command is refused.
pub async fn copy_text(text: &str, confirmation: &str) -> Result<(), SiteError> {
    let window = super::window()?;
    let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        legacy_copy(&window, text)?;
    } else {
        let clipboard: Clipboard = clipboard.unchecked_into();
        JsFuture::from(clipboard.write_text(text)).await?;
    }
    window.alert_with_message(confirmation)?;
    Ok(())
}

/// Select the text in a temporary textarea and run the `copy` command.
fn legacy_copy(window: &Window, text: &str) -> Result<(), SiteError> {
    let document = super::document(window)?;
    let body = document.body().ok_or(SiteError::Environment("document body"))?;
    let textarea: HtmlTextAreaElement = document.create_element("textarea")?.unchecked_into();
    textarea.set_value(text);
    body.append_child(&textarea)?;
    textarea.select();
    let copied = document.unchecked_ref::<HtmlDocument>().exec_command("copy");
    body.remove_child(&textarea)?;
    if copied? { Ok(()) } else { Err(SiteError::Clipboard) }
}
