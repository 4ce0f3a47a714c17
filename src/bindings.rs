//! JavaScript entry points.
//!
//! The host page imports these from the generated module and calls `start()`
//! once the DOM is ready. Nothing is registered on `window`; utilities are
//! plain exports.

use js_sys::{Array, Function};
use wasm_bindgen::prelude::*;

use crate::analytics::Analytics;
use crate::config::{DEFAULT_COPY_CONFIRMATION, SiteConfig};
use crate::debounce::{BrowserTimers, Debounced};
use crate::dom::{Site, clipboard, tracker};
use crate::phone;

/// Owns every listener registered by `start`.
#[wasm_bindgen]
pub struct SiteHandle {
    site: Option<Site>,
}

#[wasm_bindgen]
impl SiteHandle {
    /// Detach every listener and disconnect the image observer.
    pub fn dispose(&mut self) {
        if self.site.take().is_some() {
            log::debug!("site disposed");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.site.is_some()
    }

    /// Re-run menu setup and link highlighting after the page replaced markup.
    #[wasm_bindgen(js_name = refreshNavigation)]
    pub fn refresh_navigation(&self) {
        if let Some(site) = &self.site {
            site.refresh_navigation();
        }
    }

    /// Copy using the configured confirmation message.
    #[wasm_bindgen(js_name = copyToClipboard)]
    pub fn copy_to_clipboard(&self, text: String) {
        let confirmation = self
            .site
            .as_ref()
            .map_or_else(|| DEFAULT_COPY_CONFIRMATION.to_owned(), |site| site.config().clipboard.confirmation.clone());
        clipboard::copy_to_clipboard(text, confirmation);
    }

    /// Format with the configured country code.
    #[wasm_bindgen(js_name = formatPhone)]
    pub fn format_phone(&self, phone: &str) -> String {
        match &self.site {
            Some(site) => phone::format_phone_with(phone, &site.config().phone.country_code),
            None => phone::format_phone(phone),
        }
    }
}

/// Start every enhancement with the default configuration.
///
/// # Errors
///
/// Fails outside a browser document. Enhancement setup failures are logged.
#[wasm_bindgen]
pub fn start() -> Result<SiteHandle, JsValue> {
    start_with_config(None)
}

/// Start every enhancement with JSON overrides for [`SiteConfig`].
///
/// # Errors
///
/// Fails on invalid JSON or outside a browser document. Enhancement setup
/// failures are logged.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(config_json: Option<String>) -> Result<SiteHandle, JsValue> {
    console_error_panic_hook::set_once();
    let config = SiteConfig::from_json(config_json.as_deref().unwrap_or_default())?;
    if console_log::init_with_level(config.log_level()).is_err() {
        log::debug!("console logger already installed");
    }
    start_site(config, tracker::page_globals())
}

fn start_site(config: SiteConfig, analytics: Analytics) -> Result<SiteHandle, JsValue> {
    let site = Site::init(config, analytics)?;
    log::info!("site enhancements started");
    Ok(SiteHandle { site: Some(site) })
}

#[wasm_bindgen(js_name = formatPhone)]
pub fn format_phone(phone: &str) -> String {
    phone::format_phone(phone)
}

#[wasm_bindgen(js_name = formatPhoneWith)]
pub fn format_phone_with(phone: &str, country_code: &str) -> String {
    phone::format_phone_with(phone, country_code)
}

/// Copy `text`; `confirmation` defaults to "Copied to clipboard!".
#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: String, confirmation: Option<String>) {
    clipboard::copy_to_clipboard(text, confirmation.unwrap_or_else(|| DEFAULT_COPY_CONFIRMATION.to_owned()));
}

/// A debounced JS function. `invoke(args)` takes an array of arguments, or a
/// single non-array value as the only argument.
#[wasm_bindgen]
pub struct DebouncedFunction {
    inner: Debounced<Array, BrowserTimers>,
}

#[wasm_bindgen]
impl DebouncedFunction {
    pub fn invoke(&self, args: JsValue) {
        self.inner.invoke(argument_list(args));
    }

    pub fn cancel(&self) {
        self.inner.cancel();
    }

    #[wasm_bindgen(getter)]
    pub fn pending(&self) -> bool {
        self.inner.is_pending()
    }

    #[wasm_bindgen(getter = waitMs)]
    pub fn wait_ms(&self) -> u32 {
        self.inner.wait_ms()
    }
}

fn argument_list(args: JsValue) -> Array {
    if Array::is_array(&args) {
        args.unchecked_into()
    } else if args.is_undefined() {
        Array::new()
    } else {
        Array::of1(&args)
    }
}

#[wasm_bindgen]
pub fn debounce(func: Function, wait_ms: u32) -> DebouncedFunction {
    let inner = Debounced::new(BrowserTimers, wait_ms, move |args: Array| {
        if let Err(err) = func.apply(&JsValue::NULL, &args) {
            log::error!("debounced function threw: {err:?}");
        }
    });
    DebouncedFunction { inner }
}
