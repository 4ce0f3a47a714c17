//! Contact click tracking and the page-global analytics integrations.

use js_sys::{Array, Function, JSON, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Document;

use super::EventListener;
use crate::analytics::{Analytics, ContactTracker, EventParams};
use crate::config::TrackingConfig;
use crate::error::SiteError;

/// Register the click listener on the contact button. Returns `None` when
/// the page has none.
///
/// # Errors
///
/// Returns [`SiteError::Dom`] if the selector does not parse or the listener
/// cannot be registered.
pub fn attach(
    document: &Document,
    cfg: &TrackingConfig,
    analytics: Analytics,
) -> Result<Option<EventListener>, SiteError> {
    let Some(button) = document.query_selector(&cfg.selector)? else {
        log::debug!("no contact button matching {:?}", cfg.selector);
        return Ok(None);
    };
    let tracker = ContactTracker::new(cfg);
    let listener = EventListener::new(&button, "click", move |_| tracker.record_click(&analytics))?;
    Ok(Some(listener))
}

/// Integrations backed by the page's `gtag` and `fbq` globals.
///
/// The globals are looked up on every event, so tags that finish loading
/// after startup still receive clicks. A missing global is skipped silently.
pub fn page_globals() -> Analytics {
    Analytics::none()
        .with_tag(|action, params| {
            if let Err(err) = send_tag(action, params) {
                log::warn!("{}: gtag event failed: {err}", err.error_code());
            }
        })
        .with_pixel(|event| {
            let args = Array::of2(&JsValue::from_str("track"), &JsValue::from_str(event));
            if let Err(err) = call_global("fbq", &args) {
                log::warn!("{}: fbq event failed: {err}", err.error_code());
            }
        })
}

fn send_tag(action: &str, params: &EventParams) -> Result<(), SiteError> {
    let json = serde_json::to_string(params).map_err(|err| SiteError::Payload(err.to_string()))?;
    let params = JSON::parse(&json)?;
    let args = Array::of3(&JsValue::from_str("event"), &JsValue::from_str(action), &params);
    call_global("gtag", &args)
}

fn call_global(name: &str, args: &Array) -> Result<(), SiteError> {
    let window = super::window()?;
    let global = Reflect::get(&window, &JsValue::from_str(name))?;
    let Some(function) = global.dyn_ref::<Function>() else {
        return Ok(());
    };
    function.apply(&JsValue::NULL, args)?;
    Ok(())
}
