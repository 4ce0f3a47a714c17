//! Fragment fetching and injection.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch is logged and the placeholder keeps whatever fallback
//! markup the page put in it. Nothing is shown to the visitor.

use std::rc::Rc;

use web_sys::Document;

use crate::config::IncludeConfig;
use crate::error::SiteError;
use crate::include::{check_status, fragment_url};

/// Start a fetch for every placeholder. `on_injected` runs after each
/// successful injection. Returns how many fetches were started.
///
/// # Errors
///
/// Returns [`SiteError::Dom`] if the placeholder selector does not parse.
pub fn load_all(document: &Document, cfg: &IncludeConfig, on_injected: Rc<dyn Fn()>) -> Result<usize, SiteError> {
    let mut started = 0;
    for placeholder in super::query_all(document, &cfg.selector())? {
        let Some(url) = fragment_url(placeholder.get_attribute(&cfg.attribute).as_deref()).map(str::to_owned) else {
            log::warn!("placeholder with empty {} attribute skipped", cfg.attribute);
            continue;
        };
        let on_injected = Rc::clone(&on_injected);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_fragment(&url).await {
                Ok(body) => {
                    placeholder.set_inner_html(&body);
                    on_injected();
                }
                Err(err) => log::error!("{}: error including {url}: {err}", err.error_code()),
            }
        });
        started += 1;
    }
    Ok(started)
}

/// GET `url` and return its body.
///
/// # Errors
///
/// Returns [`SiteError::Fetch`] on network or body read failure and
/// [`SiteError::Status`] on a non-2xx response.
pub async fn fetch_fragment(url: &str) -> Result<String, SiteError> {
    let fetch_error = |err: gloo_net::Error| SiteError::Fetch { url: url.to_owned(), message: err.to_string() };
    let response = gloo_net::http::Request::get(url).send().await.map_err(fetch_error)?;
    check_status(url, response.status())?;
    response.text().await.map_err(fetch_error)
}
