//! Lazy image loading with `IntersectionObserver`, eager where unsupported.

use js_sys::{Array, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, Window};

use crate::config::LazyConfig;
use crate::error::SiteError;
use crate::lazy::{LoadStrategy, deferred_source};

/// Live observer for deferred images. Dropping it disconnects the observer.
pub struct LazyImages {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for LazyImages {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Start loading deferred images. Returns `None` when nothing is left to
/// observe (no deferred images, or all were loaded eagerly).
///
/// # Errors
///
/// Returns [`SiteError::Dom`] if the observer cannot be created or an
/// attribute cannot be written.
pub fn start(window: &Window, document: &Document, cfg: &LazyConfig) -> Result<Option<LazyImages>, SiteError> {
    let images = super::query_all(document, &cfg.selector())?;
    if images.is_empty() {
        return Ok(None);
    }

    let supported = Reflect::has(window, &JsValue::from_str("IntersectionObserver"))?;
    match LoadStrategy::for_support(supported) {
        LoadStrategy::Eager => {
            log::debug!("IntersectionObserver unavailable, loading {} images now", images.len());
            for image in &images {
                if let Err(err) = swap_in(image, &cfg.source_attribute) {
                    log::warn!("{}: lazy image swap failed: {err}", err.error_code());
                }
            }
            Ok(None)
        }
        LoadStrategy::Observe => {
            let attribute = cfg.source_attribute.clone();
            let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        if !entry.is_intersecting() {
                            continue;
                        }
                        let image = entry.target();
                        if let Err(err) = swap_in(&image, &attribute) {
                            log::warn!("{}: lazy image swap failed: {err}", err.error_code());
                        }
                        observer.unobserve(&image);
                    }
                },
            );
            let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
            for image in &images {
                observer.observe(image);
            }
            Ok(Some(LazyImages { observer, _callback: callback }))
        }
    }
}

fn swap_in(image: &Element, attribute: &str) -> Result<(), SiteError> {
    if let Some(src) = deferred_source(image.get_attribute(attribute).as_deref()) {
        image.set_attribute("src", src)?;
    }
    image.remove_attribute(attribute)?;
    Ok(())
}
