//! Navbar shadow tied to the window scroll position.

use web_sys::{Document, Element, Window};

use super::EventListener;
use crate::anchor::shadow_visible;
use crate::config::NavbarConfig;
use crate::error::SiteError;

/// Register the scroll listener and sync the shadow once, so a page restored
/// mid-scroll starts out right. Returns `None` when there is no navbar.
///
/// # Errors
///
/// Returns [`SiteError::Dom`] if the listener cannot be registered.
pub fn attach(window: &Window, document: &Document, cfg: &NavbarConfig) -> Result<Option<EventListener>, SiteError> {
    let Some(navbar) = document.query_selector(&cfg.selector)? else {
        log::debug!("no navbar matching {:?}", cfg.selector);
        return Ok(None);
    };

    let shadow_class = cfg.shadow_class.clone();
    let threshold_px = cfg.threshold_px;
    sync(window, &navbar, &shadow_class, threshold_px);

    let scroll_window = window.clone();
    let listener = EventListener::new(window, "scroll", move |_| {
        sync(&scroll_window, &navbar, &shadow_class, threshold_px);
    })?;
    Ok(Some(listener))
}

fn sync(window: &Window, navbar: &Element, shadow_class: &str, threshold_px: f64) {
    let scroll_y = match window.scroll_y() {
        Ok(y) => y,
        Err(err) => {
            log::warn!("scroll position unavailable: {err:?}");
            return;
        }
    };
    if let Err(err) = navbar.class_list().toggle_with_force(shadow_class, shadow_visible(scroll_y, threshold_px)) {
        log::warn!("navbar shadow toggle failed: {err:?}");
    }
}
