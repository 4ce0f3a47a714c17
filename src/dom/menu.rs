//! Mobile menu listener.

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, Node};

use super::EventListener;
use crate::config::MenuConfig;
use crate::error::SiteError;
use crate::menu::{ClickOrigin, next_hidden};

/// Register the document click listener driving the menu. Returns `None`
/// when the page has no menu button or no menu panel.
///
/// # Errors
///
/// Returns [`SiteError::Dom`] if the listener cannot be registered.
pub fn attach(document: &Document, cfg: &MenuConfig) -> Result<Option<EventListener>, SiteError> {
    let (Some(button), Some(panel)) =
        (document.get_element_by_id(&cfg.button_id), document.get_element_by_id(&cfg.panel_id))
    else {
        log::debug!("no mobile menu on this page");
        return Ok(None);
    };

    let hidden_class = cfg.hidden_class.clone();
    let listener = EventListener::new(document, "click", move |event: Event| {
        let target = event.target();
        let node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
        let origin = ClickOrigin::classify(button.contains(node), panel.contains(node));

        let classes = panel.class_list();
        let hidden = classes.contains(&hidden_class);
        let next = next_hidden(hidden, origin);
        if next != hidden {
            if let Err(err) = classes.toggle_with_force(&hidden_class, next) {
                log::warn!("menu toggle failed: {err:?}");
            }
        }
    })?;
    Ok(Some(listener))
}
