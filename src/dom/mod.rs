//! DOM glue, compiled only with the `browser` feature.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule registers the listeners for one enhancement and hands the
//! decisions to the pure modules at the crate root. Every registration is
//! returned as an owned [`EventListener`]; dropping it detaches the listener,
//! which is how [`Site`] tears the page down.

pub mod clipboard;
pub mod fragments;
pub mod highlight;
pub mod lazy_images;
pub mod menu;
pub mod navbar;
pub mod site;
pub mod smooth_scroll;
pub mod tracker;

pub use site::Site;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::error::SiteError;
use crate::nav::LinkClasses;

/// A registered DOM event listener. Dropping it removes the listener.
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// # Errors
    ///
    /// Returns [`SiteError::Dom`] if the browser rejects the registration.
    pub fn new(
        target: &EventTarget,
        event_type: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, SiteError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event_type, callback })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to detach {} listener: {err:?}", self.event_type);
        }
    }
}

/// # Errors
///
/// Returns [`SiteError::Environment`] outside a browser window.
pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::Environment("window"))
}

/// # Errors
///
/// Returns [`SiteError::Environment`] if the window has no document.
pub fn document(window: &Window) -> Result<Document, SiteError> {
    window.document().ok_or(SiteError::Environment("document"))
}

/// All elements matching `selector`, in document order.
///
/// # Errors
///
/// Returns [`SiteError::Dom`] if the selector does not parse.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, SiteError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

/// # Errors
///
/// Returns [`SiteError::Dom`] if a class name is rejected (e.g. contains whitespace).
pub fn apply_classes(element: &Element, classes: LinkClasses<'_>) -> Result<(), SiteError> {
    let list = element.class_list();
    for class in classes.remove {
        list.remove_1(class)?;
    }
    for class in classes.add {
        list.add_1(class)?;
    }
    Ok(())
}
