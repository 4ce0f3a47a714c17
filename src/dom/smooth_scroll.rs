//! Smooth scrolling for in-page anchor links.

use web_sys::{Document, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::EventListener;
use crate::anchor::{ANCHOR_SELECTOR, AnchorAction, decide};
use crate::error::SiteError;

/// Register a click listener on every `#` link currently in the document.
///
/// # Errors
///
/// Returns [`SiteError::Dom`] if a listener cannot be registered.
pub fn attach(document: &Document) -> Result<Vec<EventListener>, SiteError> {
    super::query_all(document, ANCHOR_SELECTOR)?
        .iter()
        .map(|link| {
            let link_el = link.clone();
            let document = document.clone();
            EventListener::new(link, "click", move |event: Event| {
                let href = link_el.get_attribute("href").unwrap_or_default();
                if let AnchorAction::Scroll(target) = decide(&href, |id| document.get_element_by_id(id)) {
                    event.prevent_default();
                    target.scroll_into_view_with_scroll_into_view_options(&scroll_options());
                }
            })
        })
        .collect()
}

fn scroll_options() -> ScrollIntoViewOptions {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    options
}
