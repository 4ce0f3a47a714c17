//! Scroll behavior decisions: in-page anchor clicks and the navbar shadow.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Selector for links the smooth-scroll handler attaches to.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// What to do with a click on an in-page link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorAction<T> {
    /// Let the browser navigate.
    Default,
    /// Prevent navigation and smooth-scroll this target to the top.
    Scroll(T),
}

/// Fragment id named by `href`, without the `#`. A bare `#` names nothing.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Decide how to handle a click on a link with `href`. `lookup` resolves a
/// fragment id to its target and runs at most once per click.
pub fn decide<T>(href: &str, lookup: impl FnOnce(&str) -> Option<T>) -> AnchorAction<T> {
    match fragment_id(href).and_then(lookup) {
        Some(target) => AnchorAction::Scroll(target),
        None => AnchorAction::Default,
    }
}

/// Navbar shadow is shown once the page has scrolled strictly past `threshold_px`.
pub fn shadow_visible(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}
