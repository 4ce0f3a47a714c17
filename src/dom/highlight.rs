//! Active navigation link styling.

use web_sys::{Document, Window};

use crate::config::NavConfig;
use crate::error::SiteError;
use crate::nav::{LinkClasses, highlight_plan};

/// Reset every nav link to the inactive style, then mark the links matching
/// the current path. Returns how many links are active.
///
/// # Errors
///
/// Returns [`SiteError::Dom`] if the location or a class list cannot be
/// read or written.
pub fn apply(window: &Window, document: &Document, cfg: &NavConfig) -> Result<usize, SiteError> {
    let current_path = window.location().pathname()?;
    let links = super::query_all(document, &cfg.link_selector)?;
    let hrefs: Vec<Option<String>> = links.iter().map(|link| link.get_attribute("href")).collect();
    let plan = highlight_plan(&current_path, hrefs.iter().map(Option::as_deref), cfg);

    let mut active = 0;
    for (link, is_active) in links.iter().zip(plan) {
        super::apply_classes(link, LinkClasses::reset(cfg))?;
        if is_active {
            super::apply_classes(link, LinkClasses::active(cfg))?;
            active += 1;
        }
    }
    Ok(active)
}
