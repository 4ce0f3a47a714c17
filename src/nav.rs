//! Active navigation link matching.
//!
//! A link is active when its `href` names the page being viewed. Static
//! hosting serves the same document under several paths, so matching is more
//! than string equality:
//!
//! - `/` is the root index document.
//! - A path ending in `index.html` matches a link to exactly that path.
//! - Any page under a configured section prefix activates the section index.
//!
//! The DOM side resets every link to the inactive style and then applies
//! [`LinkClasses`] for the links this module reports as active.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::NavConfig;

/// Which equivalence rule made a link active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    RootIndex,
    TrailingIndex,
    Exact,
    Section,
}

/// First rule under which `href` names `current_path`, if any.
pub fn match_rule(current_path: &str, href: &str, nav: &NavConfig) -> Option<MatchRule> {
    if current_path == "/" && href == nav.root_index {
        return Some(MatchRule::RootIndex);
    }
    if href == current_path {
        if current_path.ends_with("index.html") {
            return Some(MatchRule::TrailingIndex);
        }
        return Some(MatchRule::Exact);
    }
    nav.sections
        .iter()
        .any(|section| current_path.starts_with(&section.prefix) && href == section.index)
        .then_some(MatchRule::Section)
}

/// Links without an `href` are never active.
pub fn is_active(current_path: &str, href: Option<&str>, nav: &NavConfig) -> bool {
    href.is_some_and(|href| match_rule(current_path, href, nav).is_some())
}

/// Class changes for one link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkClasses<'a> {
    pub add: &'a [String],
    pub remove: &'a [String],
}

impl<'a> LinkClasses<'a> {
    /// Style applied to every link before matching.
    pub fn reset(nav: &'a NavConfig) -> Self {
        Self { add: &nav.inactive_classes, remove: &nav.active_classes }
    }

    /// Style applied to a matching link after the reset.
    pub fn active(nav: &'a NavConfig) -> Self {
        Self { add: &nav.active_classes, remove: &nav.inactive_classes }
    }
}

/// Active flag for each `href`, in order.
pub fn highlight_plan<'h, I>(current_path: &str, hrefs: I, nav: &NavConfig) -> Vec<bool>
where
    I: IntoIterator<Item = Option<&'h str>>,
{
    hrefs.into_iter().map(|href| is_active(current_path, href, nav)).collect()
}
