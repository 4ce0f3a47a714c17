//! Site configuration.
//!
//! Every selector, attribute, class name and threshold the handlers touch is
//! collected here. Defaults match the markup the site ships with, so the host
//! page only passes JSON for values it wants to override. Missing fields take
//! their defaults at every nesting level.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::SiteError;

pub const DEFAULT_INCLUDE_ATTR: &str = "data-include";
pub const DEFAULT_MENU_BUTTON_ID: &str = "mobile-menu-btn";
pub const DEFAULT_MENU_PANEL_ID: &str = "mobile-menu";
pub const DEFAULT_HIDDEN_CLASS: &str = "hidden";
pub const DEFAULT_NAV_LINK_SELECTOR: &str = ".nav-link, .mobile-nav-link";
pub const DEFAULT_ROOT_INDEX: &str = "/index.html";
pub const DEFAULT_LAZY_SOURCE_ATTR: &str = "data-src";
pub const DEFAULT_NAVBAR_SELECTOR: &str = "nav";
pub const DEFAULT_SHADOW_CLASS: &str = "shadow-lg";
pub const DEFAULT_SHADOW_THRESHOLD_PX: f64 = 10.0;
pub const DEFAULT_CONTACT_SELECTOR: &str = ".whatsapp-float";
pub const DEFAULT_COUNTRY_CODE: &str = "254";
pub const DEFAULT_COPY_CONFIRMATION: &str = "Copied to clipboard!";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub include: IncludeConfig,
    pub menu: MenuConfig,
    pub nav: NavConfig,
    pub lazy: LazyConfig,
    pub navbar: NavbarConfig,
    pub tracking: TrackingConfig,
    pub phone: PhoneConfig,
    pub clipboard: ClipboardConfig,
    /// `log` level name for the console logger. Unknown names mean `info`.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            include: IncludeConfig::default(),
            menu: MenuConfig::default(),
            nav: NavConfig::default(),
            lazy: LazyConfig::default(),
            navbar: NavbarConfig::default(),
            tracking: TrackingConfig::default(),
            phone: PhoneConfig::default(),
            clipboard: ClipboardConfig::default(),
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override document. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] if the input is not valid JSON or a field
    /// has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IncludeConfig {
    /// Attribute naming the fragment URL on a placeholder element.
    pub attribute: String,
}

impl Default for IncludeConfig {
    fn default() -> Self {
        Self { attribute: DEFAULT_INCLUDE_ATTR.to_owned() }
    }
}

impl IncludeConfig {
    pub fn selector(&self) -> String {
        format!("[{}]", self.attribute)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub button_id: String,
    pub panel_id: String,
    pub hidden_class: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            button_id: DEFAULT_MENU_BUTTON_ID.to_owned(),
            panel_id: DEFAULT_MENU_PANEL_ID.to_owned(),
            hidden_class: DEFAULT_HIDDEN_CLASS.to_owned(),
        }
    }
}

/// A site section whose every page highlights the section's index link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SectionRule {
    pub prefix: String,
    pub index: String,
}

impl SectionRule {
    pub fn new(prefix: &str, index: &str) -> Self {
        Self { prefix: prefix.to_owned(), index: index.to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub link_selector: String,
    pub active_classes: Vec<String>,
    pub inactive_classes: Vec<String>,
    /// Document served for `/`.
    pub root_index: String,
    pub sections: Vec<SectionRule>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            link_selector: DEFAULT_NAV_LINK_SELECTOR.to_owned(),
            active_classes: vec!["text-blue-600".to_owned(), "bg-blue-50".to_owned()],
            inactive_classes: vec!["text-gray-700".to_owned()],
            root_index: DEFAULT_ROOT_INDEX.to_owned(),
            sections: vec![
                SectionRule::new("/articles", "/articles/index.html"),
                SectionRule::new("/partners", "/partners/index.html"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LazyConfig {
    /// Attribute holding the deferred image source.
    pub source_attribute: String,
}

impl Default for LazyConfig {
    fn default() -> Self {
        Self { source_attribute: DEFAULT_LAZY_SOURCE_ATTR.to_owned() }
    }
}

impl LazyConfig {
    pub fn selector(&self) -> String {
        format!("img[{}]", self.source_attribute)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub selector: String,
    pub shadow_class: String,
    pub threshold_px: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_NAVBAR_SELECTOR.to_owned(),
            shadow_class: DEFAULT_SHADOW_CLASS.to_owned(),
            threshold_px: DEFAULT_SHADOW_THRESHOLD_PX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Contact call-to-action element.
    pub selector: String,
    /// Page-tag action name (`gtag('event', <action>, ...)`).
    pub action: String,
    pub category: String,
    pub label: String,
    /// Pixel standard event name (`fbq('track', <event>)`).
    pub pixel_event: String,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_CONTACT_SELECTOR.to_owned(),
            action: "click".to_owned(),
            category: "engagement".to_owned(),
            label: "whatsapp_cta".to_owned(),
            pixel_event: "Contact".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PhoneConfig {
    pub country_code: String,
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self { country_code: DEFAULT_COUNTRY_CODE.to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Alert text shown after a successful copy.
    pub confirmation: String,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self { confirmation: DEFAULT_COPY_CONFIRMATION.to_owned() }
    }
}
