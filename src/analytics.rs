//! Tracking integrations and the contact click tracker.
//!
//! Two integrations are supported: a page tag (`gtag('event', action, params)`)
//! and a pixel (`fbq('track', event)`). Each is an optional callback on
//! [`Analytics`]; an absent one is a no-op. The browser build wires them to the
//! page globals (see `dom::tracker`), tests wire them to recorders.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use std::rc::Rc;

use serde::Serialize;

use crate::config::TrackingConfig;

/// Parameters passed as the third argument of a page-tag event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventParams {
    pub event_category: String,
    pub event_label: String,
}

pub type TagFn = Rc<dyn Fn(&str, &EventParams)>;
pub type PixelFn = Rc<dyn Fn(&str)>;

#[derive(Clone, Default)]
pub struct Analytics {
    tag: Option<TagFn>,
    pixel: Option<PixelFn>,
}

impl Analytics {
    /// No integrations; every event is dropped.
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tag(mut self, f: impl Fn(&str, &EventParams) + 'static) -> Self {
        self.tag = Some(Rc::new(f));
        self
    }

    #[must_use]
    pub fn with_pixel(mut self, f: impl Fn(&str) + 'static) -> Self {
        self.pixel = Some(Rc::new(f));
        self
    }

    pub fn has_tag(&self) -> bool {
        self.tag.is_some()
    }

    pub fn has_pixel(&self) -> bool {
        self.pixel.is_some()
    }

    pub fn tag_event(&self, action: &str, params: &EventParams) {
        if let Some(tag) = &self.tag {
            tag(action, params);
        }
    }

    pub fn pixel_event(&self, event: &str) {
        if let Some(pixel) = &self.pixel {
            pixel(event);
        }
    }
}

impl std::fmt::Debug for Analytics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analytics")
            .field("tag", &self.has_tag())
            .field("pixel", &self.has_pixel())
            .finish()
    }
}

/// Reports clicks on the contact call-to-action.
#[derive(Debug, Clone)]
pub struct ContactTracker {
    action: String,
    params: EventParams,
    pixel_event: String,
}

impl ContactTracker {
    pub fn new(cfg: &TrackingConfig) -> Self {
        Self {
            action: cfg.action.clone(),
            params: EventParams { event_category: cfg.category.clone(), event_label: cfg.label.clone() },
            pixel_event: cfg.pixel_event.clone(),
        }
    }

    pub fn params(&self) -> &EventParams {
        &self.params
    }

    pub fn record_click(&self, analytics: &Analytics) {
        analytics.tag_event(&self.action, &self.params);
        analytics.pixel_event(&self.pixel_event);
        log::info!("contact CTA clicked: {}", self.params.event_label);
    }
}
