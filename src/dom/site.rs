//! The `Site` handle: one-shot wiring of every enhancement.
//!
//! ARCHITECTURE
//! ============
//! `Site::init` registers the listeners, starts lazy image loading and kicks
//! off fragment fetches. The handle owns everything it registered; dropping
//! it detaches all of it. Each enhancement is set up on its own: a failure is
//! logged and costs that enhancement only. Only a missing window or document
//! fails `init`.
//!
//! Menu setup and highlighting go through [`Navigation`], which fragment
//! injections re-run through a weak hook.

use std::rc::Rc;

use web_sys::{Document, Window};

use super::lazy_images::LazyImages;
use super::{EventListener, fragments, highlight, lazy_images, menu, navbar, smooth_scroll, tracker};
use crate::analytics::Analytics;
use crate::config::{MenuConfig, NavConfig, SiteConfig};
use crate::error::{SiteError, setup_or_log};
use crate::navigation::{NavSetup, Navigation};

pub struct Site {
    config: SiteConfig,
    navigation: Rc<Navigation<DomNavigation>>,
    _listeners: Vec<EventListener>,
    _lazy: Option<LazyImages>,
}

/// Menu and highlighting over the live document.
struct DomNavigation {
    window: Window,
    document: Document,
    menu: MenuConfig,
    nav: NavConfig,
}

impl NavSetup for DomNavigation {
    type Listener = EventListener;

    fn attach_menu(&self) -> Result<Option<EventListener>, SiteError> {
        menu::attach(&self.document, &self.menu)
    }

    fn highlight(&self) -> Result<usize, SiteError> {
        highlight::apply(&self.window, &self.document, &self.nav)
    }
}

impl Site {
    /// Wire every enhancement onto the current document.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Environment`] if there is no window or document.
    /// Enhancement failures are logged, not returned.
    pub fn init(config: SiteConfig, analytics: Analytics) -> Result<Self, SiteError> {
        let window = super::window()?;
        let document = super::document(&window)?;

        let mut listeners = setup_or_log("smooth scroll", smooth_scroll::attach(&document)).unwrap_or_default();
        let contact = tracker::attach(&document, &config.tracking, analytics);
        listeners.extend(setup_or_log("contact tracking", contact).flatten());
        let shadow = navbar::attach(&window, &document, &config.navbar);
        listeners.extend(setup_or_log("navbar shadow", shadow).flatten());
        let lazy = setup_or_log("lazy images", lazy_images::start(&window, &document, &config.lazy)).flatten();

        let navigation = Navigation::start(DomNavigation {
            window,
            document: document.clone(),
            menu: config.menu.clone(),
            nav: config.nav.clone(),
        });
        let pending = setup_or_log(
            "fragment inclusion",
            fragments::load_all(&document, &config.include, navigation.refresh_hook()),
        )
        .unwrap_or_default();

        log::debug!(
            "site initialized: {} listeners, {pending} fragments pending, lazy images {}",
            listeners.len(),
            if lazy.is_some() { "observed" } else { "settled" },
        );
        Ok(Self { config, navigation, _listeners: listeners, _lazy: lazy })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Re-run menu setup and link highlighting. Failures are logged.
    pub fn refresh_navigation(&self) {
        self.navigation.refresh();
    }
}
