//! Navigation setup that can be re-run.
//!
//! Injected fragments usually carry the nav, so menu setup and link
//! highlighting run once at start and again after every injection. The menu
//! listener lives in a single slot: each run replaces the previous listener,
//! never stacks a second one. Injections hold only a weak hook, so one that
//! completes after the site was disposed does nothing.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::SiteError;

/// The two steps of a navigation refresh. The browser build implements this
/// over the live document.
pub trait NavSetup {
    /// Dropping it detaches the menu listener.
    type Listener: 'static;

    /// Register the menu listener; `None` when the page has no menu.
    ///
    /// # Errors
    ///
    /// Returns an error if registration is rejected.
    fn attach_menu(&self) -> Result<Option<Self::Listener>, SiteError>;

    /// Apply link highlighting; returns the number of active links.
    ///
    /// # Errors
    ///
    /// Returns an error if the location or a class list cannot be accessed.
    fn highlight(&self) -> Result<usize, SiteError>;
}

pub struct Navigation<S: NavSetup> {
    setup: S,
    menu: RefCell<Option<S::Listener>>,
}

impl<S: NavSetup + 'static> Navigation<S> {
    /// Build and run the first refresh right away.
    pub fn start(setup: S) -> Rc<Self> {
        let navigation = Rc::new(Self { setup, menu: RefCell::new(None) });
        navigation.refresh();
        navigation
    }

    /// Re-run menu setup and highlighting. Failures are logged; a failed menu
    /// setup keeps the previous listener.
    pub fn refresh(&self) {
        match self.setup.attach_menu() {
            Ok(listener) => *self.menu.borrow_mut() = listener,
            Err(err) => log::warn!("{}: menu setup failed: {err}", err.error_code()),
        }
        match self.setup.highlight() {
            Ok(active) => log::debug!("navigation highlighted: {active} active links"),
            Err(err) => log::warn!("{}: navigation highlighting failed: {err}", err.error_code()),
        }
    }

    pub fn has_menu(&self) -> bool {
        self.menu.borrow().is_some()
    }

    /// Callback for fragment injections. It holds a weak reference and is a
    /// no-op once the navigation has been dropped.
    pub fn refresh_hook(self: &Rc<Self>) -> Rc<dyn Fn()> {
        let weak = Rc::downgrade(self);
        Rc::new(move || {
            if let Some(navigation) = weak.upgrade() {
                navigation.refresh();
            }
        })
    }
}
