//! Browser-side enhancements for a static marketing site.
//!
//! This crate is compiled to WebAssembly and loaded by every page of the site.
//! The host page calls `start()` (or `startWithConfig(json)`) once; the
//! returned handle owns every listener and detaches them on `dispose()`.
//!
//! Decision logic lives in plain modules that compile and test natively. The
//! `browser` feature adds the DOM glue in `dom` and the JS exports in
//! `bindings`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Selectors, class names and thresholds, deserialized from JSON |
//! | [`error`] | [`error::SiteError`] shared by every fallible operation |
//! | [`include`] | Fragment response validation |
//! | [`menu`] | Mobile menu open/close transitions |
//! | [`anchor`] | In-page anchor decisions and the navbar shadow threshold |
//! | [`lazy`] | Deferred image source handling |
//! | [`nav`] | Active navigation link matching |
//! | [`navigation`] | Re-runnable menu setup and highlighting |
//! | [`analytics`] | Injectable tracking integrations and the contact click tracker |
//! | [`phone`] | Phone number normalization |
//! | [`debounce`] | Trailing-edge debounce over a pluggable timer host |
//! | `dom` | Listener registration and the `Site` handle (`browser` only) |

pub mod analytics;
pub mod anchor;
pub mod config;
pub mod debounce;
pub mod error;
pub mod include;
pub mod lazy;
pub mod menu;
pub mod nav;
pub mod navigation;
pub mod phone;

#[cfg(feature = "browser")]
mod bindings;
#[cfg(feature = "browser")]
pub mod dom;

pub use config::SiteConfig;
pub use error::SiteError;
pub use phone::format_phone;
