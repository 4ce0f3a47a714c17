//! Shared HTML fragments (navigation, footer).
//!
//! Placeholders name a fragment URL in an attribute. The DOM side fetches
//! each one and injects the body; this module holds the parts of that flow
//! that do not need a browser.

#[cfg(test)]
#[path = "include_test.rs"]
mod include_test;

use crate::error::SiteError;

/// Fragment URL named by a placeholder attribute, if it names one.
pub fn fragment_url(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|url| !url.is_empty())
}

/// Accept only 2xx responses.
///
/// # Errors
///
/// Returns [`SiteError::Status`] for any other status.
pub fn check_status(url: &str, status: u16) -> Result<(), SiteError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SiteError::Status { url: url.to_owned(), status })
    }
}
