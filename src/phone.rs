//! Phone number normalization for `wa.me` and `tel:` links.

#[cfg(test)]
#[path = "phone_test.rs"]
mod phone_test;

use crate::config::DEFAULT_COUNTRY_CODE;

/// Normalize a phone number to international digits using the default
/// country code.
pub fn format_phone(phone: &str) -> String {
    format_phone_with(phone, DEFAULT_COUNTRY_CODE)
}

/// Strip every non-digit. A local number (single leading `0`) has that digit
/// replaced by `country_code`; anything else is returned as bare digits.
pub fn format_phone_with(phone: &str, country_code: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    match digits.strip_prefix('0') {
        Some(local) => format!("{country_code}{local}"),
        None => digits,
    }
}
