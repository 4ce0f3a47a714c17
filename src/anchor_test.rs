use std::cell::Cell;

use super::*;

#[test]
fn fragment_id_strips_hash() {
    assert_eq!(fragment_id("#services"), Some("services"));
}

#[test]
fn bare_hash_names_nothing() {
    assert_eq!(fragment_id("#"), None);
}

#[test]
fn non_fragment_href_names_nothing() {
    assert_eq!(fragment_id("/about.html#team"), None);
    assert_eq!(fragment_id(""), None);
}

#[test]
fn existing_target_scrolls() {
    let action = decide("#pricing", |id| (id == "pricing").then(|| id.to_owned()));
    assert_eq!(action, AnchorAction::Scroll("pricing".to_owned()));
}

#[test]
fn missing_target_keeps_default_navigation() {
    assert_eq!(decide("#nowhere", |_| None::<()>), AnchorAction::Default);
}

#[test]
fn bare_hash_never_looks_up_target() {
    let lookups = Cell::new(0);
    let action = decide("#", |_| {
        lookups.set(lookups.get() + 1);
        Some(())
    });
    assert_eq!(action, AnchorAction::Default);
    assert_eq!(lookups.get(), 0);
}

#[test]
fn target_is_looked_up_once_and_handed_back() {
    let lookups = Cell::new(0);
    let action = decide("#team", |id| {
        lookups.set(lookups.get() + 1);
        Some(format!("element#{id}"))
    });
    assert_eq!(lookups.get(), 1);
    assert_eq!(action, AnchorAction::Scroll("element#team".to_owned()));
}

#[test]
fn shadow_appears_past_threshold() {
    assert!(!shadow_visible(0.0, 10.0));
    assert!(!shadow_visible(10.0, 10.0));
    assert!(shadow_visible(10.5, 10.0));
    assert!(shadow_visible(400.0, 10.0));
}
