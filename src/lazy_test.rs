use super::*;

#[test]
fn strategy_follows_observer_support() {
    assert_eq!(LoadStrategy::for_support(true), LoadStrategy::Observe);
    assert_eq!(LoadStrategy::for_support(false), LoadStrategy::Eager);
}

#[test]
fn deferred_source_is_trimmed() {
    assert_eq!(deferred_source(Some(" /img/hero.webp ")), Some("/img/hero.webp"));
}

#[test]
fn blank_or_missing_source_is_skipped() {
    assert_eq!(deferred_source(Some("")), None);
    assert_eq!(deferred_source(Some("   ")), None);
    assert_eq!(deferred_source(None), None);
}
