use super::*;
use crate::config::SectionRule;

fn nav() -> NavConfig {
    NavConfig::default()
}

#[test]
fn root_path_activates_root_index() {
    assert_eq!(match_rule("/", "/index.html", &nav()), Some(MatchRule::RootIndex));
}

#[test]
fn root_path_activates_bare_root_link() {
    assert_eq!(match_rule("/", "/", &nav()), Some(MatchRule::Exact));
}

#[test]
fn index_document_path_is_trailing_index_match() {
    assert_eq!(match_rule("/about/index.html", "/about/index.html", &nav()), Some(MatchRule::TrailingIndex));
}

#[test]
fn exact_page_match() {
    assert_eq!(match_rule("/contact.html", "/contact.html", &nav()), Some(MatchRule::Exact));
    assert_eq!(match_rule("/contact.html", "/about.html", &nav()), None);
}

#[test]
fn section_pages_activate_section_index() {
    assert_eq!(match_rule("/articles/foo", "/articles/index.html", &nav()), Some(MatchRule::Section));
    assert_eq!(match_rule("/partners/acme.html", "/partners/index.html", &nav()), Some(MatchRule::Section));
}

#[test]
fn section_index_is_not_activated_from_other_sections() {
    assert_eq!(match_rule("/articles/foo", "/partners/index.html", &nav()), None);
    assert_eq!(match_rule("/about.html", "/articles/index.html", &nav()), None);
}

#[test]
fn section_prefix_does_not_activate_other_links() {
    assert_eq!(match_rule("/articles/foo", "/index.html", &nav()), None);
}

#[test]
fn missing_href_is_inactive() {
    assert!(!is_active("/", None, &nav()));
}

#[test]
fn plan_marks_exactly_matching_links() {
    let hrefs = [
        Some("/index.html"),
        Some("/articles/index.html"),
        Some("/partners/index.html"),
        Some("/articles/foo"),
        None,
    ];
    let plan = highlight_plan("/articles/foo", hrefs, &nav());
    assert_eq!(plan, vec![false, true, false, true, false]);
}

#[test]
fn plan_for_home_page() {
    let hrefs = [Some("/index.html"), Some("/about.html"), Some("/articles/index.html")];
    assert_eq!(highlight_plan("/", hrefs, &nav()), vec![true, false, false]);
}

#[test]
fn configured_sections_replace_defaults() {
    let mut cfg = nav();
    cfg.sections = vec![SectionRule::new("/blog", "/blog/")];
    assert_eq!(match_rule("/blog/post-1", "/blog/", &cfg), Some(MatchRule::Section));
    assert_eq!(match_rule("/articles/foo", "/articles/index.html", &cfg), None);
}

#[test]
fn link_classes_swap_active_and_inactive() {
    let cfg = nav();
    let reset = LinkClasses::reset(&cfg);
    assert_eq!(reset.add, ["text-gray-700".to_owned()]);
    assert_eq!(reset.remove, ["text-blue-600".to_owned(), "bg-blue-50".to_owned()]);
    let active = LinkClasses::active(&cfg);
    assert_eq!(active.add, reset.remove);
    assert_eq!(active.remove, reset.add);
}
