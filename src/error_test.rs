use super::*;

#[test]
fn fetch_error_names_url() {
    let err = SiteError::Fetch { url: "/partials/nav.html".to_owned(), message: "network down".to_owned() };
    assert_eq!(err.to_string(), "fetch /partials/nav.html failed: network down");
    assert_eq!(err.error_code(), "E_FETCH");
}

#[test]
fn environment_error_names_missing_piece() {
    let err = SiteError::Environment("document");
    assert_eq!(err.to_string(), "browser environment unavailable: no document");
}

#[test]
fn codes_are_distinct() {
    let errors = [
        SiteError::Environment("window"),
        SiteError::Dom("x".to_owned()),
        SiteError::Fetch { url: String::new(), message: String::new() },
        SiteError::Status { url: String::new(), status: 500 },
        SiteError::Clipboard,
        SiteError::Payload("x".to_owned()),
    ];
    let mut codes: Vec<_> = errors.iter().map(SiteError::error_code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), errors.len());
}

#[test]
fn setup_success_is_kept() {
    assert_eq!(setup_or_log("lazy images", Ok::<_, SiteError>(3)), Some(3));
}

#[test]
fn setup_failure_becomes_none() {
    let failed: Result<usize, SiteError> = Err(SiteError::Dom("SyntaxError: '[' is not a valid selector".to_owned()));
    assert_eq!(setup_or_log("contact tracking", failed), None);
}

#[test]
fn one_failed_setup_leaves_the_others() {
    let results: Vec<Result<&str, SiteError>> = vec![
        Ok("smooth scroll"),
        Err(SiteError::Dom("bad tracking selector".to_owned())),
        Ok("navbar"),
    ];
    let started: Vec<&str> = results.into_iter().filter_map(|r| setup_or_log("enhancement", r)).collect();
    assert_eq!(started, vec!["smooth scroll", "navbar"]);
}
