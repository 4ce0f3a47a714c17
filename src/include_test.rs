use super::*;

#[test]
fn success_statuses_pass() {
    assert!(check_status("/partials/nav.html", 200).is_ok());
    assert!(check_status("/partials/nav.html", 204).is_ok());
}

#[test]
fn not_found_is_status_error() {
    let err = check_status("/partials/missing.html", 404).expect_err("404 must fail");
    assert!(matches!(err, SiteError::Status { status: 404, .. }));
    assert_eq!(err.to_string(), "fetch /partials/missing.html returned status 404");
    assert_eq!(err.error_code(), "E_STATUS");
}

#[test]
fn redirects_and_server_errors_fail() {
    assert!(check_status("/a", 304).is_err());
    assert!(check_status("/a", 500).is_err());
    assert!(check_status("/a", 199).is_err());
}

#[test]
fn fragment_url_requires_a_value() {
    assert_eq!(fragment_url(Some("/partials/footer.html")), Some("/partials/footer.html"));
    assert_eq!(fragment_url(Some(" ")), None);
    assert_eq!(fragment_url(None), None);
}
