use super::*;

// =============================================================
// Post-login target
// =============================================================

#[test]
fn preserved_in_app_path_wins_over_role_home() {
    assert_eq!(post_login_target(Some("/attendance"), "/admin"), "/attendance");
}

#[test]
fn missing_redirect_falls_back_to_role_home() {
    assert_eq!(post_login_target(None, "/employee"), "/employee");
}

#[test]
fn external_redirects_are_ignored() {
    assert_eq!(post_login_target(Some("https://example.com"), "/admin"), "/admin");
    assert_eq!(post_login_target(Some("attendance"), "/admin"), "/admin");
}

// =============================================================
// Redirect query parsing
// =============================================================

#[test]
fn redirect_param_is_extracted_from_the_query() {
    assert_eq!(redirect_from_query("?redirect=/attendance"), Some("/attendance".to_owned()));
    assert_eq!(redirect_from_query("redirect=/leaves"), Some("/leaves".to_owned()));
}

#[test]
fn other_params_are_ignored() {
    assert_eq!(redirect_from_query("?tab=open&redirect=/leaves"), Some("/leaves".to_owned()));
    assert_eq!(redirect_from_query("?tab=open"), None);
}

#[test]
fn redirect_param_must_be_an_in_app_path() {
    assert_eq!(redirect_from_query("?redirect=https://example.com"), None);
    assert_eq!(redirect_from_query(""), None);
}
