use super::*;
use axum::http::{HeaderMap, HeaderValue, header::COOKIE};

fn jar_with(raw: &str) -> CookieJar {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_str(raw).unwrap());
    CookieJar::from_headers(&headers)
}

// =============================================================================
// issue / clear
// =============================================================================

#[test]
fn issued_cookie_attributes() {
    let cookie = issue(false);
    assert_eq!(cookie.name(), "admin_auth");
    assert_eq!(cookie.value(), "1");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.max_age(), Some(Duration::seconds(28_800)));
    assert_ne!(cookie.secure(), Some(true));
}

#[test]
fn cleared_cookie_attributes() {
    let cookie = clear(false);
    assert_eq!(cookie.name(), "admin_auth");
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}

#[test]
fn secure_flag_follows_argument() {
    assert_eq!(issue(true).secure(), Some(true));
    assert_eq!(clear(true).secure(), Some(true));
    assert!(issue(true).to_string().contains("Secure"));
    assert!(!issue(false).to_string().contains("Secure"));
}

#[test]
fn issued_cookie_header_text() {
    let rendered = issue(false).to_string();
    assert!(rendered.starts_with("admin_auth=1;"));
    assert!(rendered.contains("HttpOnly"));
    assert!(rendered.contains("Path=/"));
    assert!(rendered.contains("Max-Age=28800"));
    assert!(rendered.contains("SameSite=Lax"));
}

// =============================================================================
// is_authenticated
// =============================================================================

#[test]
fn authenticated_when_value_is_one() {
    assert!(is_authenticated(&jar_with("admin_auth=1")));
    assert!(is_authenticated(&jar_with("theme=dark; admin_auth=1")));
}

#[test]
fn not_authenticated_when_missing_or_other_value() {
    assert!(!is_authenticated(&CookieJar::new()));
    assert!(!is_authenticated(&jar_with("admin_auth=")));
    assert!(!is_authenticated(&jar_with("admin_auth=true")));
    assert!(!is_authenticated(&jar_with("admin_auth=11")));
    assert!(!is_authenticated(&jar_with("other=1")));
}
