use axum::http::{header, HeaderMap, HeaderValue};
use pretty_assertions::assert_eq;
use server::auth::cookies;

#[test]
fn session_cookie_is_http_only_and_lax() {
    let value = cookies::build_session_cookie("tok", 720);
    let s = value.to_str().unwrap();
    assert!(s.starts_with("cb_session=tok"));
    assert!(s.contains("HttpOnly"));
    assert!(s.contains("SameSite=Lax"));
    assert!(s.contains("Path=/"));
    assert!(s.contains("Max-Age=43200"));
}

#[test]
fn clear_cookie_zeroes_max_age() {
    let value = cookies::build_clear_cookie();
    let s = value.to_str().unwrap();
    assert!(s.starts_with("cb_session="));
    assert!(s.contains("Max-Age=0"));
}

#[test]
fn token_extracted_from_cookie_header() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_static("theme=dark; cb_session=abc123; other=1"),
    );
    assert_eq!(
        cookies::extract_session_token(&headers).as_deref(),
        Some("abc123")
    );
}

#[test]
fn bearer_header_is_the_fallback() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_static("Bearer zzz"),
    );
    assert_eq!(
        cookies::extract_session_token(&headers).as_deref(),
        Some("zzz")
    );

    // Cookie wins when both are present
    headers.insert(
        header::COOKIE,
        HeaderValue::from_static("cb_session=from-cookie"),
    );
    assert_eq!(
        cookies::extract_session_token(&headers).as_deref(),
        Some("from-cookie")
    );
}

#[test]
fn absent_credentials_yield_none() {
    let headers = HeaderMap::new();
    assert!(cookies::extract_session_token(&headers).is_none());
}
