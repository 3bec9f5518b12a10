use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use uuid::Uuid;

use turing_server::extract::{
    SESSION_COOKIE, issued_session_id, session_cookie_header, session_id_from_headers,
};

fn headers(name: axum::http::HeaderName, values: &[&str]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for value in values {
        map.append(name.clone(), HeaderValue::from_str(value).unwrap());
    }
    map
}

#[test]
fn session_id_is_found_among_other_cookies() {
    let id = Uuid::new_v4();
    let map = headers(COOKIE, &[&format!("theme=dark; {SESSION_COOKIE}={id}; lang=en")]);
    assert_eq!(session_id_from_headers(&map), Some(id));
}

#[test]
fn session_id_is_found_across_cookie_headers() {
    let id = Uuid::new_v4();
    let map = headers(COOKIE, &["theme=dark", &format!("{SESSION_COOKIE}={id}")]);
    assert_eq!(session_id_from_headers(&map), Some(id));
}

#[test]
fn malformed_or_missing_session_cookie_yields_none() {
    assert_eq!(session_id_from_headers(&HeaderMap::new()), None);
    let map = headers(COOKIE, &[&format!("{SESSION_COOKIE}=not-a-uuid")]);
    assert_eq!(session_id_from_headers(&map), None);
    let map = headers(COOKIE, &["other_session=1f0e"]);
    assert_eq!(session_id_from_headers(&map), None);
}

#[test]
fn issued_session_is_read_back_from_set_cookie() {
    let id = Uuid::new_v4();
    let (name, value) = session_cookie_header(id);
    assert_eq!(name, SET_COOKIE);
    assert!(value.contains("HttpOnly"));

    let map = headers(SET_COOKIE, &["tracking=abc; Path=/", &value]);
    assert_eq!(issued_session_id(&map), Some(id));
}

#[test]
fn responses_without_a_session_cookie_issue_nothing() {
    assert_eq!(issued_session_id(&HeaderMap::new()), None);
    let map = headers(SET_COOKIE, &["tracking=abc; Path=/"]);
    assert_eq!(issued_session_id(&map), None);
}
