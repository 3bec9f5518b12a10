use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderName};
use uuid::Uuid;

use crate::error::ApiError;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "turing_session";

/// Session id taken from the request's cookie.
///
/// Rejects with the "session not found" error when the cookie is absent or
/// does not hold a UUID.
#[derive(Debug, Clone, Copy)]
pub struct SessionCookie(pub Uuid);

impl<S> FromRequestParts<S> for SessionCookie
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        session_id_from_headers(&parts.headers)
            .map(SessionCookie)
            .ok_or(ApiError::SessionNotFound)
    }
}

/// Find the session id among all `Cookie` headers.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// Session id handed out by a response's `Set-Cookie` header, if any.
pub fn issued_session_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// `Set-Cookie` header binding the client to `id`.
pub fn session_cookie_header(id: Uuid) -> (HeaderName, String) {
    (
        SET_COOKIE,
        format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax"),
    )
}
