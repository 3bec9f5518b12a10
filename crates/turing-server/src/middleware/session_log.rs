use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

use crate::extract::{issued_session_id, session_id_from_headers};

/// Logs one `game_request` event per request, tagged with the game session
/// the cookie points at. Page loads and resets also record the session they
/// hand out, which ties a replaced session to its successor.
pub async fn session_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let session_id = session_id_from_headers(req.headers());
    let started = Instant::now();

    let response = next.run(req).await;

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        session_id = ?session_id,
        issued_session_id = ?issued_session_id(response.headers()),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "game_request"
    );

    response
}
