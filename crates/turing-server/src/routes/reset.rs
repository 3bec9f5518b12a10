use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::extract::{session_cookie_header, session_id_from_headers};
use crate::state::AppState;

#[derive(Serialize)]
pub struct NewSessionResponse {
    pub status: &'static str,
    pub session_id: Uuid,
}

/// Replace the caller's session with a fresh one and a fresh responder draw.
pub async fn new_session(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let previous = session_id_from_headers(&headers);
    let (id, _) = state.sessions.replace(previous, state.start_session());

    info!(session_id = %id, replaced = previous.is_some(), "session reset");

    (
        [session_cookie_header(id)],
        Json(NewSessionResponse {
            status: "new session started",
            session_id: id,
        }),
    )
}
