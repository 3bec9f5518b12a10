use axum::Json;
use axum::extract::State;
use tracing::info;

use turing_core::models::reveal::Reveal;

use crate::error::ApiError;
use crate::extract::SessionCookie;
use crate::state::AppState;

pub async fn reveal(
    State(state): State<AppState>,
    SessionCookie(id): SessionCookie,
) -> Result<Json<Reveal>, ApiError> {
    let handle = state
        .sessions
        .get(id)
        .ok_or(ApiError::SessionNotFound)?;
    let reveal = handle.lock().await.reveal();

    info!(
        session_id = %id,
        identity = reveal.identity.label(),
        message_count = reveal.message_count,
        duration_secs = reveal.duration_secs,
        "session revealed"
    );

    Ok(Json(reveal))
}
