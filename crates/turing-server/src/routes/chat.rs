use axum::Json;
use axum::extract::State;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::info;

use turing_core::models::session::Sender;
use turing_core::responder::respond;

use crate::error::ApiError;
use crate::extract::SessionCookie;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
pub struct SendMessageResponse {
    pub response: String,
    pub message_count: u32,
    pub is_typing: bool,
}

/// Record the user's message and answer it from the session's responder.
///
/// The session stays locked for the whole exchange, so concurrent requests
/// on one session are handled one after another.
pub async fn send_message(
    State(state): State<AppState>,
    SessionCookie(id): SessionCookie,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, ApiError> {
    let handle = state
        .sessions
        .get(id)
        .ok_or(ApiError::SessionNotFound)?;
    let mut session = handle.lock().await;

    let user_text = session.record_user_message(&req.message)?.text.clone();

    let mut rng = StdRng::from_entropy();
    let delay = state.settings.think_time.sample(&mut rng);
    tokio::time::sleep(delay).await;

    let reply = respond(
        session.responder(),
        &user_text,
        state.generator.as_deref(),
        &mut rng,
    )
    .await;
    session.add_message(Sender::Agent, reply.text.clone());

    info!(
        session_id = %id,
        source = ?reply.source,
        delay_ms = delay.as_millis() as u64,
        message_count = session.message_count(),
        "reply sent"
    );

    Ok(Json(SendMessageResponse {
        response: reply.text,
        message_count: session.message_count(),
        is_typing: false,
    }))
}
