use std::sync::Arc;

use turing_core::models::session::TuringSession;
use turing_core::responder::TextGenerator;
use turing_core::settings::GameSettings;

use crate::sessions::SessionStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// `None` when no model is configured or the client failed to build.
    pub generator: Option<Arc<dyn TextGenerator>>,
    pub settings: GameSettings,
}

impl AppState {
    pub fn new(
        sessions: SessionStore,
        generator: Option<Arc<dyn TextGenerator>>,
        settings: GameSettings,
    ) -> Self {
        Self {
            sessions,
            generator,
            settings,
        }
    }

    /// A fresh session with its responder drawn from the game settings.
    pub fn start_session(&self) -> TuringSession {
        TuringSession::start(&mut rand::thread_rng(), &self.settings)
    }
}
