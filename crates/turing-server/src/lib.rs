//! turing-server
//!
//! HTTP front end for the game: page load, message exchange, reveal, and
//! reset, backed by an in-process session store.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod sessions;
pub mod state;

use state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::page::index))
        .route("/health", get(routes::health::health_check))
        .route("/send_message", post(routes::chat::send_message))
        .route("/reveal", post(routes::reveal::reveal))
        .route("/new_session", post(routes::reset::new_session))
        .layer(axum_mw::from_fn(middleware::session_log::session_log))
        .layer(cors)
        .with_state(state)
}
