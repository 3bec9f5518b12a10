use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use turing_bedrock::client::build_client_with_region;
use turing_bedrock::generate::BedrockGenerator;
use turing_core::responder::TextGenerator;
use turing_server::config::ServerConfig;
use turing_server::sessions::SessionStore;
use turing_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServerConfig::from_env()?;

    init_tracing(config.log_json);

    let generator = build_generator(&config).await;
    let sessions = SessionStore::new(config.session_ttl);
    sessions.spawn_sweeper(config.session_ttl);
    let state = AppState::new(
        sessions,
        generator,
        config.settings,
    );
    let app = turing_server::router(state);

    if config.lambda {
        info!("starting under the Lambda runtime");
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Build the model client. A failure here leaves the game running with the
/// AI side answering in its "technical problems" phrase.
async fn build_generator(config: &ServerConfig) -> Option<Arc<dyn TextGenerator>> {
    let Some(model) = &config.model else {
        warn!("model disabled, AI sessions will use the unavailable reply");
        return None;
    };

    match build_client_with_region(&config.region).await {
        Ok(client) => {
            info!(model_id = %model.model_id, region = %config.region, "model client ready");
            let generator: Arc<dyn TextGenerator> = Arc::new(
                BedrockGenerator::new(client, model.model_id.clone())
                    .with_system_prompt(model.system_prompt.clone()),
            );
            Some(generator)
        }
        Err(e) => {
            error!(error = %e, "failed to build model client");
            None
        }
    }
}
