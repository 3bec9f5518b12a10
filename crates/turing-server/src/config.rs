use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use turing_bedrock::generate::{DEFAULT_MODEL_ID, DEFAULT_SYSTEM_PROMPT};
use turing_core::settings::{GameSettings, ThinkTime};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_SESSION_TTL_SECS: u64 = 3600;

/// Server configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub region: String,
    /// `None` when the model is switched off.
    pub model: Option<ModelConfig>,
    pub settings: GameSettings,
    pub session_ttl: Duration,
    pub log_json: bool,
    /// Running inside the AWS Lambda runtime.
    pub lambda: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    pub model_id: String,
    pub system_prompt: String,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = parse_or(&get, "TURING_BIND_ADDR", || {
            SocketAddr::from_str(DEFAULT_BIND_ADDR).map_err(|e| eyre::eyre!(e))
        })?;

        let region = get("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string());

        let model_enabled = match get("TURING_MODEL_ENABLED") {
            Some(raw) => parse_bool("TURING_MODEL_ENABLED", &raw)?,
            None => true,
        };
        let model = model_enabled.then(|| ModelConfig {
            model_id: get("TURING_MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            system_prompt: get("TURING_SYSTEM_PROMPT")
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
        });

        let defaults = GameSettings::default();
        let human_probability = parse_or(&get, "TURING_HUMAN_PROBABILITY", || {
            Ok(defaults.human_probability)
        })?;
        let think_min = parse_or(&get, "TURING_THINK_MIN_MS", || {
            Ok(defaults.think_time.min.as_millis() as u64)
        })?;
        let think_max = parse_or(&get, "TURING_THINK_MAX_MS", || {
            Ok(defaults.think_time.max.as_millis() as u64)
        })?;

        let settings = GameSettings {
            human_probability,
            think_time: ThinkTime {
                min: Duration::from_millis(think_min),
                max: Duration::from_millis(think_max),
            },
        };
        settings
            .validate()
            .map_err(|e| eyre::eyre!("invalid game settings: {e}"))?;

        let ttl_secs = parse_or(&get, "TURING_SESSION_TTL_SECS", || {
            Ok(DEFAULT_SESSION_TTL_SECS)
        })?;
        if ttl_secs == 0 {
            return Err(eyre::eyre!("TURING_SESSION_TTL_SECS must be greater than zero"));
        }

        let lambda = get("AWS_LAMBDA_RUNTIME_API").is_some();
        let log_json = match get("TURING_LOG_JSON") {
            Some(raw) => parse_bool("TURING_LOG_JSON", &raw)?,
            None => lambda,
        };

        Ok(Self {
            bind_addr,
            region,
            model,
            settings,
            session_ttl: Duration::from_secs(ttl_secs),
            log_json,
            lambda,
        })
    }
}

fn parse_or<T>(
    get: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: impl FnOnce() -> eyre::Result<T>,
) -> eyre::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| eyre::eyre!("invalid value for {key} ({raw:?}): {e}")),
        None => default(),
    }
}

fn parse_bool(key: &str, raw: &str) -> eyre::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(eyre::eyre!("invalid boolean for {key}: {other:?}")),
    }
}
