use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::Client;

use crate::error::BedrockError;

/// Load AWS configuration from the default provider chain, pinned to `region`.
pub async fn build_config_with_region(region: &str) -> Result<aws_config::SdkConfig, BedrockError> {
    if region.trim().is_empty() {
        return Err(BedrockError::Config("region must not be empty".to_string()));
    }

    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await;

    Ok(config)
}

/// Build a Bedrock runtime client for `region`.
pub async fn build_client_with_region(region: &str) -> Result<Client, BedrockError> {
    let config = build_config_with_region(region).await?;
    Ok(Client::new(&config))
}
