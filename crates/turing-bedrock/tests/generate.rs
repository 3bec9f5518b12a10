//! Tests for the Bedrock generator.
//!
//! The `live_` tests call real AWS APIs and require valid credentials in the
//! environment plus access to the default model.
//!
//! Run with: `cargo test -p turing-bedrock --test generate -- --ignored`

use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::Client;

use turing_bedrock::client::build_client_with_region;
use turing_bedrock::error::BedrockError;
use turing_bedrock::generate::{
    BedrockGenerator, DEFAULT_MODEL_ID, DEFAULT_SYSTEM_PROMPT, GenerationParams, generate_reply,
};
use turing_core::error::CoreError;
use turing_core::responder::{ReplySource, TextGenerator, model_reply};

/// A client that is never used to send anything.
fn offline_client() -> Client {
    let config = aws_sdk_bedrockruntime::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .build();
    Client::from_conf(config)
}

#[test]
fn default_params_are_fixed_sampling_settings() {
    let params = GenerationParams::default();
    assert_eq!(params.max_tokens, 150);
    assert_eq!(params.temperature, 0.8);
    assert_eq!(params.top_p, None);
}

#[test]
fn generator_uses_defaults_until_overridden() {
    let generator = BedrockGenerator::new(offline_client(), DEFAULT_MODEL_ID);
    assert_eq!(generator.model_id(), DEFAULT_MODEL_ID);
    assert_eq!(generator.system_prompt(), DEFAULT_SYSTEM_PROMPT);
    assert_eq!(*generator.params(), GenerationParams::default());

    let params = GenerationParams {
        max_tokens: 64,
        temperature: 0.3,
        top_p: Some(0.9),
    };
    let generator = generator
        .with_system_prompt("Be terse.")
        .with_params(params);
    assert_eq!(generator.system_prompt(), "Be terse.");
    assert_eq!(*generator.params(), params);
}

#[test]
fn bedrock_errors_become_generation_errors() {
    let err: CoreError = BedrockError::Invocation("throttled".to_string()).into();
    assert!(matches!(err, CoreError::Generation(ref msg) if msg.contains("throttled")));
}

#[tokio::test]
async fn empty_region_is_rejected() {
    let err = build_client_with_region("  ").await.unwrap_err();
    assert!(matches!(err, BedrockError::Config(_)));
}

#[tokio::test]
#[ignore]
async fn live_generate_reply_returns_text() {
    let client = build_client_with_region("us-east-1").await.unwrap();
    let text = generate_reply(
        &client,
        DEFAULT_MODEL_ID,
        DEFAULT_SYSTEM_PROMPT,
        &GenerationParams::default(),
        "What did you do last weekend?",
    )
    .await
    .expect("generate_reply should succeed");

    println!("model replied: {text}");
    assert!(!text.trim().is_empty());
}

#[tokio::test]
#[ignore]
async fn live_model_reply_is_not_a_fallback() {
    let client = build_client_with_region("us-east-1").await.unwrap();
    let generator = BedrockGenerator::new(client, DEFAULT_MODEL_ID);

    let reply = model_reply(Some(&generator), "Do you like coffee?").await;

    println!("{:?}: {}", reply.source, reply.text);
    assert_eq!(reply.source, ReplySource::Model);
}
