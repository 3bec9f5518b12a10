use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde_json::Value;

use turing_core::error::CoreError;
use turing_server::error::ApiError;

async fn render(err: ApiError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn missing_session_is_not_found() {
    let (status, body) = render(ApiError::SessionNotFound).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "session not found");
}

#[tokio::test]
async fn blank_message_maps_from_core_error() {
    let err: ApiError = CoreError::EmptyMessage.into();
    assert!(matches!(err, ApiError::EmptyMessage));

    let (status, body) = render(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "empty message");
}

#[tokio::test]
async fn invalid_setting_is_a_bad_request() {
    let err: ApiError = CoreError::InvalidSetting("human probability 2".to_string()).into();

    let (status, body) = render(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("human probability 2"));
}

#[tokio::test]
async fn internal_details_are_not_exposed() {
    let err: ApiError = CoreError::Generation("credentials expired".to_string()).into();
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let (_, body) = render(err).await;
    assert_eq!(body["error"], "internal server error");
}
