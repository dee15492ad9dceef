//! End-to-end handler tests against mock providers.

use axum_test::TestServer;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::json;
use voicelens_core::mock::{MockConfig, MockProvider};
use voicelens_server::handler::response::{DEFAULT_OK_MESSAGE, ErrorResponse};
use voicelens_server::{PipelineMode, PipelineSettings, ServiceState, routes};

fn server(config: MockConfig, settings: PipelineSettings) -> TestServer {
    let services = MockProvider::new(config).into_services();
    let state = ServiceState::new(services, settings);
    TestServer::new(routes(state)).expect("router builds")
}

fn default_server() -> TestServer {
    server(MockConfig::default(), PipelineSettings::default())
}

#[tokio::test]
async fn empty_input_returns_the_informational_message() {
    let server = default_server();

    let response = server.post("/voicelens").await;

    response.assert_status_ok();
    assert_eq!(response.text(), DEFAULT_OK_MESSAGE);
}

#[tokio::test]
async fn empty_json_object_returns_the_informational_message() {
    let server = default_server();

    let response = server.post("/voicelens").json(&json!({})).await;

    response.assert_status_ok();
    assert_eq!(response.text(), DEFAULT_OK_MESSAGE);
}

#[tokio::test]
async fn message_passthrough_returns_the_chat_content() {
    let server = server(
        MockConfig {
            mock_reply: Some("Bonjour".to_string()),
            ..Default::default()
        },
        PipelineSettings::default(),
    );

    let response = server
        .post("/voicelens")
        .json(&json!({"message": "Hello"}))
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "Bonjour");
}

#[tokio::test]
async fn query_parameter_message_behaves_like_the_body_field() {
    let server = default_server();

    let response = server
        .post("/voicelens")
        .add_query_param("message", "Hello")
        .await;

    response.assert_status_ok();
    // The default mock echoes the last user message.
    assert_eq!(response.text(), "Hello");
}

#[tokio::test]
async fn query_message_wins_over_body_message() {
    let server = default_server();

    let response = server
        .post("/voicelens")
        .add_query_param("message", "from query")
        .json(&json!({"message": "from body"}))
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "from query");
}

#[tokio::test]
async fn image_input_produces_base64_audio_by_default() {
    let server = server(
        MockConfig {
            mock_text: Some("recognized text".to_string()),
            mock_audio: Some(b"AUDIO".to_vec()),
            ..Default::default()
        },
        PipelineSettings::default(),
    );

    let response = server
        .post("/voicelens")
        .json(&json!({"image": STANDARD.encode(b"fake image bytes")}))
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), STANDARD.encode(b"AUDIO"));
}

#[tokio::test]
async fn raw_audio_is_returned_when_base64_is_disabled() {
    let server = server(
        MockConfig {
            mock_text: Some("recognized text".to_string()),
            mock_audio: Some(b"AUDIO".to_vec()),
            ..Default::default()
        },
        PipelineSettings {
            base64_audio: false,
            ..Default::default()
        },
    );

    let response = server
        .post("/voicelens")
        .json(&json!({"image": STANDARD.encode(b"fake image bytes")}))
        .await;

    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), b"AUDIO");
    assert_eq!(response.header("content-type"), "audio/mpeg");
}

#[tokio::test]
async fn recite_mode_also_produces_audio() {
    let server = server(
        MockConfig {
            mock_text: Some("recognized text".to_string()),
            mock_audio: Some(b"AUDIO".to_vec()),
            ..Default::default()
        },
        PipelineSettings {
            mode: PipelineMode::Recite,
            ..Default::default()
        },
    );

    let response = server
        .post("/voicelens")
        .json(&json!({"image": STANDARD.encode(b"fake image bytes")}))
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), STANDARD.encode(b"AUDIO"));
}

#[tokio::test]
async fn relay_mode_ignores_the_image_and_answers_the_message() {
    let server = server(
        MockConfig {
            mock_reply: Some("relayed".to_string()),
            ..Default::default()
        },
        PipelineSettings {
            mode: PipelineMode::Relay,
            ..Default::default()
        },
    );

    let response = server
        .post("/voicelens")
        .json(&json!({
            "image": STANDARD.encode(b"fake image bytes"),
            "message": "Hello"
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "relayed");
}

#[tokio::test]
async fn read_without_text_falls_back_to_the_informational_message() {
    let server = server(
        MockConfig {
            mock_text: Some(String::new()),
            ..Default::default()
        },
        PipelineSettings::default(),
    );

    let response = server
        .post("/voicelens")
        .json(&json!({"image": STANDARD.encode(b"fake image bytes")}))
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), DEFAULT_OK_MESSAGE);
}

#[tokio::test]
async fn invalid_base64_image_is_a_bad_request() {
    let server = default_server();

    let response = server
        .post("/voicelens")
        .json(&json!({"image": "definitely not base64 !!"}))
        .await;

    response.assert_status_bad_request();
    let body: ErrorResponse = response.json();
    assert_eq!(body.error, "serialization");
}

#[tokio::test]
async fn malformed_json_body_is_a_bad_request() {
    let server = default_server();

    let response = server.post("/voicelens").text("{not json").await;

    response.assert_status_bad_request();
    let body: ErrorResponse = response.json();
    assert_eq!(body.error, "serialization");
}

#[tokio::test]
async fn health_reports_healthy_with_mock_providers() {
    let server = default_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["status"], "Healthy");
}
