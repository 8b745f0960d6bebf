//! Integration tests for the forecast feed client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! covering the healthy path and every error mapping.

use integration_nea::{ForecastFeed, NeaClient, NeaConfig, NeaError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Sample feed payload shaped like the live endpoint
fn sample_feed_response() -> serde_json::Value {
    serde_json::json!({
        "area_metadata": [
            {
                "name": "Tampines",
                "label_location": { "latitude": 1.3496, "longitude": 103.9568 }
            },
            {
                "name": "Jurong East",
                "label_location": { "latitude": 1.3329, "longitude": 103.7436 }
            }
        ],
        "items": [
            {
                "update_timestamp": "2025-10-16T17:36:22+08:00",
                "timestamp": "2025-10-16T17:30:00+08:00",
                "valid_period": {
                    "start": "2025-10-16T17:30:00+08:00",
                    "end": "2025-10-16T19:30:00+08:00"
                },
                "forecasts": [
                    { "area": "Tampines", "forecast": "Thundery Showers" },
                    { "area": "Jurong East", "forecast": "Partly Cloudy (Night)" }
                ]
            }
        ],
        "api_info": { "status": "healthy" }
    })
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> NeaClient {
    let config = NeaConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    NeaClient::new(config).expect("Failed to create client")
}

/// Setup a mock for the forecast endpoint with the given response
async fn setup_feed_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/environment/2-hour-weather-forecast"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_latest_returns_the_published_round() {
    let mock_server = MockServer::start().await;

    setup_feed_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_feed_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.latest().await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let round = result.unwrap();
    assert_eq!(round.entries.len(), 2);
    assert_eq!(round.entries[0].area, "Tampines");
    assert_eq!(round.entries[0].forecast, "Thundery Showers");
    assert_eq!(
        round.updated_at.as_deref(),
        Some("2025-10-16T17:36:22+08:00")
    );
}

#[tokio::test]
async fn test_request_hits_the_forecast_path_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/environment/2-hour-weather-forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_feed_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.latest().await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_health_check_success() {
    let mock_server = MockServer::start().await;

    setup_feed_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_feed_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    assert!(client.is_healthy().await, "Expected health check to succeed");
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_server_error_returns_service_unavailable() {
    let mock_server = MockServer::start().await;

    setup_feed_mock(
        &mock_server,
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.latest().await;

    assert!(
        matches!(result, Err(NeaError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_error() {
    let mock_server = MockServer::start().await;

    setup_feed_mock(
        &mock_server,
        ResponseTemplate::new(429).set_body_string("Rate limit exceeded"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.latest().await;

    assert!(
        matches!(result, Err(NeaError::RateLimitExceeded)),
        "Expected RateLimitExceeded, got: {result:?}"
    );
}

#[tokio::test]
async fn test_client_error_returns_request_failed() {
    let mock_server = MockServer::start().await;

    setup_feed_mock(
        &mock_server,
        ResponseTemplate::new(404).set_body_string("Not Found"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.latest().await;

    assert!(
        matches!(result, Err(NeaError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_response() {
    let mock_server = MockServer::start().await;

    setup_feed_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.latest().await;

    assert!(
        matches!(result, Err(NeaError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_empty_items_is_a_feed_error() {
    let mock_server = MockServer::start().await;

    setup_feed_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "area_metadata": [],
            "items": [],
            "api_info": { "status": "healthy" }
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.latest().await;

    assert!(
        matches!(result, Err(NeaError::EmptyFeed)),
        "Expected EmptyFeed, got: {result:?}"
    );
}

#[tokio::test]
async fn test_health_check_fails_on_server_error() {
    let mock_server = MockServer::start().await;

    setup_feed_mock(
        &mock_server,
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let client = create_test_client(&mock_server);
    assert!(!client.is_healthy().await, "Expected health check to fail");
}

#[tokio::test]
async fn test_health_check_respects_feed_self_diagnosis() {
    let mock_server = MockServer::start().await;

    setup_feed_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [],
            "api_info": { "status": "degraded" }
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    assert!(
        !client.is_healthy().await,
        "Expected degraded feed to be unhealthy"
    );
}
