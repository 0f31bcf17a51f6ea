//! Integration tests for the Jolpica client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! ensuring payload passthrough and error normalization work as intended.
#![allow(clippy::expect_used, clippy::unwrap_used)]

use integration_jolpica::{F1Api, JolpicaClient, JolpicaConfig, JolpicaError, Resource};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Sample Jolpica seasons payload for testing
fn sample_seasons_response() -> serde_json::Value {
    serde_json::json!({
        "MRData": {
            "xmlns": "",
            "series": "f1",
            "limit": "30",
            "offset": "0",
            "total": "75",
            "SeasonTable": {
                "Seasons": [
                    {"season": "1950", "url": "https://en.wikipedia.org/wiki/1950_Formula_One_season"},
                    {"season": "1951", "url": "https://en.wikipedia.org/wiki/1951_Formula_One_season"}
                ]
            }
        }
    })
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> JolpicaClient {
    let config = JolpicaConfig {
        base_url: mock_server.uri(),
        timeout_secs: 2,
        ..Default::default()
    };
    JolpicaClient::new(config).expect("Failed to create client")
}

fn year(s: &str) -> domain::SeasonYear {
    s.parse().unwrap()
}

fn round(s: &str) -> domain::RaceRound {
    s.parse().unwrap()
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn fetch_passes_payload_through_unmodified() {
    let mock_server = MockServer::start().await;
    let body = sample_seasons_response();

    Mock::given(method("GET"))
        .and(path("/seasons.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let payload = client.fetch(&Resource::Seasons).await.unwrap();

    assert_eq!(payload, body);
}

#[tokio::test]
async fn fetch_builds_parameterized_paths() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2024/5/laps/12.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"MRData": {}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let resource = Resource::Laps {
        year: year("2024"),
        round: round("5"),
        lap: Some("12".parse().unwrap()),
    };

    assert!(client.fetch(&resource).await.is_ok());
}

#[tokio::test]
async fn fetch_requests_the_standings_table_for_the_kind() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2019/constructorStandings.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"MRData": {}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let resource = Resource::Standings {
        year: year("2019"),
        kind: domain::StandingsKind::Constructors,
    };

    assert!(client.fetch(&resource).await.is_ok());
}

// ============================================================================
// Failure normalization
// ============================================================================

#[tokio::test]
async fn non_2xx_status_is_propagated_with_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/9999.json"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"detail": "Not found."})),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client
        .fetch(&Resource::Season { year: year("9999") })
        .await
        .unwrap_err();

    match err {
        JolpicaError::Upstream { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, Some(serde_json::json!({"detail": "Not found."})));
        }
        other => panic!("expected Upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_keeps_upstream_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/seasons.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.fetch(&Resource::Seasons).await.unwrap_err();

    assert_eq!(err.status(), 500);
    assert!(matches!(err, JolpicaError::Upstream { status: 500, .. }));
}

#[tokio::test]
async fn timeout_surfaces_as_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/seasons.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_seasons_response())
                .set_delay(std::time::Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.fetch(&Resource::Seasons).await.unwrap_err();

    assert!(matches!(err, JolpicaError::Network(_)));
    assert_eq!(err.status(), 503);
}

#[tokio::test]
async fn unreachable_upstream_surfaces_as_network_error() {
    // Nothing is listening on this port
    let config = JolpicaConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 2,
        ..Default::default()
    };
    let client = JolpicaClient::new(config).unwrap();

    let err = client.fetch(&Resource::Seasons).await.unwrap_err();
    assert!(matches!(err, JolpicaError::Network(_)));
}

#[tokio::test]
async fn invalid_json_on_success_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/seasons.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.fetch(&Resource::Seasons).await.unwrap_err();

    assert!(matches!(err, JolpicaError::Decode(_)));
    assert_eq!(err.status(), 502);
}

#[tokio::test]
async fn each_failed_attempt_is_reported_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/seasons.json"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let _ = client.fetch(&Resource::Seasons).await;

    // Mock expectation of exactly one request is asserted on drop
}
