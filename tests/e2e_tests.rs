//! End-to-End Tests Against a Mock Forensics Service
//!
//! These tests wire the real HTTP adapters into `SearchParty` and run the
//! complete pipeline against an in-process mock of the remote API.

use searchparty::{ForensicsConfig, SearchError, search_party};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EMAIL: &str = "my@email.com";

fn config_for(server: &MockServer) -> ForensicsConfig {
    ForensicsConfig::builder()
        .base_url(format!("{}/api/", server.uri()))
        .email(EMAIL)
        .build()
        .expect("valid config")
}

fn directions(body: serde_json::Value) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!("/api/{EMAIL}/directions")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
}

#[tokio::test]
async fn test_full_search_finds_target() {
    let server = MockServer::start().await;
    directions(json!({
        "directions": [
            "forward", "right", "forward", "forward", "forward", "left",
            "forward", "forward", "left", "right", "forward", "right",
            "forward", "forward", "right", "forward", "forward", "left"
        ]
    }))
    .expect(1)
    .mount(&server)
    .await;
    Mock::given(method("GET"))
        .and(path(format!("/api/{EMAIL}/location/5/2")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Congratulations! You found the kittens!" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let party = search_party(&config_for(&server)).unwrap();
    let message = party.locate_target().await.unwrap();

    assert_eq!(message, "Congratulations! You found the kittens!");
}

#[tokio::test]
async fn test_directions_failure_skips_location_request() {
    let server = MockServer::start().await;
    directions(json!({ "unexpected": true }))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/api/{EMAIL}/location/0/0")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "unused" })))
        .expect(0)
        .mount(&server)
        .await;

    let party = search_party(&config_for(&server)).unwrap();
    let err = party.locate_target().await.unwrap_err();

    assert!(matches!(err, SearchError::InstructionFetch(_)));
    assert_eq!(
        err.message(),
        r#"unexpected json response: {"unexpected":true}"#
    );
}

#[tokio::test]
async fn test_location_failure_is_reported() {
    let server = MockServer::start().await;
    directions(json!({ "directions": ["left", "forward"] }))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/api/{EMAIL}/location/-1/0")))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "no search in progress" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let party = search_party(&config_for(&server)).unwrap();
    let err = party.locate_target().await.unwrap_err();

    assert!(matches!(err, SearchError::PositionSubmission(_)));
    assert_eq!(err.to_string(), "no search in progress");
}
