//! Integration tests for the distance-matrix route resolver
//!
//! A wiremock stub stands in for the distance service. The contract under
//! test: no credential means the deterministic fallback without any outbound
//! call; a credentialed call that fails in any way is an error, never a
//! silent fallback.

use std::time::{Duration, Instant};

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bhada_backend::config::DistanceApiConfig;
use bhada_backend::error::AppError;
use bhada_backend::routing::resolver::{
    RouteResolver, FALLBACK_DISTANCE_KM, FALLBACK_DURATION_HOURS, FALLBACK_TOLL_INR,
};

fn resolver(api_key: Option<&str>, base_url: &str, timeout_secs: u64) -> RouteResolver {
    RouteResolver::new(DistanceApiConfig {
        api_key: api_key.map(str::to_string),
        base_url: base_url.to_string(),
        timeout_secs,
    })
}

/// Test that a live call passes the right query, converts meters/seconds to
/// km/hours and steps the toll per 100 km.
#[tokio::test]
async fn test_live_call_converts_service_figures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/distancematrix/json"))
        .and(query_param("origins", "Mumbai"))
        .and(query_param("destinations", "Delhi"))
        .and(query_param("units", "metric"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "rows": [{ "elements": [{
                "status": "OK",
                "distance": { "value": 1415982 },
                "duration": { "value": 50460 }
            }]}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let route = resolver(Some("test-key"), &server.uri(), 2)
        .resolve("Mumbai", "Delhi")
        .await
        .unwrap();

    assert!((route.distance_km - 1415.982).abs() < 1e-9);
    assert!((route.duration_hours - 14.016_666_666_666_666).abs() < 1e-9);
    assert_eq!(route.toll_charges_inr, 1400);
    assert!(!route.degraded);
}

/// Test that a missing credential serves the tagged fallback and never calls
/// the distance service.
#[tokio::test]
async fn test_missing_credential_serves_fallback_without_calling_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let route = resolver(None, &server.uri(), 2)
        .resolve("Mumbai", "Delhi")
        .await
        .unwrap();

    assert_eq!(route.distance_km, FALLBACK_DISTANCE_KM);
    assert_eq!(route.duration_hours, FALLBACK_DURATION_HOURS);
    assert_eq!(route.toll_charges_inr, FALLBACK_TOLL_INR);
    assert!(route.degraded);
}

/// Test that a rejected request (top-level status) is an upstream error.
#[tokio::test]
async fn test_rejected_request_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/distancematrix/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "REQUEST_DENIED",
            "rows": []
        })))
        .mount(&server)
        .await;

    let err = resolver(Some("bad-key"), &server.uri(), 2)
        .resolve("Mumbai", "Delhi")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Upstream(_)));
}

/// Test that an unroutable pair (element status) is an upstream error.
#[tokio::test]
async fn test_unroutable_pair_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/distancematrix/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "rows": [{ "elements": [{ "status": "NOT_FOUND" }]}]
        })))
        .mount(&server)
        .await;

    let err = resolver(Some("test-key"), &server.uri(), 2)
        .resolve("Mumbai", "Atlantis")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Upstream(_)));
}

/// Test that an HTTP error status from the service is an upstream error.
#[tokio::test]
async fn test_http_error_status_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/distancematrix/json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = resolver(Some("test-key"), &server.uri(), 2)
        .resolve("Mumbai", "Delhi")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Upstream(_)));
}

/// Test that a body that is not the expected JSON shape is an upstream error.
#[tokio::test]
async fn test_unreadable_body_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/distancematrix/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&server)
        .await;

    let err = resolver(Some("test-key"), &server.uri(), 2)
        .resolve("Mumbai", "Delhi")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Upstream(_)));
}

/// Test that the configured timeout bounds a stalled call.
#[tokio::test]
async fn test_timeout_bounds_a_stalled_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/distancematrix/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(5))
                .set_body_json(json!({ "status": "OK", "rows": [] })),
        )
        .mount(&server)
        .await;

    let started = Instant::now();
    let err = resolver(Some("test-key"), &server.uri(), 1)
        .resolve("Mumbai", "Delhi")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Upstream(_)));
    assert!(started.elapsed() < Duration::from_secs(4));
}
