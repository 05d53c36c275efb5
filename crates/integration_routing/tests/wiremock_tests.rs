//! Integration tests for the OSRM route client (wiremock-based)

use std::time::Duration;

use domain::{Coordinate, RouteRequest, TravelMode};
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_routing::{OsrmRouteClient, RouteClient, RoutingConfig, RoutingError};

fn config_for_mock(base_url: &str) -> RoutingConfig {
    RoutingConfig {
        base_url: base_url.to_string(),
        ..RoutingConfig::for_testing()
    }
}

fn lagos_request(mode: TravelMode) -> RouteRequest {
    RouteRequest::new(
        Coordinate::new_unchecked(6.524, 3.379),
        Coordinate::new_unchecked(6.6, 3.4),
        mode,
    )
}

fn ok_route_json() -> serde_json::Value {
    serde_json::json!({
        "code": "Ok",
        "routes": [{
            "distance": 1500.0,
            "duration": 200.0,
            "geometry": {
                "type": "LineString",
                "coordinates": [[3.379, 6.524], [3.39, 6.56], [3.4, 6.6]]
            },
            "legs": []
        }],
        "waypoints": []
    })
}

#[tokio::test]
async fn test_route_success_is_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/car/.+"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_route_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = OsrmRouteClient::new(&config_for_mock(&server.uri())).unwrap();
    let route = client
        .get_route(&lagos_request(TravelMode::Driving))
        .await
        .unwrap();

    assert!((route.distance_meters - 1500.0).abs() < f64::EPSILON);
    assert!((route.duration_seconds - 200.0).abs() < f64::EPSILON);
    assert_eq!(
        route.geometry,
        vec![[3.379, 6.524], [3.39, 6.56], [3.4, 6.6]]
    );
}

#[tokio::test]
async fn test_request_path_and_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route/v1/foot/3.379,6.524;3.4,6.6"))
        .and(query_param("overview", "full"))
        .and(query_param("geometries", "geojson"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_route_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = OsrmRouteClient::new(&config_for_mock(&server.uri())).unwrap();
    assert!(
        client
            .get_route(&lagos_request(TravelMode::Walking))
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_cycling_and_riding_share_bike_profile() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/bike/.+"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_route_json()))
        .expect(2)
        .mount(&server)
        .await;

    let client = OsrmRouteClient::new(&config_for_mock(&server.uri())).unwrap();
    for mode in [TravelMode::Cycling, TravelMode::Riding] {
        assert!(client.get_route(&lagos_request(mode)).await.is_ok());
    }
}

#[tokio::test]
async fn test_no_route_code_with_client_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/.+"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": "NoRoute",
            "message": "Impossible route between points"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = OsrmRouteClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client
        .get_route(&lagos_request(TravelMode::Driving))
        .await
        .unwrap_err();
    assert!(matches!(err, RoutingError::NoRoute));
    assert!(!err.to_string().contains("Impossible"));
}

#[tokio::test]
async fn test_ok_with_empty_routes_is_no_route() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/.+"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "code": "Ok", "routes": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = OsrmRouteClient::new(&config_for_mock(&server.uri())).unwrap();
    assert!(matches!(
        client.get_route(&lagos_request(TravelMode::Driving)).await,
        Err(RoutingError::NoRoute)
    ));
}

#[tokio::test]
async fn test_timeout_is_reported_with_duration() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/.+"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_route_json())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = RoutingConfig {
        timeout_secs: 1,
        ..config_for_mock(&server.uri())
    };
    let client = OsrmRouteClient::new(&config).unwrap();
    let err = client
        .get_route(&lagos_request(TravelMode::Driving))
        .await
        .unwrap_err();

    assert!(matches!(err, RoutingError::Timeout { timeout_secs: 1 }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_server_error_page_is_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/.+"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string("<html>Internal Server Error</html>"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = OsrmRouteClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client
        .get_route(&lagos_request(TravelMode::Driving))
        .await
        .unwrap_err();
    assert!(matches!(err, RoutingError::Unavailable));
    assert!(!err.to_string().contains("html"));
}

#[tokio::test]
async fn test_unreachable_service_is_unavailable() {
    // Nothing listens on port 9 (discard) in the test environment
    let client = OsrmRouteClient::new(&config_for_mock("http://127.0.0.1:9")).unwrap();
    assert!(matches!(
        client.get_route(&lagos_request(TravelMode::Driving)).await,
        Err(RoutingError::Unavailable)
    ));
}

#[tokio::test]
async fn test_invalid_coordinates_make_no_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_route_json()))
        .expect(0)
        .mount(&server)
        .await;

    let client = OsrmRouteClient::new(&config_for_mock(&server.uri())).unwrap();
    let request = RouteRequest::new(
        Coordinate::new_unchecked(6.524, 3.379),
        Coordinate::new_unchecked(6.6, 181.0),
        TravelMode::Driving,
    );
    assert!(matches!(
        client.get_route(&request).await,
        Err(RoutingError::Validation(_))
    ));
}
