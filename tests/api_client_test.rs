//! API client integration tests against a local mock server.

use httpmock::prelude::*;
use serde_json::json;
use ssg_dashboard::api::{ApiClient, ApiError};
use ssg_dashboard::config::ApiConfig;
use ssg_dashboard::data::SeriesDecomposition;

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiConfig {
        base_url: server.base_url(),
        api_key: "test-key".to_string(),
        ports_path: "/ports".to_string(),
        rates_path: "/rates".to_string(),
    })
}

#[test]
fn seaport_fetch_sends_api_key_and_decodes_directory() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/ports").header("x-api-key", "test-key");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([
                {"code": "DEHAM", "name": "Hamburg"},
                {"code": "CNSHA", "name": "Shanghai"}
            ]));
    });

    let ports = client_for(&server).fetch_seaports().unwrap();

    mock.assert();
    assert_eq!(ports.len(), 2);
    assert_eq!(ports[0].code, "DEHAM");
    assert_eq!(ports[1].name, "Shanghai");
}

#[test]
fn rates_fetch_sends_route_query_params() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rates")
            .header("x-api-key", "test-key")
            .query_param("origin", "DEHAM")
            .query_param("destination", "CNSHA");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([
                {"day": "2021-01-01", "low": 100.0, "mean": 120.0, "high": 140.0},
                {"day": "2021-01-02", "low": 102.0, "mean": 121.0, "high": 145.0}
            ]));
    });

    let records = client_for(&server).fetch_rates("DEHAM", "CNSHA").unwrap();

    mock.assert();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].low, Some(100.0));
    assert_eq!(records[1].high, Some(145.0));

    let decomposition = SeriesDecomposition::from_records(&records);
    assert!(!decomposition.incomplete);
    assert_eq!(decomposition.lows, vec![Some(100.0), Some(102.0)]);
    assert_eq!(decomposition.means, vec![Some(120.0), Some(121.0)]);
}

#[test]
fn null_fields_survive_decoding_and_flag_incompleteness() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/rates");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([
                {"day": "2021-01-01", "low": 100.0, "mean": null, "high": 140.0}
            ]));
    });

    let records = client_for(&server).fetch_rates("DEHAM", "CNSHA").unwrap();
    assert_eq!(records[0].mean, None);

    let decomposition = SeriesDecomposition::from_records(&records);
    assert!(decomposition.incomplete);
}

#[test]
fn server_error_surfaces_status_in_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/rates");
        then.status(500);
    });

    let err = client_for(&server)
        .fetch_rates("DEHAM", "CNSHA")
        .unwrap_err();

    assert!(matches!(err, ApiError::Status { .. }));
    assert!(err.to_string().contains("500"));
}

#[test]
fn malformed_payload_is_a_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/ports");
        then.status(200)
            .header("content-type", "application/json")
            .body("{\"not\": \"an array\"}");
    });

    let err = client_for(&server).fetch_seaports().unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn empty_directory_decodes_to_empty_list() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/ports");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });

    let ports = client_for(&server).fetch_seaports().unwrap();
    assert!(ports.is_empty());
}
