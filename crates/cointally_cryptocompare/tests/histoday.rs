use cointally_cryptocompare::histoday::{Histoday, HistodayParams};
use cointally_cryptocompare::{ClientError, CryptocompareClient};
use httpmock::prelude::*;
use serde_json::json;
use tokio::test;

fn params(symbol: &str) -> HistodayParams {
    HistodayParams::builder()
        .source_sym(symbol)
        .target_sym("USD")
        .limit(2000)
        .build()
}

#[test]
pub async fn fetch_histoday() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/data/v2/histoday")
                .query_param("fsym", "BTC")
                .query_param("tsym", "USD")
                .query_param("limit", "2000");
            then.status(200).json_body(json!({
                "Response": "Success",
                "Message": "",
                "HasWarning": false,
                "Type": 100,
                "RateLimit": {},
                "Data": {
                    "Aggregated": false,
                    "TimeFrom": 1700000000,
                    "TimeTo": 1700086400,
                    "Data": [
                        {"time": 1700000000, "high": 37500.1, "low": 36100.0, "open": 36500.0,
                         "volumefrom": 1200.5, "volumeto": 44000000.0, "close": 37000.0,
                         "conversionType": "direct", "conversionSymbol": ""},
                        {"time": 1700086400, "high": 38000.0, "low": 36900.0, "open": 37000.0,
                         "volumefrom": 900.25, "volumeto": 33000000.0, "close": 37800.0,
                         "conversionType": "direct", "conversionSymbol": ""}
                    ]
                }
            }));
        })
        .await;

    let client = CryptocompareClient::with_base_url(&server.base_url(), None);
    let response = client
        .call::<Histoday>(params("BTC"))
        .await
        .expect("Failed to fetch histoday");

    mock.assert_async().await;
    assert!(!response.status.is_error());
    let entries = response.into_entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].time, Some(json!(1700000000)));
    assert_eq!(entries[1].close, Some(json!(37800.0)));
}

#[test]
pub async fn missing_entry_fields_stay_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/data/v2/histoday");
            then.status(200).json_body(json!({
                "Response": "Success",
                "Data": {"Data": [
                    {"time": 1700000000, "close": 1.5},
                    {"time": 1700086400, "high": "N/A", "close": 5}
                ]}
            }));
        })
        .await;

    let client = CryptocompareClient::with_base_url(&server.base_url(), None);
    let entries = client
        .call::<Histoday>(params("ETH"))
        .await
        .unwrap()
        .into_entries();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].close, Some(json!(1.5)));
    assert_eq!(entries[0].high, None);
    assert_eq!(entries[0].volumeto, None);
    assert_eq!(entries[1].high, Some(json!("N/A")));
    assert_eq!(entries[1].close, Some(json!(5)));
}

#[test]
pub async fn error_envelope_has_no_entries() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/data/v2/histoday");
            then.status(200).json_body(json!({
                "Response": "Error",
                "Message": "You are over your rate limit please upgrade your account!",
                "HasWarning": false,
                "Type": 99,
                "RateLimit": {
                    "calls_made": {"second": 1, "minute": 31},
                    "calls_left": {"minute": 0}
                },
                "Data": {}
            }));
        })
        .await;

    let client = CryptocompareClient::with_base_url(&server.base_url(), None);
    let response = client.call::<Histoday>(params("BTC")).await.unwrap();

    assert!(response.status.is_error());
    assert!(
        response
            .status
            .error_message()
            .unwrap()
            .contains("rate limit")
    );
    let calls_left = response
        .status
        .rate_limit
        .as_ref()
        .and_then(|rate_limit| rate_limit.calls_left.as_ref())
        .and_then(|calls| calls.minute);
    assert_eq!(calls_left, Some(0));
    assert!(response.into_entries().is_empty());
}

#[test]
pub async fn non_success_status_is_reported() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/data/v2/histoday");
            then.status(503).body("unavailable");
        })
        .await;

    let client = CryptocompareClient::with_base_url(&server.base_url(), None);
    let err = client.call::<Histoday>(params("BTC")).await.unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(503));
}

#[test]
pub async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/data/v2/histoday");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let client = CryptocompareClient::with_base_url(&server.base_url(), None);
    let err = client.call::<Histoday>(params("BTC")).await.unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)));
}

#[test]
pub async fn api_key_is_sent_as_authorization_header() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/data/v2/histoday")
                .header("authorization", "Apikey secret");
            then.status(200)
                .json_body(json!({"Response": "Success", "Data": {"Data": []}}));
        })
        .await;

    let client = CryptocompareClient::with_base_url(&server.base_url(), Some("secret"));
    client.call::<Histoday>(params("BTC")).await.unwrap();

    mock.assert_async().await;
}

#[test]
pub async fn unreachable_host_is_a_transport_error() {
    let client = CryptocompareClient::with_base_url("http://127.0.0.1:1", None);
    let err = client.call::<Histoday>(params("BTC")).await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
}
