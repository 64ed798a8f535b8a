//! Instrument mastering: upsert, round-trip retrieval, idempotent
//! deletion.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{instrument_json, problem_json, test_client};
use meridian_sdk::models::ids::InstrumentIdType;
use meridian_sdk::models::instrument::{InstrumentDefinition, InstrumentEconomics};
use meridian_sdk::testkit;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn upserted_instrument_fields_round_trip() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    // The platform echoes each mastered definition under its correlation id.
    Mock::given(method("POST"))
        .and(path("/api/instruments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "values": {
                "example-equity": instrument_json("MER_00000001", "id-example-equity", "Acme plc")
            },
            "failed": {}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/instruments/ClientInternal/id-example-equity"))
        .respond_with(ResponseTemplate::new(200).set_body_json(instrument_json(
            "MER_00000001",
            "id-example-equity",
            "Acme plc",
        )))
        .mount(&server)
        .await;

    let mut definitions = std::collections::HashMap::new();
    let definition = InstrumentDefinition::new("Acme plc", InstrumentEconomics::Equity)
        .with_identifier(InstrumentIdType::ClientInternal, "id-example-equity");
    definitions.insert("example-equity".to_string(), definition.clone());

    let response = client.instruments().upsert(&definitions).await.unwrap();
    assert_eq!(response.values.len(), 1);
    assert!(response.failed.is_empty());

    let mastered = &response.values["example-equity"];
    assert_eq!(mastered.meridian_instrument_id, "MER_00000001");

    // Round trip: the fields we constructed come back unchanged.
    let fetched = client
        .instruments()
        .get(InstrumentIdType::ClientInternal, "id-example-equity")
        .await
        .unwrap();
    assert_eq!(fetched.name, definition.name);
    assert_eq!(
        fetched.identifier(InstrumentIdType::ClientInternal),
        definition.identifier(InstrumentIdType::ClientInternal)
    );
}

#[tokio::test]
async fn example_set_masters_every_economic_type() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    let examples = testkit::instrument_examples();
    let values: serde_json::Map<String, serde_json::Value> = examples
        .iter()
        .enumerate()
        .map(|(i, (key, definition))| {
            (
                key.clone(),
                instrument_json(
                    &format!("MER_0000000{i}"),
                    definition.identifier(InstrumentIdType::ClientInternal).unwrap(),
                    &definition.name,
                ),
            )
        })
        .collect();

    Mock::given(method("POST"))
        .and(path("/api/instruments"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "values": values, "failed": {} })),
        )
        .mount(&server)
        .await;

    let response = client.instruments().upsert(&examples).await.unwrap();
    assert_eq!(response.values.len(), 5);
    for key in examples.keys() {
        assert!(response.values.contains_key(key), "missing {key} in response");
    }
}

#[tokio::test]
async fn deleting_missing_instrument_is_tolerated() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("DELETE"))
        .and(path("/api/instruments/ClientInternal/id-gone"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(problem_json("InstrumentNotFound", "No instrument id-gone")),
        )
        .mount(&server)
        .await;

    let result = client
        .instruments()
        .delete(InstrumentIdType::ClientInternal, "id-gone")
        .await;
    let err = result.unwrap_err();
    assert!(err.is_not_found());

    // Teardown treats the 404 as success.
    let filtered = testkit::tolerate_not_found(
        client
            .instruments()
            .delete(InstrumentIdType::ClientInternal, "id-gone")
            .await,
    );
    assert!(filtered.unwrap().is_none());
}

#[tokio::test]
async fn upsert_sends_identifier_property_keys() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    let mut definitions = std::collections::HashMap::new();
    definitions.insert(
        "corr-1".to_string(),
        InstrumentDefinition::new("Acme plc", InstrumentEconomics::Equity)
            .with_identifier(InstrumentIdType::Figi, "BBG000C6K6G9"),
    );

    Mock::given(method("POST"))
        .and(path("/api/instruments"))
        .and(body_json(&definitions))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "values": { "corr-1": instrument_json("MER_1", "x", "Acme plc") },
            "failed": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    client.instruments().upsert(&definitions).await.unwrap();
}
