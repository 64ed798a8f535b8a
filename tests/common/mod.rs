//! Shared scaffolding for the integration suites: a mock platform and
//! canned response fragments.

#![allow(dead_code)]

use meridian_sdk::client::ApiClient;
use meridian_sdk::config::ApiConfig;
use serde_json::{Value, json};
use wiremock::MockServer;

/// Effective date used across the canned data.
pub const EFFECTIVE_AT: &str = "2024-03-01T00:00:00Z";

/// Builds a client pointed at the mock platform.
pub fn test_client(server: &MockServer) -> ApiClient {
    let config = ApiConfig::new(server.uri(), "test-token")
        .with_application("integration-tests")
        .with_timeout_ms(5_000);
    #[allow(clippy::expect_used)]
    ApiClient::new(&config).expect("client should build against the mock server")
}

/// A version stamp as the platform returns it.
pub fn version_json() -> Value {
    json!({
        "effectiveFrom": EFFECTIVE_AT,
        "asAtDate": "2024-03-01T09:30:00Z"
    })
}

/// A cost or metric value fragment.
pub fn metric_json(value: &str, unit: &str) -> Value {
    json!({ "value": value, "unit": unit })
}

/// A mastered instrument fragment for the given ids and name.
pub fn instrument_json(luid: &str, client_internal: &str, name: &str) -> Value {
    json!({
        "meridianInstrumentId": luid,
        "name": name,
        "identifiers": {
            "Instrument/default/ClientInternal": client_internal
        },
        "state": "Active"
    })
}

/// A problem-details body with the given name and detail.
pub fn problem_json(name: &str, detail: &str) -> Value {
    json!({
        "name": name,
        "title": name,
        "detail": detail,
        "code": 100
    })
}
