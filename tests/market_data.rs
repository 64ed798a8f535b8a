//! Market data stores: simple quotes and structured curve data.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use chrono::{TimeZone, Utc};
use common::test_client;
use meridian_sdk::models::ids::InstrumentIdType;
use meridian_sdk::models::market_data::{
    ComplexMarketData, ComplexMarketDataId, UpsertComplexMarketDataRequest,
};
use meridian_sdk::models::quote::{QuoteId, QuoteSeriesId, UpsertQuoteRequest};
use meridian_sdk::testkit;
use rust_decimal::Decimal;
use serde_json::json;
use std::collections::HashMap;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn upserted_quotes_read_back_by_id() {
    let server = MockServer::start().await;
    let client = test_client(&server);
    let effective = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

    let series = QuoteSeriesId::price(
        testkit::TEST_SUPPLIER,
        InstrumentIdType::ClientInternal,
        "id-example-equity",
    );
    let request = UpsertQuoteRequest::new(series.clone(), effective, Decimal::from(26), "GBP");
    let mut quotes = HashMap::new();
    quotes.insert("quote-0".to_string(), request.clone());

    let quote_body = json!({
        "quoteId": serde_json::to_value(&request.quote_id).unwrap(),
        "metricValue": common::metric_json("26", "GBP"),
        "uploadedAt": "2024-03-01T09:30:00Z"
    });

    Mock::given(method("POST"))
        .and(path("/api/quotes/Finbourne"))
        .and(body_partial_json(json!({
            "quote-0": { "metricValue": { "value": "26", "unit": "GBP" } }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "values": { "quote-0": quote_body },
            "failed": {}
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/quotes/Finbourne/$get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "values": { "quote-0": quote_body },
            "failed": {}
        })))
        .mount(&server)
        .await;

    let upserted = client.quotes().upsert("Finbourne", &quotes).await.unwrap();
    assert_eq!(upserted.values.len(), 1);
    assert!(upserted.failed.is_empty());

    let mut ids = HashMap::new();
    ids.insert(
        "quote-0".to_string(),
        QuoteId {
            quote_series_id: series,
            effective_at: effective,
        },
    );
    let fetched = client.quotes().get("Finbourne", &ids).await.unwrap();
    let quote = &fetched.values["quote-0"];
    assert_eq!(quote.metric_value.value, Decimal::from(26));
    assert_eq!(quote.metric_value.unit.as_deref(), Some("GBP"));
    assert_eq!(quote.quote_id.effective_at, effective);
}

#[tokio::test]
async fn missing_quotes_appear_in_failed_map() {
    let server = MockServer::start().await;
    let client = test_client(&server);
    let effective = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

    Mock::given(method("POST"))
        .and(path("/api/quotes/Finbourne/$get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "values": {},
            "failed": {
                "quote-0": { "id": "quote-0", "detail": "QuoteNotFound" }
            }
        })))
        .mount(&server)
        .await;

    let mut ids = HashMap::new();
    ids.insert(
        "quote-0".to_string(),
        QuoteId {
            quote_series_id: QuoteSeriesId::rate(testkit::TEST_SUPPLIER, "GBP/USD"),
            effective_at: effective,
        },
    );

    let fetched = client.quotes().get("Finbourne", &ids).await.unwrap();
    assert!(fetched.values.is_empty());
    assert!(fetched.failed.contains_key("quote-0"));
}

#[tokio::test]
async fn discount_curve_round_trips_through_store() {
    let server = MockServer::start().await;
    let client = test_client(&server);
    let base = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

    let curve = ComplexMarketData::DiscountFactorCurve {
        base_date: base,
        dates: vec![
            Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap(),
        ],
        discount_factors: vec!["0.95".parse().unwrap(), "0.9".parse().unwrap()],
    };
    assert!(curve.is_well_formed());

    let id = ComplexMarketDataId::new(testkit::TEST_SUPPLIER, base, "GBP/GBPOIS");
    let mut upsert = HashMap::new();
    upsert.insert(
        "curve-0".to_string(),
        UpsertComplexMarketDataRequest {
            market_data_id: id.clone(),
            market_data: curve.clone(),
        },
    );

    Mock::given(method("POST"))
        .and(path("/api/complexmarketdata/Finbourne"))
        .and(body_partial_json(json!({
            "curve-0": {
                "marketDataId": { "marketAsset": "GBP/GBPOIS" },
                "marketData": { "marketDataType": "discountFactorCurve" }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "values": { "curve-0": "2024-03-01T09:30:00Z" },
            "failed": {}
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/complexmarketdata/Finbourne/$get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "values": { "curve-0": serde_json::to_value(&curve).unwrap() },
            "failed": {}
        })))
        .mount(&server)
        .await;

    let upserted = client
        .complex_market_data()
        .upsert("Finbourne", &upsert)
        .await
        .unwrap();
    assert!(upserted.values.contains_key("curve-0"));

    let mut ids = HashMap::new();
    ids.insert("curve-0".to_string(), id);
    let fetched = client
        .complex_market_data()
        .get("Finbourne", &ids)
        .await
        .unwrap();
    assert_eq!(fetched.values["curve-0"], curve);
}

#[tokio::test]
async fn fx_forward_curve_carries_currency_pair() {
    let server = MockServer::start().await;
    let client = test_client(&server);
    let base = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

    let curve = ComplexMarketData::FxForwardCurveData {
        base_date: base,
        dom_ccy: "GBP".to_string(),
        fgn_ccy: "USD".to_string(),
        dates: vec![Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap()],
        rates: vec!["1.27".parse().unwrap()],
    };

    Mock::given(method("POST"))
        .and(path("/api/complexmarketdata/Finbourne"))
        .and(body_partial_json(json!({
            "fx-0": {
                "marketData": {
                    "marketDataType": "fxForwardCurveData",
                    "domCcy": "GBP",
                    "fgnCcy": "USD"
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "values": { "fx-0": "2024-03-01T09:30:00Z" },
            "failed": {}
        })))
        .mount(&server)
        .await;

    let mut upsert = HashMap::new();
    upsert.insert(
        "fx-0".to_string(),
        UpsertComplexMarketDataRequest {
            market_data_id: ComplexMarketDataId::new(testkit::TEST_SUPPLIER, base, "GBP/USD"),
            market_data: curve,
        },
    );

    let upserted = client
        .complex_market_data()
        .upsert("Finbourne", &upsert)
        .await
        .unwrap();
    assert!(upserted.failed.is_empty());
}
