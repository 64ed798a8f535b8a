//! Valuation: recipes, portfolio and inline valuations, and projected
//! cashflow counts per instrument and model.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use chrono::{Duration, TimeZone, Utc};
use common::test_client;
use meridian_sdk::models::ids::{InstrumentIdType, ResourceId};
use meridian_sdk::models::instrument::{InstrumentDefinition, InstrumentEconomics};
use meridian_sdk::models::recipe::PricingModel;
use meridian_sdk::models::valuation::{
    AggregateSpec, InlineValuationRequest, ValuationRequest, WeightedInstrument,
};
use meridian_sdk::testkit;
use rust_decimal::Decimal;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn recipe_round_trips_through_store() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    let recipe = testkit::default_recipe("Finbourne", "mid-quotes", "Finbourne");

    Mock::given(method("POST"))
        .and(path("/api/recipes"))
        .and(body_partial_json(json!({
            "configurationRecipe": { "scope": "Finbourne", "code": "mid-quotes" }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "version": common::version_json() })),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/recipes/Finbourne/mid-quotes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": serde_json::to_value(&recipe).unwrap()
        })))
        .mount(&server)
        .await;

    client.recipes().upsert(&recipe).await.unwrap();
    let stored = client.recipes().get("Finbourne", "mid-quotes").await.unwrap();
    assert_eq!(stored, recipe);
    assert_eq!(stored.pricing.model_rules[0].model_name, PricingModel::SimpleStatic);
}

#[tokio::test]
async fn valuation_rows_expose_requested_metrics() {
    let server = MockServer::start().await;
    let client = test_client(&server);
    let effective_at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

    Mock::given(method("POST"))
        .and(path("/api/aggregation/$valuation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "aggregationEffectiveAt": "2024-03-01T00:00:00Z",
            "data": [
                {
                    "Instrument/default/Name": "Acme plc",
                    "Valuation/PV/Amount": 26000.0,
                    "Proportion(Valuation/PV/Amount)": 0.26
                },
                {
                    "Instrument/default/Name": "GBP",
                    "Valuation/PV/Amount": 74000.0,
                    "Proportion(Valuation/PV/Amount)": 0.74
                }
            ]
        })))
        .mount(&server)
        .await;

    let request = ValuationRequest::for_portfolio(
        ResourceId::new("Finbourne", "mid-quotes"),
        ResourceId::new("Finbourne", "uk-equity"),
        effective_at,
    )
    .with_metric(AggregateSpec::value("Instrument/default/Name"))
    .with_metric(AggregateSpec::value("Valuation/PV/Amount"))
    .with_metric(AggregateSpec::proportion("Valuation/PV/Amount"));

    let result = client.valuations().get_valuation(&request).await.unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result.string_metric(0, "Instrument/default/Name"), Some("Acme plc"));
    assert_eq!(
        result.decimal_metric(0, "Valuation/PV/Amount"),
        Some(Decimal::from(26_000))
    );

    // The PVs total the funded amount and proportions total one.
    assert_eq!(result.sum_metric("Valuation/PV/Amount"), Decimal::from(100_000));
    assert_eq!(
        result.sum_metric("Proportion(Valuation/PV/Amount)"),
        Decimal::from(1)
    );
}

#[tokio::test]
async fn inline_valuation_echoes_holding_identifiers() {
    let server = MockServer::start().await;
    let client = test_client(&server);
    let effective_at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

    Mock::given(method("POST"))
        .and(path("/api/aggregation/$valuationinline"))
        .and(body_partial_json(json!({
            "instruments": [{ "holdingIdentifier": "inline-1" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "aggregationEffectiveAt": "2024-03-01T00:00:00Z",
            "data": [
                { "Analytic/default/InstrumentTag": "inline-1", "Valuation/PV/Amount": "2600" }
            ]
        })))
        .mount(&server)
        .await;

    let instrument = InstrumentDefinition::new("Acme plc", InstrumentEconomics::Equity)
        .with_identifier(InstrumentIdType::ClientInternal, "id-example-equity");
    let request = InlineValuationRequest::new(
        ResourceId::new("Finbourne", "mid-quotes"),
        vec![WeightedInstrument {
            quantity: Decimal::from(100),
            holding_identifier: "inline-1".to_string(),
            instrument,
        }],
        effective_at,
    )
    .with_metric(AggregateSpec::value("Valuation/PV/Amount"));

    let result = client.valuations().get_valuation_inline(&request).await.unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(
        result.string_metric(0, "Analytic/default/InstrumentTag"),
        Some("inline-1")
    );
    assert_eq!(
        result.decimal_metric(0, "Valuation/PV/Amount"),
        Some(Decimal::from(2600))
    );
}

/// A 2-year swap paying semi-annually produces one row per remaining
/// coupon per leg under the discounting model; a term deposit produces a
/// single maturity flow.
#[tokio::test]
async fn cashflow_counts_match_instrument_schedules() {
    let server = MockServer::start().await;
    let client = test_client(&server);
    let effective_at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let window_end = effective_at + Duration::days(365 * 2 + 1);

    let coupon = |date: &str, amount: &str, diagnostics: &str| {
        json!({
            "paymentDate": date,
            "amount": amount,
            "currency": "GBP",
            "diagnostics": diagnostics,
            "instrumentUid": "MER_SWAP_1"
        })
    };

    Mock::given(method("GET"))
        .and(path("/api/transactionportfolios/Finbourne/rates/cashflows"))
        .and(query_param("recipeIdScope", "Finbourne"))
        .and(query_param("recipeIdCode", "discounting"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "values": [
                coupon("2024-09-01T00:00:00Z", "-22500", "Coupon"),
                coupon("2025-03-01T00:00:00Z", "-22500", "Coupon"),
                coupon("2025-09-01T00:00:00Z", "-22500", "Coupon"),
                coupon("2026-03-01T00:00:00Z", "-22500", "Coupon"),
                coupon("2024-09-01T00:00:00Z", "24100", "Coupon"),
                coupon("2025-03-01T00:00:00Z", "24300", "Coupon"),
                coupon("2025-09-01T00:00:00Z", "24200", "Coupon"),
                coupon("2026-03-01T00:00:00Z", "24000", "Coupon"),
                {
                    "paymentDate": "2025-03-01T00:00:00Z",
                    "amount": "520000",
                    "currency": "GBP",
                    "diagnostics": "Principal",
                    "instrumentUid": "MER_DEPOSIT_1"
                }
            ]
        })))
        .mount(&server)
        .await;

    let cashflows = client
        .valuations()
        .get_portfolio_cashflows(
            "Finbourne",
            "rates",
            effective_at,
            effective_at,
            window_end,
            "Finbourne",
            "discounting",
        )
        .await
        .unwrap();

    // 4 semi-annual periods x 2 legs for the swap, 1 maturity flow for
    // the deposit.
    let swap_flows: Vec<_> = cashflows
        .values
        .iter()
        .filter(|f| f.instrument_uid.as_deref() == Some("MER_SWAP_1"))
        .collect();
    assert_eq!(swap_flows.len(), 8);
    assert!(swap_flows.iter().all(|f| f.diagnostics.as_deref() == Some("Coupon")));

    let deposit_flows: Vec<_> = cashflows
        .values
        .iter()
        .filter(|f| f.instrument_uid.as_deref() == Some("MER_DEPOSIT_1"))
        .collect();
    assert_eq!(deposit_flows.len(), 1);
    assert_eq!(deposit_flows[0].amount, Decimal::from(520_000));

    // Fixed leg pays out, floating leg receives.
    let paid: Decimal = swap_flows
        .iter()
        .filter(|f| f.amount < Decimal::ZERO)
        .map(|f| f.amount)
        .sum();
    assert_eq!(paid, Decimal::from(-90_000));
}

#[tokio::test]
async fn single_instrument_cashflows_keyed_by_identifier() {
    let server = MockServer::start().await;
    let client = test_client(&server);
    let effective_at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let window_end = effective_at + Duration::days(400);

    Mock::given(method("GET"))
        .and(path(
            "/api/instruments/ClientInternal/id-example-term-deposit/cashflows",
        ))
        .and(query_param("recipeIdCode", "discounting"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "values": [{
                "paymentDate": "2025-03-01T00:00:00Z",
                "amount": "520000",
                "currency": "GBP",
                "diagnostics": "Principal"
            }]
        })))
        .mount(&server)
        .await;

    let cashflows = client
        .valuations()
        .get_instrument_cashflows(
            InstrumentIdType::ClientInternal,
            "id-example-term-deposit",
            effective_at,
            effective_at,
            window_end,
            "Finbourne",
            "discounting",
        )
        .await
        .unwrap();

    assert_eq!(cashflows.values.len(), 1);
    assert_eq!(cashflows.values[0].currency, "GBP");
    assert!(cashflows.values[0].instrument_uid.is_none());
}
