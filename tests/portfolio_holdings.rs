//! Transaction portfolios: creation, booking, and holdings read-back.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use chrono::{TimeZone, Utc};
use common::{metric_json, problem_json, test_client, version_json};
use meridian_sdk::models::ids::InstrumentIdType;
use meridian_sdk::models::portfolio::HoldingType;
use meridian_sdk::models::transaction::TransactionRequest;
use meridian_sdk::testkit;
use rust_decimal::Decimal;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn created_portfolio_reflects_request() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("POST"))
        .and(path("/api/transactionportfolios/Finbourne"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": { "scope": "Finbourne", "code": "uk-equity" },
            "displayName": "Test portfolio uk-equity",
            "baseCurrency": "GBP",
            "created": "2023-03-01T00:00:00Z",
            "type": "Transaction"
        })))
        .mount(&server)
        .await;

    let request = testkit::transaction_portfolio_request("uk-equity");
    let portfolio = client
        .portfolios()
        .create_transaction_portfolio("Finbourne", &request)
        .await
        .unwrap();

    assert_eq!(portfolio.id.scope, "Finbourne");
    assert_eq!(portfolio.id.code, request.code);
    assert_eq!(portfolio.base_currency, request.base_currency);
}

#[tokio::test]
async fn duplicate_portfolio_create_is_tolerated() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("POST"))
        .and(path("/api/transactionportfolios/Finbourne"))
        .respond_with(ResponseTemplate::new(400).set_body_json(problem_json(
            "PortfolioWithIdAlreadyExists",
            "Portfolio uk-equity already exists in Finbourne",
        )))
        .mount(&server)
        .await;

    let request = testkit::transaction_portfolio_request("uk-equity");
    let result = client
        .portfolios()
        .create_transaction_portfolio("Finbourne", &request)
        .await;

    let filtered = testkit::tolerate_already_exists(result);
    assert!(filtered.unwrap().is_none());
}

#[tokio::test]
async fn holdings_reflect_booked_transactions() {
    let server = MockServer::start().await;
    let client = test_client(&server);
    let effective_at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

    Mock::given(method("POST"))
        .and(path("/api/transactionportfolios/Finbourne/uk-equity/transactions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "version": version_json() })),
        )
        .mount(&server)
        .await;

    // One equity position from the buy, one cash balance from funds-in
    // less consideration, carried on the currency LUID.
    Mock::given(method("GET"))
        .and(path("/api/transactionportfolios/Finbourne/uk-equity/holdings"))
        .and(query_param("effectiveAt", "2024-03-01T00:00:00+00:00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "values": [
                {
                    "instrumentUid": "MER_00000001",
                    "holdingType": "P",
                    "units": "1000",
                    "settledUnits": "1000",
                    "cost": metric_json("25000", "GBP"),
                    "taxLots": [
                        { "units": "1000", "cost": metric_json("25000", "GBP") }
                    ]
                },
                {
                    "instrumentUid": "CCY_GBP",
                    "holdingType": "B",
                    "units": "75000",
                    "cost": metric_json("75000", "GBP")
                }
            ],
            "version": version_json()
        })))
        .mount(&server)
        .await;

    let transactions = vec![
        TransactionRequest::funds_in("txn-cash", effective_at, Decimal::from(100_000), "GBP"),
        TransactionRequest::buy(
            "txn-buy",
            effective_at,
            Decimal::from(1000),
            Decimal::from(25),
            "GBP",
        )
        .with_instrument_identifier(InstrumentIdType::ClientInternal, "id-example-equity"),
    ];
    client
        .transactions()
        .upsert("Finbourne", "uk-equity", &transactions)
        .await
        .unwrap();

    let holdings = client
        .transactions()
        .get_holdings("Finbourne", "uk-equity", effective_at)
        .await
        .unwrap();

    assert_eq!(holdings.values.len(), 2);

    let position = holdings
        .values
        .iter()
        .find(|h| h.holding_type == HoldingType::Position)
        .unwrap();
    assert_eq!(position.units, Decimal::from(1000));
    assert_eq!(position.cost.value, Decimal::from(25_000));
    assert_eq!(position.tax_lots.len(), 1);

    let cash = holdings.values.iter().find(|h| h.is_cash()).unwrap();
    assert_eq!(cash.instrument_uid, "CCY_GBP");
    // Funds in minus the buy's consideration.
    assert_eq!(cash.units, Decimal::from(75_000));
}

#[tokio::test]
async fn transactions_list_round_trips_properties() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/transactionportfolios/Finbourne/uk-equity/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "values": [{
                "transactionId": "txn-buy",
                "type": "Buy",
                "instrumentUid": "MER_00000001",
                "transactionDate": "2024-03-01T00:00:00Z",
                "settlementDate": "2024-03-03T00:00:00Z",
                "units": "1000",
                "totalConsideration": metric_json("25000", "GBP"),
                "properties": {
                    "Transaction/Finbourne/strategy": { "labelValue": "Income" }
                }
            }],
            "version": version_json()
        })))
        .mount(&server)
        .await;

    let listed = client
        .transactions()
        .list("Finbourne", "uk-equity")
        .await
        .unwrap();

    assert_eq!(listed.values.len(), 1);
    let transaction = &listed.values[0];
    assert_eq!(transaction.transaction_type, "Buy");
    assert_eq!(
        transaction.properties["Transaction/Finbourne/strategy"]
            .label_value
            .as_deref(),
        Some("Income")
    );
}

#[tokio::test]
async fn teardown_tolerates_missing_portfolio() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("DELETE"))
        .and(path("/api/portfolios/Finbourne/gone"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(problem_json("PortfolioNotFound", "No portfolio gone")),
        )
        .mount(&server)
        .await;

    testkit::teardown_portfolio(&client, "Finbourne", "gone")
        .await
        .unwrap();
}
