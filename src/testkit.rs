//! # Test Data Helpers
//!
//! Factories for the request payloads examples and tests need repeatedly:
//! uniquely-scoped portfolios, canonical example instruments, default
//! recipes, and idempotent setup helpers that tolerate entities left
//! behind by earlier runs.

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::models::ids::{InstrumentIdType, ResourceId};
use crate::models::instrument::{
    FlowConventions, InstrumentDefinition, InstrumentEconomics, PayReceive, SwapLeg,
};
use crate::models::portfolio::CreateTransactionPortfolioRequest;
use crate::models::properties::{CreatePropertyDefinitionRequest, PropertyDefinition};
use crate::models::quote::{QuoteSeriesId, UpsertQuoteRequest};
use crate::models::recipe::{ConfigurationRecipe, MarketDataKeyRule, PricingModel};
use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::time::Duration as StdDuration;
use uuid::Uuid;

/// Supplier name used for all example market data.
pub const TEST_SUPPLIER: &str = "DataVendor";

/// How long to wait for server-side indexing to catch up.
const INDEXING_WAIT: StdDuration = StdDuration::from_secs(2);

/// Returns a scope unlikely to collide with other runs.
#[must_use]
pub fn unique_scope(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

/// Returns a code unlikely to collide within a shared scope.
#[must_use]
pub fn unique_code(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

/// Waits out the platform's eventual-consistency indexing window.
///
/// Some read paths (instrument search, order retrieval) lag writes by a
/// few seconds; callers query after this wait rather than retrying.
pub async fn wait_for_indexing() {
    tokio::time::sleep(INDEXING_WAIT).await;
}

/// A canonical trade date all example data hangs off.
#[must_use]
pub fn example_effective_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).single().unwrap_or_default()
}

/// Canonical example instruments keyed by correlation id.
///
/// Covers one instrument per supported economic type, each carrying a
/// stable client-internal identifier derived from the correlation id.
#[must_use]
pub fn instrument_examples() -> HashMap<String, InstrumentDefinition> {
    let effective = example_effective_at();
    let mut examples = HashMap::new();

    examples.insert(
        "example-equity".to_string(),
        InstrumentDefinition::new("Acme plc", InstrumentEconomics::Equity)
            .with_identifier(InstrumentIdType::ClientInternal, "id-example-equity")
            .with_identifier(InstrumentIdType::Figi, "BBG000C6K6G9"),
    );

    examples.insert(
        "example-bond".to_string(),
        InstrumentDefinition::new(
            "Acme 5% 2029",
            InstrumentEconomics::Bond {
                start_date: effective,
                maturity_date: effective + Duration::days(365 * 5),
                coupon_rate: Decimal::new(5, 2),
                principal: Decimal::from(100_000),
                flow_conventions: FlowConventions::new("GBP", "6M"),
            },
        )
        .with_identifier(InstrumentIdType::ClientInternal, "id-example-bond"),
    );

    examples.insert(
        "example-fx-forward".to_string(),
        InstrumentDefinition::new(
            "GBP/USD 1Y forward",
            InstrumentEconomics::FxForward {
                start_date: effective,
                maturity_date: effective + Duration::days(365),
                dom_amount: Decimal::from(1_000_000),
                dom_ccy: "GBP".to_string(),
                fgn_amount: Decimal::from(-1_270_000),
                fgn_ccy: "USD".to_string(),
            },
        )
        .with_identifier(InstrumentIdType::ClientInternal, "id-example-fx-forward"),
    );

    examples.insert(
        "example-swap".to_string(),
        InstrumentDefinition::new(
            "GBP 2Y fixed/float swap",
            InstrumentEconomics::InterestRateSwap {
                start_date: effective,
                maturity_date: effective + Duration::days(365 * 2),
                legs: vec![
                    SwapLeg {
                        pay_receive: PayReceive::Pay,
                        fixed_rate: Some(Decimal::new(45, 3)),
                        index_name: None,
                        conventions: FlowConventions::new("GBP", "6M"),
                        notional: Decimal::from(1_000_000),
                    },
                    SwapLeg {
                        pay_receive: PayReceive::Receive,
                        fixed_rate: None,
                        index_name: Some("GBP-SONIA".to_string()),
                        conventions: FlowConventions::new("GBP", "6M"),
                        notional: Decimal::from(1_000_000),
                    },
                ],
            },
        )
        .with_identifier(InstrumentIdType::ClientInternal, "id-example-swap"),
    );

    examples.insert(
        "example-term-deposit".to_string(),
        InstrumentDefinition::new(
            "GBP 1Y deposit",
            InstrumentEconomics::TermDeposit {
                start_date: effective,
                maturity_date: effective + Duration::days(365),
                rate: Decimal::new(4, 2),
                contract_size: Decimal::from(500_000),
                flow_conventions: FlowConventions::new("GBP", "1Y"),
            },
        )
        .with_identifier(InstrumentIdType::ClientInternal, "id-example-term-deposit"),
    );

    examples
}

/// A GBP transaction portfolio request created well before the example
/// trade date.
#[must_use]
pub fn transaction_portfolio_request(code: &str) -> CreateTransactionPortfolioRequest {
    CreateTransactionPortfolioRequest::new(
        format!("Test portfolio {code}"),
        code,
        "GBP",
        example_effective_at() - Duration::days(365),
    )
}

/// Mid-price quote upserts for a set of client-internal instrument ids,
/// keyed by correlation id.
#[must_use]
pub fn mid_quotes(
    prices: &[(&str, Decimal)],
    effective_at: DateTime<Utc>,
) -> HashMap<String, UpsertQuoteRequest> {
    prices
        .iter()
        .enumerate()
        .map(|(i, (instrument_id, price))| {
            (
                format!("quote-{i}"),
                UpsertQuoteRequest::new(
                    QuoteSeriesId::price(TEST_SUPPLIER, InstrumentIdType::ClientInternal, *instrument_id),
                    effective_at,
                    *price,
                    "GBP",
                ),
            )
        })
        .collect()
}

/// A recipe resolving quotes from [`TEST_SUPPLIER`] in the given data
/// scope, marking everything to quotes.
#[must_use]
pub fn default_recipe(scope: &str, code: &str, data_scope: &str) -> ConfigurationRecipe {
    ConfigurationRecipe::new(scope, code)
        .with_market_rule(MarketDataKeyRule::client_internal_mid(TEST_SUPPLIER, data_scope))
        .with_market_rule(MarketDataKeyRule::equity_mid(TEST_SUPPLIER, data_scope))
        .with_market_rule(MarketDataKeyRule::fx_mid(TEST_SUPPLIER, data_scope))
        .with_default_model(PricingModel::SimpleStatic)
}

/// Registers a property definition, tolerating one left by a previous
/// run.
///
/// # Errors
///
/// Propagates any error other than already-exists.
pub async fn ensure_property_definition(
    client: &ApiClient,
    request: &CreatePropertyDefinitionRequest,
) -> ApiResult<Option<PropertyDefinition>> {
    match client.properties().create(request).await {
        Ok(definition) => Ok(Some(definition)),
        Err(e) if e.is_already_exists() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Deletes a portfolio, tolerating it already being gone.
///
/// # Errors
///
/// Propagates any error other than not-found.
pub async fn teardown_portfolio(client: &ApiClient, scope: &str, code: &str) -> ApiResult<()> {
    match client.portfolios().delete(scope, code).await {
        Ok(_) => Ok(()),
        Err(e) if e.is_not_found() => Ok(()),
        Err(e) => Err(e),
    }
}

/// Deletes a cut label, tolerating it already being gone.
///
/// # Errors
///
/// Propagates any error other than not-found.
pub async fn teardown_cut_label(client: &ApiClient, code: &str) -> ApiResult<()> {
    match client.cut_labels().delete(code).await {
        Ok(_) => Ok(()),
        Err(e) if e.is_not_found() => Ok(()),
        Err(e) => Err(e),
    }
}

/// Maps an error through the idempotent-setup filter: already-exists
/// becomes success.
///
/// # Errors
///
/// Propagates any error other than already-exists.
pub fn tolerate_already_exists<T>(result: ApiResult<T>) -> ApiResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_already_exists() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Maps an error through the idempotent-teardown filter: not-found
/// becomes success.
///
/// # Errors
///
/// Propagates any error other than not-found.
pub fn tolerate_not_found<T>(result: ApiResult<T>) -> ApiResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
