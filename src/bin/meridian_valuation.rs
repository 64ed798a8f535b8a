//! End-to-end portfolio valuation demo.
//!
//! Books the example instruments, creates a portfolio, funds it, buys the
//! equity, upserts quotes and a recipe, then runs a valuation and prints
//! the aggregate rows. Requires `MERIDIAN_BASE_URL` and
//! `MERIDIAN_ACCESS_TOKEN` in the environment.

use anyhow::Context;
use clap::Parser;
use meridian_sdk::client::ApiClient;
use meridian_sdk::config::ApiConfig;
use meridian_sdk::models::ids::{InstrumentIdType, ResourceId};
use meridian_sdk::models::transaction::TransactionRequest;
use meridian_sdk::models::valuation::{AggregateSpec, ValuationRequest};
use meridian_sdk::testkit;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

/// Book an example portfolio and value it.
#[derive(Debug, Parser)]
#[command(name = "meridian-valuation", version)]
struct Args {
    /// Scope to create the example data in.
    #[arg(long, default_value = "meridian-examples")]
    scope: String,

    /// Delete the portfolio afterwards.
    #[arg(long)]
    teardown: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = ApiConfig::from_env().context("loading MERIDIAN_* configuration")?;
    let client = ApiClient::new(&config)?;

    let scope = args.scope;
    let portfolio_code = testkit::unique_code("valuation-demo");
    let effective_at = testkit::example_effective_at();

    let mastered = client
        .instruments()
        .upsert(&testkit::instrument_examples())
        .await
        .context("mastering example instruments")?;
    tracing::info!(count = mastered.values.len(), "mastered instruments");

    client
        .portfolios()
        .create_transaction_portfolio(&scope, &testkit::transaction_portfolio_request(&portfolio_code))
        .await
        .context("creating portfolio")?;

    let transactions = vec![
        TransactionRequest::funds_in("txn-cash", effective_at, Decimal::from(100_000), "GBP"),
        TransactionRequest::buy(
            "txn-buy-equity",
            effective_at,
            Decimal::from(1000),
            Decimal::from(25),
            "GBP",
        )
        .with_instrument_identifier(InstrumentIdType::ClientInternal, "id-example-equity"),
    ];
    client
        .transactions()
        .upsert(&scope, &portfolio_code, &transactions)
        .await
        .context("booking transactions")?;

    let quotes = testkit::mid_quotes(&[("id-example-equity", Decimal::from(26))], effective_at);
    client
        .quotes()
        .upsert(&scope, &quotes)
        .await
        .context("upserting quotes")?;

    let recipe = testkit::default_recipe(&scope, "demo-recipe", &scope);
    client.recipes().upsert(&recipe).await.context("upserting recipe")?;

    let request = ValuationRequest::for_portfolio(
        ResourceId::new(&scope, "demo-recipe"),
        ResourceId::new(&scope, &portfolio_code),
        effective_at,
    )
    .with_metric(AggregateSpec::value("Instrument/default/Name"))
    .with_metric(AggregateSpec::value("Valuation/PV/Amount"))
    .with_metric(AggregateSpec::proportion("Valuation/PV/Amount"));

    let result = client
        .valuations()
        .get_valuation(&request)
        .await
        .context("running valuation")?;

    println!("valuation at {}:", result.aggregation_effective_at);
    for row in 0..result.len() {
        let name = result.string_metric(row, "Instrument/default/Name").unwrap_or("<cash>");
        let pv = result
            .decimal_metric(row, "Valuation/PV/Amount")
            .unwrap_or_default();
        println!("  {name}: {pv}");
    }

    if args.teardown {
        testkit::teardown_portfolio(&client, &scope, &portfolio_code).await?;
        tracing::info!("portfolio deleted");
    }

    Ok(())
}
