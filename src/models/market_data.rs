//! # Complex Market Data Models
//!
//! Structured market data (curves and surfaces) that cannot be expressed as
//! a single quote, upserted into the market data store and consumed by the
//! pricing models a recipe selects.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifies one piece of complex market data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexMarketDataId {
    /// Data supplier.
    pub provider: String,
    /// Price source within the supplier, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_source: Option<String>,
    /// When the data is effective.
    pub effective_at: DateTime<Utc>,
    /// The market asset the data describes, e.g. `GBP/GBPOIS` for a GBP
    /// discount curve or `GBP/USD` for an FX forward curve.
    pub market_asset: String,
}

impl ComplexMarketDataId {
    /// Creates an id for the given market asset.
    #[must_use]
    pub fn new(
        provider: impl Into<String>,
        effective_at: DateTime<Utc>,
        market_asset: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            price_source: None,
            effective_at,
            market_asset: market_asset.into(),
        }
    }
}

/// Structured market data, tagged by `marketDataType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "marketDataType", rename_all = "camelCase")]
pub enum ComplexMarketData {
    /// A discount factor curve: factors at pillar dates relative to a base
    /// date.
    #[serde(rename_all = "camelCase")]
    DiscountFactorCurve {
        /// Curve base date.
        base_date: DateTime<Utc>,
        /// Pillar dates; same length as `discount_factors`.
        dates: Vec<DateTime<Utc>>,
        /// Discount factors at the pillar dates.
        discount_factors: Vec<Decimal>,
    },
    /// Forward FX rates at pillar dates.
    #[serde(rename_all = "camelCase")]
    FxForwardCurveData {
        /// Curve base date.
        base_date: DateTime<Utc>,
        /// Domestic currency.
        dom_ccy: String,
        /// Foreign currency.
        fgn_ccy: String,
        /// Pillar dates; same length as `rates`.
        dates: Vec<DateTime<Utc>>,
        /// Forward rates at the pillar dates.
        rates: Vec<Decimal>,
    },
}

impl ComplexMarketData {
    /// Returns true if pillar dates and values are the same length.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        match self {
            Self::DiscountFactorCurve {
                dates,
                discount_factors,
                ..
            } => dates.len() == discount_factors.len(),
            Self::FxForwardCurveData { dates, rates, .. } => dates.len() == rates.len(),
        }
    }
}

/// Request to upsert one piece of complex market data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertComplexMarketDataRequest {
    /// The market data identifier.
    pub market_data_id: ComplexMarketDataId,
    /// The structured data.
    pub market_data: ComplexMarketData,
}
