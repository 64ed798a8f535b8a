//! # Quote Models
//!
//! Simple market data quotes upserted into the quote store and read back
//! during valuation.
//!
//! # Examples
//!
//! ```
//! use meridian_sdk::models::quote::{QuoteSeriesId, UpsertQuoteRequest};
//! use meridian_sdk::models::ids::InstrumentIdType;
//! use chrono::{TimeZone, Utc};
//! use rust_decimal::Decimal;
//!
//! let series = QuoteSeriesId::price("DataVendor", InstrumentIdType::Figi, "BBG000C6K6G9");
//! let effective = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
//! let upsert = UpsertQuoteRequest::new(series, effective, Decimal::from(100), "GBP");
//!
//! assert_eq!(upsert.metric_value.unit.as_deref(), Some("GBP"));
//! ```

use crate::models::ids::InstrumentIdType;
use crate::models::properties::MetricValue;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifies a series of quotes for one instrument from one supplier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSeriesId {
    /// Data supplier, e.g. `DataVendor`.
    pub provider: String,
    /// Price source within the supplier, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_source: Option<String>,
    /// The quoted instrument's identifier.
    pub instrument_id: String,
    /// Scheme of `instrument_id`.
    pub instrument_id_type: InstrumentIdType,
    /// Kind of quote, e.g. `Price` or `Rate`.
    pub quote_type: QuoteType,
    /// Quoted field, e.g. `mid`.
    pub field: String,
}

impl QuoteSeriesId {
    /// Creates a mid-price series.
    #[must_use]
    pub fn price(
        provider: impl Into<String>,
        instrument_id_type: InstrumentIdType,
        instrument_id: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            price_source: None,
            instrument_id: instrument_id.into(),
            instrument_id_type,
            quote_type: QuoteType::Price,
            field: "mid".to_string(),
        }
    }

    /// Creates a mid-rate series, e.g. for an FX pair such as `GBP/USD`.
    #[must_use]
    pub fn rate(provider: impl Into<String>, pair: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            price_source: None,
            instrument_id: pair.into(),
            instrument_id_type: InstrumentIdType::Currency,
            quote_type: QuoteType::Rate,
            field: "mid".to_string(),
        }
    }
}

/// Kind of quoted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteType {
    /// A traded or marked price.
    Price,
    /// A rate, e.g. an FX rate.
    Rate,
}

/// Full quote identifier: a series plus the effective datetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteId {
    /// The quote series.
    pub quote_series_id: QuoteSeriesId,
    /// When the quote is effective.
    pub effective_at: DateTime<Utc>,
}

/// Request to upsert one quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertQuoteRequest {
    /// The quote identifier.
    pub quote_id: QuoteId,
    /// The quoted value.
    pub metric_value: MetricValue,
}

impl UpsertQuoteRequest {
    /// Creates an upsert request from its parts.
    #[must_use]
    pub fn new(
        series: QuoteSeriesId,
        effective_at: DateTime<Utc>,
        value: Decimal,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            quote_id: QuoteId {
                quote_series_id: series,
                effective_at,
            },
            metric_value: MetricValue::in_currency(value, unit),
        }
    }
}

/// A stored quote, as returned by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// The quote identifier.
    pub quote_id: QuoteId,
    /// The quoted value.
    pub metric_value: MetricValue,
    /// When the quote was written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<DateTime<Utc>>,
}
