//! # Valuation Models
//!
//! Requests for server-side valuation over portfolios or inline instrument
//! sets, and the aggregate tables returned.
//!
//! Result rows are heterogeneous: the columns are exactly the
//! [`AggregateSpec`] keys the caller asked for, so rows are exposed as JSON
//! maps with typed accessors for the common cases.
//!
//! # Examples
//!
//! ```
//! use meridian_sdk::models::valuation::{AggregateSpec, ValuationRequest};
//! use meridian_sdk::models::ids::ResourceId;
//! use chrono::{TimeZone, Utc};
//!
//! let request = ValuationRequest::for_portfolio(
//!     ResourceId::new("Finbourne", "mid-quotes"),
//!     ResourceId::new("Finbourne", "uk-equity"),
//!     Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
//! )
//! .with_metric(AggregateSpec::value("Valuation/PV/Amount"))
//! .with_metric(AggregateSpec::sum("Valuation/PV/Amount"));
//!
//! assert_eq!(request.metrics.len(), 2);
//! ```

use crate::models::ids::ResourceId;
use crate::models::instrument::InstrumentDefinition;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Aggregation operation applied to a metric column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregateOp {
    /// Return the raw value per row.
    Value,
    /// Sum over the grouping.
    Sum,
    /// Share of the grouped total.
    Proportion,
}

/// One requested metric column: an address and the operation over it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSpec {
    /// Metric address, e.g. `Valuation/PV/Amount`.
    pub key: String,
    /// Operation to apply.
    pub op: AggregateOp,
}

impl AggregateSpec {
    /// Requests the raw value of a metric.
    #[must_use]
    pub fn value(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            op: AggregateOp::Value,
        }
    }

    /// Requests the sum of a metric.
    #[must_use]
    pub fn sum(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            op: AggregateOp::Sum,
        }
    }

    /// Requests a metric's share of the grouped total.
    #[must_use]
    pub fn proportion(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            op: AggregateOp::Proportion,
        }
    }

    /// Returns the result column name for this spec, e.g.
    /// `Sum(Valuation/PV/Amount)` for non-value operations.
    #[must_use]
    pub fn column_name(&self) -> String {
        match self.op {
            AggregateOp::Value => self.key.clone(),
            AggregateOp::Sum => format!("Sum({})", self.key),
            AggregateOp::Proportion => format!("Proportion({})", self.key),
        }
    }
}

/// The valuation dates: a single date or a closed range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationSchedule {
    /// First (or only) valuation date.
    pub effective_at: DateTime<Utc>,
    /// Last valuation date for ranged valuations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_to: Option<DateTime<Utc>>,
}

impl ValuationSchedule {
    /// Schedule for a single valuation date.
    #[must_use]
    pub fn single(effective_at: DateTime<Utc>) -> Self {
        Self {
            effective_at,
            effective_to: None,
        }
    }
}

/// Reference to a portfolio included in a valuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioEntityId {
    /// Portfolio scope.
    pub scope: String,
    /// Portfolio code.
    pub code: String,
    /// Entity kind, always `SinglePortfolio` here.
    pub portfolio_entity_type: String,
}

impl From<ResourceId> for PortfolioEntityId {
    fn from(id: ResourceId) -> Self {
        Self {
            scope: id.scope,
            code: id.code,
            portfolio_entity_type: "SinglePortfolio".to_string(),
        }
    }
}

/// Request for a valuation over stored portfolios.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRequest {
    /// Recipe selecting market data and models.
    pub recipe_id: ResourceId,
    /// Metric columns to return.
    pub metrics: Vec<AggregateSpec>,
    /// Keys to group rows by.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<String>,
    /// Portfolios to value.
    pub portfolio_entity_ids: Vec<PortfolioEntityId>,
    /// When to value.
    pub valuation_schedule: ValuationSchedule,
}

impl ValuationRequest {
    /// Creates a single-date request over one portfolio with no metrics.
    #[must_use]
    pub fn for_portfolio(
        recipe_id: ResourceId,
        portfolio: ResourceId,
        effective_at: DateTime<Utc>,
    ) -> Self {
        Self {
            recipe_id,
            metrics: Vec::new(),
            group_by: Vec::new(),
            portfolio_entity_ids: vec![portfolio.into()],
            valuation_schedule: ValuationSchedule::single(effective_at),
        }
    }

    /// Appends a metric column.
    #[must_use]
    pub fn with_metric(mut self, spec: AggregateSpec) -> Self {
        self.metrics.push(spec);
        self
    }

    /// Appends a group-by key.
    #[must_use]
    pub fn with_group_by(mut self, key: impl Into<String>) -> Self {
        self.group_by.push(key.into());
        self
    }
}

/// An instrument held at a quantity, for inline valuation without a
/// portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedInstrument {
    /// Held quantity.
    pub quantity: Decimal,
    /// Caller-assigned identifier echoed in result rows.
    pub holding_identifier: String,
    /// The instrument's economic definition.
    pub instrument: InstrumentDefinition,
}

/// Request for a valuation over an inline instrument set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineValuationRequest {
    /// Recipe selecting market data and models.
    pub recipe_id: ResourceId,
    /// Metric columns to return.
    pub metrics: Vec<AggregateSpec>,
    /// Keys to group rows by.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<String>,
    /// The instruments to value.
    pub instruments: Vec<WeightedInstrument>,
    /// When to value.
    pub valuation_schedule: ValuationSchedule,
}

impl InlineValuationRequest {
    /// Creates a single-date request with no metrics.
    #[must_use]
    pub fn new(
        recipe_id: ResourceId,
        instruments: Vec<WeightedInstrument>,
        effective_at: DateTime<Utc>,
    ) -> Self {
        Self {
            recipe_id,
            metrics: Vec::new(),
            group_by: Vec::new(),
            instruments,
            valuation_schedule: ValuationSchedule::single(effective_at),
        }
    }

    /// Appends a metric column.
    #[must_use]
    pub fn with_metric(mut self, spec: AggregateSpec) -> Self {
        self.metrics.push(spec);
        self
    }
}

/// The aggregate table returned by a valuation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    /// The effective datetime the table was computed at.
    pub aggregation_effective_at: DateTime<Utc>,
    /// Result rows; columns are the requested metric keys.
    pub data: Vec<Map<String, Value>>,
}

impl ValuationResult {
    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reads a numeric metric from a row, accepting number or string
    /// encodings.
    #[must_use]
    pub fn decimal_metric(&self, row: usize, key: &str) -> Option<Decimal> {
        match self.data.get(row)?.get(key)? {
            Value::Number(n) => n.to_string().parse().ok(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Reads a string metric from a row.
    #[must_use]
    pub fn string_metric(&self, row: usize, key: &str) -> Option<&str> {
        self.data.get(row)?.get(key)?.as_str()
    }

    /// Sums a numeric metric over all rows, skipping rows without it.
    #[must_use]
    pub fn sum_metric(&self, key: &str) -> Decimal {
        (0..self.data.len())
            .filter_map(|row| self.decimal_metric(row, key))
            .sum()
    }
}

/// One projected instrument cashflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentCashflow {
    /// When the flow pays.
    pub payment_date: DateTime<Utc>,
    /// Flow amount; negative for payments out.
    pub amount: Decimal,
    /// Payment currency.
    pub currency: String,
    /// Flow classification, e.g. `Coupon` or `Principal`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<String>,
    /// Source instrument's platform id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument_uid: Option<String>,
}
