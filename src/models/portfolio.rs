//! # Portfolio Models
//!
//! Transaction portfolio creation requests, portfolio details, and the
//! holdings read back from them.

use crate::models::ids::ResourceId;
use crate::models::properties::{MetricValue, PropertyValue};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request to create a transaction portfolio within a scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionPortfolioRequest {
    /// Display name.
    pub display_name: String,
    /// Portfolio code, unique within the scope.
    pub code: String,
    /// Base (reporting) currency.
    pub base_currency: String,
    /// Date the portfolio comes into existence.
    pub created: DateTime<Utc>,
    /// Optional sub-holding keys partitioning holdings, e.g. a strategy
    /// property key.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_holding_keys: Vec<String>,
    /// Custom properties keyed by property key.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, PropertyValue>,
}

impl CreateTransactionPortfolioRequest {
    /// Creates a request with no sub-holding keys or properties.
    #[must_use]
    pub fn new(
        display_name: impl Into<String>,
        code: impl Into<String>,
        base_currency: impl Into<String>,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            code: code.into(),
            base_currency: base_currency.into(),
            created,
            sub_holding_keys: Vec::new(),
            properties: HashMap::new(),
        }
    }

    /// Adds a sub-holding key.
    #[must_use]
    pub fn with_sub_holding_key(mut self, key: impl Into<String>) -> Self {
        self.sub_holding_keys.push(key.into());
        self
    }
}

/// A portfolio, as returned by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    /// Scope/code pair identifying this portfolio.
    pub id: ResourceId,
    /// Display name.
    pub display_name: String,
    /// Base currency.
    pub base_currency: String,
    /// Date the portfolio came into existence.
    pub created: DateTime<Utc>,
    /// Portfolio type, e.g. `Transaction`.
    #[serde(rename = "type", default)]
    pub portfolio_type: Option<String>,
}

/// How a holding arose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoldingType {
    /// A position in an instrument.
    #[serde(rename = "P")]
    Position,
    /// A settled cash balance.
    #[serde(rename = "B")]
    Balance,
    /// Cash committed to unsettled trades.
    #[serde(rename = "C")]
    Commitment,
    /// Accrued income receivable.
    #[serde(rename = "R")]
    Receivable,
}

/// A tax lot within a holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxLot {
    /// Units in this lot.
    pub units: Decimal,
    /// Cost of this lot.
    pub cost: MetricValue,
    /// Purchase date of the lot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<DateTime<Utc>>,
}

/// A holding within a portfolio at an effective date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Platform instrument id of the held instrument (a currency LUID for
    /// cash rows).
    pub instrument_uid: String,
    /// Holding classification.
    pub holding_type: HoldingType,
    /// Held units.
    pub units: Decimal,
    /// Units settled so far.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settled_units: Option<Decimal>,
    /// Total cost in transaction currency.
    pub cost: MetricValue,
    /// Total cost in portfolio currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_portfolio_ccy: Option<MetricValue>,
    /// Component tax lots.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tax_lots: Vec<TaxLot>,
    /// Sub-holding key property values, when the portfolio declares them.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub sub_holding_keys: HashMap<String, PropertyValue>,
}

impl Holding {
    /// Returns true if this row is a cash balance rather than a position.
    #[must_use]
    pub fn is_cash(&self) -> bool {
        matches!(self.holding_type, HoldingType::Balance | HoldingType::Commitment)
    }
}
