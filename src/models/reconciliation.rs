//! # Reconciliation Models
//!
//! Requests to reconcile holdings between two portfolio views, and the
//! per-row results classifying each comparison.

use crate::models::ids::ResourceId;
use crate::models::properties::MetricValue;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One side of a reconciliation: a portfolio at an effective date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReconciliationRequest {
    /// The portfolio to read.
    pub portfolio_id: ResourceId,
    /// Effective date of the holdings.
    pub effective_at: DateTime<Utc>,
    /// As-at datetime; latest when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_at: Option<DateTime<Utc>>,
}

impl PortfolioReconciliationRequest {
    /// Creates a request at the latest as-at.
    #[must_use]
    pub fn new(portfolio_id: ResourceId, effective_at: DateTime<Utc>) -> Self {
        Self {
            portfolio_id,
            effective_at,
            as_at: None,
        }
    }
}

/// Tolerance rule applied to a numeric column during reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileNumericRule {
    /// Column the rule applies to, e.g. `Units` or `Cost`.
    pub key: String,
    /// Absolute tolerance within which values still match.
    pub tolerance: Decimal,
}

/// Request to reconcile holdings between a left and right view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationRequest {
    /// The left side.
    pub left: PortfolioReconciliationRequest,
    /// The right side.
    pub right: PortfolioReconciliationRequest,
    /// Instrument property keys to decorate break rows with.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instrument_property_keys: Vec<String>,
    /// Numeric tolerance rules; rows within tolerance classify as
    /// [`MatchResult::MatchWithinTolerance`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub numeric_rules: Vec<ReconcileNumericRule>,
}

impl ReconciliationRequest {
    /// Creates a request with no decoration or tolerance rules.
    #[must_use]
    pub fn new(left: PortfolioReconciliationRequest, right: PortfolioReconciliationRequest) -> Self {
        Self {
            left,
            right,
            instrument_property_keys: Vec::new(),
            numeric_rules: Vec::new(),
        }
    }

    /// Adds a numeric tolerance rule.
    #[must_use]
    pub fn with_tolerance(mut self, key: impl Into<String>, tolerance: Decimal) -> Self {
        self.numeric_rules.push(ReconcileNumericRule {
            key: key.into(),
            tolerance,
        });
        self
    }
}

/// Classification of one reconciled row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// Both sides agree exactly.
    ExactMatch,
    /// Sides differ within the configured tolerance.
    MatchWithinTolerance,
    /// Sides differ beyond tolerance, or one side is missing the row.
    Failed,
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ExactMatch => "ExactMatch",
            Self::MatchWithinTolerance => "MatchWithinTolerance",
            Self::Failed => "Failed",
        };
        write!(f, "{s}")
    }
}

/// One reconciliation break: a row where the two sides differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationBreak {
    /// Platform instrument id of the broken row.
    pub instrument_uid: String,
    /// Units on the left side.
    pub left_units: Decimal,
    /// Units on the right side.
    pub right_units: Decimal,
    /// Right minus left units.
    pub difference_units: Decimal,
    /// Cost on the left side.
    pub left_cost: MetricValue,
    /// Cost on the right side.
    pub right_cost: MetricValue,
    /// Right minus left cost.
    pub difference_cost: MetricValue,
    /// Row classification under the request's rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_result: Option<MatchResult>,
}
