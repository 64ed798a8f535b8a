//! # Transaction Models
//!
//! Transactions booked into transaction portfolios.
//!
//! # Examples
//!
//! ```
//! use meridian_sdk::models::transaction::TransactionRequest;
//! use meridian_sdk::models::ids::InstrumentIdType;
//! use chrono::{TimeZone, Utc};
//! use rust_decimal::Decimal;
//!
//! let trade_date = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
//! let price: Decimal = "12.5".parse().unwrap();
//! let buy = TransactionRequest::buy("txn-001", trade_date, Decimal::from(100), price, "GBP")
//!     .with_instrument_identifier(InstrumentIdType::ClientInternal, "id-acme-1");
//!
//! assert_eq!(buy.transaction_type, "Buy");
//! ```

use crate::models::ids::InstrumentIdType;
use crate::models::properties::{MetricValue, PropertyValue};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A transaction to book into a portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// Caller-assigned transaction id, unique within the portfolio.
    pub transaction_id: String,
    /// Transaction type alias, e.g. `Buy`, `Sell`, `FundsIn`.
    #[serde(rename = "type")]
    pub transaction_type: String,
    /// Identifiers of the transacted instrument, keyed by property key.
    pub instrument_identifiers: HashMap<String, String>,
    /// Trade date.
    pub transaction_date: DateTime<Utc>,
    /// Settlement date.
    pub settlement_date: DateTime<Utc>,
    /// Transacted units.
    pub units: Decimal,
    /// Price per unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_price: Option<TransactionPrice>,
    /// Total consideration paid or received.
    pub total_consideration: MetricValue,
    /// Custom properties keyed by property key.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, PropertyValue>,
}

/// A per-unit price with its quotation basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPrice {
    /// Price value.
    pub price: Decimal,
    /// Quotation basis, e.g. `Price`.
    #[serde(rename = "type", default)]
    pub price_type: Option<String>,
}

impl TransactionRequest {
    /// Creates a `Buy` transaction settling T+2.
    #[must_use]
    pub fn buy(
        transaction_id: impl Into<String>,
        transaction_date: DateTime<Utc>,
        units: Decimal,
        price: Decimal,
        currency: &str,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            transaction_type: "Buy".to_string(),
            instrument_identifiers: HashMap::new(),
            transaction_date,
            settlement_date: transaction_date + Duration::days(2),
            units,
            transaction_price: Some(TransactionPrice {
                price,
                price_type: Some("Price".to_string()),
            }),
            total_consideration: MetricValue::in_currency(units * price, currency),
            properties: HashMap::new(),
        }
    }

    /// Creates a `FundsIn` cash transaction in the given currency.
    #[must_use]
    pub fn funds_in(
        transaction_id: impl Into<String>,
        transaction_date: DateTime<Utc>,
        amount: Decimal,
        currency: &str,
    ) -> Self {
        let mut instrument_identifiers = HashMap::new();
        instrument_identifiers.insert(
            InstrumentIdType::Currency.property_key(),
            currency.to_string(),
        );
        Self {
            transaction_id: transaction_id.into(),
            transaction_type: "FundsIn".to_string(),
            instrument_identifiers,
            transaction_date,
            settlement_date: transaction_date,
            units: amount,
            transaction_price: None,
            total_consideration: MetricValue::in_currency(amount, currency),
            properties: HashMap::new(),
        }
    }

    /// Sets the instrument identifier under the given scheme.
    #[must_use]
    pub fn with_instrument_identifier(
        mut self,
        id_type: InstrumentIdType,
        value: impl Into<String>,
    ) -> Self {
        self.instrument_identifiers
            .insert(id_type.property_key(), value.into());
        self
    }

    /// Adds a custom property.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.insert(key.into(), value);
        self
    }
}

/// A booked transaction, as returned by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Caller-assigned transaction id.
    pub transaction_id: String,
    /// Transaction type alias.
    #[serde(rename = "type")]
    pub transaction_type: String,
    /// Platform instrument id resolved at booking time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument_uid: Option<String>,
    /// Trade date.
    pub transaction_date: DateTime<Utc>,
    /// Settlement date.
    pub settlement_date: DateTime<Utc>,
    /// Transacted units.
    pub units: Decimal,
    /// Total consideration.
    pub total_consideration: MetricValue,
    /// Custom properties keyed by property key.
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

/// Response to a transaction upsert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertTransactionsResponse {
    /// The version written by the upsert.
    pub version: crate::models::envelope::Version,
    /// Link to the affected portfolio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}
