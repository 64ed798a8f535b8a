//! # Order Models
//!
//! Orders booked into the order store.

use crate::models::ids::{InstrumentIdType, ResourceId};
use crate::models::properties::PropertyValue;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Order direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderSide {
    /// Acquire the instrument.
    Buy,
    /// Dispose of the instrument.
    Sell,
}

impl OrderSide {
    /// Returns the opposite side.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "Buy"),
            Self::Sell => write!(f, "Sell"),
        }
    }
}

impl FromStr for OrderSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Buy" => Ok(Self::Buy),
            "Sell" => Ok(Self::Sell),
            _ => Err(format!("invalid OrderSide value: '{s}'")),
        }
    }
}

/// An order to book or amend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Scope/code pair identifying the order.
    pub id: ResourceId,
    /// Order direction.
    pub side: OrderSide,
    /// Ordered quantity.
    pub quantity: Decimal,
    /// Identifiers of the ordered instrument, keyed by property key.
    pub instrument_identifiers: HashMap<String, String>,
    /// Portfolio the order fills into.
    pub portfolio_id: ResourceId,
    /// Order state, e.g. `New`; defaulted by the platform when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Custom properties keyed by property key.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, PropertyValue>,
}

impl OrderRequest {
    /// Creates an order with no instrument identifiers.
    #[must_use]
    pub fn new(id: ResourceId, side: OrderSide, quantity: Decimal, portfolio_id: ResourceId) -> Self {
        Self {
            id,
            side,
            quantity,
            instrument_identifiers: HashMap::new(),
            portfolio_id,
            state: None,
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
}

/// A booked order, as returned by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Scope/code pair identifying the order.
    pub id: ResourceId,
    /// Order direction.
    pub side: OrderSide,
    /// Ordered quantity.
    pub quantity: Decimal,
    /// Platform instrument id resolved at booking time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meridian_instrument_id: Option<String>,
    /// Portfolio the order fills into.
    pub portfolio_id: ResourceId,
    /// Order state.
    pub state: String,
    /// Custom properties keyed by property key.
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

/// Request to upsert a batch of orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertOrdersRequest {
    /// The orders to book.
    pub order_requests: Vec<OrderRequest>,
}
