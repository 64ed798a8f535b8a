//! # Property Definitions and Values
//!
//! Custom property machinery: definitions registered against a domain and
//! scope, and the values attached to entities.
//!
//! # Examples
//!
//! ```
//! use meridian_sdk::models::properties::{PropertyValue, PropertyDomain};
//!
//! let rating = PropertyValue::label("Internal-A");
//! let strategy_domain = PropertyDomain::Transaction;
//! assert_eq!(strategy_domain.as_str(), "Transaction");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity domains a property definition can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyDomain {
    /// Instrument properties.
    Instrument,
    /// Portfolio properties.
    Portfolio,
    /// Transaction properties.
    Transaction,
    /// Holding properties.
    Holding,
    /// Order properties.
    Order,
}

impl PropertyDomain {
    /// Returns the domain name as used in property keys and URL paths.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instrument => "Instrument",
            Self::Portfolio => "Portfolio",
            Self::Transaction => "Transaction",
            Self::Holding => "Holding",
            Self::Order => "Order",
        }
    }
}

impl fmt::Display for PropertyDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifetime of a property value on an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PropertyLifeTime {
    /// The value applies for all time.
    #[default]
    Perpetual,
    /// The value varies over effective time.
    TimeVariant,
}

/// Request to register a new property definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyDefinitionRequest {
    /// Entity domain the property attaches to.
    pub domain: PropertyDomain,
    /// Owning scope.
    pub scope: String,
    /// Property code, unique within domain and scope.
    pub code: String,
    /// Human-readable name.
    pub display_name: String,
    /// Value lifetime.
    pub life_time: PropertyLifeTime,
    /// Whether every entity in the domain must carry a value.
    pub value_required: bool,
    /// Data type reference, e.g. `system/string` or `system/number`.
    pub data_type_id: DataTypeId,
}

impl CreatePropertyDefinitionRequest {
    /// Creates a perpetual, optional, string-typed definition.
    #[must_use]
    pub fn string(domain: PropertyDomain, scope: impl Into<String>, code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            domain,
            scope: scope.into(),
            display_name: code.clone(),
            code,
            life_time: PropertyLifeTime::Perpetual,
            value_required: false,
            data_type_id: DataTypeId::system("string"),
        }
    }

    /// Creates a perpetual, optional, number-typed definition.
    #[must_use]
    pub fn number(domain: PropertyDomain, scope: impl Into<String>, code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            domain,
            scope: scope.into(),
            display_name: code.clone(),
            code,
            life_time: PropertyLifeTime::Perpetual,
            value_required: false,
            data_type_id: DataTypeId::system("number"),
        }
    }
}

/// Reference to a data type, e.g. `system/string`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTypeId {
    /// Data type scope.
    pub scope: String,
    /// Data type code.
    pub code: String,
}

impl DataTypeId {
    /// Creates a reference to a built-in `system` data type.
    #[must_use]
    pub fn system(code: impl Into<String>) -> Self {
        Self {
            scope: "system".to_string(),
            code: code.into(),
        }
    }
}

/// A registered property definition, as returned by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    /// Fully qualified key, e.g. `Transaction/Finbourne/strategy`.
    pub key: String,
    /// Human-readable name.
    pub display_name: String,
    /// Value lifetime.
    pub life_time: PropertyLifeTime,
    /// Whether a value is required.
    pub value_required: bool,
    /// Data type reference.
    pub data_type_id: DataTypeId,
}

/// A label or metric value carried by a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyValue {
    /// Textual value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_value: Option<String>,
    /// Numeric value with an optional unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_value: Option<MetricValue>,
}

impl PropertyValue {
    /// Creates a label value.
    #[must_use]
    pub fn label(value: impl Into<String>) -> Self {
        Self {
            label_value: Some(value.into()),
            metric_value: None,
        }
    }

    /// Creates a metric value.
    #[must_use]
    pub fn metric(value: Decimal, unit: Option<String>) -> Self {
        Self {
            label_value: None,
            metric_value: Some(MetricValue { value, unit }),
        }
    }
}

/// A numeric value with an optional unit, e.g. a price in a currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricValue {
    /// The numeric value.
    pub value: Decimal,
    /// Optional unit, e.g. an ISO currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl MetricValue {
    /// Creates a metric value in a currency unit.
    #[must_use]
    pub fn in_currency(value: Decimal, currency: impl Into<String>) -> Self {
        Self {
            value,
            unit: Some(currency.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn string_definition_defaults() {
        let request =
            CreatePropertyDefinitionRequest::string(PropertyDomain::Transaction, "Finbourne", "strategy");
        assert_eq!(request.display_name, "strategy");
        assert_eq!(request.data_type_id, DataTypeId::system("string"));
        assert_eq!(request.life_time, PropertyLifeTime::Perpetual);
        assert!(!request.value_required);
    }

    #[test]
    fn label_value_serializes_without_metric() {
        let value = PropertyValue::label("Income");
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["labelValue"], "Income");
        assert!(json.get("metricValue").is_none());
    }

    #[test]
    fn metric_value_carries_unit() {
        let value = MetricValue::in_currency(Decimal::from(100), "GBP");
        assert_eq!(value.unit.as_deref(), Some("GBP"));
    }
}
