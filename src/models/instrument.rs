//! # Instrument Models
//!
//! Instrument definitions sent to the platform when booking (mastering)
//! instruments, and the mastered instruments read back.
//!
//! Economic definitions are a tagged union discriminated by `instrumentType`
//! on the wire; the platform prices each variant with the models configured
//! in the active recipe.
//!
//! # Examples
//!
//! ```
//! use meridian_sdk::models::instrument::{InstrumentDefinition, InstrumentEconomics};
//! use meridian_sdk::models::ids::InstrumentIdType;
//!
//! let definition = InstrumentDefinition::new("Acme plc", InstrumentEconomics::Equity)
//!     .with_identifier(InstrumentIdType::Figi, "BBG000C6K6G9")
//!     .with_identifier(InstrumentIdType::ClientInternal, "id-acme-1");
//!
//! assert_eq!(definition.name, "Acme plc");
//! ```

use crate::models::ids::InstrumentIdType;
use crate::models::properties::PropertyValue;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Payment conventions shared by coupon-bearing legs.
///
/// These are the schedule-generation inputs: currency, payment frequency
/// (tenor string such as `6M`), day count and roll conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowConventions {
    /// Payment currency.
    pub currency: String,
    /// Payment frequency tenor, e.g. `6M`.
    pub payment_frequency: String,
    /// Day count convention, e.g. `Act365`.
    pub day_count_convention: String,
    /// Roll convention, e.g. `ModifiedFollowing`.
    pub roll_convention: String,
}

impl FlowConventions {
    /// Creates conventions with `Act365` day count and modified-following
    /// rolls, the platform's most common defaults.
    #[must_use]
    pub fn new(currency: impl Into<String>, payment_frequency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            payment_frequency: payment_frequency.into(),
            day_count_convention: "Act365".to_string(),
            roll_convention: "ModifiedFollowing".to_string(),
        }
    }
}

/// One leg of an interest-rate swap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapLeg {
    /// Whether the leg pays or receives.
    pub pay_receive: PayReceive,
    /// Fixed rate for fixed legs; absent on floating legs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_rate: Option<Decimal>,
    /// Floating rate index name for floating legs, e.g. `GBP-SONIA`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    /// Payment conventions for this leg.
    pub conventions: FlowConventions,
    /// Leg notional.
    pub notional: Decimal,
}

/// Direction of a swap leg's flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayReceive {
    /// Flows are paid.
    Pay,
    /// Flows are received.
    Receive,
}

/// Economic definition of an instrument, tagged by `instrumentType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "instrumentType", rename_all = "camelCase")]
pub enum InstrumentEconomics {
    /// A plain equity; priced from quoted market data.
    Equity,
    /// A fixed-coupon bond.
    #[serde(rename_all = "camelCase")]
    Bond {
        /// Schedule start date.
        start_date: DateTime<Utc>,
        /// Maturity date.
        maturity_date: DateTime<Utc>,
        /// Annual coupon rate as a fraction, e.g. `0.05`.
        coupon_rate: Decimal,
        /// Principal amount.
        principal: Decimal,
        /// Coupon payment conventions.
        flow_conventions: FlowConventions,
    },
    /// An FX forward exchanging domestic for foreign currency at maturity.
    #[serde(rename_all = "camelCase")]
    FxForward {
        /// Contract start date.
        start_date: DateTime<Utc>,
        /// Settlement date.
        maturity_date: DateTime<Utc>,
        /// Domestic amount paid.
        dom_amount: Decimal,
        /// Domestic currency.
        dom_ccy: String,
        /// Foreign amount received.
        fgn_amount: Decimal,
        /// Foreign currency.
        fgn_ccy: String,
    },
    /// A two-leg interest-rate swap.
    #[serde(rename_all = "camelCase")]
    InterestRateSwap {
        /// Swap start date.
        start_date: DateTime<Utc>,
        /// Swap maturity date.
        maturity_date: DateTime<Utc>,
        /// The legs, conventionally one fixed and one floating.
        legs: Vec<SwapLeg>,
    },
    /// A term deposit repaying principal plus interest at maturity.
    #[serde(rename_all = "camelCase")]
    TermDeposit {
        /// Deposit start date.
        start_date: DateTime<Utc>,
        /// Maturity date.
        maturity_date: DateTime<Utc>,
        /// Deposit rate as a fraction.
        rate: Decimal,
        /// Deposited amount.
        contract_size: Decimal,
        /// Payment conventions.
        flow_conventions: FlowConventions,
    },
}

impl InstrumentEconomics {
    /// Returns the wire name of this instrument type.
    #[must_use]
    pub fn instrument_type(&self) -> &'static str {
        match self {
            Self::Equity => "equity",
            Self::Bond { .. } => "bond",
            Self::FxForward { .. } => "fxForward",
            Self::InterestRateSwap { .. } => "interestRateSwap",
            Self::TermDeposit { .. } => "termDeposit",
        }
    }
}

/// An instrument definition submitted for mastering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentDefinition {
    /// Display name.
    pub name: String,
    /// Identifier values keyed by property key, e.g.
    /// `Instrument/default/Figi`.
    pub identifiers: HashMap<String, String>,
    /// Economic definition, if the instrument is priced from a model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<InstrumentEconomics>,
    /// Custom properties keyed by property key.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, PropertyValue>,
}

impl InstrumentDefinition {
    /// Creates a definition with no identifiers.
    ///
    /// At least one unique identifier must be added before upserting.
    #[must_use]
    pub fn new(name: impl Into<String>, economics: InstrumentEconomics) -> Self {
        Self {
            name: name.into(),
            identifiers: HashMap::new(),
            definition: Some(economics),
            properties: HashMap::new(),
        }
    }

    /// Creates a look-through definition with identifiers only.
    #[must_use]
    pub fn identifiers_only(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifiers: HashMap::new(),
            definition: None,
            properties: HashMap::new(),
        }
    }

    /// Adds an identifier under the given scheme.
    #[must_use]
    pub fn with_identifier(mut self, id_type: InstrumentIdType, value: impl Into<String>) -> Self {
        self.identifiers.insert(id_type.property_key(), value.into());
        self
    }

    /// Adds a custom property.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Returns the identifier registered under the given scheme, if any.
    #[must_use]
    pub fn identifier(&self, id_type: InstrumentIdType) -> Option<&str> {
        self.identifiers.get(&id_type.property_key()).map(String::as_str)
    }
}

/// A mastered instrument, as returned by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    /// Platform-assigned unique instrument id.
    pub meridian_instrument_id: String,
    /// Display name.
    pub name: String,
    /// Identifier values keyed by property key.
    pub identifiers: HashMap<String, String>,
    /// Economic definition, when one was mastered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<InstrumentEconomics>,
    /// Instrument state, e.g. `Active` or `Deleted`.
    #[serde(default)]
    pub state: Option<String>,
}

impl Instrument {
    /// Returns the identifier registered under the given scheme, if any.
    #[must_use]
    pub fn identifier(&self, id_type: InstrumentIdType) -> Option<&str> {
        self.identifiers.get(&id_type.property_key()).map(String::as_str)
    }
}

/// Response to an instrument upsert: successes keyed by correlation id,
/// failures keyed likewise with the rejection detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertInstrumentsResponse {
    /// Successfully mastered instruments keyed by request correlation id.
    pub values: HashMap<String, Instrument>,
    /// Rejected definitions keyed by request correlation id.
    #[serde(default)]
    pub failed: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn gbp_6m() -> FlowConventions {
        FlowConventions::new("GBP", "6M")
    }

    #[test]
    fn definition_builder_registers_identifiers() {
        let definition = InstrumentDefinition::new("Acme plc", InstrumentEconomics::Equity)
            .with_identifier(InstrumentIdType::Figi, "BBG000C6K6G9")
            .with_identifier(InstrumentIdType::ClientInternal, "id-acme-1");

        assert_eq!(definition.identifier(InstrumentIdType::Figi), Some("BBG000C6K6G9"));
        assert_eq!(
            definition.identifier(InstrumentIdType::ClientInternal),
            Some("id-acme-1")
        );
        assert_eq!(definition.identifier(InstrumentIdType::Isin), None);
    }

    #[test]
    fn equity_serializes_with_type_tag() {
        let json = serde_json::to_value(InstrumentEconomics::Equity).unwrap();
        assert_eq!(json["instrumentType"], "equity");
    }

    #[test]
    fn bond_round_trips() {
        let bond = InstrumentEconomics::Bond {
            start_date: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            maturity_date: Utc.with_ymd_and_hms(2029, 1, 15, 0, 0, 0).unwrap(),
            coupon_rate: "0.05".parse().unwrap(),
            principal: Decimal::from(100_000),
            flow_conventions: gbp_6m(),
        };

        let json = serde_json::to_value(&bond).unwrap();
        assert_eq!(json["instrumentType"], "bond");
        assert_eq!(json["flowConventions"]["paymentFrequency"], "6M");

        let back: InstrumentEconomics = serde_json::from_value(json).unwrap();
        assert_eq!(back, bond);
    }

    #[test]
    fn swap_legs_round_trip() {
        let swap = InstrumentEconomics::InterestRateSwap {
            start_date: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            maturity_date: Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap(),
            legs: vec![
                SwapLeg {
                    pay_receive: PayReceive::Pay,
                    fixed_rate: Some("0.045".parse().unwrap()),
                    index_name: None,
                    conventions: gbp_6m(),
                    notional: Decimal::from(1_000_000),
                },
                SwapLeg {
                    pay_receive: PayReceive::Receive,
                    fixed_rate: None,
                    index_name: Some("GBP-SONIA".to_string()),
                    conventions: gbp_6m(),
                    notional: Decimal::from(1_000_000),
                },
            ],
        };

        let json = serde_json::to_value(&swap).unwrap();
        let back: InstrumentEconomics = serde_json::from_value(json).unwrap();
        assert_eq!(back, swap);
    }
}
