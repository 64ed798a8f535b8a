//! # Identifier Types
//!
//! Identifier types shared across the platform API.
//!
//! - [`ResourceId`]: a scope/code pair addressing portfolios, recipes and
//!   other scoped entities
//! - [`InstrumentIdType`]: the identifier schemes under which instruments
//!   can be addressed
//!
//! # Examples
//!
//! ```
//! use meridian_sdk::models::ids::{InstrumentIdType, ResourceId};
//!
//! let portfolio = ResourceId::new("Finbourne", "uk-equity");
//! assert_eq!(portfolio.to_string(), "Finbourne/uk-equity");
//!
//! let figi = InstrumentIdType::Figi;
//! assert_eq!(figi.property_key(), "Instrument/default/Figi");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A scope/code pair identifying a scoped platform entity.
///
/// Scopes partition data between applications and environments; codes are
/// unique within a scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    /// The containing scope.
    pub scope: String,
    /// The entity code, unique within the scope.
    pub code: String,
}

impl ResourceId {
    /// Creates a new resource id.
    #[must_use]
    pub fn new(scope: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            code: code.into(),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.scope, self.code)
    }
}

/// Identifier schemes under which an instrument can be addressed.
///
/// # Examples
///
/// ```
/// use meridian_sdk::models::ids::InstrumentIdType;
///
/// assert_eq!(InstrumentIdType::ClientInternal.as_str(), "ClientInternal");
/// assert_eq!("Figi".parse::<InstrumentIdType>().unwrap(), InstrumentIdType::Figi);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentIdType {
    /// OpenFIGI identifier.
    Figi,
    /// ISIN identifier.
    Isin,
    /// SEDOL identifier.
    Sedol,
    /// Exchange ticker.
    Ticker,
    /// Caller-assigned identifier.
    ClientInternal,
    /// Platform-assigned unique instrument id.
    MeridianInstrumentId,
    /// ISO currency code, for cash instruments.
    Currency,
}

impl InstrumentIdType {
    /// Returns the identifier type name as used in URL paths.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Figi => "Figi",
            Self::Isin => "Isin",
            Self::Sedol => "Sedol",
            Self::Ticker => "Ticker",
            Self::ClientInternal => "ClientInternal",
            Self::MeridianInstrumentId => "MeridianInstrumentId",
            Self::Currency => "Currency",
        }
    }

    /// Returns the property key used in instrument identifier maps,
    /// e.g. `Instrument/default/Figi`.
    #[must_use]
    pub fn property_key(&self) -> String {
        format!("Instrument/default/{}", self.as_str())
    }
}

impl fmt::Display for InstrumentIdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for parsing identifier enums from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseIdError {
    /// The provided string value is not a known identifier type.
    InvalidValue(&'static str, String),
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue(kind, value) => {
                write!(f, "invalid {} value: '{}'", kind, value)
            }
        }
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for InstrumentIdType {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Figi" => Ok(Self::Figi),
            "Isin" => Ok(Self::Isin),
            "Sedol" => Ok(Self::Sedol),
            "Ticker" => Ok(Self::Ticker),
            "ClientInternal" => Ok(Self::ClientInternal),
            "MeridianInstrumentId" => Ok(Self::MeridianInstrumentId),
            "Currency" => Ok(Self::Currency),
            _ => Err(ParseIdError::InvalidValue("InstrumentIdType", s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn resource_id_display() {
        let id = ResourceId::new("Finbourne", "uk-equity");
        assert_eq!(id.to_string(), "Finbourne/uk-equity");
    }

    #[test]
    fn resource_id_serializes_camel_case() {
        let id = ResourceId::new("s", "c");
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json["scope"], "s");
        assert_eq!(json["code"], "c");
    }

    #[test]
    fn id_type_round_trips_through_str() {
        for id_type in [
            InstrumentIdType::Figi,
            InstrumentIdType::Isin,
            InstrumentIdType::ClientInternal,
            InstrumentIdType::MeridianInstrumentId,
            InstrumentIdType::Currency,
        ] {
            assert_eq!(id_type.as_str().parse::<InstrumentIdType>().unwrap(), id_type);
        }
    }

    #[test]
    fn id_type_property_key() {
        assert_eq!(
            InstrumentIdType::ClientInternal.property_key(),
            "Instrument/default/ClientInternal"
        );
    }

    #[test]
    fn unknown_id_type_fails_to_parse() {
        assert!("Cusip9".parse::<InstrumentIdType>().is_err());
    }
}
