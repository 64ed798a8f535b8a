//! # Cut Label Models
//!
//! Named, time-zone-aware time-of-day markers. A cut label such as
//! `LondonClose` disambiguates "as of" times across markets: an effective
//! date of `2024-03-01NLondonClose` resolves to 16:30 London time on that
//! day regardless of the caller's zone.

use serde::{Deserialize, Serialize};

/// A local time of day within a cut label's zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CutLocalTime {
    /// Hour of day, 0 to 23.
    pub hours: u8,
    /// Minute of hour, 0 to 59.
    pub minutes: u8,
}

impl CutLocalTime {
    /// Creates a local time, clamping out-of-range components.
    #[must_use]
    pub fn new(hours: u8, minutes: u8) -> Self {
        Self {
            hours: hours.min(23),
            minutes: minutes.min(59),
        }
    }
}

/// Definition of a cut label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CutLabelDefinition {
    /// Label code, e.g. `LondonClose`.
    pub code: String,
    /// Human-readable name.
    pub display_name: String,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Time of day in the label's zone.
    pub cut_local_time: CutLocalTime,
    /// IANA time zone name, e.g. `Europe/London`.
    pub time_zone: String,
}

impl CutLabelDefinition {
    /// Creates a definition with the code as display name.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        cut_local_time: CutLocalTime,
        time_zone: impl Into<String>,
    ) -> Self {
        let code = code.into();
        Self {
            display_name: code.clone(),
            code,
            description: None,
            cut_local_time,
            time_zone: time_zone.into(),
        }
    }

    /// Formats an effective date addressed at this cut, e.g.
    /// `2024-03-01NLondonClose`.
    #[must_use]
    pub fn effective_at(&self, date: chrono::NaiveDate) -> String {
        format!("{}N{}", date.format("%Y-%m-%d"), self.code)
    }
}
