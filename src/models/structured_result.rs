//! # Structured Result Store Models
//!
//! Client-supplied result documents (e.g. CSV valuations from another
//! system) uploaded to the structured result store and referenced during
//! valuation and reconciliation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifies one stored result document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredResultDataId {
    /// Originating system, e.g. `Client`.
    pub source: String,
    /// Document code.
    pub code: String,
    /// When the results are effective.
    pub effective_at: DateTime<Utc>,
    /// Result kind, e.g. `UnitResult/Valuation`.
    pub result_type: String,
}

impl StructuredResultDataId {
    /// Creates an id for client-sourced unit valuation results.
    #[must_use]
    pub fn client_valuation(code: impl Into<String>, effective_at: DateTime<Utc>) -> Self {
        Self {
            source: "Client".to_string(),
            code: code.into(),
            effective_at,
            result_type: "UnitResult/Valuation".to_string(),
        }
    }
}

/// A result document and its format metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredResultData {
    /// Document format, e.g. `Csv` or `Json`.
    pub document_format: String,
    /// Caller-assigned format version.
    pub version: String,
    /// Human-readable name.
    pub name: String,
    /// The document body.
    pub document: String,
}

impl StructuredResultData {
    /// Creates a CSV document.
    #[must_use]
    pub fn csv(name: impl Into<String>, version: impl Into<String>, document: impl Into<String>) -> Self {
        Self {
            document_format: "Csv".to_string(),
            version: version.into(),
            name: name.into(),
            document: document.into(),
        }
    }
}

/// One upsert entry: an id together with its document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredResultDataRequest {
    /// The document id.
    pub id: StructuredResultDataId,
    /// The document.
    pub data: StructuredResultData,
}

/// Request to upsert result documents, keyed by correlation id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertStructuredResultDataRequest {
    /// Entries keyed by caller correlation id.
    pub data: HashMap<String, StructuredResultDataRequest>,
}

impl UpsertStructuredResultDataRequest {
    /// Creates a request with a single entry.
    #[must_use]
    pub fn single(
        correlation_id: impl Into<String>,
        id: StructuredResultDataId,
        data: StructuredResultData,
    ) -> Self {
        let mut map = HashMap::new();
        map.insert(correlation_id.into(), StructuredResultDataRequest { id, data });
        Self { data: map }
    }
}

/// Response to a structured result upsert: as-at stamps keyed by
/// correlation id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertStructuredResultDataResponse {
    /// Write stamps keyed by caller correlation id.
    pub values: HashMap<String, DateTime<Utc>>,
    /// Failures keyed by caller correlation id.
    #[serde(default)]
    pub failed: HashMap<String, serde_json::Value>,
}

/// Response to a structured result get: documents keyed by correlation id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetStructuredResultDataResponse {
    /// Retrieved documents keyed by caller correlation id.
    pub values: HashMap<String, StructuredResultData>,
    /// Failures keyed by caller correlation id.
    #[serde(default)]
    pub failed: HashMap<String, serde_json::Value>,
}
