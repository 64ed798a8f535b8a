//! # Response Envelopes
//!
//! Generic list and version envelopes the platform wraps responses in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A plain list of resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceList<T> {
    /// The returned values.
    pub values: Vec<T>,
    /// Link to this resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Continuation token for paged listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
}

impl<T> ResourceList<T> {
    /// Creates a list from values alone.
    #[must_use]
    pub fn from_values(values: Vec<T>) -> Self {
        Self {
            values,
            href: None,
            next_page: None,
        }
    }
}

/// Version stamp the platform attaches to bitemporal entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    /// Effective-at datetime of this version.
    pub effective_from: DateTime<Utc>,
    /// As-at datetime the version was written.
    pub as_at_date: DateTime<Utc>,
}

/// A list of resources together with the version they were read at.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionedResourceList<T> {
    /// The returned values.
    pub values: Vec<T>,
    /// The version the values were read at.
    pub version: Version,
    /// Link to this resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Response to a delete request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedEntityResponse {
    /// When the deletion took effect.
    pub as_at: DateTime<Utc>,
    /// Link to the deletion record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}
