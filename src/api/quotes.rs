//! # Quote Endpoints
//!
//! Upserting and retrieving simple market data quotes.

use crate::error::ApiResult;
use crate::http::HttpTransport;
use crate::models::quote::{Quote, QuoteId, UpsertQuoteRequest};
use serde::Deserialize;
use std::collections::HashMap;

/// Response to a quote upsert.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertQuotesResponse {
    /// Stored quotes keyed by caller correlation id.
    pub values: HashMap<String, Quote>,
    /// Rejections keyed by caller correlation id.
    #[serde(default)]
    pub failed: HashMap<String, serde_json::Value>,
}

/// Proxy for the `/api/quotes` endpoints.
#[derive(Debug, Clone)]
pub struct QuotesApi {
    transport: HttpTransport,
}

impl QuotesApi {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Upserts quotes into a scope, keyed by caller correlation id.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::error::ApiError`] if the request fails.
    pub async fn upsert(
        &self,
        scope: &str,
        quotes: &HashMap<String, UpsertQuoteRequest>,
    ) -> ApiResult<UpsertQuotesResponse> {
        tracing::debug!(scope, count = quotes.len(), "upserting quotes");
        self.transport.post(&format!("api/quotes/{scope}"), quotes).await
    }

    /// Retrieves quotes by id, keyed by caller correlation id.
    ///
    /// Ids with no stored quote appear in the response's `failed` map.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::error::ApiError`] if the request fails.
    pub async fn get(
        &self,
        scope: &str,
        ids: &HashMap<String, QuoteId>,
    ) -> ApiResult<UpsertQuotesResponse> {
        self.transport.post(&format!("api/quotes/{scope}/$get"), ids).await
    }
}
