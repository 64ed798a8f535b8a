//! # Complex Market Data Endpoints
//!
//! Upserting and retrieving curves and other structured market data.

use crate::error::ApiResult;
use crate::http::HttpTransport;
use crate::models::market_data::{
    ComplexMarketData, ComplexMarketDataId, UpsertComplexMarketDataRequest,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// Response to a complex market data upsert: write stamps keyed by
/// correlation id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertComplexMarketDataResponse {
    /// Write stamps keyed by caller correlation id.
    pub values: HashMap<String, DateTime<Utc>>,
    /// Rejections keyed by caller correlation id.
    #[serde(default)]
    pub failed: HashMap<String, serde_json::Value>,
}

/// Response to a complex market data get.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetComplexMarketDataResponse {
    /// Retrieved data keyed by caller correlation id.
    pub values: HashMap<String, ComplexMarketData>,
    /// Missing ids keyed by caller correlation id.
    #[serde(default)]
    pub failed: HashMap<String, serde_json::Value>,
}

/// Proxy for the `/api/complexmarketdata` endpoints.
#[derive(Debug, Clone)]
pub struct ComplexMarketDataApi {
    transport: HttpTransport,
}

impl ComplexMarketDataApi {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Upserts structured market data into a scope, keyed by caller
    /// correlation id.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::error::ApiError`] if the request fails.
    pub async fn upsert(
        &self,
        scope: &str,
        data: &HashMap<String, UpsertComplexMarketDataRequest>,
    ) -> ApiResult<UpsertComplexMarketDataResponse> {
        tracing::debug!(scope, count = data.len(), "upserting complex market data");
        self.transport
            .post(&format!("api/complexmarketdata/{scope}"), data)
            .await
    }

    /// Retrieves structured market data by id, keyed by caller correlation
    /// id.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::error::ApiError`] if the request fails.
    pub async fn get(
        &self,
        scope: &str,
        ids: &HashMap<String, ComplexMarketDataId>,
    ) -> ApiResult<GetComplexMarketDataResponse> {
        self.transport
            .post(&format!("api/complexmarketdata/{scope}/$get"), ids)
            .await
    }
}
