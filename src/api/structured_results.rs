//! # Structured Result Store Endpoints
//!
//! Uploading and retrieving client-supplied result documents.

use crate::error::ApiResult;
use crate::http::HttpTransport;
use crate::models::structured_result::{
    GetStructuredResultDataResponse, StructuredResultDataId, UpsertStructuredResultDataRequest,
    UpsertStructuredResultDataResponse,
};
use std::collections::HashMap;

/// Proxy for the `/api/unitresults` endpoints.
#[derive(Debug, Clone)]
pub struct StructuredResultsApi {
    transport: HttpTransport,
}

impl StructuredResultsApi {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Uploads result documents into a scope.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::error::ApiError`] if the request fails.
    pub async fn upsert(
        &self,
        scope: &str,
        request: &UpsertStructuredResultDataRequest,
    ) -> ApiResult<UpsertStructuredResultDataResponse> {
        tracing::debug!(scope, count = request.data.len(), "upserting structured results");
        self.transport.post(&format!("api/unitresults/{scope}"), request).await
    }

    /// Retrieves result documents by id, keyed by caller correlation id.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::error::ApiError`] if the request fails.
    pub async fn get(
        &self,
        scope: &str,
        ids: &HashMap<String, StructuredResultDataId>,
    ) -> ApiResult<GetStructuredResultDataResponse> {
        self.transport
            .post(&format!("api/unitresults/{scope}/$get"), ids)
            .await
    }
}
