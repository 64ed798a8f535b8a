//! # Instruments Endpoints
//!
//! Mastering and retrieval of instruments.
//!
//! # Examples
//!
//! ```ignore
//! let client = ApiClient::new(config)?;
//! let response = client.instruments().upsert(&definitions).await?;
//! let instrument = client
//!     .instruments()
//!     .get(InstrumentIdType::Figi, "BBG000C6K6G9")
//!     .await?;
//! ```

use crate::error::ApiResult;
use crate::http::HttpTransport;
use crate::models::envelope::{DeletedEntityResponse, ResourceList};
use crate::models::ids::InstrumentIdType;
use crate::models::instrument::{Instrument, InstrumentDefinition, UpsertInstrumentsResponse};
use std::collections::HashMap;

/// Proxy for the `/api/instruments` endpoints.
#[derive(Debug, Clone)]
pub struct InstrumentsApi {
    transport: HttpTransport,
}

impl InstrumentsApi {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Masters a batch of instruments.
    ///
    /// Definitions are keyed by a caller correlation id echoed in the
    /// response. Upserting an existing identifier updates the instrument
    /// rather than failing.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::error::ApiError`] if the request fails.
    pub async fn upsert(
        &self,
        definitions: &HashMap<String, InstrumentDefinition>,
    ) -> ApiResult<UpsertInstrumentsResponse> {
        tracing::debug!(count = definitions.len(), "upserting instruments");
        self.transport.post("api/instruments", definitions).await
    }

    /// Retrieves a mastered instrument by one of its identifiers.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if no instrument carries the
    /// identifier.
    pub async fn get(&self, id_type: InstrumentIdType, identifier: &str) -> ApiResult<Instrument> {
        self.transport
            .get(&format!("api/instruments/{}/{identifier}", id_type.as_str()))
            .await
    }

    /// Lists mastered instruments, newest first.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::error::ApiError`] if the request fails.
    pub async fn list(&self, limit: usize) -> ApiResult<ResourceList<Instrument>> {
        self.transport
            .get_with_params("api/instruments", &[("limit", limit.to_string())])
            .await
    }

    /// Soft-deletes an instrument by one of its identifiers.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if no instrument carries the
    /// identifier.
    pub async fn delete(
        &self,
        id_type: InstrumentIdType,
        identifier: &str,
    ) -> ApiResult<DeletedEntityResponse> {
        tracing::debug!(id_type = %id_type, identifier, "deleting instrument");
        self.transport
            .delete(&format!("api/instruments/{}/{identifier}", id_type.as_str()))
            .await
    }
}
