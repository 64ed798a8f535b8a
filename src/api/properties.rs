//! # Property Definition Endpoints
//!
//! Registration and retrieval of custom property definitions.

use crate::error::ApiResult;
use crate::http::HttpTransport;
use crate::models::properties::{
    CreatePropertyDefinitionRequest, PropertyDefinition, PropertyDomain,
};

/// Proxy for the `/api/propertydefinitions` endpoints.
#[derive(Debug, Clone)]
pub struct PropertiesApi {
    transport: HttpTransport,
}

impl PropertiesApi {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Registers a property definition.
    ///
    /// # Errors
    ///
    /// Returns a `PropertyAlreadyExists` bad request if the key is taken;
    /// callers performing idempotent setup should check
    /// [`crate::error::ApiError::is_already_exists`].
    pub async fn create(
        &self,
        request: &CreatePropertyDefinitionRequest,
    ) -> ApiResult<PropertyDefinition> {
        tracing::debug!(
            domain = %request.domain,
            scope = %request.scope,
            code = %request.code,
            "creating property definition"
        );
        self.transport.post("api/propertydefinitions", request).await
    }

    /// Retrieves a property definition.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the definition does not exist.
    pub async fn get(
        &self,
        domain: PropertyDomain,
        scope: &str,
        code: &str,
    ) -> ApiResult<PropertyDefinition> {
        self.transport
            .get(&format!(
                "api/propertydefinitions/{}/{scope}/{code}",
                domain.as_str()
            ))
            .await
    }
}
