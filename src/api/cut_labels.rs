//! # Cut Label Endpoints
//!
//! System-wide cut label definitions.

use crate::error::ApiResult;
use crate::http::HttpTransport;
use crate::models::cut_label::CutLabelDefinition;
use crate::models::envelope::DeletedEntityResponse;

/// Proxy for the `/api/systemconfiguration/cutlabels` endpoints.
#[derive(Debug, Clone)]
pub struct CutLabelsApi {
    transport: HttpTransport,
}

impl CutLabelsApi {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Creates a cut label.
    ///
    /// # Errors
    ///
    /// Returns a `*AlreadyExists` bad request if the code is taken.
    pub async fn create(&self, definition: &CutLabelDefinition) -> ApiResult<CutLabelDefinition> {
        tracing::debug!(code = %definition.code, "creating cut label");
        self.transport
            .post("api/systemconfiguration/cutlabels", definition)
            .await
    }

    /// Retrieves a cut label.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the label does not exist.
    pub async fn get(&self, code: &str) -> ApiResult<CutLabelDefinition> {
        self.transport
            .get(&format!("api/systemconfiguration/cutlabels/{code}"))
            .await
    }

    /// Deletes a cut label.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the label does not exist.
    pub async fn delete(&self, code: &str) -> ApiResult<DeletedEntityResponse> {
        self.transport
            .delete(&format!("api/systemconfiguration/cutlabels/{code}"))
            .await
    }
}
