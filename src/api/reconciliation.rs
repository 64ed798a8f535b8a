//! # Reconciliation Endpoints
//!
//! Server-side holdings reconciliation between two portfolio views.

use crate::error::ApiResult;
use crate::http::HttpTransport;
use crate::models::envelope::ResourceList;
use crate::models::reconciliation::{ReconciliationBreak, ReconciliationRequest};

/// Proxy for the `/api/portfolios/$reconcileholdings` endpoint.
#[derive(Debug, Clone)]
pub struct ReconciliationApi {
    transport: HttpTransport,
}

impl ReconciliationApi {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Reconciles holdings between the request's left and right views.
    ///
    /// Returns one row per difference; an empty list means the views agree
    /// exactly. When the request carries tolerance rules each row is
    /// classified with a match result.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if either portfolio does not exist.
    pub async fn reconcile_holdings(
        &self,
        request: &ReconciliationRequest,
    ) -> ApiResult<ResourceList<ReconciliationBreak>> {
        tracing::debug!(
            left = %request.left.portfolio_id,
            right = %request.right.portfolio_id,
            "reconciling holdings"
        );
        self.transport
            .post("api/portfolios/$reconcileholdings", request)
            .await
    }
}
