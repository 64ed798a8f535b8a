//! # Valuation Endpoints
//!
//! Server-side valuation over stored portfolios and inline instrument
//! sets, and projected cashflow retrieval.
//!
//! The actual pricing and aggregation run on the platform; these calls
//! submit the request and return the computed aggregate table.

use crate::error::ApiResult;
use crate::http::HttpTransport;
use crate::models::envelope::ResourceList;
use crate::models::ids::InstrumentIdType;
use crate::models::valuation::{
    InlineValuationRequest, InstrumentCashflow, ValuationRequest, ValuationResult,
};
use chrono::{DateTime, Utc};

/// Proxy for the `/api/aggregation` and cashflow endpoints.
#[derive(Debug, Clone)]
pub struct ValuationsApi {
    transport: HttpTransport,
}

impl ValuationsApi {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Runs a valuation over stored portfolios.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::BadRequest` if the recipe cannot resolve the
    /// market data the selected models need.
    pub async fn get_valuation(&self, request: &ValuationRequest) -> ApiResult<ValuationResult> {
        tracing::debug!(
            recipe = %request.recipe_id,
            metrics = request.metrics.len(),
            "requesting valuation"
        );
        self.transport.post("api/aggregation/$valuation", request).await
    }

    /// Runs a valuation over an inline instrument set, without booking
    /// anything.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::BadRequest` if the recipe cannot resolve the
    /// market data the selected models need.
    pub async fn get_valuation_inline(
        &self,
        request: &InlineValuationRequest,
    ) -> ApiResult<ValuationResult> {
        tracing::debug!(
            recipe = %request.recipe_id,
            instruments = request.instruments.len(),
            "requesting inline valuation"
        );
        self.transport
            .post("api/aggregation/$valuationinline", request)
            .await
    }

    /// Projects the cashflows a portfolio's holdings pay within a window.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the portfolio does not exist.
    pub async fn get_portfolio_cashflows(
        &self,
        scope: &str,
        code: &str,
        effective_at: DateTime<Utc>,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
        recipe_scope: &str,
        recipe_code: &str,
    ) -> ApiResult<ResourceList<InstrumentCashflow>> {
        self.transport
            .get_with_params(
                &format!("api/transactionportfolios/{scope}/{code}/cashflows"),
                &[
                    ("effectiveAt", effective_at.to_rfc3339()),
                    ("windowStart", window_start.to_rfc3339()),
                    ("windowEnd", window_end.to_rfc3339()),
                    ("recipeIdScope", recipe_scope.to_string()),
                    ("recipeIdCode", recipe_code.to_string()),
                ],
            )
            .await
    }

    /// Projects the cashflows one mastered instrument pays within a
    /// window, priced with the given recipe's models.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if no instrument carries the
    /// identifier.
    pub async fn get_instrument_cashflows(
        &self,
        id_type: InstrumentIdType,
        identifier: &str,
        effective_at: DateTime<Utc>,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
        recipe_scope: &str,
        recipe_code: &str,
    ) -> ApiResult<ResourceList<InstrumentCashflow>> {
        self.transport
            .get_with_params(
                &format!("api/instruments/{}/{identifier}/cashflows", id_type.as_str()),
                &[
                    ("effectiveAt", effective_at.to_rfc3339()),
                    ("windowStart", window_start.to_rfc3339()),
                    ("windowEnd", window_end.to_rfc3339()),
                    ("recipeIdScope", recipe_scope.to_string()),
                    ("recipeIdCode", recipe_code.to_string()),
                ],
            )
            .await
    }
}
