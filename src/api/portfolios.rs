//! # Portfolio Endpoints
//!
//! Creation and retrieval of transaction portfolios.

use crate::error::ApiResult;
use crate::http::HttpTransport;
use crate::models::envelope::DeletedEntityResponse;
use crate::models::portfolio::{CreateTransactionPortfolioRequest, Portfolio};

/// Proxy for the `/api/portfolios` and `/api/transactionportfolios`
/// creation endpoints.
#[derive(Debug, Clone)]
pub struct PortfoliosApi {
    transport: HttpTransport,
}

impl PortfoliosApi {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Creates a transaction portfolio in the given scope.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Conflict` (or a `*AlreadyExists` bad request) if
    /// the code is already taken within the scope.
    pub async fn create_transaction_portfolio(
        &self,
        scope: &str,
        request: &CreateTransactionPortfolioRequest,
    ) -> ApiResult<Portfolio> {
        tracing::debug!(scope, code = %request.code, "creating transaction portfolio");
        self.transport
            .post(&format!("api/transactionportfolios/{scope}"), request)
            .await
    }

    /// Retrieves a portfolio.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the portfolio does not exist.
    pub async fn get(&self, scope: &str, code: &str) -> ApiResult<Portfolio> {
        self.transport.get(&format!("api/portfolios/{scope}/{code}")).await
    }

    /// Deletes a portfolio.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the portfolio does not exist.
    pub async fn delete(&self, scope: &str, code: &str) -> ApiResult<DeletedEntityResponse> {
        tracing::debug!(scope, code, "deleting portfolio");
        self.transport
            .delete(&format!("api/portfolios/{scope}/{code}"))
            .await
    }
}
