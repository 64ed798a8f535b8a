//! # Transaction Endpoints
//!
//! Booking transactions into portfolios and reading back transactions and
//! holdings.

use crate::error::ApiResult;
use crate::http::HttpTransport;
use crate::models::envelope::{DeletedEntityResponse, VersionedResourceList};
use crate::models::portfolio::Holding;
use crate::models::transaction::{Transaction, TransactionRequest, UpsertTransactionsResponse};
use chrono::{DateTime, Utc};

/// Proxy for the `/api/transactionportfolios/{scope}/{code}` transaction
/// and holdings endpoints.
#[derive(Debug, Clone)]
pub struct TransactionsApi {
    transport: HttpTransport,
}

impl TransactionsApi {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Books a batch of transactions into a portfolio.
    ///
    /// Transactions with ids already present in the portfolio are updated.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the portfolio does not exist.
    pub async fn upsert(
        &self,
        scope: &str,
        code: &str,
        transactions: &[TransactionRequest],
    ) -> ApiResult<UpsertTransactionsResponse> {
        tracing::debug!(scope, code, count = transactions.len(), "upserting transactions");
        self.transport
            .post(
                &format!("api/transactionportfolios/{scope}/{code}/transactions"),
                &transactions,
            )
            .await
    }

    /// Lists the transactions booked into a portfolio.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the portfolio does not exist.
    pub async fn list(
        &self,
        scope: &str,
        code: &str,
    ) -> ApiResult<VersionedResourceList<Transaction>> {
        self.transport
            .get(&format!("api/transactionportfolios/{scope}/{code}/transactions"))
            .await
    }

    /// Reads the portfolio's holdings at an effective date.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the portfolio does not exist.
    pub async fn get_holdings(
        &self,
        scope: &str,
        code: &str,
        effective_at: DateTime<Utc>,
    ) -> ApiResult<VersionedResourceList<Holding>> {
        self.transport
            .get_with_params(
                &format!("api/transactionportfolios/{scope}/{code}/holdings"),
                &[("effectiveAt", effective_at.to_rfc3339())],
            )
            .await
    }

    /// Cancels transactions by id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the portfolio does not exist.
    pub async fn cancel(
        &self,
        scope: &str,
        code: &str,
        transaction_ids: &[String],
    ) -> ApiResult<DeletedEntityResponse> {
        let params: Vec<(&str, &str)> = transaction_ids
            .iter()
            .map(|id| ("transactionIds", id.as_str()))
            .collect();
        self.transport
            .delete_with_params(
                &format!("api/transactionportfolios/{scope}/{code}/transactions"),
                &params,
            )
            .await
    }
}
