//! # Order Endpoints
//!
//! Booking and retrieving orders.

use crate::error::ApiResult;
use crate::http::HttpTransport;
use crate::models::envelope::ResourceList;
use crate::models::order::{Order, OrderRequest, UpsertOrdersRequest};

/// Proxy for the `/api/orders` endpoints.
#[derive(Debug, Clone)]
pub struct OrdersApi {
    transport: HttpTransport,
}

impl OrdersApi {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Books a batch of orders; existing order ids are amended.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::error::ApiError`] if the request fails.
    pub async fn upsert(&self, orders: &[OrderRequest]) -> ApiResult<ResourceList<Order>> {
        tracing::debug!(count = orders.len(), "upserting orders");
        let request = UpsertOrdersRequest {
            order_requests: orders.to_vec(),
        };
        self.transport.post("api/orders", &request).await
    }

    /// Retrieves a booked order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the order does not exist.
    pub async fn get(&self, scope: &str, code: &str) -> ApiResult<Order> {
        self.transport.get(&format!("api/orders/{scope}/{code}")).await
    }
}
