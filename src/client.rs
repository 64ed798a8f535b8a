//! # API Client
//!
//! Entry point for calling the platform: one [`ApiClient`] per
//! configuration, handing out endpoint-group proxies over a shared
//! transport.
//!
//! # Examples
//!
//! ```no_run
//! use meridian_sdk::client::ApiClient;
//! use meridian_sdk::config::ApiConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ApiConfig::from_env()?;
//! let client = ApiClient::new(&config)?;
//!
//! let portfolio = client.portfolios().get("Finbourne", "uk-equity").await?;
//! println!("{}", portfolio.display_name);
//! # Ok(())
//! # }
//! ```

use crate::api::{
    ComplexMarketDataApi, CutLabelsApi, InstrumentsApi, OrdersApi, PortfoliosApi, PropertiesApi,
    QuotesApi, RecipesApi, ReconciliationApi, StructuredResultsApi, TransactionsApi, ValuationsApi,
};
use crate::config::ApiConfig;
use crate::error::ApiResult;
use crate::http::HttpTransport;

/// Client for the Meridian platform API.
///
/// Cheap to clone; all endpoint groups share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    transport: HttpTransport,
}

impl ApiClient {
    /// Creates a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if the transport cannot be built from
    /// the configured token or application name.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let transport = HttpTransport::with_application(
            config.base_url(),
            config.access_token(),
            config.application(),
            config.timeout_ms(),
        )?;
        Ok(Self { transport })
    }

    /// Returns true if the platform answers its health endpoint.
    pub async fn is_healthy(&self) -> bool {
        self.transport.health_check("api/metadata/health").await
    }

    /// Instrument mastering endpoints.
    #[must_use]
    pub fn instruments(&self) -> InstrumentsApi {
        InstrumentsApi::new(self.transport.clone())
    }

    /// Portfolio endpoints.
    #[must_use]
    pub fn portfolios(&self) -> PortfoliosApi {
        PortfoliosApi::new(self.transport.clone())
    }

    /// Transaction and holdings endpoints.
    #[must_use]
    pub fn transactions(&self) -> TransactionsApi {
        TransactionsApi::new(self.transport.clone())
    }

    /// Quote store endpoints.
    #[must_use]
    pub fn quotes(&self) -> QuotesApi {
        QuotesApi::new(self.transport.clone())
    }

    /// Complex market data endpoints.
    #[must_use]
    pub fn complex_market_data(&self) -> ComplexMarketDataApi {
        ComplexMarketDataApi::new(self.transport.clone())
    }

    /// Recipe endpoints.
    #[must_use]
    pub fn recipes(&self) -> RecipesApi {
        RecipesApi::new(self.transport.clone())
    }

    /// Valuation and cashflow endpoints.
    #[must_use]
    pub fn valuations(&self) -> ValuationsApi {
        ValuationsApi::new(self.transport.clone())
    }

    /// Holdings reconciliation endpoints.
    #[must_use]
    pub fn reconciliation(&self) -> ReconciliationApi {
        ReconciliationApi::new(self.transport.clone())
    }

    /// Structured result store endpoints.
    #[must_use]
    pub fn structured_results(&self) -> StructuredResultsApi {
        StructuredResultsApi::new(self.transport.clone())
    }

    /// Order endpoints.
    #[must_use]
    pub fn orders(&self) -> OrdersApi {
        OrdersApi::new(self.transport.clone())
    }

    /// Cut label endpoints.
    #[must_use]
    pub fn cut_labels(&self) -> CutLabelsApi {
        CutLabelsApi::new(self.transport.clone())
    }

    /// Property definition endpoints.
    #[must_use]
    pub fn properties(&self) -> PropertiesApi {
        PropertiesApi::new(self.transport.clone())
    }
}
