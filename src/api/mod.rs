//! # Endpoint Groups
//!
//! One proxy per platform API area, each a thin typed wrapper over the
//! shared [`crate::http::HttpTransport`]. Obtain them from
//! [`crate::client::ApiClient`].

pub mod complex_market_data;
pub mod cut_labels;
pub mod instruments;
pub mod orders;
pub mod portfolios;
pub mod properties;
pub mod quotes;
pub mod recipes;
pub mod reconciliation;
pub mod structured_results;
pub mod transactions;
pub mod valuations;

pub use complex_market_data::ComplexMarketDataApi;
pub use cut_labels::CutLabelsApi;
pub use instruments::InstrumentsApi;
pub use orders::OrdersApi;
pub use portfolios::PortfoliosApi;
pub use properties::PropertiesApi;
pub use quotes::QuotesApi;
pub use recipes::RecipesApi;
pub use reconciliation::ReconciliationApi;
pub use structured_results::StructuredResultsApi;
pub use transactions::TransactionsApi;
pub use valuations::ValuationsApi;
