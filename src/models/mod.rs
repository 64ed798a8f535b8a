//! # API Models
//!
//! Request and response types for the platform API, one module per
//! endpoint area. All types serialize camelCase on the wire.
//!
//! ## Areas
//!
//! - [`ids`]: scope/code pairs and instrument identifier schemes
//! - [`envelope`]: generic list and version envelopes
//! - [`instrument`]: instrument definitions and economics
//! - [`portfolio`] / [`transaction`]: transaction portfolios, bookings,
//!   holdings
//! - [`quote`] / [`market_data`]: simple quotes and structured curves
//! - [`recipe`] / [`valuation`]: valuation configuration and results
//! - [`reconciliation`]: holdings reconciliation
//! - [`structured_result`]: client-supplied result documents
//! - [`cut_label`], [`order`], [`properties`]: supporting entities

pub mod cut_label;
pub mod envelope;
pub mod ids;
pub mod instrument;
pub mod market_data;
pub mod order;
pub mod portfolio;
pub mod properties;
pub mod quote;
pub mod recipe;
pub mod reconciliation;
pub mod structured_result;
pub mod transaction;
pub mod valuation;

pub use envelope::{DeletedEntityResponse, ResourceList, Version, VersionedResourceList};
pub use ids::{InstrumentIdType, ResourceId};
pub use properties::{MetricValue, PropertyValue};
