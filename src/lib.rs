//! # Meridian SDK
//!
//! Typed Rust client for the Meridian hosted financial-data platform,
//! together with the request factories and integration tests that show how
//! the API is used end to end.
//!
//! The platform does the heavy lifting server-side: pricing, aggregation
//! and reconciliation all run remotely. This crate builds requests, calls
//! the HTTP API, and works with the JSON-derived responses.
//!
//! ## Layout
//!
//! - [`config`]: connection configuration, environment-first
//! - [`client`]: the [`client::ApiClient`] facade
//! - [`api`]: one proxy per endpoint group
//! - [`models`]: request/response DTOs
//! - [`error`]: the [`error::ApiError`] taxonomy
//! - [`testkit`]: test-data factories and idempotent setup helpers
//!
//! ## Example
//!
//! ```no_run
//! use meridian_sdk::client::ApiClient;
//! use meridian_sdk::config::ApiConfig;
//! use meridian_sdk::testkit;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new(&ApiConfig::from_env()?)?;
//!
//! let response = client.instruments().upsert(&testkit::instrument_examples()).await?;
//! println!("mastered {} instruments", response.values.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod testkit;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
