//! # API Errors
//!
//! Error types for Meridian platform API calls.
//!
//! This module provides the [`ApiError`] type covering the failure modes a
//! client observes when calling the platform: transport failures, HTTP error
//! statuses, and response decoding problems.
//!
//! # Examples
//!
//! ```
//! use meridian_sdk::error::ApiError;
//!
//! let error = ApiError::timeout("Request timed out after 30000ms");
//! assert!(error.is_retryable());
//!
//! let error = ApiError::not_found("Portfolio 'Finbourne/uk-equity' not found");
//! assert!(error.is_not_found());
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Problem-details body returned by the platform on failed requests.
///
/// The platform reports failures as a JSON document carrying a stable error
/// name, a human-readable title and detail, and a numeric code.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProblemDetails {
    /// Stable machine-readable error name, e.g. `PortfolioNotFound`.
    pub name: String,
    /// Short human-readable summary.
    pub title: String,
    /// Longer human-readable description.
    pub detail: String,
    /// Platform error code.
    pub code: Option<i64>,
}

impl ProblemDetails {
    /// Parses a problem-details document from a response body, if possible.
    #[must_use]
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// Returns the most descriptive message available.
    #[must_use]
    pub fn message(&self) -> &str {
        if !self.detail.is_empty() {
            &self.detail
        } else if !self.title.is_empty() {
            &self.title
        } else {
            &self.name
        }
    }
}

/// Error type for Meridian API operations.
///
/// Represents errors that can occur when calling the platform, including
/// network issues, authentication failures, and request-level rejections.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Request timed out.
    #[error("api timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network or connection error.
    #[error("api connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Authentication or authorization failure.
    #[error("api authentication error: {message}")]
    Authentication {
        /// Error message.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("api rate limit exceeded: {message}")]
    RateLimited {
        /// Error message.
        message: String,
        /// Retry after duration in milliseconds.
        retry_after_ms: Option<u64>,
    },

    /// The request was rejected as invalid.
    #[error("api bad request: {message}")]
    BadRequest {
        /// Error message.
        message: String,
        /// Platform error name, e.g. `InvalidInstrumentDefinition`.
        error_name: Option<String>,
    },

    /// The requested entity does not exist.
    #[error("api not found: {message}")]
    NotFound {
        /// Error message.
        message: String,
    },

    /// The entity already exists and the operation does not permit overwrite.
    #[error("api conflict: {message}")]
    Conflict {
        /// Error message.
        message: String,
    },

    /// The platform reported a server-side failure.
    #[error("api server error ({status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("api decode error: {message}")]
    Decode {
        /// Error message.
        message: String,
    },

    /// Internal client error.
    #[error("api internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl ApiError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates a rate limited error.
    #[must_use]
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
            retry_after_ms: None,
        }
    }

    /// Creates a rate limited error with a retry-after hint.
    #[must_use]
    pub fn rate_limited_with_retry(message: impl Into<String>, retry_after_ms: u64) -> Self {
        Self::RateLimited {
            message: message.into(),
            retry_after_ms: Some(retry_after_ms),
        }
    }

    /// Creates a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            error_name: None,
        }
    }

    /// Creates a bad request error carrying the platform's error name.
    #[must_use]
    pub fn bad_request_named(message: impl Into<String>, error_name: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            error_name: Some(error_name.into()),
        }
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Creates a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Creates a decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error is transient and may succeed on retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. }
                | Self::Connection { .. }
                | Self::RateLimited { .. }
                | Self::Server { .. }
        )
    }

    /// Returns true if the requested entity did not exist.
    ///
    /// Used by idempotent teardown: deleting an entity that is already gone
    /// is not a failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if the entity already existed.
    ///
    /// Used by idempotent setup: creating an entity that is already present
    /// is not a failure. The platform signals this either as a conflict
    /// status or as a bad request named `*AlreadyExists`.
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        match self {
            Self::Conflict { .. } => true,
            Self::BadRequest { error_name, .. } => error_name
                .as_deref()
                .is_some_and(|name| name.ends_with("AlreadyExists")),
            _ => false,
        }
    }

    /// Returns the retry delay in milliseconds, if applicable.
    #[must_use]
    pub fn retry_after_ms(&self) -> Option<u64> {
        match self {
            Self::RateLimited { retry_after_ms, .. } => *retry_after_ms,
            _ => None,
        }
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_retryable() {
        let error = ApiError::timeout("test");
        assert!(error.is_retryable());
        assert!(!error.is_not_found());
    }

    #[test]
    fn rate_limited_carries_retry_hint() {
        let error = ApiError::rate_limited_with_retry("test", 1000);
        assert!(error.is_retryable());
        assert_eq!(error.retry_after_ms(), Some(1000));
    }

    #[test]
    fn not_found_is_not_retryable() {
        let error = ApiError::not_found("missing");
        assert!(error.is_not_found());
        assert!(!error.is_retryable());
    }

    #[test]
    fn conflict_is_already_exists() {
        let error = ApiError::conflict("duplicate");
        assert!(error.is_already_exists());
    }

    #[test]
    fn named_bad_request_is_already_exists() {
        let error = ApiError::bad_request_named("taken", "PropertyAlreadyExists");
        assert!(error.is_already_exists());

        let error = ApiError::bad_request_named("bad units", "InvalidTransaction");
        assert!(!error.is_already_exists());
    }

    #[test]
    fn problem_details_prefers_detail() {
        let body = r#"{"name":"PortfolioNotFound","title":"Not found","detail":"No portfolio uk/eq","code":109}"#;
        let problem = ProblemDetails::from_body(body).unwrap();
        assert_eq!(problem.message(), "No portfolio uk/eq");
        assert_eq!(problem.code, Some(109));
    }

    #[test]
    fn problem_details_tolerates_garbage() {
        assert!(ProblemDetails::from_body("<html>oops</html>").is_none());
    }

    #[test]
    fn display_format() {
        let error = ApiError::server(503, "maintenance");
        let display = error.to_string();
        assert!(display.contains("503"));
        assert!(display.contains("maintenance"));
    }
}
