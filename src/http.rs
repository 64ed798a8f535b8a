//! # HTTP Transport
//!
//! Shared HTTP transport for the Meridian API client.
//!
//! This module provides a reusable wrapper over [`reqwest::Client`] with:
//! - Configurable timeouts
//! - Bearer-token authentication and default headers
//! - JSON serialization/deserialization
//! - Mapping of HTTP failures onto [`ApiError`]
//!
//! # Examples
//!
//! ```ignore
//! use meridian_sdk::http::HttpTransport;
//!
//! let transport = HttpTransport::new("https://demo.meridian.com", "token", 30_000)?;
//! let instrument: Instrument = transport.get("api/instruments/Figi/BBG000C6K6G9").await?;
//! ```

use crate::error::{ApiError, ApiResult, ProblemDetails};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Header carrying the calling application's name, used by the platform for
/// usage attribution.
const APPLICATION_HEADER: &str = "X-Meridian-Application";

/// HTTP transport for the platform API.
///
/// Holds a configured [`reqwest::Client`] and the base URL every request is
/// resolved against. Cloning is cheap; the underlying connection pool is
/// shared.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Inner reqwest client.
    client: Client,
    /// Base URL without a trailing slash.
    base_url: String,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpTransport {
    /// Creates a new transport.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Platform base URL, e.g. `https://demo.meridian.com`.
    /// * `access_token` - Bearer token sent with every request.
    /// * `timeout_ms` - Request timeout in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if the token is not a valid header value
    /// or the client cannot be constructed.
    pub fn new(base_url: &str, access_token: &str, timeout_ms: u64) -> ApiResult<Self> {
        Self::with_application(base_url, access_token, None, timeout_ms)
    }

    /// Creates a new transport that identifies the calling application.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if a header value is invalid or the
    /// client cannot be constructed.
    pub fn with_application(
        base_url: &str,
        access_token: &str,
        application: Option<&str>,
        timeout_ms: u64,
    ) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        let token = format!("Bearer {access_token}");
        let mut auth = HeaderValue::from_str(&token)
            .map_err(|e| ApiError::internal(format!("Invalid access token: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        if let Some(app) = application {
            let value = HeaderValue::from_str(app)
                .map_err(|e| ApiError::internal(format!("Invalid application name: {e}")))?;
            headers.insert(APPLICATION_HEADER, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_ms,
        })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Returns the base URL.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves a relative path against the base URL.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Makes a GET request and deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Connection` or `ApiError::Timeout` if the request
    /// fails, and an error mapped from the status code otherwise.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }

    /// Makes a GET request with query parameters.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Connection` or `ApiError::Timeout` if the request
    /// fails, and an error mapped from the status code otherwise.
    pub async fn get_with_params<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        path: &str,
        params: &P,
    ) -> ApiResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .query(params)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }

    /// Makes a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Connection` or `ApiError::Timeout` if the request
    /// fails, and an error mapped from the status code otherwise.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }

    /// Makes a POST request with a JSON body and query parameters.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Connection` or `ApiError::Timeout` if the request
    /// fails, and an error mapped from the status code otherwise.
    pub async fn post_with_params<T: DeserializeOwned, B: Serialize, P: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        params: &P,
    ) -> ApiResult<T> {
        let response = self
            .client
            .post(self.url(path))
            .query(params)
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }

    /// Makes a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Connection` or `ApiError::Timeout` if the request
    /// fails, and an error mapped from the status code otherwise.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }

    /// Makes a DELETE request and deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Connection` or `ApiError::Timeout` if the request
    /// fails, and an error mapped from the status code otherwise.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }

    /// Makes a DELETE request with query parameters.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Connection` or `ApiError::Timeout` if the request
    /// fails, and an error mapped from the status code otherwise.
    pub async fn delete_with_params<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        path: &str,
        params: &P,
    ) -> ApiResult<T> {
        let response = self
            .client
            .delete(self.url(path))
            .query(params)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }

    /// Makes a simple health check GET request.
    ///
    /// Returns `true` if the request succeeds with a 2xx status code.
    pub async fn health_check(&self, path: &str) -> bool {
        match self.client.get(self.url(path)).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

/// Handles the HTTP response, checking status and deserializing JSON.
async fn handle_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();

    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::decode(format!("Failed to parse response: {e}")))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(map_status_error(status, &body))
    }
}

/// Maps a reqwest error to an [`ApiError`].
fn map_reqwest_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::timeout("Request timed out")
    } else if error.is_connect() {
        ApiError::connection(format!("Connection failed: {error}"))
    } else {
        ApiError::connection(format!("HTTP request failed: {error}"))
    }
}

/// Maps an HTTP error status to an [`ApiError`], decoding the platform's
/// problem-details body when present.
fn map_status_error(status: StatusCode, body: &str) -> ApiError {
    let problem = ProblemDetails::from_body(body);
    let message = problem
        .as_ref()
        .map(|p| p.message().to_string())
        .unwrap_or_else(|| body.to_string());

    match status {
        StatusCode::BAD_REQUEST => match problem {
            Some(p) if !p.name.is_empty() => ApiError::bad_request_named(message, p.name),
            _ => ApiError::bad_request(message),
        },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::authentication(message),
        StatusCode::NOT_FOUND => ApiError::not_found(message),
        StatusCode::CONFLICT => ApiError::conflict(message),
        StatusCode::TOO_MANY_REQUESTS => ApiError::rate_limited(message),
        status if status.is_server_error() => ApiError::server(status.as_u16(), message),
        _ => ApiError::decode(format!("Unexpected HTTP status {status}: {message}")),
    }
}
