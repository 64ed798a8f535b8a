//! # Client Configuration
//!
//! Connection configuration for the Meridian platform.
//!
//! Configuration is environment-first: values are read from `MERIDIAN_*`
//! environment variables, optionally seeded from a `.env` file. A secrets
//! file in the same shape can be layered underneath for local development.
//!
//! # Examples
//!
//! ```
//! use meridian_sdk::config::ApiConfig;
//!
//! let config = ApiConfig::new("https://demo.meridian.com", "my-token")
//!     .with_application("holdings-report")
//!     .with_timeout_ms(10_000);
//!
//! assert_eq!(config.timeout_ms(), 10_000);
//! ```

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

/// Default request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Environment variable prefix for configuration values.
const ENV_PREFIX: &str = "MERIDIAN";

/// Error type for configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required value was missing or the sources could not be read.
    #[error("configuration load error: {0}")]
    Load(#[from] config::ConfigError),

    /// A value was present but invalid.
    #[error("invalid configuration: {message}")]
    Invalid {
        /// What was wrong.
        message: String,
    },
}

/// Connection configuration for the platform API.
///
/// # Invariants
///
/// - `base_url` is non-empty and starts with `http`
/// - `access_token` is non-empty
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Platform base URL, e.g. `https://demo.meridian.com`.
    base_url: String,
    /// Bearer token for authentication.
    access_token: String,
    /// Optional application name reported for usage attribution.
    #[serde(default)]
    application: Option<String>,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl ApiConfig {
    /// Creates a configuration with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
            application: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Sets the application name.
    #[must_use]
    pub fn with_application(mut self, application: impl Into<String>) -> Self {
        self.application = Some(application.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Loads configuration from the environment.
    ///
    /// A `.env` file in the working directory is read first (ignored if
    /// absent), then `MERIDIAN_BASE_URL`, `MERIDIAN_ACCESS_TOKEN`,
    /// `MERIDIAN_APPLICATION` and `MERIDIAN_TIMEOUT_MS` are taken from the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if required values are missing and
    /// `ConfigError::Invalid` if present values fail validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config: Self = Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a secrets file layered under the environment.
    ///
    /// Environment variables take precedence over file values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if the file cannot be read or required
    /// values are missing, and `ConfigError::Invalid` on validation failure.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config: Self = Config::builder()
            .add_source(File::with_name(path))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("http") {
            return Err(ConfigError::Invalid {
                message: format!("base_url must be an http(s) URL, got '{}'", self.base_url),
            });
        }
        if self.access_token.is_empty() {
            return Err(ConfigError::Invalid {
                message: "access_token must not be empty".to_string(),
            });
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                message: "timeout_ms must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the access token.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Returns the application name, if set.
    #[must_use]
    pub fn application(&self) -> Option<&str> {
        self.application.as_deref()
    }

    /// Returns the request timeout in milliseconds.
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }
}
