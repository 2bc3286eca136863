// ABOUTME: Client configuration loaded from environment variables with fixed Fitbit defaults
// ABOUTME: Endpoints are fixed per client instance; overrides exist for mock servers and proxies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `FITBIT_CLIENT_ID` | required |
//! | `FITBIT_CLIENT_SECRET` | required |
//! | `FITBIT_API_BASE_URL` | `https://api.fitbit.com` |
//! | `FITBIT_API_VERSION` | `1` |
//! | `FITBIT_AUTHORIZE_URL` | `https://www.fitbit.com/oauth2/authorize` |
//! | `FITBIT_TOKEN_URL` | `https://api.fitbit.com/oauth2/token` |
//! | `FITBIT_HTTP_TIMEOUT_SECS` | `30` |
//! | `FITBIT_CONNECT_TIMEOUT_SECS` | `10` |
//! | `FITBIT_VERIFY_TLS` | `true` |
//! | `FITBIT_RESOURCES` | all modules |

use crate::resources::ResourceSet;
use fitbit_core::constants::{endpoints, http};
use fitbit_core::{Credentials, FitbitError, FitbitResult};
use std::env;
use std::str::FromStr;
use tracing::{info, warn};

/// Settings fixed for the lifetime of one client instance
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// OAuth application credentials
    pub credentials: Credentials,
    /// REST API host, without the version segment
    pub api_base_url: String,
    /// REST API version segment
    pub api_version: String,
    /// OAuth authorization page
    pub authorize_url: String,
    /// OAuth token endpoint
    pub token_url: String,
    /// Default request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Default TLS certificate verification for calls without explicit options
    pub verify_tls: bool,
    /// Resource modules wired into the client
    pub resources: ResourceSet,
}

impl ClientConfig {
    /// Configuration pointing at the production Fitbit endpoints
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            api_base_url: endpoints::API_BASE_URL.to_owned(),
            api_version: endpoints::API_VERSION.to_owned(),
            authorize_url: endpoints::AUTHORIZE_URL.to_owned(),
            token_url: endpoints::TOKEN_URL.to_owned(),
            timeout_secs: http::DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: http::DEFAULT_CONNECT_TIMEOUT_SECS,
            verify_tls: true,
            resources: ResourceSet::all(),
        }
    }

    /// Point the REST API and the token endpoint at another host (mock servers, proxies)
    #[must_use]
    pub fn with_api_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        self.token_url = format!("{base_url}/oauth2/token");
        self.api_base_url = base_url;
        self
    }

    /// Restrict the resource modules wired into the client
    #[must_use]
    pub const fn with_resources(mut self, resources: ResourceSet) -> Self {
        self.resources = resources;
        self
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `FitbitError::Config` if the credentials are missing or a
    /// numeric/boolean/resource value cannot be parsed
    pub fn from_env() -> FitbitResult<Self> {
        info!("Loading Fitbit client configuration from environment variables");

        let credentials = Credentials::new(
            required_var("FITBIT_CLIENT_ID")?,
            required_var("FITBIT_CLIENT_SECRET")?,
        );

        let mut config = Self::new(credentials);

        if let Ok(base_url) = env::var("FITBIT_API_BASE_URL") {
            config = config.with_api_base_url(base_url);
        }
        if let Ok(version) = env::var("FITBIT_API_VERSION") {
            config.api_version = version;
        }
        if let Ok(authorize_url) = env::var("FITBIT_AUTHORIZE_URL") {
            config.authorize_url = authorize_url;
        }
        if let Ok(token_url) = env::var("FITBIT_TOKEN_URL") {
            config.token_url = token_url;
        }

        config.timeout_secs = parsed_var("FITBIT_HTTP_TIMEOUT_SECS", config.timeout_secs)?;
        config.connect_timeout_secs =
            parsed_var("FITBIT_CONNECT_TIMEOUT_SECS", config.connect_timeout_secs)?;
        config.verify_tls = parsed_var("FITBIT_VERIFY_TLS", config.verify_tls)?;
        if !config.verify_tls {
            warn!("FITBIT_VERIFY_TLS=false: TLS certificates will not be verified by default");
        }

        if let Ok(names) = env::var("FITBIT_RESOURCES") {
            config.resources =
                ResourceSet::from_names(&names).map_err(|reason| FitbitError::Config {
                    key: "FITBIT_RESOURCES",
                    reason,
                })?;
        }

        Ok(config)
    }
}

fn required_var(key: &'static str) -> FitbitResult<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(FitbitError::Config {
            key,
            reason: "environment variable is not set".to_owned(),
        }),
    }
}

fn parsed_var<T>(key: &'static str, default: T) -> FitbitResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env::var(key).map_or(Ok(default), |raw| {
        raw.trim().parse().map_err(|e: T::Err| FitbitError::Config {
            key,
            reason: format!("cannot parse '{raw}': {e}"),
        })
    })
}
