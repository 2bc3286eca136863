// ABOUTME: Structured error types for Fitbit client operations
// ABOUTME: Classifies OAuth, transport, upstream API and decoding failures with status context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Every fallible client operation returns [`FitbitResult`]. Errors surface to
//! the caller of the failing operation unchanged: the client never retries,
//! caches, or swallows a failure.

use serde::Deserialize;

/// Errors produced by the Fitbit client
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FitbitError {
    /// A request was attempted before any access token was installed
    #[error("No access token installed; complete the OAuth flow and install a token first")]
    AuthNotConfigured,

    /// The authorize-URL parameters do not form a valid combination
    #[error("Invalid grant configuration: {reason}")]
    InvalidGrantConfiguration {
        /// What is wrong with the combination
        reason: &'static str,
    },

    /// Request parameters rejected before any network call was made
    #[error("Invalid request: {reason}")]
    InvalidRequest {
        /// What is wrong with the parameters
        reason: &'static str,
    },

    /// The token endpoint rejected the grant
    #[error("Token request failed with status {status}: {message}")]
    TokenRequestFailed {
        /// HTTP status returned by the token endpoint
        status: u16,
        /// Upstream message, or the raw body when the envelope is unreadable
        message: String,
    },

    /// A resource call was rejected by the API
    #[error("API call failed with status {status}: {message}")]
    ApiError {
        /// HTTP status returned by the API
        status: u16,
        /// Upstream message, or the raw body when the envelope is unreadable
        message: String,
    },

    /// A successful response carried a body that is not valid JSON
    #[error("Malformed response from {context}")]
    MalformedResponse {
        /// Endpoint whose response could not be decoded
        context: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP call itself failed (connect error, timeout, TLS)
    #[cfg(feature = "http-errors")]
    #[error("HTTP transport error")]
    Transport {
        /// Underlying transport error
        #[from]
        source: reqwest::Error,
    },

    /// A resource module was requested that the client was not configured with
    #[error("Resource module '{resource}' is not enabled for this client")]
    ResourceDisabled {
        /// Name of the resource module
        resource: &'static str,
    },

    /// Missing or invalid configuration value
    #[error("Invalid configuration for {key}: {reason}")]
    Config {
        /// Configuration key (environment variable name)
        key: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

impl FitbitError {
    /// HTTP status attached to the error, if the failure came from a response
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::TokenRequestFailed { status, .. } | Self::ApiError { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Whether the caller should run the OAuth flow again (or refresh) before retrying
    #[must_use]
    pub const fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            Self::AuthNotConfigured | Self::ApiError { status: 401, .. }
        )
    }

    /// Build an [`FitbitError::ApiError`] from a non-success response body
    #[must_use]
    pub fn api(status: u16, body: &str) -> Self {
        Self::ApiError {
            status,
            message: upstream_message(body),
        }
    }

    /// Build an [`FitbitError::TokenRequestFailed`] from a non-success response body
    #[must_use]
    pub fn token_request(status: u16, body: &str) -> Self {
        Self::TokenRequestFailed {
            status,
            message: upstream_message(body),
        }
    }
}

/// Result alias used throughout the client
pub type FitbitResult<T> = Result<T, FitbitError>;

/// Fitbit error envelope: `{"errors": [{"errorType": ..., "message": ...}]}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    message: String,
}

/// First message of the upstream error envelope, falling back to the raw body
#[must_use]
pub fn upstream_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.errors.into_iter().next())
        .map_or_else(|| body.to_owned(), |entry| entry.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_envelope_message() {
        let body = r#"{"errors":[{"errorType":"invalid_token","message":"Invalid token"},{"message":"second"}],"success":false}"#;
        assert_eq!(upstream_message(body), "Invalid token");
    }

    #[test]
    fn falls_back_to_raw_body() {
        assert_eq!(upstream_message("<html>Bad Gateway</html>"), "<html>Bad Gateway</html>");
        assert_eq!(upstream_message(r#"{"errors":[]}"#), r#"{"errors":[]}"#);
    }

    #[test]
    fn unauthorized_api_error_requires_reauthentication() {
        let err = FitbitError::api(401, r#"{"errors":[{"message":"Access token expired"}]}"#);
        assert!(err.requires_reauthentication());
        assert_eq!(err.status(), Some(401));
        assert!(!FitbitError::api(404, "").requires_reauthentication());
        assert!(FitbitError::AuthNotConfigured.requires_reauthentication());
    }
}
