// ABOUTME: Request description types consumed by the authenticated transport
// ABOUTME: HTTP verb, insertion-ordered parameters and per-call transport options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::time::Duration;

/// HTTP verbs used by the Fitbit API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Read; parameters travel in the query string
    Get,
    /// Create or update; parameters travel form-encoded in the body
    Post,
    /// Remove; no parameters are sent
    Delete,
}

impl Method {
    /// Verb name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Delete => Self::DELETE,
        }
    }
}

/// Request parameters, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Empty parameter list
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a scalar parameter
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.push(key, value);
        self
    }

    /// Append a parameter only when a value is present
    #[must_use]
    pub fn with_opt<V: fmt::Display>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Append a scalar parameter in place
    pub fn push(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        self.0.push((key.into(), value.to_string()));
    }

    /// Whether no parameter was added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value of the first parameter named `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Key/value pairs in insertion order
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    /// Percent-encoded `key=value&...` string (spaces become `%20`)
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: fmt::Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.push(key, value);
        }
        params
    }
}

/// One API call as described by a resource module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// HTTP verb
    pub method: Method,
    /// Endpoint path without version, user segment or `.json` suffix
    pub endpoint: String,
    /// Parameters (query for GET, form body for POST, ignored for DELETE)
    pub params: Params,
    /// Whether to insert `user/{user}/` before the endpoint
    pub requires_user: bool,
}

impl RequestSpec {
    /// GET request
    #[must_use]
    pub fn get(endpoint: impl Into<String>, params: Params, requires_user: bool) -> Self {
        Self {
            method: Method::Get,
            endpoint: endpoint.into(),
            params,
            requires_user,
        }
    }

    /// User-scoped POST request
    #[must_use]
    pub fn post(endpoint: impl Into<String>, params: Params) -> Self {
        Self {
            method: Method::Post,
            endpoint: endpoint.into(),
            params,
            requires_user: true,
        }
    }

    /// User-scoped DELETE request
    #[must_use]
    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            endpoint: endpoint.into(),
            params: Params::new(),
            requires_user: true,
        }
    }

    /// Parameters that belong in the URL for this verb
    #[must_use]
    pub fn query(&self) -> Option<&Params> {
        matches!(self.method, Method::Get).then_some(&self.params)
    }
}

/// Per-call transport options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestOptions {
    /// Verify the server's TLS certificate
    pub verify_tls: bool,
    /// Upper bound for the whole call; the client default applies when `None`
    pub timeout: Option<Duration>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            verify_tls: true,
            timeout: None,
        }
    }
}

impl RequestOptions {
    /// Options that skip certificate verification (self-signed test environments)
    #[must_use]
    pub fn insecure() -> Self {
        Self {
            verify_tls: false,
            ..Self::default()
        }
    }

    /// Set a timeout for the call
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
