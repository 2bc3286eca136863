// ABOUTME: HTTP client construction with connection pooling and timeout configuration
// ABOUTME: Builds the verifying and the certificate-skipping clients used by the transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ClientConfig;
use fitbit_core::FitbitResult;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Pair of pooled clients differing only in TLS certificate verification
///
/// Certificate verification is a client-level setting in `reqwest`, so
/// per-call verification is served by picking one of two clients.
#[derive(Debug, Clone)]
pub struct HttpClients {
    verified: Client,
    unverified: Client,
}

impl HttpClients {
    /// Build both clients from the configured timeouts
    ///
    /// # Errors
    ///
    /// Returns `FitbitError::Transport` if the TLS backend cannot be initialised
    pub fn from_config(config: &ClientConfig) -> FitbitResult<Self> {
        let verified = base_builder(config.timeout_secs, config.connect_timeout_secs).build()?;
        let unverified = base_builder(config.timeout_secs, config.connect_timeout_secs)
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Self {
            verified,
            unverified,
        })
    }

    /// Client to use for a call with the given verification setting
    #[must_use]
    pub const fn select(&self, verify_tls: bool) -> &Client {
        if verify_tls {
            &self.verified
        } else {
            &self.unverified
        }
    }
}

fn base_builder(timeout_secs: u64, connect_timeout_secs: u64) -> ClientBuilder {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .user_agent(concat!("fitbit-client/", env!("CARGO_PKG_VERSION")))
}
