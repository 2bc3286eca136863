// ABOUTME: Main library entry point for the Fitbit Web API client
// ABOUTME: OAuth2 token flows, authenticated request dispatch and typed resource modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitbit Client
//!
//! An async client for the Fitbit Web API.
//!
//! ## Features
//!
//! - **`OAuth2` flows**: authorize URL, authorization code exchange, token refresh
//! - **Authenticated transport**: bearer-token dispatch with upstream error classification
//! - **Resource modules**: activity, body, heart rate, profile, sleep and water
//! - **Shared session**: cheap clones of one client see the same token and user
//!
//! ## Architecture
//!
//! - **Session**: credentials, the installed token and the addressed user
//! - **Transport**: builds URLs, attaches the token, decodes JSON
//! - **`OAuth2`**: talks to the token endpoint and returns tokens to the caller
//! - **Resources**: map typed arguments to endpoint paths and parameters
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitbit_client::{ClientConfig, FitbitClient, FitbitResult};
//!
//! #[tokio::main]
//! async fn main() -> FitbitResult<()> {
//!     let client = FitbitClient::new(ClientConfig::from_env()?)?;
//!
//!     let token = client.oauth().await.exchange_code("code-from-redirect", "https://example.com/cb").await?;
//!     client.install_token(token).await;
//!
//!     let profile = client.profile()?.get().await?;
//!     println!("{}", profile["user"]["displayName"]);
//!     Ok(())
//! }
//! ```

/// Client configuration loaded from the environment
pub mod config;

/// Structured logging setup for applications embedding the client
pub mod logging;

/// `OAuth2` authorize URL and token grants
pub mod oauth2_client;

/// Request descriptions and per-call options
pub mod request;

/// Typed Fitbit resource modules
pub mod resources;

/// Immutable session snapshots
pub mod session;

/// Authenticated HTTP transport and the shared client
pub mod transport;

/// Endpoint URL construction
pub mod url_builder;

/// HTTP client construction
pub mod utils;

pub use config::ClientConfig;
pub use fitbit_core::{Credentials, FitbitError, FitbitResult, Scope, Token, UserContext};
pub use oauth2_client::{AuthorizeRequest, OAuth2FlowManager, Prompt, ResponseType};
pub use request::{Method, Params, RequestOptions, RequestSpec};
pub use session::Session;
pub use transport::{ApiTransport, FitbitClient};
