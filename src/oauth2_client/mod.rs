// ABOUTME: OAuth 2.0 client flows for the Fitbit authorization server
// ABOUTME: Authorize-URL construction plus authorization_code and refresh_token grants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # OAuth 2.0 Client Module
//!
//! - Authorization URL construction for the `code` and implicit `token` flows
//! - Code exchange and token refresh with HTTP Basic client authentication
//!
//! Token issuance is decoupled from token use: nothing here installs a token
//! into a [`crate::FitbitClient`], so one client can serve several accounts.

/// Authorization request parameters and URL construction
pub mod authorize;
/// Token endpoint grants
pub mod flow_manager;

pub use authorize::{AuthorizeRequest, Prompt, ResponseType};
pub use flow_manager::OAuth2FlowManager;
