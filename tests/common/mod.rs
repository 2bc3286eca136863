// ABOUTME: Shared helpers for integration tests against a wiremock Fitbit double
// ABOUTME: Builds clients pointed at the mock server with or without an installed token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code, clippy::unwrap_used)]

use fitbit_client::{ClientConfig, Credentials, FitbitClient, Token};
use wiremock::MockServer;

pub const CLIENT_ID: &str = "22942C";
pub const CLIENT_SECRET: &str = "a1b2c3d4e5f6";
pub const ACCESS_TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.test-access";
pub const REFRESH_TOKEN: &str = "c8a1b0d2e4f6-test-refresh";

/// base64("22942C:a1b2c3d4e5f6")
pub const BASIC_AUTH: &str = "Basic MjI5NDJDOmExYjJjM2Q0ZTVmNg==";

pub fn mock_config(server: &MockServer) -> ClientConfig {
    ClientConfig::new(Credentials::new(CLIENT_ID, CLIENT_SECRET)).with_api_base_url(server.uri())
}

/// Client with no token installed
pub fn anonymous_client(server: &MockServer) -> FitbitClient {
    FitbitClient::new(mock_config(server)).unwrap()
}

/// Client holding `ACCESS_TOKEN`
pub async fn authorized_client(server: &MockServer) -> FitbitClient {
    let client = anonymous_client(server);
    client
        .install_token(Token::new(ACCESS_TOKEN, REFRESH_TOKEN))
        .await;
    client
}

pub fn bearer() -> String {
    format!("Bearer {ACCESS_TOKEN}")
}
