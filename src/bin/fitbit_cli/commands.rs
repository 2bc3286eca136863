// ABOUTME: Subcommand implementations for fitbit-cli
// ABOUTME: Each command drives the client library and prints its result as JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use fitbit_client::{
    AuthorizeRequest, ClientConfig, FitbitClient, OAuth2FlowManager, Prompt, ResponseType, Scope,
    Token,
};
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct AuthorizeUrlOutput<'a> {
    authorize_url: &'a str,
    state: Option<&'a str>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render JSON output")?;
    println!("{rendered}");
    Ok(())
}

/// Print the consent URL for the requested scopes
pub fn authorize_url(
    config: &ClientConfig,
    redirect_uri: String,
    scopes: Vec<Scope>,
    response_type: ResponseType,
    expires_in: Option<u64>,
    prompt: Prompt,
    state: Option<String>,
) -> Result<()> {
    let mut request = AuthorizeRequest::new(redirect_uri, scopes)
        .response_type(response_type)
        .prompt(prompt);
    if let Some(seconds) = expires_in {
        request = request.expires_in(seconds);
    }
    if let Some(state) = state {
        request = request.state(state);
    }

    let url = OAuth2FlowManager::from_config(config)?.authorize_url(&request)?;
    print_json(&AuthorizeUrlOutput {
        authorize_url: &url,
        state: request.state.as_deref(),
    })
}

/// Exchange an authorization code and print the issued token
pub async fn exchange(config: &ClientConfig, code: &str, redirect_uri: &str) -> Result<()> {
    let token = OAuth2FlowManager::from_config(config)?
        .exchange_code(code, redirect_uri)
        .await?;
    info!("Authorization code exchanged");
    print_json(&token)
}

/// Refresh a token and print the new one
pub async fn refresh(config: &ClientConfig, refresh_token: String) -> Result<()> {
    let previous = Token::new(String::new(), refresh_token);
    let token = OAuth2FlowManager::from_config(config)?
        .refresh(&previous)
        .await?;
    info!("Token refreshed");
    print_json(&token)
}

/// Fetch and print a user profile
pub async fn profile(config: ClientConfig, access_token: String, user: Option<String>) -> Result<()> {
    let client = FitbitClient::new(config)?;
    client
        .install_token(Token::new(access_token, String::new()))
        .await;
    if let Some(user) = user {
        client.set_user(user).await;
    }

    let profile = client.profile()?.get().await?;
    print_json(&profile)
}
