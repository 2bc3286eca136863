// ABOUTME: fitbit-cli - command-line front end for the Fitbit client library
// ABOUTME: Builds authorize URLs, exchanges and refreshes tokens, and reads the user profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Credentials come from `FITBIT_CLIENT_ID` / `FITBIT_CLIENT_SECRET`.
//!
//! Usage:
//! ```bash
//! # Print the consent URL for the code flow
//! fitbit-cli authorize-url --redirect-uri https://example.com/cb --scope activity,sleep,profile
//!
//! # Exchange the code Fitbit appended to the redirect
//! fitbit-cli exchange --code 5f4c... --redirect-uri https://example.com/cb
//!
//! # Refresh an expired token
//! fitbit-cli refresh --refresh-token c8a1...
//!
//! # Read the profile of the token owner
//! fitbit-cli profile --access-token eyJhbGciOi...
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use fitbit_client::logging::LoggingConfig;
use fitbit_client::{ClientConfig, Prompt, ResponseType, Scope};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fitbit-cli",
    about = "Fitbit Web API command-line client",
    long_about = "Drives the Fitbit OAuth2 flow and issues authenticated API calls using credentials from the environment."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print the authorization URL to send the user to
    AuthorizeUrl {
        /// Callback URL registered for the application
        #[arg(long)]
        redirect_uri: String,

        /// Requested scopes (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        scope: Vec<Scope>,

        /// Grant type requested from the authorization server
        #[arg(long, value_enum, default_value_t = ResponseTypeArg::Code)]
        response_type: ResponseTypeArg,

        /// Token lifetime in seconds (implicit flow only)
        #[arg(long)]
        expires_in: Option<u64>,

        /// Consent screen behaviour
        #[arg(long, value_enum, default_value_t = PromptArg::None)]
        prompt: PromptArg,

        /// Opaque value echoed back on the redirect
        #[arg(long)]
        state: Option<String>,
    },

    /// Exchange an authorization code for a token
    Exchange {
        /// Code from the redirect query string
        #[arg(long)]
        code: String,

        /// Callback URL used for the authorization request
        #[arg(long)]
        redirect_uri: String,
    },

    /// Obtain a fresh token from a refresh token
    Refresh {
        /// Refresh token issued with the previous access token
        #[arg(long)]
        refresh_token: String,
    },

    /// Fetch the user profile
    Profile {
        /// Bearer token to authenticate with
        #[arg(long)]
        access_token: String,

        /// Encoded user id (defaults to the token owner)
        #[arg(long)]
        user: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ResponseTypeArg {
    Code,
    Token,
}

impl From<ResponseTypeArg> for ResponseType {
    fn from(arg: ResponseTypeArg) -> Self {
        match arg {
            ResponseTypeArg::Code => Self::Code,
            ResponseTypeArg::Token => Self::Token,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PromptArg {
    None,
    Login,
    Consent,
}

impl From<PromptArg> for Prompt {
    fn from(arg: PromptArg) -> Self {
        match arg {
            PromptArg::None => Self::None,
            PromptArg::Login => Self::Login,
            PromptArg::Consent => Self::Consent,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let config = ClientConfig::from_env()?;
    debug!(api = %config.api_base_url, "Loaded Fitbit client configuration");

    match cli.command {
        Command::AuthorizeUrl {
            redirect_uri,
            scope,
            response_type,
            expires_in,
            prompt,
            state,
        } => {
            commands::authorize_url(
                &config,
                redirect_uri,
                scope,
                response_type.into(),
                expires_in,
                prompt.into(),
                state,
            )?;
        }
        Command::Exchange { code, redirect_uri } => {
            commands::exchange(&config, &code, &redirect_uri).await?;
        }
        Command::Refresh { refresh_token } => {
            commands::refresh(&config, refresh_token).await?;
        }
        Command::Profile { access_token, user } => {
            commands::profile(config, access_token, user).await?;
        }
    }

    Ok(())
}
