// ABOUTME: Authorization request parameters and authorize-URL construction
// ABOUTME: Validates the response_type / expires_in combination and encodes the query
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::request::Params;
use fitbit_core::{FitbitError, FitbitResult, Scope};
use std::fmt;

/// OAuth `response_type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseType {
    /// Authorization code grant
    #[default]
    Code,
    /// Implicit grant; the token comes back in the redirect fragment
    Token,
}

impl ResponseType {
    /// Query value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Token => "token",
        }
    }
}

/// OAuth `prompt`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Prompt {
    /// Skip the consent screen when consent was already given
    #[default]
    None,
    /// Force the login screen
    Login,
    /// Force the consent screen
    Consent,
}

impl Prompt {
    /// Query value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Login => "login",
            Self::Consent => "consent",
        }
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of the authorize redirect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizeRequest {
    /// Callback URL registered in the application settings
    pub redirect_uri: String,
    /// Requested scopes
    pub scopes: Vec<Scope>,
    /// `code` or `token`
    pub response_type: ResponseType,
    /// Token lifetime in seconds; implicit flow only (Fitbit accepts 86400, 604800, 2592000)
    pub expires_in: Option<u64>,
    /// Consent screen behaviour
    pub prompt: Prompt,
    /// Opaque value echoed back on the redirect
    pub state: Option<String>,
}

impl AuthorizeRequest {
    /// Code-flow request with `prompt=none` and no state
    #[must_use]
    pub fn new(redirect_uri: impl Into<String>, scopes: impl IntoIterator<Item = Scope>) -> Self {
        Self {
            redirect_uri: redirect_uri.into(),
            scopes: scopes.into_iter().collect(),
            response_type: ResponseType::Code,
            expires_in: None,
            prompt: Prompt::None,
            state: None,
        }
    }

    /// Set the response type
    #[must_use]
    pub const fn response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = response_type;
        self
    }

    /// Set the implicit-flow token lifetime
    #[must_use]
    pub const fn expires_in(mut self, seconds: u64) -> Self {
        self.expires_in = Some(seconds);
        self
    }

    /// Set the prompt behaviour
    #[must_use]
    pub const fn prompt(mut self, prompt: Prompt) -> Self {
        self.prompt = prompt;
        self
    }

    /// Set the state value
    #[must_use]
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Check the parameter combination
    ///
    /// # Errors
    ///
    /// Returns `InvalidGrantConfiguration` when `expires_in` is set for the code flow
    pub fn validate(&self) -> FitbitResult<()> {
        if self.response_type == ResponseType::Code && self.expires_in.is_some() {
            return Err(FitbitError::InvalidGrantConfiguration {
                reason: "expires_in can only be used with response_type=token",
            });
        }
        Ok(())
    }

    /// Query parameters in the order Fitbit documents them
    pub(crate) fn to_params(&self, client_id: &str) -> Params {
        let scope = self
            .scopes
            .iter()
            .map(|scope| scope.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Params::new()
            .with("response_type", self.response_type.as_str())
            .with("client_id", client_id)
            .with("redirect_uri", &self.redirect_uri)
            .with("scope", scope)
            .with("prompt", self.prompt)
            .with_opt("expires_in", self.expires_in)
            .with_opt("state", self.state.as_deref())
    }
}

/// Full authorize URL for `request`
///
/// # Errors
///
/// Returns `InvalidGrantConfiguration` for an invalid parameter combination
pub fn authorize_url(
    authorize_endpoint: &str,
    client_id: &str,
    request: &AuthorizeRequest,
) -> FitbitResult<String> {
    request.validate()?;
    Ok(format!(
        "{authorize_endpoint}?{}",
        request.to_params(client_id).to_query_string()
    ))
}
