// ABOUTME: Credential, token and user-context models shared by the OAuth flow and the transport
// ABOUTME: Token deserialization accepts Fitbit's space-separated scope string
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::formats::CURRENT_USER;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// OAuth application credentials issued by Fitbit
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    /// Create credentials from the application's client id and secret
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// OAuth client id
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// OAuth client secret
    #[must_use]
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// Access/refresh token pair returned by the token endpoint
///
/// A token is replaced wholesale on refresh. Expiry is not tracked: a stale
/// token shows up as a 401 `ApiError` on the next call.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Bearer token sent on every API call
    pub access_token: String,
    /// Token used for the `refresh_token` grant
    pub refresh_token: String,
    /// Lifetime in seconds, as reported at issue time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    /// Granted scopes
    #[serde(default, deserialize_with = "deserialize_scope")]
    pub scope: Vec<String>,
    /// Token type (Fitbit answers `Bearer`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// Encoded id of the user who granted the token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Token {
    /// Token carrying only an access/refresh pair
    #[must_use]
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            expires_in: None,
            scope: Vec::new(),
            token_type: None,
            user_id: None,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .field("token_type", &self.token_type)
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// Fitbit returns `"scope": "activity sleep"`; a JSON array is accepted too
fn deserialize_scope<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawScope {
        Joined(String),
        List(Vec<String>),
    }

    Ok(match Option::<RawScope>::deserialize(deserializer)? {
        Some(RawScope::Joined(joined)) => joined.split_whitespace().map(str::to_owned).collect(),
        Some(RawScope::List(list)) => list,
        None => Vec::new(),
    })
}

/// User id placed in user-scoped endpoint paths
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserContext(String);

impl UserContext {
    /// Context for a specific encoded user id
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self(user_id.into())
    }

    /// The token owner (`-`)
    #[must_use]
    pub fn current() -> Self {
        Self(CURRENT_USER.to_owned())
    }

    /// Path segment value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UserContext {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for UserContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserContext {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UserContext {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// OAuth scopes understood by the Fitbit authorization server
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Activity and exercise logs
    Activity,
    /// Heart rate data
    Heartrate,
    /// GPS and location data
    Location,
    /// Food and water logs
    Nutrition,
    /// Profile information
    Profile,
    /// Device and alarm settings
    Settings,
    /// Sleep logs
    Sleep,
    /// Friends and leaderboard
    Social,
    /// Weight, BMI and body fat
    Weight,
}

impl Scope {
    /// Every scope, in documentation order
    pub const ALL: [Self; 9] = [
        Self::Activity,
        Self::Heartrate,
        Self::Location,
        Self::Nutrition,
        Self::Profile,
        Self::Settings,
        Self::Sleep,
        Self::Social,
        Self::Weight,
    ];

    /// Scope name as sent in the authorize URL
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::Heartrate => "heartrate",
            Self::Location => "location",
            Self::Nutrition => "nutrition",
            Self::Profile => "profile",
            Self::Settings => "settings",
            Self::Sleep => "sleep",
            Self::Social => "social",
            Self::Weight => "weight",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scope| scope.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown Fitbit scope '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_parses_fitbit_token_response() {
        let json = r#"{
            "access_token": "eyJhbGciOiJIUzI1NiJ9",
            "expires_in": 28800,
            "refresh_token": "c643a63c072f0f05478e9d18b991db80ef6061e4f8e6c822d83fed53e5fafdd7",
            "scope": "activity sleep weight",
            "token_type": "Bearer",
            "user_id": "26FWFL"
        }"#;

        let token: Token = serde_json::from_str(json).unwrap();
        assert_eq!(token.expires_in, Some(28800));
        assert_eq!(token.scope, vec!["activity", "sleep", "weight"]);
        assert_eq!(token.user_id.as_deref(), Some("26FWFL"));
    }

    #[test]
    fn token_accepts_scope_list_and_missing_optionals() {
        let token: Token = serde_json::from_str(
            r#"{"access_token":"a","refresh_token":"r","scope":["profile"]}"#,
        )
        .unwrap();
        assert_eq!(token.scope, vec!["profile"]);
        assert!(token.expires_in.is_none());
        assert!(token.token_type.is_none());
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let token = Token::new("access-secret", "refresh-secret");
        let creds = Credentials::new("client", "client-secret");
        let rendered = format!("{token:?} {creds:?}");
        assert!(!rendered.contains("access-secret"));
        assert!(!rendered.contains("refresh-secret"));
        assert!(!rendered.contains("client-secret"));
        assert!(rendered.contains("client"));
    }

    #[test]
    fn scopes_parse_case_insensitively() {
        assert_eq!("Sleep".parse::<Scope>().unwrap(), Scope::Sleep);
        assert_eq!(" heartrate".parse::<Scope>().unwrap(), Scope::Heartrate);
        assert!("food".parse::<Scope>().is_err());
    }

    #[test]
    fn user_context_defaults_to_token_owner() {
        assert_eq!(UserContext::default().as_str(), "-");
        assert_eq!(UserContext::from("26FWFL").to_string(), "26FWFL");
    }
}
