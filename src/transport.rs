// ABOUTME: Authenticated transport issuing bearer-token HTTP calls against the Fitbit REST API
// ABOUTME: Verb-specific parameter encoding, JSON decoding and upstream error classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Authenticated Transport
//!
//! [`FitbitClient`] owns the HTTP clients, the fixed endpoint configuration
//! and the current [`Session`]. Resource modules never see the client itself:
//! they only get the [`ApiTransport`] capability.
//!
//! Each call snapshots the session when it starts. Installing a token or
//! switching the user swaps the whole session, so concurrent calls never
//! observe a half-updated state.

use crate::config::ClientConfig;
use crate::oauth2_client::OAuth2FlowManager;
use crate::request::{Method, Params, RequestOptions, RequestSpec};
use crate::session::Session;
use crate::url_builder::UrlBuilder;
use crate::utils::http_client::HttpClients;
use async_trait::async_trait;
use fitbit_core::{FitbitError, FitbitResult, Token, UserContext};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};

/// Capability handed to resource modules: issue one API call
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Dispatch a request and return the decoded JSON body
    async fn request(&self, spec: RequestSpec) -> FitbitResult<Value>;

    /// GET with `params` in the query string
    async fn get(&self, endpoint: &str, params: Params, requires_user: bool) -> FitbitResult<Value> {
        self.request(RequestSpec::get(endpoint, params, requires_user))
            .await
    }

    /// User-scoped POST with `params` form-encoded in the body
    async fn post(&self, endpoint: &str, params: Params) -> FitbitResult<Value> {
        self.request(RequestSpec::post(endpoint, params)).await
    }

    /// User-scoped DELETE
    async fn delete(&self, endpoint: &str) -> FitbitResult<Value> {
        self.request(RequestSpec::delete(endpoint)).await
    }
}

#[async_trait]
impl<T: ApiTransport + ?Sized> ApiTransport for &T {
    async fn request(&self, spec: RequestSpec) -> FitbitResult<Value> {
        (**self).request(spec).await
    }
}

#[async_trait]
impl<T: ApiTransport + ?Sized> ApiTransport for Arc<T> {
    async fn request(&self, spec: RequestSpec) -> FitbitResult<Value> {
        (**self).request(spec).await
    }
}

struct ClientInner {
    config: ClientConfig,
    urls: UrlBuilder,
    http: HttpClients,
    session: RwLock<Arc<Session>>,
}

/// Fitbit API client: session holder plus authenticated transport
///
/// Cloning is cheap and clones share the same session.
#[derive(Clone)]
pub struct FitbitClient {
    inner: Arc<ClientInner>,
}

impl FitbitClient {
    /// Create a client; no token is installed yet
    ///
    /// # Errors
    ///
    /// Returns `FitbitError::Transport` if the HTTP clients cannot be built
    pub fn new(config: ClientConfig) -> FitbitResult<Self> {
        let http = HttpClients::from_config(&config)?;
        let urls = UrlBuilder::new(&config.api_base_url, &config.api_version);
        let session = Session::new(config.credentials.clone());

        info!(
            api_root = %urls.root(),
            resources = ?config.resources,
            "Fitbit client created"
        );

        Ok(Self {
            inner: Arc::new(ClientInner {
                config,
                urls,
                http,
                session: RwLock::new(Arc::new(session)),
            }),
        })
    }

    /// Create a client from `FITBIT_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns `FitbitError::Config` for missing or invalid variables
    pub fn from_env() -> FitbitResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Configuration the client was built with
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// URL builder bound to this client's API root
    #[must_use]
    pub fn url_builder(&self) -> &UrlBuilder {
        &self.inner.urls
    }

    /// OAuth flow manager using the session's credentials and this client's HTTP pool
    pub async fn oauth(&self) -> OAuth2FlowManager {
        let session = self.session().await;
        OAuth2FlowManager::with_credentials(
            Arc::clone(session.credentials()),
            &self.inner.config,
            self.inner.http.clone(),
        )
    }

    /// Current session snapshot
    pub async fn session(&self) -> Arc<Session> {
        Arc::clone(&*self.inner.session.read().await)
    }

    /// Currently installed token
    pub async fn token(&self) -> Option<Token> {
        self.session().await.token().cloned()
    }

    /// Install a token for subsequent requests, replacing any previous one
    pub async fn install_token(&self, token: Token) {
        let mut guard = self.inner.session.write().await;
        *guard = Arc::new(guard.with_token(token));
        drop(guard);
        info!("Fitbit access token installed");
    }

    /// Remove the installed token; later calls fail with `AuthNotConfigured`
    pub async fn clear_token(&self) {
        let mut guard = self.inner.session.write().await;
        *guard = Arc::new(guard.without_token());
        drop(guard);
        info!("Fitbit access token cleared");
    }

    /// Address `user` in subsequent user-scoped requests (`-` is the token owner)
    pub async fn set_user(&self, user: impl Into<UserContext> + Send) {
        let user = user.into();
        let mut guard = self.inner.session.write().await;
        *guard = Arc::new(guard.with_user(user.clone()));
        drop(guard);
        info!(user = %user, "Fitbit user context switched");
    }

    /// Per-call options derived from the client configuration
    #[must_use]
    pub fn default_options(&self) -> RequestOptions {
        RequestOptions {
            verify_tls: self.inner.config.verify_tls,
            timeout: None,
        }
    }

    /// Dispatch a request with explicit transport options
    ///
    /// # Errors
    ///
    /// - `AuthNotConfigured` when no token is installed (no I/O happens)
    /// - `ApiError` for 4xx/5xx responses
    /// - `MalformedResponse` when a 2xx body is not JSON
    /// - `Transport` for connect failures and timeouts
    #[instrument(skip_all, fields(method = %spec.method, endpoint = %spec.endpoint))]
    pub async fn request_with_options(
        &self,
        spec: RequestSpec,
        options: &RequestOptions,
    ) -> FitbitResult<Value> {
        let session = self.session().await;
        let token = session.require_token()?;

        let url = self.inner.urls.build(
            &spec.endpoint,
            spec.query(),
            spec.requires_user,
            session.user(),
        );

        if !options.verify_tls {
            warn!("TLS certificate verification disabled for this call");
        }
        debug!(%url, "Dispatching Fitbit API request");

        let mut builder = self
            .inner
            .http
            .select(options.verify_tls)
            .request(spec.method.into(), &url)
            .bearer_auth(&token.access_token);

        if spec.method == Method::Post {
            builder = builder.form(spec.params.pairs());
        }
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), "Received Fitbit API response");

        if !status.is_success() {
            error!(
                status = status.as_u16(),
                body_length = body.len(),
                %url,
                "Fitbit API request failed"
            );
            return Err(FitbitError::api(status.as_u16(), &body));
        }

        decode_json(&body, &url)
    }
}

#[async_trait]
impl ApiTransport for FitbitClient {
    async fn request(&self, spec: RequestSpec) -> FitbitResult<Value> {
        let options = self.default_options();
        self.request_with_options(spec, &options).await
    }
}

/// Decode a successful response body; an empty body (204 on deletes) is `null`
pub(crate) fn decode_json(body: &str, context: &str) -> FitbitResult<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|source| {
        error!(context, "Fitbit returned a non-JSON success body");
        FitbitError::MalformedResponse {
            context: context.to_owned(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitbit_core::Credentials;

    #[test]
    fn decode_json_classifies_bodies() {
        assert_eq!(decode_json("", "x").unwrap(), Value::Null);
        assert_eq!(decode_json(" \r\n\t", "x").unwrap(), Value::Null);
        assert_eq!(decode_json(r#"{"a":1}"#, "x").unwrap()["a"], 1);
        assert!(matches!(
            decode_json("  OK  ", "sleep/1.json"),
            Err(FitbitError::MalformedResponse { .. })
        ));
        assert!(matches!(
            decode_json("<html>", "profile.json"),
            Err(FitbitError::MalformedResponse { context, .. }) if context == "profile.json"
        ));
    }

    #[tokio::test]
    async fn request_without_token_fails_before_io() {
        // Port 9 (discard) is never contacted: the token check comes first.
        let config = ClientConfig::new(Credentials::new("id", "secret"))
            .with_api_base_url("http://127.0.0.1:9");
        let client = FitbitClient::new(config).unwrap();

        let err = client
            .get("profile", Params::new(), true)
            .await
            .unwrap_err();
        assert!(matches!(err, FitbitError::AuthNotConfigured));
    }

    #[tokio::test]
    async fn session_swaps_are_visible_to_later_snapshots() {
        let client = FitbitClient::new(ClientConfig::new(Credentials::new("id", "secret"))).unwrap();
        let before = client.session().await;

        client.install_token(Token::new("a1", "r1")).await;
        client.set_user("26FWFL").await;

        let after = client.session().await;
        assert!(before.token().is_none());
        assert_eq!(before.user().as_str(), "-");
        assert_eq!(after.require_token().unwrap().access_token, "a1");
        assert_eq!(after.user().as_str(), "26FWFL");

        client.clear_token().await;
        assert!(client.token().await.is_none());
        assert_eq!(client.session().await.user().as_str(), "26FWFL");
    }
}
