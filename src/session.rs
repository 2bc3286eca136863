// ABOUTME: Immutable session value holding credentials, the installed token and the user context
// ABOUTME: Replaced wholesale on every token install or user switch, never mutated in place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitbit_core::{Credentials, FitbitError, FitbitResult, Token, UserContext};
use std::sync::Arc;

/// Snapshot of everything a request needs to authenticate and address a user
///
/// Every modifier returns a new session; the client swaps the whole value, so
/// a call in flight keeps using the snapshot it started with.
#[derive(Debug, Clone)]
pub struct Session {
    credentials: Arc<Credentials>,
    token: Option<Arc<Token>>,
    user: UserContext,
}

impl Session {
    /// Session without a token, addressing the token owner
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials: Arc::new(credentials),
            token: None,
            user: UserContext::default(),
        }
    }

    /// Application credentials
    #[must_use]
    pub const fn credentials(&self) -> &Arc<Credentials> {
        &self.credentials
    }

    /// Installed token, if any
    #[must_use]
    pub fn token(&self) -> Option<&Token> {
        self.token.as_deref()
    }

    /// Installed token, or `AuthNotConfigured`
    ///
    /// # Errors
    ///
    /// Returns `FitbitError::AuthNotConfigured` when no token is installed
    pub fn require_token(&self) -> FitbitResult<&Token> {
        self.token().ok_or(FitbitError::AuthNotConfigured)
    }

    /// User placed in user-scoped endpoints
    #[must_use]
    pub const fn user(&self) -> &UserContext {
        &self.user
    }

    /// Copy of this session carrying `token`
    #[must_use]
    pub fn with_token(&self, token: Token) -> Self {
        Self {
            credentials: Arc::clone(&self.credentials),
            token: Some(Arc::new(token)),
            user: self.user.clone(),
        }
    }

    /// Copy of this session with no token
    #[must_use]
    pub fn without_token(&self) -> Self {
        Self {
            credentials: Arc::clone(&self.credentials),
            token: None,
            user: self.user.clone(),
        }
    }

    /// Copy of this session addressing `user`
    #[must_use]
    pub fn with_user(&self, user: UserContext) -> Self {
        Self {
            credentials: Arc::clone(&self.credentials),
            token: self.token.clone(),
            user,
        }
    }
}
