// ABOUTME: Profile resource module
// ABOUTME: Reads the profile of the current user context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::request::Params;
use crate::ApiTransport;
use fitbit_core::FitbitResult;
use serde_json::Value;

/// User profile endpoints
pub struct Profile<T> {
    api: T,
}

impl<T: ApiTransport> Profile<T> {
    /// Module issuing calls through `api`
    pub const fn new(api: T) -> Self {
        Self { api }
    }

    /// `GET user/{user}/profile`
    ///
    /// # Errors
    ///
    /// Propagates transport errors unchanged
    pub async fn get(&self) -> FitbitResult<Value> {
        self.api.get("profile", Params::new(), true).await
    }
}
