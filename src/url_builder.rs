// ABOUTME: Composes fully qualified Fitbit REST URLs from base, version, user and endpoint
// ABOUTME: Pure and deterministic; appends the .json suffix and the encoded query string
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::request::Params;
use fitbit_core::constants::formats::{RESPONSE_SUFFIX, USER_SEGMENT};
use fitbit_core::UserContext;

/// Builds request URLs of the form
/// `{base}/{version}/[user/{user}/]{endpoint}.json[?query]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    root: String,
}

impl UrlBuilder {
    /// Builder for the given API host and version segment
    #[must_use]
    pub fn new(api_base_url: &str, api_version: &str) -> Self {
        Self {
            root: format!(
                "{}/{}/",
                api_base_url.trim_end_matches('/'),
                api_version.trim_matches('/')
            ),
        }
    }

    /// `{base}/{version}/` prefix shared by every URL
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Compose the URL for one call
    ///
    /// The endpoint, user and parameter values are used as given; the only
    /// transformation is percent-encoding of the query pairs. An empty
    /// `query` produces no `?`.
    #[must_use]
    pub fn build(
        &self,
        endpoint: &str,
        query: Option<&Params>,
        requires_user: bool,
        user: &UserContext,
    ) -> String {
        let mut url = self.root.clone();

        if requires_user {
            url.push_str(USER_SEGMENT);
            url.push('/');
            url.push_str(user.as_str());
            url.push('/');
        }

        url.push_str(endpoint.trim_start_matches('/'));
        url.push_str(RESPONSE_SUFFIX);

        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(&query.to_query_string());
        }

        url
    }
}
