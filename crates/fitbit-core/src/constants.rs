// ABOUTME: Fixed Fitbit Web API endpoints, response format and request defaults
// ABOUTME: Pure data constants organized by concern
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Fitbit REST and OAuth endpoints
pub mod endpoints {
    /// REST API host (version segment is appended separately)
    pub const API_BASE_URL: &str = "https://api.fitbit.com";

    /// REST API version segment
    pub const API_VERSION: &str = "1";

    /// OAuth 2.0 authorization page
    pub const AUTHORIZE_URL: &str = "https://www.fitbit.com/oauth2/authorize";

    /// OAuth 2.0 token endpoint
    pub const TOKEN_URL: &str = "https://api.fitbit.com/oauth2/token";
}

/// Wire formats used when composing requests
pub mod formats {
    /// Suffix appended to every endpoint path
    pub const RESPONSE_SUFFIX: &str = ".json";

    /// Path segment preceding the user id in user-scoped endpoints
    pub const USER_SEGMENT: &str = "user";

    /// User id meaning "the owner of the access token"
    pub const CURRENT_USER: &str = "-";

    /// `chrono` format for dates (`YYYY-MM-DD`)
    pub const DATE: &str = "%Y-%m-%d";

    /// `chrono` format for times of day (`HH:MM`)
    pub const TIME: &str = "%H:%M";

    /// `chrono` format for date-time bounds (`YYYY-MM-DDTHH:MM:SS`)
    pub const DATE_TIME: &str = "%Y-%m-%dT%H:%M:%S";
}

/// OAuth grant types and header schemes
pub mod oauth {
    /// Authorization code grant
    pub const GRANT_AUTHORIZATION_CODE: &str = "authorization_code";

    /// Refresh token grant
    pub const GRANT_REFRESH_TOKEN: &str = "refresh_token";

    /// Content type of token endpoint requests
    pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
}

/// HTTP client defaults
pub mod http {
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Default connection timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
}
