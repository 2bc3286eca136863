// ABOUTME: Utility modules shared by the transport and the OAuth flow
// ABOUTME: Contains HTTP client construction helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// HTTP client configuration and helpers
pub mod http_client;
