// ABOUTME: Configuration module for the Fitbit client
// ABOUTME: Environment-only configuration with fixed Fitbit defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-driven client configuration
pub mod environment;

pub use environment::ClientConfig;
