// ABOUTME: Core types and constants for the Fitbit Web API client
// ABOUTME: Foundation crate with the error taxonomy, credential/token models and endpoint constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitbit Core
//!
//! Foundation crate shared by the request engine and the resource modules.
//! It changes rarely and carries no I/O.
//!
//! ## Modules
//!
//! - **errors**: `FitbitError` and the `FitbitResult` alias
//! - **constants**: Fixed Fitbit endpoints, formats and defaults
//! - **models**: `Credentials`, `Token`, `UserContext` and OAuth scopes

/// Error taxonomy surfaced by every client operation
pub mod errors;

/// Fitbit endpoint constants and wire-format strings
pub mod constants;

/// Credential, token and user-context models
pub mod models;

pub use errors::{FitbitError, FitbitResult};
pub use models::{Credentials, Scope, Token, UserContext};
