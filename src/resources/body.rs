// ABOUTME: Body metrics resource module
// ABOUTME: BMI, body fat and weight time series between two dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::format_date;
use crate::request::Params;
use crate::ApiTransport;
use chrono::NaiveDate;
use fitbit_core::FitbitResult;
use serde_json::Value;
use std::fmt;

/// Body time series resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyResource {
    /// Body mass index
    Bmi,
    /// Body fat percentage
    Fat,
    /// Body weight
    Weight,
}

impl BodyResource {
    /// Path segment
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bmi => "bmi",
            Self::Fat => "fat",
            Self::Weight => "weight",
        }
    }
}

impl fmt::Display for BodyResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body metrics endpoints
pub struct Body<T> {
    api: T,
}

impl<T: ApiTransport> Body<T> {
    /// Module issuing calls through `api`
    pub const fn new(api: T) -> Self {
        Self { api }
    }

    /// `GET body/{resource}/date/{from}/{to}`
    ///
    /// # Errors
    ///
    /// Propagates transport errors unchanged
    pub async fn time_series(
        &self,
        resource: BodyResource,
        from: NaiveDate,
        to: NaiveDate,
    ) -> FitbitResult<Value> {
        let endpoint = format!(
            "body/{resource}/date/{}/{}",
            format_date(from),
            format_date(to)
        );
        self.api.get(&endpoint, Params::new(), true).await
    }
}
