// ABOUTME: Water resource module
// ABOUTME: Daily water logs, logging and deletion, plus the daily water goal
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
use tracing::debug;

/// Unit of a logged water amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaterUnit {
    /// Millilitres
    #[default]
    Ml,
    /// US fluid ounces
    FlOz,
    /// Cups
    Cup,
}

impl WaterUnit {
    /// Form value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ml => "ml",
            Self::FlOz => "fl oz",
            Self::Cup => "cup",
        }
    }
}

impl fmt::Display for WaterUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Water endpoints
pub struct Water<T> {
    api: T,
}

impl<T: ApiTransport> Water<T> {
    /// Module issuing calls through `api`
    pub const fn new(api: T) -> Self {
        Self { api }
    }

    /// `GET foods/log/water/date?date={date}`
    ///
    /// # Errors
    ///
    /// Propagates transport errors unchanged
    pub async fn get(&self, date: NaiveDate) -> FitbitResult<Value> {
        let params = Params::new().with("date", format_date(date));
        self.api.get("foods/log/water/date", params, true).await
    }

    /// `POST foods/log/water` with `date`, `amount` and `unit`
    ///
    /// # Errors
    ///
    /// Propagates transport errors unchanged
    pub async fn log(&self, date: NaiveDate, amount: f64, unit: WaterUnit) -> FitbitResult<Value> {
        let params = Params::new()
            .with("date", format_date(date))
            .with("amount", amount)
            .with("unit", unit);
        self.api.post("foods/log/water", params).await
    }

    /// `DELETE foods/log/water/{log_id}`
    ///
    /// # Errors
    ///
    /// Propagates transport errors unchanged
    pub async fn delete(&self, log_id: u64) -> FitbitResult<Value> {
        self.api.delete(&format!("foods/log/water/{log_id}")).await
    }

    /// Delete every water entry logged on `date`; returns how many were removed
    ///
    /// Entries are deleted one at a time; the first failure stops the sweep.
    ///
    /// # Errors
    ///
    /// Propagates transport errors of the listing or of any deletion
    pub async fn delete_for_day(&self, date: NaiveDate) -> FitbitResult<usize> {
        let day = self.get(date).await?;
        let ids = log_ids(&day);
        debug!(date = %date, entries = ids.len(), "Deleting water logs");

        for id in &ids {
            self.delete(*id).await?;
        }
        Ok(ids.len())
    }

    /// `GET foods/log/water/goal`
    ///
    /// # Errors
    ///
    /// Propagates transport errors unchanged
    pub async fn goal(&self) -> FitbitResult<Value> {
        self.api.get("foods/log/water/goal", Params::new(), true).await
    }

    /// `POST foods/log/water/goal` with `target` in the user's unit system
    ///
    /// # Errors
    ///
    /// Propagates transport errors unchanged
    pub async fn set_goal(&self, target: f64) -> FitbitResult<Value> {
        let params = Params::new().with("target", target);
        self.api.post("foods/log/water/goal", params).await
    }
}

/// `water[].logId` of a daily water listing; ids may arrive as numbers or strings
fn log_ids(day: &Value) -> Vec<u64> {
    day.get("water")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| match entry.get("logId")? {
                    Value::Number(n) => n.as_u64(),
                    Value::String(s) => s.parse().ok(),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}
