// ABOUTME: Sleep resource module
// ABOUTME: Sleep logs by date, manual logging, deletion, time series and sleep goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{format_date, format_time};
use crate::request::Params;
use crate::ApiTransport;
use chrono::{NaiveDate, NaiveDateTime};
use fitbit_core::FitbitResult;
use serde_json::Value;
use std::fmt;

/// Sleep time series resource paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepSeries {
    /// Time the main sleep started
    StartTime,
    /// Minutes in bed
    TimeInBed,
    /// Minutes asleep
    MinutesAsleep,
    /// Number of awakenings
    AwakeningsCount,
    /// Minutes awake
    MinutesAwake,
    /// Minutes until falling asleep
    MinutesToFallAsleep,
    /// Minutes in bed after waking up
    MinutesAfterWakeup,
    /// Sleep efficiency percentage
    Efficiency,
}

impl SleepSeries {
    /// Path segment
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StartTime => "startTime",
            Self::TimeInBed => "timeInBed",
            Self::MinutesAsleep => "minutesAsleep",
            Self::AwakeningsCount => "awakeningsCount",
            Self::MinutesAwake => "minutesAwake",
            Self::MinutesToFallAsleep => "minutesToFallAsleep",
            Self::MinutesAfterWakeup => "minutesAfterWakeup",
            Self::Efficiency => "efficiency",
        }
    }
}

impl fmt::Display for SleepSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sleep endpoints
pub struct Sleep<T> {
    api: T,
}

impl<T: ApiTransport> Sleep<T> {
    /// Module issuing calls through `api`
    pub const fn new(api: T) -> Self {
        Self { api }
    }

    /// `GET sleep/date/{date}`
    ///
    /// # Errors
    ///
    /// Propagates transport errors unchanged
    pub async fn get(&self, date: NaiveDate) -> FitbitResult<Value> {
        let endpoint = format!("sleep/date/{}", format_date(date));
        self.api.get(&endpoint, Params::new(), true).await
    }

    /// `POST sleep` with `startTime`, `duration` (milliseconds) and `date`
    ///
    /// # Errors
    ///
    /// Propagates transport errors unchanged
    pub async fn log(&self, start: NaiveDateTime, duration_millis: u64) -> FitbitResult<Value> {
        let params = Params::new()
            .with("startTime", format_time(start.time()))
            .with("duration", duration_millis)
            .with("date", format_date(start.date()));
        self.api.post("sleep", params).await
    }

    /// `DELETE sleep/{log_id}`
    ///
    /// # Errors
    ///
    /// Propagates transport errors unchanged
    pub async fn delete(&self, log_id: u64) -> FitbitResult<Value> {
        self.api.delete(&format!("sleep/{log_id}")).await
    }

    /// `GET sleep/{series}/date/{start}/{end}`
    ///
    /// # Errors
    ///
    /// Propagates transport errors unchanged
    pub async fn time_series(
        &self,
        series: SleepSeries,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FitbitResult<Value> {
        let endpoint = format!(
            "sleep/{series}/date/{}/{}",
            format_date(start),
            format_date(end)
        );
        self.api.get(&endpoint, Params::new(), true).await
    }

    /// `GET sleep/goal`
    ///
    /// # Errors
    ///
    /// Propagates transport errors unchanged
    pub async fn goal(&self) -> FitbitResult<Value> {
        self.api.get("sleep/goal", Params::new(), true).await
    }

    /// `POST sleep/goal` with `minDuration` in minutes
    ///
    /// # Errors
    ///
    /// Propagates transport errors unchanged
    pub async fn set_goal(&self, min_duration: u32) -> FitbitResult<Value> {
        let params = Params::new().with("minDuration", min_duration);
        self.api.post("sleep/goal", params).await
    }
}
