// ABOUTME: Heart rate resource module
// ABOUTME: Intraday heart rate for one day at second or minute resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{format_date, format_time};
use crate::request::Params;
use crate::ApiTransport;
use chrono::{NaiveDate, NaiveTime};
use fitbit_core::FitbitResult;
use serde_json::Value;
use std::fmt;

/// Sampling resolution of the intraday series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailLevel {
    /// One sample per second
    #[default]
    Second,
    /// One sample per minute
    Minute,
}

impl DetailLevel {
    /// Path segment (`sec` / `min`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Second => "sec",
            Self::Minute => "min",
        }
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intraday heart rate window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartRateQuery {
    /// Day to read
    pub date: NaiveDate,
    /// Sampling resolution
    pub detail_level: DetailLevel,
    /// Window start (inclusive)
    pub start: NaiveTime,
    /// Window end (inclusive)
    pub end: NaiveTime,
}

impl HeartRateQuery {
    /// Whole day at second resolution, `00:00` through `23:59`
    ///
    /// Code ported from the PHP client, whose default window ended at `23:39`,
    /// gets twenty more minutes of samples.
    #[must_use]
    pub fn for_day(date: NaiveDate) -> Self {
        Self {
            date,
            detail_level: DetailLevel::Second,
            start: NaiveTime::MIN,
            end: NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN),
        }
    }

    /// Set the resolution
    #[must_use]
    pub const fn detail_level(mut self, detail_level: DetailLevel) -> Self {
        self.detail_level = detail_level;
        self
    }

    /// Narrow the window
    #[must_use]
    pub const fn between(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "activities/heart/date/{}/1d/1{}/time/{}/{}",
            format_date(self.date),
            self.detail_level,
            format_time(self.start),
            format_time(self.end)
        )
    }
}

/// Heart rate endpoints
pub struct Heart<T> {
    api: T,
}

impl<T: ApiTransport> Heart<T> {
    /// Module issuing calls through `api`
    pub const fn new(api: T) -> Self {
        Self { api }
    }

    /// `GET activities/heart/date/{date}/1d/1{sec|min}/time/{start}/{end}`
    ///
    /// # Errors
    ///
    /// Propagates transport errors unchanged
    pub async fn intraday(&self, query: &HeartRateQuery) -> FitbitResult<Value> {
        self.api.get(&query.endpoint(), Params::new(), true).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::RecordingTransport;
    use serde_json::json;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
    }

    #[tokio::test]
    async fn whole_day_defaults() {
        let transport = RecordingTransport::default()
            .respond_with(json!({ "activities-heart-intraday": { "dataset": [] } }));

        let body = Heart::new(&transport)
            .intraday(&HeartRateQuery::for_day(day()))
            .await
            .unwrap();

        assert!(body["activities-heart-intraday"]["dataset"].is_array());
        let call = transport.last();
        assert_eq!(
            call.endpoint,
            "activities/heart/date/2024-05-02/1d/1sec/time/00:00/23:59"
        );
        assert!(call.requires_user);
        assert!(call.params.is_empty());
    }

    #[tokio::test]
    async fn minute_resolution_window() {
        let transport = RecordingTransport::default();
        let query = HeartRateQuery::for_day(day())
            .detail_level(DetailLevel::Minute)
            .between(
                NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
                NaiveTime::from_hms_opt(7, 15, 0).unwrap(),
            );

        Heart::new(&transport).intraday(&query).await.unwrap();

        assert_eq!(
            transport.last().endpoint,
            "activities/heart/date/2024-05-02/1d/1min/time/06:30/07:15"
        );
    }
}
