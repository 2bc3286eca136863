// ABOUTME: Resource modules translating typed Fitbit calls into generic requests
// ABOUTME: Activity, body, heart, profile, sleep and water, plus the client-side registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Resource Modules
//!
//! Every module is generic over [`crate::ApiTransport`] and receives it at
//! construction. Modules only map arguments to endpoint paths and parameters:
//! no error handling, no retries.

/// Activity logging, listing and browsing
pub mod activity;
/// Body time series (BMI, fat, weight)
pub mod body;
/// Intraday heart rate
pub mod heart;
/// User profile
pub mod profile;
/// Module selection and accessors on the client
pub mod registry;
/// Sleep logs, time series and goal
pub mod sleep;
/// Water logs and goal
pub mod water;

pub use activity::{Activity, ActivityListQuery, ActivityLog, SortOrder};
pub use body::{Body, BodyResource};
pub use heart::{DetailLevel, Heart, HeartRateQuery};
pub use profile::Profile;
pub use registry::ResourceSet;
pub use sleep::{Sleep, SleepSeries};
pub use water::{Water, WaterUnit};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use fitbit_core::constants::formats;

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(formats::DATE).to_string()
}

pub(crate) fn format_time(time: NaiveTime) -> String {
    time.format(formats::TIME).to_string()
}

pub(crate) fn format_date_time(date_time: NaiveDateTime) -> String {
    date_time.format(formats::DATE_TIME).to_string()
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::request::RequestSpec;
    use crate::ApiTransport;
    use async_trait::async_trait;
    use fitbit_core::FitbitResult;
    use serde_json::Value;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Transport that records every request and replays canned bodies
    #[derive(Default)]
    pub struct RecordingTransport {
        calls: Mutex<Vec<RequestSpec>>,
        responses: Mutex<VecDeque<Value>>,
    }

    impl RecordingTransport {
        pub fn respond_with(self, body: Value) -> Self {
            self.responses.lock().unwrap().push_back(body);
            self
        }

        pub fn calls(&self) -> Vec<RequestSpec> {
            self.calls.lock().unwrap().clone()
        }

        pub fn last(&self) -> RequestSpec {
            self.calls().pop().unwrap()
        }
    }

    #[async_trait]
    impl ApiTransport for RecordingTransport {
        async fn request(&self, spec: RequestSpec) -> FitbitResult<Value> {
            self.calls.lock().unwrap().push(spec);
            Ok(self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Value::Null))
        }
    }
}
