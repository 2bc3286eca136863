// ABOUTME: Activity resource module
// ABOUTME: Logging, editing, reading, deleting and listing activity logs plus the activity catalogue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{format_date, format_date_time, format_time};
use crate::request::Params;
use crate::ApiTransport;
use chrono::NaiveDateTime;
use fitbit_core::{FitbitError, FitbitResult};
use serde_json::Value;
use std::fmt;

/// Default page size of the activity list
pub const DEFAULT_LIST_LIMIT: u32 = 10;

/// A manual activity log entry
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityLog {
    /// Fitbit activity type id
    pub activity_id: u64,
    /// Local start date and time
    pub start: NaiveDateTime,
    /// Duration in milliseconds
    pub duration_millis: u64,
    /// Calories to record instead of the estimate
    pub manual_calories: Option<u32>,
    /// Distance covered
    pub distance: Option<f64>,
    /// Unit of `distance` (e.g. `Kilometer`, `Mile`, `Steps`)
    pub distance_unit: Option<String>,
}

impl ActivityLog {
    /// Entry with the required fields only
    #[must_use]
    pub const fn new(activity_id: u64, start: NaiveDateTime, duration_millis: u64) -> Self {
        Self {
            activity_id,
            start,
            duration_millis,
            manual_calories: None,
            distance: None,
            distance_unit: None,
        }
    }

    /// Record a calorie count
    #[must_use]
    pub const fn manual_calories(mut self, calories: u32) -> Self {
        self.manual_calories = Some(calories);
        self
    }

    /// Record a distance
    #[must_use]
    pub const fn distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    /// Unit of the recorded distance
    #[must_use]
    pub fn distance_unit(mut self, unit: impl Into<String>) -> Self {
        self.distance_unit = Some(unit.into());
        self
    }

    fn to_params(&self) -> Params {
        Params::new()
            .with("date", format_date(self.start.date()))
            .with("startTime", format_time(self.start.time()))
            .with("activityId", self.activity_id)
            .with("durationMillis", self.duration_millis)
            .with_opt("manualCalories", self.manual_calories)
            .with_opt("distance", self.distance)
            .with_opt("distanceUnit", self.distance_unit.as_deref())
    }
}

/// Sort direction of the activity list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Oldest first; pairs with `afterDate`
    Asc,
    /// Newest first; pairs with `beforeDate`
    #[default]
    Desc,
}

impl SortOrder {
    /// Query value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity list query; exactly one of `before` / `after` must be set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityListQuery {
    /// Only entries before this instant
    pub before: Option<NaiveDateTime>,
    /// Only entries after this instant
    pub after: Option<NaiveDateTime>,
    /// Sort direction
    pub sort: SortOrder,
    /// Page size
    pub limit: u32,
    /// Page offset
    pub offset: u32,
}

impl Default for ActivityListQuery {
    fn default() -> Self {
        Self {
            before: None,
            after: None,
            sort: SortOrder::Desc,
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
        }
    }
}

impl ActivityListQuery {
    /// Entries before `instant`, newest first
    #[must_use]
    pub fn before(instant: NaiveDateTime) -> Self {
        Self {
            before: Some(instant),
            ..Self::default()
        }
    }

    /// Entries after `instant`, oldest first
    #[must_use]
    pub fn after(instant: NaiveDateTime) -> Self {
        Self {
            after: Some(instant),
            sort: SortOrder::Asc,
            ..Self::default()
        }
    }

    /// Set the page size
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the page offset
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Set the sort direction
    #[must_use]
    pub const fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    fn to_params(&self) -> FitbitResult<Params> {
        if self.before.is_some() == self.after.is_some() {
            return Err(FitbitError::InvalidRequest {
                reason: "activity list requires exactly one of beforeDate or afterDate",
            });
        }

        Ok(Params::new()
            .with("sort", self.sort)
            .with("offset", self.offset)
            .with("limit", self.limit)
            .with_opt("afterDate", self.after.map(format_date_time))
            .with_opt("beforeDate", self.before.map(format_date_time)))
    }
}

/// Activity endpoints
pub struct Activity<T> {
    api: T,
}

impl<T: ApiTransport> Activity<T> {
    /// Module issuing calls through `api`
    pub const fn new(api: T) -> Self {
        Self { api }
    }

    /// `POST activities`
    ///
    /// # Errors
    ///
    /// Propagates transport errors unchanged
    pub async fn log(&self, entry: &ActivityLog) -> FitbitResult<Value> {
        self.api.post("activities", entry.to_params()).await
    }

    /// `POST activities/{log_id}` replacing an existing entry
    ///
    /// # Errors
    ///
    /// Propagates transport errors unchanged
    pub async fn edit(&self, log_id: u64, entry: &ActivityLog) -> FitbitResult<Value> {
        self.api
            .post(&format!("activities/{log_id}"), entry.to_params())
            .await
    }

    /// `GET activities/{log_id}`
    ///
    /// # Errors
    ///
    /// Propagates transport errors unchanged
    pub async fn get(&self, log_id: u64) -> FitbitResult<Value> {
        self.api
            .get(&format!("activities/{log_id}"), Params::new(), true)
            .await
    }

    /// `DELETE activities/{log_id}`
    ///
    /// # Errors
    ///
    /// Propagates transport errors unchanged
    pub async fn delete(&self, log_id: u64) -> FitbitResult<Value> {
        self.api.delete(&format!("activities/{log_id}")).await
    }

    /// `GET activities/list`
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` without any network call unless exactly one
    /// bound is set; otherwise propagates transport errors
    pub async fn list(&self, query: &ActivityListQuery) -> FitbitResult<Value> {
        let params = query.to_params()?;
        self.api.get("activities/list", params, true).await
    }

    /// `GET activities` (catalogue of activity types, not user-scoped)
    ///
    /// # Errors
    ///
    /// Propagates transport errors unchanged
    pub async fn browse(&self) -> FitbitResult<Value> {
        self.api.get("activities", Params::new(), false).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Method;
    use crate::resources::testing::RecordingTransport;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(h, m, 30)
            .unwrap()
    }

    #[tokio::test]
    async fn log_maps_fields_in_order() {
        let transport = RecordingTransport::default();
        let entry = ActivityLog::new(90_009, at(7, 45), 1_800_000)
            .manual_calories(320)
            .distance(5.2)
            .distance_unit("Kilometer");

        Activity::new(&transport).log(&entry).await.unwrap();

        let call = transport.last();
        assert_eq!(call.method, Method::Post);
        assert_eq!(call.endpoint, "activities");
        let keys: Vec<_> = call.params.pairs().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            [
                "date",
                "startTime",
                "activityId",
                "durationMillis",
                "manualCalories",
                "distance",
                "distanceUnit"
            ]
        );
        assert_eq!(call.params.get("startTime"), Some("07:45"));
        assert_eq!(call.params.get("distance"), Some("5.2"));
    }

    #[tokio::test]
    async fn edit_targets_existing_log() {
        let transport = RecordingTransport::default();
        let entry = ActivityLog::new(90_001, at(18, 0), 600_000);

        Activity::new(&transport).edit(7_788, &entry).await.unwrap();

        let call = transport.last();
        assert_eq!(call.endpoint, "activities/7788");
        assert_eq!(call.params.pairs().len(), 4);
    }

    #[tokio::test]
    async fn list_requires_exactly_one_bound() {
        let transport = RecordingTransport::default();
        let activity = Activity::new(&transport);

        let neither = ActivityListQuery::default();
        let both = ActivityListQuery {
            before: Some(at(10, 0)),
            after: Some(at(8, 0)),
            ..ActivityListQuery::default()
        };

        for query in [neither, both] {
            let err = activity.list(&query).await.unwrap_err();
            assert!(matches!(err, FitbitError::InvalidRequest { .. }));
        }
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn list_formats_bound_as_date_time() {
        let transport = RecordingTransport::default();
        Activity::new(&transport)
            .list(&ActivityListQuery::after(at(8, 0)).limit(20))
            .await
            .unwrap();

        let call = transport.last();
        assert_eq!(call.endpoint, "activities/list");
        assert_eq!(
            call.params.to_query_string(),
            "sort=asc&offset=0&limit=20&afterDate=2024-01-15T08%3A00%3A30"
        );
    }

    #[tokio::test]
    async fn browse_is_not_user_scoped() {
        let transport = RecordingTransport::default();
        let activity = Activity::new(&transport);

        activity.browse().await.unwrap();
        activity.get(42).await.unwrap();
        activity.delete(42).await.unwrap();

        let calls = transport.calls();
        assert!(!calls[0].requires_user);
        assert_eq!(calls[0].endpoint, "activities");
        assert!(calls[1].requires_user);
        assert_eq!((calls[2].method, calls[2].endpoint.as_str()), (Method::Delete, "activities/42"));
    }
}
