// ABOUTME: Integration tests for resource modules wired through the real transport
// ABOUTME: Activity list validation, water day sweep, heart intraday and disabled modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use chrono::NaiveDate;
use common::{authorized_client, mock_config, ACCESS_TOKEN, REFRESH_TOKEN};
use fitbit_client::resources::{ActivityListQuery, ActivityLog, HeartRateQuery, ResourceSet};
use fitbit_client::{FitbitClient, FitbitError, Token};
use serde_json::json;
use wiremock::matchers::{body_string, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

#[tokio::test]
async fn test_activity_list_without_bound_makes_no_call() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "activities": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let client = authorized_client(&server).await;
    let err = client
        .activity()?
        .list(&ActivityListQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, FitbitError::InvalidRequest { .. }));
    Ok(())
}

#[tokio::test]
async fn test_activity_list_sends_paging_query() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1/user/-/activities/list.json"))
        .and(query_param("sort", "desc"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "10"))
        .and(query_param("beforeDate", "2024-01-15T12:00:00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "activities": [{ "logId": 1 }],
            "pagination": { "next": "" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authorized_client(&server).await;
    let before = day().and_hms_opt(12, 0, 0).unwrap();
    let body = client
        .activity()?
        .list(&ActivityListQuery::before(before))
        .await?;

    assert_eq!(body["activities"][0]["logId"], 1);
    Ok(())
}

#[tokio::test]
async fn test_activity_log_form_fields() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/1/user/-/activities.json"))
        .and(body_string(
            "date=2024-01-15&startTime=07%3A45&activityId=90009&durationMillis=1800000&manualCalories=320",
        ))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "activityLog": { "logId": 77 } })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authorized_client(&server).await;
    let entry = ActivityLog::new(90_009, day().and_hms_opt(7, 45, 0).unwrap(), 1_800_000)
        .manual_calories(320);
    let body = client.activity()?.log(&entry).await?;

    assert_eq!(body["activityLog"]["logId"], 77);
    Ok(())
}

#[tokio::test]
async fn test_water_delete_for_day_sweeps_entries() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1/user/-/foods/log/water/date.json"))
        .and(query_param("date", "2024-01-15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "summary": { "water": 750 },
            "water": [{ "amount": 250, "logId": 5001 }, { "amount": 500, "logId": 5002 }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    for id in [5001, 5002] {
        Mock::given(method("DELETE"))
            .and(path(format!("/1/user/-/foods/log/water/{id}.json")))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = authorized_client(&server).await;
    let removed = client.water()?.delete_for_day(day()).await?;

    assert_eq!(removed, 2);
    Ok(())
}

#[tokio::test]
async fn test_heart_intraday_path() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/1/user/-/activities/heart/date/2024-01-15/1d/1sec/time/00:00/23:59.json",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "activities-heart-intraday": { "dataset": [{ "time": "00:00:05", "value": 58 }] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authorized_client(&server).await;
    let body = client
        .heart()?
        .intraday(&HeartRateQuery::for_day(day()))
        .await?;

    assert_eq!(body["activities-heart-intraday"]["dataset"][0]["value"], 58);
    Ok(())
}

#[tokio::test]
async fn test_disabled_module_is_refused() -> Result<()> {
    let server = MockServer::start().await;
    let config = mock_config(&server).with_resources(ResourceSet::PROFILE | ResourceSet::SLEEP);
    let client = FitbitClient::new(config)?;
    client
        .install_token(Token::new(ACCESS_TOKEN, REFRESH_TOKEN))
        .await;

    assert!(client.sleep().is_ok());
    assert!(matches!(
        client.water(),
        Err(FitbitError::ResourceDisabled { resource: "water" })
    ));
    Ok(())
}
