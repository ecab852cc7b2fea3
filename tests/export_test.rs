// ABOUTME: Integration tests for the JSON progress export
// ABOUTME: Field names, value encodings, and decoding of exported documents
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{completed_workout, days_ago, fixed_now};
use fittrack::export::{from_json, to_json, to_json_pretty};
use fittrack::{compute_snapshot, AnalyticsConfig, CompletionIndex, ErrorCode, ProgressSnapshot};
use serde_json::{json, Value};

fn sample_snapshot() -> ProgressSnapshot {
    let now = fixed_now();
    let workouts = vec![
        completed_workout("a", "Legs", days_ago(now, 1)),
        completed_workout("b", "Back", now),
    ];
    compute_snapshot(
        &workouts,
        &CompletionIndex::new(),
        now,
        &AnalyticsConfig::default(),
    )
}

#[test]
fn test_top_level_field_names() {
    let value: Value = serde_json::from_str(&to_json(&sample_snapshot()).unwrap()).unwrap();
    let object = value.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "categoryDistribution",
            "completionRatePercent",
            "dailyActivity",
            "monthlyProgressPercent",
            "streakDays",
            "totalCompleted",
            "weeklyGoal",
            "weeklyTrend",
            "weeklyWorkouts",
        ]
    );
}

#[test]
fn test_nested_encodings() {
    let value: Value = serde_json::from_str(&to_json(&sample_snapshot()).unwrap()).unwrap();

    assert_eq!(value["weeklyTrend"], json!("up"));
    assert_eq!(value["streakDays"], json!(2));
    assert_eq!(
        value["categoryDistribution"][0],
        json!({"label": "Legs", "count": 1})
    );

    let daily = value["dailyActivity"].as_array().unwrap();
    assert_eq!(daily.len(), 7);
    assert_eq!(
        daily[6],
        json!({
            "calendarDate": "2025-03-06",
            "weekdayLabel": "Thu",
            "count": 1,
            "isToday": true
        })
    );
}

#[test]
fn test_pretty_export_decodes_to_same_snapshot() {
    let snapshot = sample_snapshot();
    let pretty = to_json_pretty(&snapshot).unwrap();

    assert!(pretty.contains('\n'));
    assert_eq!(from_json(&pretty).unwrap(), snapshot);
}

#[test]
fn test_invalid_document_is_serialization_error() {
    let error = from_json("{\"weeklyWorkouts\": \"many\"}").unwrap_err();
    assert_eq!(error.code(), ErrorCode::SerializationFailed);
}
