// ABOUTME: Integration tests for the progress tracker and in-memory workout store
// ABOUTME: Recomputation after add, delete, and completion toggles; JSON export path
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{completed_workout, days_ago, fixed_now, init_test_logging, planned_workout};
use fittrack::{
    AnalyticsConfig, ErrorCode, InMemoryWorkoutStore, ProgressTracker, WorkoutRecord,
    WorkoutSource,
};

#[test]
fn test_store_insert_replaces_by_id() {
    let mut store = InMemoryWorkoutStore::new();
    assert!(store.insert(planned_workout("a", fixed_now())).is_none());

    let replaced = store.insert(completed_workout("a", "Legs", fixed_now()));
    assert!(replaced.is_some());
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("a").unwrap().completed_flag, Some(true));
}

#[test]
fn test_store_remove_drops_index_entry() {
    let mut store = InMemoryWorkoutStore::with_workouts(vec![planned_workout("a", fixed_now())]);
    assert!(store.set_completed("a", true));
    assert!(store.remove("a").is_some());

    assert!(store.is_empty());
    assert!(store.completion_index().is_empty());
    assert!(store.remove("a").is_none());
}

#[test]
fn test_set_completed_requires_known_id() {
    let mut store = InMemoryWorkoutStore::new();
    assert!(!store.set_completed("ghost", true));
    assert!(store.completion_index().is_empty());
}

#[test]
fn test_snapshot_follows_store_changes() {
    init_test_logging();
    let now = fixed_now();
    let store: InMemoryWorkoutStore = vec![
        completed_workout("a", "Legs", days_ago(now, 1)),
        planned_workout("b", now),
    ]
    .into_iter()
    .collect();
    let mut tracker = ProgressTracker::new(store);

    let before = tracker.snapshot(now);
    assert_eq!(before.total_completed, 1);
    assert_eq!(before.streak_days, 1);

    assert!(tracker.source_mut().set_completed("b", true));
    let toggled = tracker.snapshot(now);
    assert_eq!(toggled.total_completed, 2);
    assert_eq!(toggled.streak_days, 2);

    tracker.source_mut().remove("a");
    let removed = tracker.snapshot(now);
    assert_eq!(removed.total_completed, 1);
    assert_eq!(removed.streak_days, 1);
}

#[test]
fn test_tracker_rejects_invalid_config() {
    let error = ProgressTracker::with_config(
        InMemoryWorkoutStore::new(),
        AnalyticsConfig::default().with_weekly_goal(0),
    )
    .unwrap_err();
    assert_eq!(error.code(), ErrorCode::InvalidConfiguration);
}

#[test]
fn test_tracker_uses_configured_goal() {
    let tracker = ProgressTracker::with_config(
        InMemoryWorkoutStore::new(),
        AnalyticsConfig::default().with_weekly_goal(3),
    )
    .unwrap();
    assert_eq!(tracker.snapshot(fixed_now()).weekly_goal, 3);
    assert_eq!(tracker.config().weekly_goal, 3);
}

#[test]
fn test_export_json_from_tracker() {
    let mut store = InMemoryWorkoutStore::new();
    store.insert(
        WorkoutRecord::new("a", "Workout D - Shoulders and Abs")
            .scheduled_on("2025-03-06")
            .mark_completed(),
    );
    let tracker = ProgressTracker::new(store);

    let json = tracker.export_json(fixed_now()).unwrap();
    assert!(json.contains("\"label\":\"Shoulders and Abs\""));
    assert!(json.contains("\"weeklyWorkouts\":1"));
    assert_eq!(tracker.into_source().len(), 1);
}
