// ABOUTME: Integration tests for the category distribution of completed workouts
// ABOUTME: Label derivation chain, descending order, first-seen tie breaking
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{fixed_now, iso};
use fittrack::{CategoryCount, CompletionIndex, DateNormalizer, WorkoutRecord};
use fittrack_analytics::completion_filter::CompletionFilter;
use fittrack_analytics::distribution_analyzer::{category_distribution, category_label, title_label};

fn done(id: &str, title: &str, category: Option<&str>) -> WorkoutRecord {
    let record = WorkoutRecord::new(id, title)
        .scheduled_on(iso(fixed_now()))
        .mark_completed();
    match category {
        Some(category) => record.with_category(category),
        None => record,
    }
}

fn distribution(records: &[WorkoutRecord]) -> Vec<CategoryCount> {
    let index = CompletionIndex::new();
    let completed = CompletionFilter::new(&index, DateNormalizer::utc()).collect(records);
    category_distribution(&completed)
}

#[test]
fn test_title_suffix_label() {
    assert_eq!(
        title_label("Workout D - Shoulders and Abs"),
        Some("Shoulders and Abs")
    );
    assert_eq!(title_label("Push Day \u{2014} Chest"), Some("Chest"));
    assert_eq!(title_label("Morning run"), None);
}

#[test]
fn test_label_derivation_chain() {
    assert_eq!(
        category_label(&done("a", "Workout A - Legs", Some("Back"))),
        "Back"
    );
    assert_eq!(category_label(&done("b", "Workout B - Legs", None)), "Legs");
    assert_eq!(category_label(&done("c", "Stretching", None)), "Other");
    assert_eq!(category_label(&done("d", "Stretching", Some(""))), "Other");
}

#[test]
fn test_descending_by_count_with_first_seen_ties() {
    let records = vec![
        done("1", "Workout - Arms", None),
        done("2", "x", Some("Back")),
        done("3", "x", Some("Legs")),
        done("4", "x", Some("Legs")),
        done("5", "Workout - Back", None),
        done("6", "Yoga", None),
    ];

    assert_eq!(
        distribution(&records),
        vec![
            CategoryCount::new("Back", 2),
            CategoryCount::new("Legs", 2),
            CategoryCount::new("Arms", 1),
            CategoryCount::new("Other", 1),
        ]
    );
}

#[test]
fn test_labels_are_case_sensitive() {
    let records = vec![
        done("1", "x", Some("legs")),
        done("2", "x", Some("Legs")),
    ];
    assert_eq!(distribution(&records).len(), 2);
}

#[test]
fn test_uncompleted_records_are_not_counted() {
    let records = vec![
        done("1", "x", Some("Legs")),
        WorkoutRecord::new("2", "x")
            .with_category("Back")
            .scheduled_on(iso(fixed_now())),
    ];
    assert_eq!(distribution(&records), vec![CategoryCount::new("Legs", 1)]);
}

#[test]
fn test_empty_distribution() {
    assert!(distribution(&[]).is_empty());
}
