// ABOUTME: Category distribution of completed workouts with title-based label fallback
// ABOUTME: Explicit category, else "<prefix> - <label>" title suffix, else "Other"; sorted by count
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

use std::collections::HashMap;
use std::sync::LazyLock;

use fittrack_core::constants::analytics::OTHER_CATEGORY_LABEL;
use fittrack_core::{CategoryCount, WorkoutRecord};
use regex::Regex;

use crate::completion_filter::CompletedWorkout;

/// `"<prefix> - <label>"` with a hyphen, en dash or em dash separator
///
/// The prefix is greedy so the label is the segment after the last separator.
static TITLE_LABEL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?s)(?:.*\S)\s+[-\x{2013}\x{2014}]\s+(.+)$").ok());

/// Label encoded in a workout title, e.g. `"Workout D - Shoulders and Abs"` -> `"Shoulders and Abs"`
#[must_use]
pub fn title_label(title: &str) -> Option<&str> {
    let pattern = TITLE_LABEL_PATTERN.as_ref()?;
    pattern
        .captures(title.trim())
        .and_then(|captures| captures.get(1))
        .map(|label| label.as_str().trim())
        .filter(|label| !label.is_empty())
}

/// Label a record is counted under
#[must_use]
pub fn category_label(record: &WorkoutRecord) -> &str {
    record
        .explicit_category()
        .or_else(|| title_label(&record.title))
        .unwrap_or(OTHER_CATEGORY_LABEL)
}

/// Completed workouts per label, descending by count, ties in first-seen order
#[must_use]
pub fn category_distribution(records: &[CompletedWorkout<'_>]) -> Vec<CategoryCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut tallies: Vec<CategoryCount> = Vec::new();

    for workout in records {
        let label = category_label(workout.record);
        if let Some(&position) = positions.get(label) {
            tallies[position].count = tallies[position].count.saturating_add(1);
        } else {
            positions.insert(label, tallies.len());
            tallies.push(CategoryCount::new(label, 1));
        }
    }

    // Stable sort keeps first-seen order among equal counts
    tallies.sort_by(|a, b| b.count.cmp(&a.count));
    tallies
}
