// ABOUTME: Benchmark fixtures generating deterministic workout collections
// ABOUTME: Mixed date formats, completion signals, and categories for reproducible measurements
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

//! Benchmark fixtures for workout collections.
//!
//! Every generator is a pure function of its index so runs are comparable.

use chrono::{Duration, NaiveDate};
use fittrack::{CompletionIndex, WorkoutRecord};

/// Predefined collection sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum WorkoutBatchSize {
    /// A few weeks of history
    Small,
    /// About a year of regular training
    Medium,
    /// Several years of history
    Large,
}

impl WorkoutBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 20,
            Self::Medium => 365,
            Self::Large => 2_000,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Reference date all fixtures count back from
#[must_use]
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 6).unwrap_or_default()
}

const CATEGORIES: [&str; 5] = ["Legs", "Back", "Chest", "Shoulders and Abs", "Arms"];

#[allow(clippy::cast_possible_wrap)]
fn generate_workout(index: usize, now: NaiveDate) -> WorkoutRecord {
    let day = now - Duration::days((index / 2) as i64);
    let category = CATEGORIES[index % CATEGORIES.len()];

    let record = match index % 4 {
        0 => WorkoutRecord::new(format!("bench_{index}"), format!("Workout {index}"))
            .with_category(category),
        1 => WorkoutRecord::new(
            format!("bench_{index}"),
            format!("Workout {index} - {category}"),
        ),
        2 => WorkoutRecord::new(format!("bench_{index}"), "Stretching"),
        _ => WorkoutRecord::new(format!("bench_{index}"), format!("Workout {index}"))
            .with_category(category)
            .with_exercise_count(index % 8),
    };

    let record = match index % 3 {
        0 => record.scheduled_on(day.format("%Y-%m-%d").to_string()),
        1 => record.completed_at(format!("{}T18:30:00Z", day.format("%Y-%m-%d"))),
        _ => record.scheduled_on(day.format("%a %b %d %Y 07:15:00 GMT+0100").to_string()),
    };

    if index % 5 == 0 {
        record
    } else {
        record.mark_completed()
    }
}

/// Workout collection of the given size ending at [`reference_date`]
#[must_use]
pub fn generate_workouts(size: WorkoutBatchSize) -> Vec<WorkoutRecord> {
    let now = reference_date();
    (0..size.count())
        .map(|index| generate_workout(index, now))
        .collect()
}

/// Completion index marking every tenth workout done
#[must_use]
pub fn generate_completion_index(size: WorkoutBatchSize) -> CompletionIndex {
    (0..size.count())
        .step_by(10)
        .map(|index| (format!("bench_{index}"), true))
        .collect()
}
