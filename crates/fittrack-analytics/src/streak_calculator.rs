// ABOUTME: Streak calculation over distinct completed calendar days
// ABOUTME: Current streak ending today or yesterday, plus the longest streak in the history
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

//! Streak calculation.
//!
//! Multiple workouts on one day count once. A current streak survives as long as
//! the most recent completed day is today or yesterday; once a full day has been
//! missed it is zero. There is no placeholder value for sparse data.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

use crate::completion_filter::CompletedWorkout;

/// Distinct calendar days with at least one completed workout
#[must_use]
pub fn completed_days(records: &[CompletedWorkout<'_>]) -> BTreeSet<NaiveDate> {
    records.iter().map(|workout| workout.date).collect()
}

/// Consecutive completed days ending today or yesterday
#[must_use]
pub fn current_streak(records: &[CompletedWorkout<'_>], today: NaiveDate) -> u32 {
    current_streak_from_days(&completed_days(records), today)
}

/// [`current_streak`] over an already deduplicated day set
///
/// Days after `today` are ignored.
#[must_use]
pub fn current_streak_from_days(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let Some(&most_recent) = days.range(..=today).next_back() else {
        return 0;
    };

    if (today - most_recent).num_days() > 1 {
        return 0;
    }

    let mut streak = 0_u32;
    let mut cursor = most_recent;
    while days.contains(&cursor) {
        streak = streak.saturating_add(1);
        let Some(previous) = cursor.checked_sub_signed(Duration::days(1)) else {
            break;
        };
        cursor = previous;
    }

    streak
}

/// Longest run of consecutive completed days anywhere in the history
#[must_use]
pub fn longest_streak(records: &[CompletedWorkout<'_>]) -> u32 {
    longest_streak_from_days(&completed_days(records))
}

/// [`longest_streak`] over an already deduplicated day set
#[must_use]
pub fn longest_streak_from_days(days: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0_u32;
    let mut run = 0_u32;
    let mut previous: Option<NaiveDate> = None;

    for &day in days {
        run = match previous {
            Some(prior) if (day - prior).num_days() == 1 => run.saturating_add(1),
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }

    longest
}
