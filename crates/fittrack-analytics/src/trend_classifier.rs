// ABOUTME: Week-over-week trend classification for completed workout counts
// ABOUTME: Strict comparison of the current week against the previous one: up, down, or stable
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

use fittrack_core::WeeklyTrend;

/// Classify `current` against `previous`; equal counts are stable
#[must_use]
pub const fn classify(current: u32, previous: u32) -> WeeklyTrend {
    if current > previous {
        WeeklyTrend::Up
    } else if current < previous {
        WeeklyTrend::Down
    } else {
        WeeklyTrend::Stable
    }
}
