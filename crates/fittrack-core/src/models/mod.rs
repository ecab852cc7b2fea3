// ABOUTME: Core data models for workout progress analytics
// ABOUTME: Re-exports workout record input types and progress snapshot output types
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

/// Progress snapshot output value and its parts
mod snapshot;
/// Workout record input shape as owned by the external store
mod workout;

pub use snapshot::{weekday_label, CategoryCount, DailyActivity, ProgressSnapshot, WeeklyTrend};
pub use workout::{CompletionIndex, RawDate, WorkoutRecord};
