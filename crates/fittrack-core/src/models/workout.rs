// ABOUTME: Workout record model as exposed by the external workout store
// ABOUTME: Loosely structured input with optional category, dates, completion flag and duration
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::analytics::MINUTES_PER_EXERCISE;

/// External completion index: workout id to "done" marker
///
/// Stores that migrated from the on-record flag keep completion state here.
pub type CompletionIndex = HashMap<String, bool>;

/// A date value exactly as it arrives from the store
///
/// Stores written by different app revisions persisted dates either as strings
/// (ISO-8601, RFC 2822, browser `Date.toString()` output, ...) or as epoch
/// milliseconds. Interpretation is left to the date normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    /// Milliseconds since the Unix epoch
    EpochMillis(i64),
    /// Free-form textual date or timestamp
    Text(String),
}

impl From<&str> for RawDate {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawDate {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for RawDate {
    fn from(value: i64) -> Self {
        Self::EpochMillis(value)
    }
}

/// A single workout as stored by the application
///
/// Every field except `id` may be missing. The analytics engine treats the record
/// as read-only.
///
/// # Examples
///
/// ```
/// use fittrack_core::WorkoutRecord;
///
/// let record = WorkoutRecord::new("w-1", "Workout D - Shoulders and Abs")
///     .scheduled_on("2025-03-03")
///     .completed_at("2025-03-03T18:45:00Z")
///     .mark_completed();
///
/// assert_eq!(record.completed_flag, Some(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    /// Opaque stable identifier
    pub id: String,
    /// Display name, possibly encoding a category (`"Workout D - Shoulders and Abs"`)
    #[serde(default)]
    pub title: String,
    /// Explicit muscle-group or category label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Calendar date the workout was planned for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<RawDate>,
    /// Timestamp at which the workout was marked done
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<RawDate>,
    /// On-record "done" marker (older app revisions)
    #[serde(
        default,
        rename = "completed",
        alias = "completedFlag",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_flag: Option<bool>,
    /// Explicit duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Exercise entries; only their count is used, as a duration fallback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercises: Option<Vec<Value>>,
}

impl WorkoutRecord {
    /// Create a record with an id and title and every optional field unset
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the explicit category label
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the planned date
    #[must_use]
    pub fn scheduled_on(mut self, date: impl Into<RawDate>) -> Self {
        self.scheduled_date = Some(date.into());
        self
    }

    /// Set the completion timestamp
    #[must_use]
    pub fn completed_at(mut self, timestamp: impl Into<RawDate>) -> Self {
        self.completed_at = Some(timestamp.into());
        self
    }

    /// Set the on-record completion flag to `true`
    #[must_use]
    pub const fn mark_completed(mut self) -> Self {
        self.completed_flag = Some(true);
        self
    }

    /// Set the explicit duration
    #[must_use]
    pub const fn with_duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    /// Attach `count` placeholder exercise entries
    #[must_use]
    pub fn with_exercise_count(mut self, count: usize) -> Self {
        self.exercises = Some(vec![Value::Null; count]);
        self
    }

    /// Duration in minutes, falling back to `exercises × 5` when no explicit duration exists
    #[must_use]
    pub fn resolved_duration_minutes(&self) -> Option<u32> {
        if let Some(minutes) = self.duration_minutes {
            return Some(minutes);
        }

        self.exercises
            .as_ref()
            .filter(|exercises| !exercises.is_empty())
            .map(|exercises| {
                u32::try_from(exercises.len())
                    .unwrap_or(u32::MAX)
                    .saturating_mul(MINUTES_PER_EXERCISE)
            })
    }

    /// Explicit category with surrounding whitespace removed; blank labels count as absent
    #[must_use]
    pub fn explicit_category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }
}
