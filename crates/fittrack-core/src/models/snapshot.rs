// ABOUTME: Progress snapshot value produced by the analytics engine
// ABOUTME: Weekly adherence, trend, monthly progress, streak, distribution, and daily activity
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::constants::analytics::DAILY_ACTIVITY_DAYS;

/// Direction of the week-over-week change in completed workouts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeeklyTrend {
    /// More workouts than the previous period
    Up,
    /// Fewer workouts than the previous period
    Down,
    /// Same number of workouts
    #[default]
    Stable,
}

impl fmt::Display for WeeklyTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Stable => write!(f, "stable"),
        }
    }
}

/// Number of completed workouts carrying one category label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Category or muscle-group label
    pub label: String,
    /// Completed workouts with this label
    pub count: u32,
}

impl CategoryCount {
    /// Create a new label/count pair
    #[must_use]
    pub fn new(label: impl Into<String>, count: u32) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// One day of the seven-day activity strip
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyActivity {
    /// Calendar date, serialized as `YYYY-MM-DD`
    pub calendar_date: NaiveDate,
    /// Short English weekday name (`Mon` .. `Sun`)
    pub weekday_label: String,
    /// Completed workouts on this date (not deduplicated)
    pub count: u32,
    /// Whether this entry is the reference date
    pub is_today: bool,
}

impl DailyActivity {
    /// Create an entry for `date` with the given count
    #[must_use]
    pub fn new(date: NaiveDate, count: u32, today: NaiveDate) -> Self {
        Self {
            calendar_date: date,
            weekday_label: weekday_label(date.weekday()).to_owned(),
            count,
            is_today: date == today,
        }
    }
}

/// Short English label for a weekday
#[must_use]
pub const fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Immutable progress statistics computed for one reference date
///
/// A snapshot has no identity beyond its values: two computations over identical
/// inputs and the same reference date compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    /// Completed workouts in the current ISO week (Monday start)
    pub weekly_workouts: u32,
    /// Caller-supplied weekly goal
    pub weekly_goal: u32,
    /// This week compared with the previous seven days
    pub weekly_trend: WeeklyTrend,
    /// Share of elapsed days this month with at least one completed workout
    pub monthly_progress_percent: u32,
    /// Consecutive days with a completed workout, ending today or yesterday
    pub streak_days: u32,
    /// Completed workouts dated on or before the reference date
    pub total_completed: u32,
    /// Completed share of workouts scheduled on or before the reference date
    pub completion_rate_percent: u32,
    /// Completed workouts per category, descending by count
    pub category_distribution: Vec<CategoryCount>,
    /// Seven entries, oldest first, ending at the reference date (fewer only when
    /// the window would start before the earliest representable date)
    pub daily_activity: Vec<DailyActivity>,
}

impl ProgressSnapshot {
    /// Snapshot for a collection with no usable completed workouts
    #[must_use]
    pub fn zeroed(today: NaiveDate, weekly_goal: u32) -> Self {
        let daily_activity = (0..DAILY_ACTIVITY_DAYS)
            .rev()
            .filter_map(|days_back| today.checked_sub_signed(Duration::days(days_back)))
            .map(|date| DailyActivity::new(date, 0, today))
            .collect();

        Self {
            weekly_workouts: 0,
            weekly_goal,
            weekly_trend: WeeklyTrend::Stable,
            monthly_progress_percent: 0,
            streak_days: 0,
            total_completed: 0,
            completion_rate_percent: 0,
            category_distribution: Vec::new(),
            daily_activity,
        }
    }

    /// Whether the weekly goal has been reached
    #[must_use]
    pub const fn weekly_goal_met(&self) -> bool {
        self.weekly_workouts >= self.weekly_goal
    }
}
