// ABOUTME: Period aggregation of completed workouts over closed calendar-date windows
// ABOUTME: ISO weeks (Monday start), month-to-date, trailing N-day windows, and period summaries
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

//! Period aggregation.
//!
//! Windows are closed on both ends and expressed in calendar dates, so "this
//! week" is Monday through Sunday of the ISO week containing the reference date.
//! Windows that would reach past chrono's representable dates are clipped.

use std::collections::BTreeSet;
use std::iter;

use chrono::{Datelike, Duration, NaiveDate};
use fittrack_core::constants::analytics::DAYS_PER_WEEK;
use serde::{Deserialize, Serialize};

use crate::completion_filter::CompletedWorkout;

/// Closed calendar-date interval `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Interval from `start` to `end` inclusive; `None` if `start` is after `end`
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Single-day interval
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// ISO week (Monday through Sunday) containing `date`
    #[must_use]
    pub fn iso_week(date: NaiveDate) -> Self {
        let since_monday = Duration::days(i64::from(date.weekday().num_days_from_monday()));
        let monday = date
            .checked_sub_signed(since_monday)
            .unwrap_or(NaiveDate::MIN);
        Self {
            start: monday,
            end: monday
                .checked_add_signed(Duration::days(DAYS_PER_WEEK - 1))
                .unwrap_or(NaiveDate::MAX),
        }
    }

    /// The seven days immediately preceding the Monday of `date`'s ISO week
    ///
    /// `None` when that Monday is the earliest representable date.
    #[must_use]
    pub fn previous_iso_week(date: NaiveDate) -> Option<Self> {
        Self::iso_week(date).preceding()
    }

    /// First of `date`'s month through `date`
    #[must_use]
    pub fn month_to_date(date: NaiveDate) -> Self {
        Self {
            start: date.with_day(1).unwrap_or(date),
            end: date,
        }
    }

    /// The `days` calendar days ending at `end` (a zero length is treated as one day)
    #[must_use]
    pub fn trailing_days(end: NaiveDate, days: u32) -> Self {
        let span = i64::from(days.max(1)) - 1;
        Self {
            start: end
                .checked_sub_signed(Duration::days(span))
                .unwrap_or(NaiveDate::MIN),
            end,
        }
    }

    /// Window of equal length ending the day before this one starts
    ///
    /// `None` when this window already starts at the earliest representable date.
    #[must_use]
    pub fn preceding(&self) -> Option<Self> {
        let end = self.start.pred_opt()?;
        let start = end
            .checked_sub_signed(Duration::days(self.num_days() - 1))
            .unwrap_or(NaiveDate::MIN);
        Some(Self { start, end })
    }

    /// First day of the interval
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the interval
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered (always at least one)
    #[must_use]
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether `date` falls inside the interval
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every date in the interval, oldest first
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        iter::successors(Some(self.start), move |date| {
            date.succ_opt().filter(|next| *next <= end)
        })
    }
}

/// Aggregate figures for one window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// The window summarized
    pub range: DateRange,
    /// Completed workouts dated inside the window
    pub workouts: u32,
    /// Distinct dates with at least one completed workout
    pub active_days: u32,
    /// Sum of resolved durations (explicit, or exercises x 5)
    pub total_minutes: u32,
}

/// Completed workouts whose date falls inside `range`, in input order
#[must_use]
pub fn records_in_range<'r>(
    records: &[CompletedWorkout<'r>],
    range: DateRange,
) -> Vec<CompletedWorkout<'r>> {
    records
        .iter()
        .filter(|workout| range.contains(workout.date))
        .copied()
        .collect()
}

/// Number of completed workouts inside `range`
#[must_use]
pub fn count_in_range(records: &[CompletedWorkout<'_>], range: DateRange) -> u32 {
    let count = records
        .iter()
        .filter(|workout| range.contains(workout.date))
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Distinct dates inside `range` with at least one completed workout
#[must_use]
pub fn active_days(records: &[CompletedWorkout<'_>], range: DateRange) -> BTreeSet<NaiveDate> {
    records
        .iter()
        .map(|workout| workout.date)
        .filter(|date| range.contains(*date))
        .collect()
}

/// Summarize the completed workouts inside `range`
#[must_use]
pub fn summarize(records: &[CompletedWorkout<'_>], range: DateRange) -> PeriodSummary {
    let in_range = records_in_range(records, range);
    let total_minutes = in_range
        .iter()
        .filter_map(|workout| workout.record.resolved_duration_minutes())
        .fold(0_u32, u32::saturating_add);

    PeriodSummary {
        range,
        workouts: u32::try_from(in_range.len()).unwrap_or(u32::MAX),
        active_days: u32::try_from(active_days(&in_range, range).len()).unwrap_or(u32::MAX),
        total_minutes,
    }
}
