// ABOUTME: Snapshot builder composing every analytics stage into one ProgressSnapshot
// ABOUTME: Deterministic in (workouts, completion index, now, config); never reads a clock
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

//! Snapshot Builder
//!
//! [`compute_snapshot`] is the single entry point of the engine. The reference
//! date is always supplied by the caller and threaded through every stage, so two
//! calls with identical arguments return value-equal snapshots.
//!
//! [`ProgressRequest`] wraps the same computation for hosts that assemble their
//! arguments incrementally. Building a request without a reference date, or with
//! an invalid configuration, fails before any computation begins.

use std::collections::HashMap;

use chrono::NaiveDate;
use fittrack_core::constants::analytics::{DAILY_ACTIVITY_DAYS, MAX_PERCENT};
use fittrack_core::{
    CompletionIndex, DailyActivity, ProgressError, ProgressResult, ProgressSnapshot, WorkoutRecord,
};
use tracing::debug;

use crate::completion_filter::{CompletedWorkout, CompletionFilter};
use crate::config::AnalyticsConfig;
use crate::date_normalizer::DateNormalizer;
use crate::distribution_analyzer::category_distribution;
use crate::period_aggregator::{active_days, count_in_range, records_in_range, DateRange};
use crate::streak_calculator::current_streak;
use crate::trend_classifier::classify;

// ============================================================================
// Entry Point
// ============================================================================

/// Compute the progress snapshot as of `now`
///
/// Records without a resolvable date are skipped; completed records dated after
/// `now` are not counted. A collection with nothing usable yields
/// [`ProgressSnapshot::zeroed`].
#[must_use]
pub fn compute_snapshot(
    workouts: &[WorkoutRecord],
    index: &CompletionIndex,
    now: NaiveDate,
    config: &AnalyticsConfig,
) -> ProgressSnapshot {
    let normalizer = DateNormalizer::new(config.utc_offset());
    let filter = CompletionFilter::new(index, normalizer);

    let completed: Vec<CompletedWorkout<'_>> = filter
        .collect(workouts)
        .into_iter()
        .filter(|workout| workout.date <= now)
        .collect();

    debug!(
        workouts = workouts.len(),
        completed = completed.len(),
        %now,
        "Filtered completed workouts"
    );

    if completed.is_empty() {
        return ProgressSnapshot::zeroed(now, config.weekly_goal);
    }

    let this_week = DateRange::iso_week(now);
    let weekly_workouts = count_in_range(&completed, this_week);
    let previous_week = DateRange::previous_iso_week(now)
        .map_or(0, |range| count_in_range(&completed, range));

    let month = DateRange::month_to_date(now);
    let monthly_progress_percent = percent(
        as_count(active_days(&completed, month).len()),
        u32::try_from(month.num_days()).unwrap_or(u32::MAX),
    );

    let distribution = match config.distribution_window_days {
        Some(days) => category_distribution(&records_in_range(
            &completed,
            DateRange::trailing_days(now, days),
        )),
        None => category_distribution(&completed),
    };

    ProgressSnapshot {
        weekly_workouts,
        weekly_goal: config.weekly_goal,
        weekly_trend: classify(weekly_workouts, previous_week),
        monthly_progress_percent,
        streak_days: current_streak(&completed, now),
        total_completed: as_count(completed.len()),
        completion_rate_percent: completion_rate(workouts, &filter, now),
        category_distribution: distribution,
        daily_activity: daily_activity(&completed, now),
    }
}

// ============================================================================
// Request Builder
// ============================================================================

/// Fully specified snapshot computation
#[derive(Debug, Clone)]
pub struct ProgressRequest<'a> {
    workouts: &'a [WorkoutRecord],
    index: &'a CompletionIndex,
    now: NaiveDate,
    config: AnalyticsConfig,
}

impl<'a> ProgressRequest<'a> {
    /// Start building a request over a workout collection and its completion index
    #[must_use]
    pub fn builder(
        workouts: &'a [WorkoutRecord],
        index: &'a CompletionIndex,
    ) -> ProgressRequestBuilder<'a> {
        ProgressRequestBuilder {
            workouts,
            index,
            now: None,
            config: AnalyticsConfig::default(),
        }
    }

    /// Reference date of the request
    #[must_use]
    pub const fn now(&self) -> NaiveDate {
        self.now
    }

    /// Configuration the request was validated with
    #[must_use]
    pub const fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Run the computation
    #[must_use]
    pub fn compute(&self) -> ProgressSnapshot {
        compute_snapshot(self.workouts, self.index, self.now, &self.config)
    }
}

/// Incremental construction of a [`ProgressRequest`]
#[derive(Debug, Clone)]
pub struct ProgressRequestBuilder<'a> {
    workouts: &'a [WorkoutRecord],
    index: &'a CompletionIndex,
    now: Option<NaiveDate>,
    config: AnalyticsConfig,
}

impl<'a> ProgressRequestBuilder<'a> {
    /// Set the reference date (required)
    #[must_use]
    pub const fn now(mut self, now: NaiveDate) -> Self {
        self.now = Some(now);
        self
    }

    /// Replace the default configuration
    #[must_use]
    pub const fn config(mut self, config: AnalyticsConfig) -> Self {
        self.config = config;
        self
    }

    /// Override only the weekly goal
    #[must_use]
    pub const fn weekly_goal(mut self, weekly_goal: u32) -> Self {
        self.config.weekly_goal = weekly_goal;
        self
    }

    /// Finish the request
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::MissingParameter("now")` if no reference date was set,
    /// or `ProgressError::InvalidConfiguration` if the configuration fails validation
    pub fn build(self) -> ProgressResult<ProgressRequest<'a>> {
        let now = self.now.ok_or_else(ProgressError::missing_now)?;
        self.config.validate()?;

        Ok(ProgressRequest {
            workouts: self.workouts,
            index: self.index,
            now,
            config: self.config,
        })
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Completed share of records scheduled on or before `now`
///
/// A due record counts as done only when its completion date is also on or
/// before `now`, matching `total_completed`.
fn completion_rate(
    workouts: &[WorkoutRecord],
    filter: &CompletionFilter<'_>,
    now: NaiveDate,
) -> u32 {
    let (due, done) = workouts
        .iter()
        .filter(|record| filter.scheduled_on(record).is_some_and(|date| date <= now))
        .fold((0_usize, 0_usize), |(due, done), record| {
            let done = if filter.completed_on(record).is_some_and(|date| date <= now) {
                done + 1
            } else {
                done
            };
            (due + 1, done)
        });

    percent(as_count(done), as_count(due))
}

/// Seven entries ending at `now`, oldest first; counts are not deduplicated
fn daily_activity(completed: &[CompletedWorkout<'_>], now: NaiveDate) -> Vec<DailyActivity> {
    let mut per_day: HashMap<NaiveDate, u32> = HashMap::new();
    for workout in completed {
        let count = per_day.entry(workout.date).or_insert(0);
        *count = count.saturating_add(1);
    }

    let window_days = u32::try_from(DAILY_ACTIVITY_DAYS).unwrap_or(u32::MAX);
    DateRange::trailing_days(now, window_days)
        .days()
        .map(|date| DailyActivity::new(date, per_day.get(&date).copied().unwrap_or(0), now))
        .collect()
}

/// `part / whole` as a whole percentage, rounded half up and capped at 100
fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    let scaled = u64::from(part) * u64::from(MAX_PERCENT);
    let rounded = (scaled + u64::from(whole) / 2) / u64::from(whole);
    u32::try_from(rounded).map_or(MAX_PERCENT, |value| value.min(MAX_PERCENT))
}

fn as_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
