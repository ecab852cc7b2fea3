// ABOUTME: Progress tracker orchestrating one snapshot computation per caller request
// ABOUTME: Reads a WorkoutSource once, delegates to the snapshot builder, and exports JSON
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

//! Progress tracking
//!
//! [`ProgressTracker`] is the host-facing orchestrator. It does not debounce,
//! cache, or schedule: the caller invokes [`ProgressTracker::snapshot`] whenever a
//! workout is added, deleted, or toggled, and gets a fresh value back.

use chrono::NaiveDate;
use fittrack_analytics::config::AnalyticsConfig;
use fittrack_analytics::snapshot_builder::compute_snapshot;
use fittrack_core::{ProgressResult, ProgressSnapshot};
use tracing::info;

use crate::export;
use crate::store::WorkoutSource;

/// Computes progress snapshots from a workout source
#[derive(Debug, Clone)]
pub struct ProgressTracker<S> {
    source: S,
    config: AnalyticsConfig,
}

impl<S: WorkoutSource> ProgressTracker<S> {
    /// Tracker over `source` with the default configuration
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            config: AnalyticsConfig::default(),
        }
    }

    /// Tracker over `source` with a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::InvalidConfiguration` if `config` fails validation
    pub fn with_config(source: S, config: AnalyticsConfig) -> ProgressResult<Self> {
        config.validate()?;
        Ok(Self { source, config })
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// The underlying source
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the underlying source
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consume the tracker, returning its source
    #[must_use]
    pub fn into_source(self) -> S {
        self.source
    }

    /// Compute the snapshot as of `now`
    #[must_use]
    pub fn snapshot(&self, now: NaiveDate) -> ProgressSnapshot {
        let workouts = self.source.all_workouts();
        let index = self.source.completion_index();
        let snapshot = compute_snapshot(&workouts, &index, now, &self.config);

        info!(
            %now,
            weekly_workouts = snapshot.weekly_workouts,
            weekly_goal = snapshot.weekly_goal,
            weekly_trend = %snapshot.weekly_trend,
            streak_days = snapshot.streak_days,
            total_completed = snapshot.total_completed,
            "Computed progress snapshot"
        );

        snapshot
    }

    /// Compute the snapshot as of `now` and encode it as JSON
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Serialization` if encoding fails
    pub fn export_json(&self, now: NaiveDate) -> ProgressResult<String> {
        export::to_json(&self.snapshot(now))
    }
}
