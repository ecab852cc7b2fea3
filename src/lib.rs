// ABOUTME: Main library entry point for Fittrack workout progress analytics
// ABOUTME: Host-facing surface over the analytics engine: sources, tracker, export, config, logging
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

#![deny(unsafe_code)]

//! # Fittrack
//!
//! Turns a loosely structured workout log into weekly and monthly adherence
//! statistics, a completion streak, a week-over-week trend, and a muscle-group
//! distribution, bundled as one immutable [`ProgressSnapshot`].
//!
//! ## Architecture
//!
//! - **`fittrack-core`**: records, snapshot value, errors, constants
//! - **`fittrack-analytics`**: the pure computation pipeline
//! - **this crate**: workout sources, the [`ProgressTracker`] orchestrator, JSON
//!   export, environment configuration, and logging setup
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fittrack::{InMemoryWorkoutStore, ProgressTracker, WorkoutRecord};
//!
//! let mut store = InMemoryWorkoutStore::new();
//! store.insert(
//!     WorkoutRecord::new("w1", "Workout A - Legs")
//!         .scheduled_on("2025-03-05")
//!         .mark_completed(),
//! );
//!
//! let tracker = ProgressTracker::new(store);
//! if let Some(now) = NaiveDate::from_ymd_opt(2025, 3, 5) {
//!     let snapshot = tracker.snapshot(now);
//!     assert_eq!(snapshot.weekly_workouts, 1);
//!     assert_eq!(snapshot.streak_days, 1);
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// JSON export of snapshots
pub mod export;

/// Tracing subscriber setup
pub mod logging;

/// Snapshot orchestration over a workout source
pub mod progress;

/// Workout source contract and in-memory store
pub mod store;

pub use fittrack_analytics::{
    compute_snapshot, AnalyticsConfig, DateNormalizer, ProgressRequest, ProgressRequestBuilder,
};
pub use fittrack_core::{
    CategoryCount, CompletionIndex, DailyActivity, ErrorCode, ProgressError, ProgressResult,
    ProgressSnapshot, RawDate, WeeklyTrend, WorkoutRecord,
};
pub use progress::ProgressTracker;
pub use store::{InMemoryWorkoutStore, WorkoutSource};
