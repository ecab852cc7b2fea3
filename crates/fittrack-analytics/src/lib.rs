// ABOUTME: Workout progress analytics engine turning a raw workout log into a ProgressSnapshot
// ABOUTME: Pipeline of date normalization, completion filtering, aggregation, streaks, trends
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

#![deny(unsafe_code)]

//! # Fittrack Analytics
//!
//! Pure, synchronous computation of progress statistics. Data flows one way:
//!
//! ```text
//! raw records -> normalized/filtered records -> per-stage aggregates -> snapshot
//! ```
//!
//! No stage mutates another's output, no stage performs I/O, and the reference
//! date is always an argument. Concurrent calls are safe as long as the caller
//! does not mutate the collection while a call is in flight.
//!
//! ## Modules
//!
//! - **`date_normalizer`**: heterogeneous stored dates to calendar dates
//! - **`completion_filter`**: dual-signal completion rule (record flag or index)
//! - **`period_aggregator`**: ISO weeks, month-to-date, trailing windows
//! - **`streak_calculator`**: current and longest streaks over distinct days
//! - **`distribution_analyzer`**: per-category counts with title fallback
//! - **`trend_classifier`**: week-over-week up/down/stable
//! - **`snapshot_builder`**: composes everything into a `ProgressSnapshot`
//! - **config**: weekly goal, calendar offset, distribution window

/// Analytics configuration and its errors
pub mod config;

/// Date parsing into the user's calendar
pub mod date_normalizer;

/// Which records count as completed
pub mod completion_filter;

/// Calendar windows and per-window aggregates
pub mod period_aggregator;

/// Streaks over distinct completed days
pub mod streak_calculator;

/// Category distribution of completed workouts
pub mod distribution_analyzer;

/// Week-over-week trend
pub mod trend_classifier;

/// Snapshot composition and request builder
pub mod snapshot_builder;

pub use completion_filter::{is_completed, CompletedWorkout, CompletionFilter};
pub use config::{AnalyticsConfig, ConfigError};
pub use date_normalizer::DateNormalizer;
pub use distribution_analyzer::{category_distribution, category_label, title_label};
pub use period_aggregator::{summarize, DateRange, PeriodSummary};
pub use snapshot_builder::{compute_snapshot, ProgressRequest, ProgressRequestBuilder};
pub use streak_calculator::{current_streak, longest_streak};
pub use trend_classifier::classify;
