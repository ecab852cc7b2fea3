// ABOUTME: Core types and constants for the Fittrack progress analytics workspace
// ABOUTME: Foundation crate with workout records, progress snapshots, errors, and constants
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

#![deny(unsafe_code)]

//! # Fittrack Core
//!
//! Foundation crate providing the shared vocabulary of the Fittrack workspace.
//! It changes rarely so that the analytics crate and the host-facing crate can
//! compile incrementally on top of it.
//!
//! ## Modules
//!
//! - **models**: `WorkoutRecord` (read-only input) and `ProgressSnapshot` (output)
//! - **errors**: `ProgressError`, `ErrorCode` and the `ProgressResult` alias
//! - **constants**: defaults and environment variable names

/// Caller-contract errors and stable error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Workout records and progress snapshot value types
pub mod models;

pub use errors::{ErrorCode, ProgressError, ProgressResult};
pub use models::{
    CategoryCount, CompletionIndex, DailyActivity, ProgressSnapshot, RawDate, WeeklyTrend,
    WorkoutRecord,
};
