// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, a fixed reference date, and workout record builders
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fittrack`

use std::env;
use std::sync::Once;

use chrono::{Duration, NaiveDate};
use fittrack::WorkoutRecord;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Reference date used across tests: Thursday 2025-03-06 (ISO week starts Monday 03-03)
pub fn fixed_now() -> NaiveDate {
    date(2025, 3, 6)
}

/// `now` minus `days`
pub fn days_ago(now: NaiveDate, days: i64) -> NaiveDate {
    now - Duration::days(days)
}

/// `YYYY-MM-DD` text for a date
pub fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Record completed via the on-record flag, scheduled for `on`
pub fn completed_workout(id: &str, category: &str, on: NaiveDate) -> WorkoutRecord {
    WorkoutRecord::new(id, format!("Workout {id}"))
        .with_category(category)
        .scheduled_on(iso(on))
        .mark_completed()
}

/// Record scheduled for `on` with no completion signal
pub fn planned_workout(id: &str, on: NaiveDate) -> WorkoutRecord {
    WorkoutRecord::new(id, format!("Workout {id}")).scheduled_on(iso(on))
}
