// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Analytics defaults, environment variable names, and service identifiers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one flat namespace.

/// Defaults and fixed parameters of the progress analytics engine
pub mod analytics {
    /// Weekly workout goal used when the caller does not configure one
    pub const DEFAULT_WEEKLY_GOAL: u32 = 5;

    /// Duration credited per listed exercise when a record has no explicit duration
    pub const MINUTES_PER_EXERCISE: u32 = 5;

    /// Number of entries in the daily activity strip (oldest to newest, ending today)
    pub const DAILY_ACTIVITY_DAYS: i64 = 7;

    /// Length of a week-over-week comparison window
    pub const DAYS_PER_WEEK: i64 = 7;

    /// Label assigned when neither a category nor a title suffix is available
    pub const OTHER_CATEGORY_LABEL: &str = "Other";

    /// Upper bound for percentage statistics
    pub const MAX_PERCENT: u32 = 100;
}

/// Validation limits for analytics configuration
pub mod limits {
    /// Smallest accepted weekly goal
    pub const MIN_WEEKLY_GOAL: u32 = 1;

    /// Largest accepted weekly goal
    pub const MAX_WEEKLY_GOAL: u32 = 100;

    /// Largest accepted UTC offset magnitude in minutes (UTC-14:00 .. UTC+14:00)
    pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

    /// Largest accepted trailing window for the category distribution (about ten years)
    pub const MAX_DISTRIBUTION_WINDOW_DAYS: u32 = 3660;
}

/// Environment variable names read by `AnalyticsConfig::from_environment`
pub mod env_vars {
    /// Weekly workout goal (integer)
    pub const WEEKLY_GOAL: &str = "FITTRACK_WEEKLY_GOAL";

    /// UTC offset of the user's calendar in minutes (e.g. `-300` for UTC-05:00)
    pub const UTC_OFFSET_MINUTES: &str = "FITTRACK_UTC_OFFSET_MINUTES";

    /// Trailing window in days applied to the category distribution
    pub const DISTRIBUTION_WINDOW_DAYS: &str = "FITTRACK_DISTRIBUTION_WINDOW_DAYS";
}

/// Service names used in structured logging
pub mod service_names {
    /// Default service name for log records
    pub const FITTRACK: &str = "fittrack";
}
