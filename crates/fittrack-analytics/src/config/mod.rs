// ABOUTME: Analytics configuration: weekly goal, calendar offset, and distribution window
// ABOUTME: Environment-driven overrides over defaults with range validation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

//! Analytics configuration.
//!
//! The weekly goal is injected configuration, never computed. The UTC offset
//! defines the user's "local calendar" so that no computation depends on the
//! timezone of the machine that happens to run it.

use std::env;
use std::str::FromStr;

use chrono::{FixedOffset, Offset, Utc};
use fittrack_core::constants::{
    analytics::DEFAULT_WEEKLY_GOAL,
    env_vars,
    limits::{
        MAX_DISTRIBUTION_WINDOW_DAYS, MAX_UTC_OFFSET_MINUTES, MAX_WEEKLY_GOAL, MIN_WEEKLY_GOAL,
    },
};
use fittrack_core::ProgressError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable present but not parseable
    #[error("Parse error for {name}: {value:?}")]
    Parse {
        /// Variable name
        name: &'static str,
        /// Raw value found in the environment
        value: String,
    },

    /// Environment variable access error (e.g. non-unicode value)
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for ProgressError {
    fn from(error: ConfigError) -> Self {
        Self::InvalidConfiguration(error.to_string())
    }
}

/// Parameters of a snapshot computation that are not part of the data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Workouts per week the user aims for
    pub weekly_goal: u32,
    /// Offset of the user's calendar from UTC, in minutes
    pub utc_offset_minutes: i32,
    /// Restrict the category distribution to the trailing N days (`None` = all history)
    pub distribution_window_days: Option<u32>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            weekly_goal: DEFAULT_WEEKLY_GOAL,
            utc_offset_minutes: 0,
            distribution_window_days: None,
        }
    }
}

impl AnalyticsConfig {
    /// Load configuration from environment variables with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// resulting configuration fails validation
    pub fn from_environment() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(goal) = read_var::<u32>(env_vars::WEEKLY_GOAL)? {
            config.weekly_goal = goal;
        }

        if let Some(offset) = read_var::<i32>(env_vars::UTC_OFFSET_MINUTES)? {
            config.utc_offset_minutes = offset;
        }

        if let Some(window) = read_var::<u32>(env_vars::DISTRIBUTION_WINDOW_DAYS)? {
            config.distribution_window_days = Some(window);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any value is outside its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_WEEKLY_GOAL..=MAX_WEEKLY_GOAL).contains(&self.weekly_goal) {
            return Err(ConfigError::ValueOutOfRange(
                "weekly_goal must be between 1 and 100",
            ));
        }

        if self.utc_offset_minutes.unsigned_abs() > MAX_UTC_OFFSET_MINUTES.unsigned_abs() {
            return Err(ConfigError::ValueOutOfRange(
                "utc_offset_minutes must be within +/- 840",
            ));
        }

        if let Some(window) = self.distribution_window_days {
            if window == 0 || window > MAX_DISTRIBUTION_WINDOW_DAYS {
                return Err(ConfigError::ValueOutOfRange(
                    "distribution_window_days must be between 1 and 3660",
                ));
            }
        }

        Ok(())
    }

    /// Builder-style weekly goal override
    #[must_use]
    pub const fn with_weekly_goal(mut self, weekly_goal: u32) -> Self {
        self.weekly_goal = weekly_goal;
        self
    }

    /// Builder-style UTC offset override
    #[must_use]
    pub const fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// Builder-style distribution window override
    #[must_use]
    pub const fn with_distribution_window_days(mut self, days: u32) -> Self {
        self.distribution_window_days = Some(days);
        self
    }

    /// Calendar offset as a chrono `FixedOffset` (UTC when the stored value is unusable)
    #[must_use]
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}

fn read_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    let raw = match env::var(name) {
        Ok(raw) => raw,
        Err(env::VarError::NotPresent) => return Ok(None),
        Err(error) => return Err(ConfigError::EnvVar(error)),
    };

    match raw.trim().parse::<T>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(ConfigError::Parse { name, value: raw }),
    }
}
