// ABOUTME: Environment configuration for hosts: analytics parameters plus logging setup
// ABOUTME: Reads FITTRACK_* and logging variables over defaults and validates the result
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

//! Environment-based configuration

use std::fmt;

use anyhow::{Context, Result};
use fittrack_analytics::config::AnalyticsConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::logging::LoggingConfig;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Everything a host needs to run the engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Snapshot computation parameters
    pub analytics: AnalyticsConfig,
    /// Tracing subscriber setup
    pub logging: LoggingConfig,
    /// Deployment environment
    pub environment: Environment,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an analytics variable is set to an unparseable or
    /// out-of-range value
    pub fn from_env() -> Result<Self> {
        let logging = LoggingConfig::from_env();
        let environment = Environment::from_str_or_default(&logging.environment);

        let analytics = AnalyticsConfig::from_environment()
            .inspect_err(|error| warn!("Rejected analytics configuration: {error}"))
            .context("Invalid analytics configuration in environment")?;

        info!(
            weekly_goal = analytics.weekly_goal,
            utc_offset_minutes = analytics.utc_offset_minutes,
            distribution_window_days = ?analytics.distribution_window_days,
            %environment,
            "Loaded engine configuration from environment"
        );

        Ok(Self {
            analytics,
            logging,
            environment,
        })
    }

    /// Human readable summary of the effective configuration
    #[must_use]
    pub fn summary(&self) -> String {
        let window = self
            .analytics
            .distribution_window_days
            .map_or_else(|| "all".to_owned(), |days| format!("{days}d"));

        format!(
            "environment={} weekly_goal={} utc_offset_minutes={} distribution_window={} log_level={} log_format={}",
            self.environment,
            self.analytics.weekly_goal,
            self.analytics.utc_offset_minutes,
            window,
            self.logging.level,
            self.logging.format,
        )
    }
}
