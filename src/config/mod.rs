// ABOUTME: Configuration module for hosts embedding the analytics engine
// ABOUTME: Groups analytics and logging settings loaded from the process environment
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

/// Environment-driven engine configuration
pub mod environment;

pub use environment::{EngineConfig, Environment};
pub use fittrack_analytics::config::{AnalyticsConfig, ConfigError};
