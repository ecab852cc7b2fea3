// ABOUTME: Error types for caller-contract violations in the progress analytics engine
// ABOUTME: Malformed workout data never reaches this module; it is excluded, not reported
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

//! # Error Handling
//!
//! The analytics engine distinguishes two kinds of trouble:
//!
//! - **Data quality** (unparseable dates, missing categories, empty collections).
//!   These are normal outcomes. Affected records are excluded or relabelled and the
//!   snapshot is still produced.
//! - **Caller contract** (no `now` supplied, invalid configuration, export failure).
//!   These surface as [`ProgressError`] before any computation starts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable error codes exposed to hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// A required parameter was not supplied
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,

    // Configuration (6000-6999)
    /// Configuration failed validation
    #[serde(rename = "INVALID_CONFIGURATION")]
    InvalidConfiguration = 6000,

    // Serialization (7000-7999)
    /// A snapshot could not be encoded or decoded
    #[serde(rename = "SERIALIZATION_FAILED")]
    SerializationFailed = 7000,
}

impl ErrorCode {
    /// Human readable description of the code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MissingRequiredField => "A required parameter is missing",
            Self::InvalidConfiguration => "The analytics configuration is invalid",
            Self::SerializationFailed => "The progress snapshot could not be serialized",
        }
    }
}

/// Errors raised by the progress analytics surface
#[derive(Debug, Error)]
pub enum ProgressError {
    /// A required parameter (such as the reference date) was not supplied
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// Configuration failed validation or could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// JSON encoding or decoding of a snapshot failed
    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProgressError {
    /// The reference date was not supplied to a request builder
    #[must_use]
    pub const fn missing_now() -> Self {
        Self::MissingParameter("now")
    }

    /// Stable code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MissingParameter(_) => ErrorCode::MissingRequiredField,
            Self::InvalidConfiguration(_) => ErrorCode::InvalidConfiguration,
            Self::Serialization(_) => ErrorCode::SerializationFailed,
        }
    }
}

/// Result alias used across the workspace
pub type ProgressResult<T> = Result<T, ProgressError>;
