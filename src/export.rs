// ABOUTME: JSON export of progress snapshots for the "export my progress" feature
// ABOUTME: camelCase field names, integer percentages, seven-day activity oldest first
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

use fittrack_core::{ProgressResult, ProgressSnapshot};

/// Compact JSON encoding of a snapshot
///
/// # Errors
///
/// Returns `ProgressError::Serialization` if encoding fails
pub fn to_json(snapshot: &ProgressSnapshot) -> ProgressResult<String> {
    Ok(serde_json::to_string(snapshot)?)
}

/// Indented JSON encoding of a snapshot, for files meant to be read by people
///
/// # Errors
///
/// Returns `ProgressError::Serialization` if encoding fails
pub fn to_json_pretty(snapshot: &ProgressSnapshot) -> ProgressResult<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Decode a previously exported snapshot
///
/// # Errors
///
/// Returns `ProgressError::Serialization` if the document is not a valid export
pub fn from_json(json: &str) -> ProgressResult<ProgressSnapshot> {
    Ok(serde_json::from_str(json)?)
}
