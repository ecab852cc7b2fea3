// ABOUTME: Completion filter deciding which workout records count as completed
// ABOUTME: Requires a resolvable date plus the on-record flag or the external completion index
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

//! Completion filter.
//!
//! A record is completed iff it has a resolvable date (`completedAt`, falling back
//! to `scheduledDate`) **and** at least one completion signal is true: the
//! on-record `completed` flag, or a `true` entry for its id in the external
//! completion index. Both signals are honored because stores written before the
//! index existed were never migrated.

use chrono::NaiveDate;
use fittrack_core::{CompletionIndex, WorkoutRecord};

use crate::date_normalizer::DateNormalizer;

/// A completed workout together with its normalized completion date
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletedWorkout<'a> {
    /// The underlying record
    pub record: &'a WorkoutRecord,
    /// Calendar date the workout counts for
    pub date: NaiveDate,
}

/// Applies the dual-signal completion rule against one completion index
#[derive(Debug, Clone, Copy)]
pub struct CompletionFilter<'i> {
    index: &'i CompletionIndex,
    normalizer: DateNormalizer,
}

impl<'i> CompletionFilter<'i> {
    /// Filter over `index`, resolving dates with `normalizer`
    #[must_use]
    pub const fn new(index: &'i CompletionIndex, normalizer: DateNormalizer) -> Self {
        Self { index, normalizer }
    }

    /// Date a record counts for: `completedAt`, else `scheduledDate`
    ///
    /// An unparseable `completedAt` falls through to `scheduledDate` the same way a
    /// missing one does.
    #[must_use]
    pub fn resolve_date(&self, record: &WorkoutRecord) -> Option<NaiveDate> {
        self.normalizer
            .normalize(record.completed_at.as_ref())
            .or_else(|| self.normalizer.normalize(record.scheduled_date.as_ref()))
    }

    /// Normalized `scheduledDate`, ignoring `completedAt`
    #[must_use]
    pub fn scheduled_on(&self, record: &WorkoutRecord) -> Option<NaiveDate> {
        self.normalizer.normalize(record.scheduled_date.as_ref())
    }

    /// Whether any completion signal is set for the record
    #[must_use]
    pub fn has_completion_signal(&self, record: &WorkoutRecord) -> bool {
        record.completed_flag == Some(true) || self.index.get(&record.id) == Some(&true)
    }

    /// Completion date of the record, or `None` if it does not count as completed
    #[must_use]
    pub fn completed_on(&self, record: &WorkoutRecord) -> Option<NaiveDate> {
        if !self.has_completion_signal(record) {
            return None;
        }
        self.resolve_date(record)
    }

    /// Whether the record counts as completed
    #[must_use]
    pub fn is_completed(&self, record: &WorkoutRecord) -> bool {
        self.completed_on(record).is_some()
    }

    /// All completed records, in input order
    #[must_use]
    pub fn collect<'r>(&self, records: &'r [WorkoutRecord]) -> Vec<CompletedWorkout<'r>> {
        records
            .iter()
            .filter_map(|record| {
                self.completed_on(record)
                    .map(|date| CompletedWorkout { record, date })
            })
            .collect()
    }
}

/// Single-record form of the completion rule
#[must_use]
pub fn is_completed(
    record: &WorkoutRecord,
    index: &CompletionIndex,
    normalizer: DateNormalizer,
) -> bool {
    CompletionFilter::new(index, normalizer).is_completed(record)
}
