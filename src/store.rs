// ABOUTME: Read-only accessor contract between workout stores and the analytics engine
// ABOUTME: WorkoutSource trait plus an in-memory store for hosts and tests
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

//! Workout sources
//!
//! The engine never owns persistence. A host hands it anything implementing
//! [`WorkoutSource`]; the engine reads the collection and the completion index
//! once per computation and never writes back.

use std::borrow::Cow;
use std::mem;

use fittrack_core::{CompletionIndex, WorkoutRecord};
use tracing::debug;

/// Read-only view of a workout collection and its completion index
pub trait WorkoutSource {
    /// Every stored workout, in storage order
    fn all_workouts(&self) -> Cow<'_, [WorkoutRecord]>;

    /// External completion index keyed by workout id
    fn completion_index(&self) -> Cow<'_, CompletionIndex>;
}

/// Workout collection held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkoutStore {
    workouts: Vec<WorkoutRecord>,
    completion_index: CompletionIndex,
}

impl InMemoryWorkoutStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `workouts` and an empty completion index
    #[must_use]
    pub fn with_workouts(workouts: Vec<WorkoutRecord>) -> Self {
        Self {
            workouts,
            completion_index: CompletionIndex::new(),
        }
    }

    /// Insert a workout, replacing any stored workout with the same id
    ///
    /// Returns the replaced workout, if any.
    pub fn insert(&mut self, workout: WorkoutRecord) -> Option<WorkoutRecord> {
        debug!(workout_id = %workout.id, "Storing workout");
        if let Some(existing) = self.workouts.iter_mut().find(|w| w.id == workout.id) {
            return Some(mem::replace(existing, workout));
        }
        self.workouts.push(workout);
        None
    }

    /// Remove a workout and its completion index entry
    pub fn remove(&mut self, id: &str) -> Option<WorkoutRecord> {
        self.completion_index.remove(id);
        let position = self.workouts.iter().position(|w| w.id == id)?;
        debug!(workout_id = %id, "Removed workout");
        Some(self.workouts.remove(position))
    }

    /// Record completion state for `id` in the completion index
    ///
    /// Returns `false` if no workout with that id is stored; the index is left
    /// untouched in that case.
    pub fn set_completed(&mut self, id: &str, completed: bool) -> bool {
        if !self.workouts.iter().any(|w| w.id == id) {
            return false;
        }
        self.completion_index.insert(id.to_owned(), completed);
        debug!(workout_id = %id, completed, "Updated completion index");
        true
    }

    /// Look up a workout by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&WorkoutRecord> {
        self.workouts.iter().find(|w| w.id == id)
    }

    /// Number of stored workouts
    #[must_use]
    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    /// Whether the store holds no workouts
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

impl WorkoutSource for InMemoryWorkoutStore {
    fn all_workouts(&self) -> Cow<'_, [WorkoutRecord]> {
        Cow::Borrowed(&self.workouts)
    }

    fn completion_index(&self) -> Cow<'_, CompletionIndex> {
        Cow::Borrowed(&self.completion_index)
    }
}

impl FromIterator<WorkoutRecord> for InMemoryWorkoutStore {
    fn from_iter<I: IntoIterator<Item = WorkoutRecord>>(iter: I) -> Self {
        let mut store = Self::new();
        for workout in iter {
            store.insert(workout);
        }
        store
    }
}
