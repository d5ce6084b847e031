// ABOUTME: Logged exercise sets used for personal-record detection
// ABOUTME: One row per performed set with load, repetitions, and timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

use crate::models::Dated;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single performed set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSet {
    /// Exercise name as entered by the coach
    pub exercise: String,
    /// Load lifted, in the client's weight unit
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
    /// When the set was logged
    pub performed_at: DateTime<Utc>,
}

impl ExerciseSet {
    /// Create a set
    #[must_use]
    pub fn new(
        exercise: impl Into<String>,
        weight: f64,
        reps: u32,
        performed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            exercise: exercise.into(),
            weight,
            reps,
            performed_at,
        }
    }

    /// Exercise name normalized for grouping ("Bench Press " == "bench press")
    #[must_use]
    pub fn exercise_key(&self) -> String {
        self.exercise.trim().to_lowercase()
    }
}

impl Dated for ExerciseSet {
    fn timestamp(&self) -> DateTime<Utc> {
        self.performed_at
    }
}
