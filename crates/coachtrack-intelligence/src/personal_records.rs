// ABOUTME: Personal-record detection over logged exercise sets
// ABOUTME: Walks sets chronologically and reports every set that beats the exercise's previous best
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

use chrono::{DateTime, Utc};
use coachtrack_core::models::ExerciseSet;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

/// Best performance for an exercise at some point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BestLift {
    /// Load lifted
    pub weight: f64,
    /// Repetitions at that load
    pub reps: u32,
    /// When it was achieved
    pub achieved_at: DateTime<Utc>,
}

impl BestLift {
    fn from_set(set: &ExerciseSet) -> Self {
        Self {
            weight: set.weight,
            reps: set.reps,
            achieved_at: set.performed_at,
        }
    }

    /// Heavier load wins; equal load with more reps also wins
    fn is_beaten_by(&self, set: &ExerciseSet) -> bool {
        match set.weight.total_cmp(&self.weight) {
            Ordering::Greater => true,
            Ordering::Equal => set.reps > self.reps,
            Ordering::Less => false,
        }
    }
}

/// A set that beat the exercise's previous best
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecord {
    /// Exercise name as logged on the record-setting set
    pub exercise: String,
    /// The new best
    pub lift: BestLift,
    /// Best before this set; `None` for the first logged set of an exercise
    pub previous_best: Option<BestLift>,
}

impl PersonalRecord {
    /// Load gained over the previous best, if there was one
    #[must_use]
    pub fn weight_gain(&self) -> Option<f64> {
        self.previous_best
            .map(|previous| self.lift.weight - previous.weight)
    }
}

fn is_valid(set: &ExerciseSet) -> bool {
    set.weight.is_finite() && set.weight >= 0.0 && set.reps > 0
}

fn chronological(sets: &[ExerciseSet]) -> Vec<&ExerciseSet> {
    let mut ordered: Vec<&ExerciseSet> = sets
        .iter()
        .filter(|set| {
            let valid = is_valid(set);
            if !valid {
                debug!(exercise = %set.exercise, weight = set.weight, reps = set.reps, "Skipping invalid set");
            }
            valid
        })
        .collect();
    ordered.sort_by_key(|set| set.performed_at);
    ordered
}

/// Personal-record detection engine
pub struct PersonalRecordDetector;

impl PersonalRecordDetector {
    /// Every set that set a new best for its exercise, in chronological order
    ///
    /// Exercises are grouped case-insensitively. Sets with a non-finite or
    /// negative load, or zero reps, are ignored.
    #[must_use]
    pub fn detect(sets: &[ExerciseSet]) -> Vec<PersonalRecord> {
        let mut bests: BTreeMap<String, BestLift> = BTreeMap::new();
        let mut records = Vec::new();

        for set in chronological(sets) {
            let key = set.exercise_key();
            let previous_best = bests.get(&key).copied();
            if previous_best.is_some_and(|best| !best.is_beaten_by(set)) {
                continue;
            }

            let lift = BestLift::from_set(set);
            bests.insert(key, lift);
            records.push(PersonalRecord {
                exercise: set.exercise.trim().to_owned(),
                lift,
                previous_best,
            });
        }

        records
    }

    /// Current best per exercise, keyed by normalized exercise name
    #[must_use]
    pub fn best_per_exercise(sets: &[ExerciseSet]) -> BTreeMap<String, BestLift> {
        let mut bests: BTreeMap<String, BestLift> = BTreeMap::new();
        for set in chronological(sets) {
            let key = set.exercise_key();
            match bests.get(&key) {
                Some(best) if !best.is_beaten_by(set) => {}
                _ => {
                    bests.insert(key, BestLift::from_set(set));
                }
            }
        }
        bests
    }

    /// Records achieved at or after `since`, baselines included
    #[must_use]
    pub fn recent_records(sets: &[ExerciseSet], since: DateTime<Utc>) -> Vec<PersonalRecord> {
        Self::detect(sets)
            .into_iter()
            .filter(|record| record.lift.achieved_at >= since)
            .collect()
    }
}
