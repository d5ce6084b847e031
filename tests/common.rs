// ABOUTME: Shared fixtures for coachtrack integration tests
// ABOUTME: Builds calendar days, instants, and client record snapshots from short literals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test fixtures

use chrono::{DateTime, Utc};
use coachtrack::intelligence::summary::{ClientRecords, MeasurementSeries};
use coachtrack::models::{
    ActivityKind, ActivityRecord, AssignmentRecord, CompletionRecord, ExerciseSet, Metric, Sample,
};
use coachtrack::time::{parse_timestamp, CalendarDay};
use uuid::Uuid;

/// `YYYY-MM-DD` literal as a calendar day
pub fn day(value: &str) -> CalendarDay {
    CalendarDay::parse(value).unwrap()
}

/// RFC 3339 literal as an instant
pub fn at(value: &str) -> DateTime<Utc> {
    parse_timestamp(value).unwrap()
}

/// Noon UTC on `value`
pub fn noon(value: &str) -> DateTime<Utc> {
    at(&format!("{value}T12:00:00Z"))
}

/// Workout session at noon UTC on each day
pub fn workouts(owner: Uuid, days: &[&str]) -> Vec<ActivityRecord> {
    days.iter()
        .map(|d| ActivityRecord::new(owner, ActivityKind::WorkoutSession, noon(d)))
        .collect()
}

/// Assignment at noon UTC on each day
pub fn assignments(owner: Uuid, days: &[&str]) -> Vec<AssignmentRecord> {
    days.iter()
        .map(|d| AssignmentRecord::new(owner, None, noon(d)))
        .collect()
}

/// Completion at noon UTC on each day
pub fn completions(owner: Uuid, days: &[&str]) -> Vec<CompletionRecord> {
    days.iter()
        .map(|d| CompletionRecord::new(owner, None, noon(d)))
        .collect()
}

/// Body-weight samples at noon UTC
pub fn weights(points: &[(&str, f64)]) -> Vec<Sample> {
    points
        .iter()
        .map(|(d, value)| Sample::new(noon(d), *value))
        .collect()
}

/// Exercise set at noon UTC
pub fn set(exercise: &str, weight: f64, reps: u32, on: &str) -> ExerciseSet {
    ExerciseSet::new(exercise, weight, reps, noon(on))
}

/// A client who trained on the three days up to 2025-06-11, with a
/// weight loss trend and one bench-press record this month
pub fn sample_client(client_id: Uuid) -> ClientRecords {
    let mut records = ClientRecords::new(client_id);
    records.activities = workouts(client_id, &["2025-06-09", "2025-06-10", "2025-06-11"]);
    records.assignments = assignments(
        client_id,
        &["2025-06-02", "2025-06-04", "2025-06-09", "2025-06-11"],
    );
    records.completions = completions(client_id, &["2025-06-02", "2025-06-09", "2025-06-11"]);
    records.measurements = vec![MeasurementSeries::new(
        Metric::BodyWeight,
        weights(&[("2025-06-01", 82.0), ("2025-06-10", 80.5)]),
    )];
    records.exercise_sets = vec![
        set("Bench Press", 80.0, 5, "2025-04-01"),
        set("bench press", 85.0, 5, "2025-06-10"),
    ];
    records
}
