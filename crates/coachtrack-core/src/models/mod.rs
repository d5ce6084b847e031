// ABOUTME: Record models consumed by the aggregation engine
// ABOUTME: Re-exports activity, assignment, completion, sample, and exercise-set types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

//! # Data Models
//!
//! Every model here is a read-only snapshot handed over by the data layer.
//! Nothing in the workspace creates, mutates, or deletes them; aggregation is
//! a pure transformation over these values.
//!
//! ## Core Models
//!
//! - `ActivityRecord`: something happened on a day (session, weigh-in, photo)
//! - `AssignmentRecord`: expected activity, used only as a denominator
//! - `CompletionRecord`: realized activity, used only as a numerator
//! - `Sample`: one dated scalar measurement such as body weight
//! - `ExerciseSet`: one logged set, used for personal-record detection

mod exercise;
mod measurement;
mod records;

pub use exercise::ExerciseSet;
pub use measurement::{MeasurementUnit, Metric, Sample};
pub use records::{ActivityKind, ActivityRecord, AssignmentRecord, CompletionRecord, Dated};
