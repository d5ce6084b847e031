// ABOUTME: Activity, assignment, and completion record snapshots
// ABOUTME: Defines the Dated trait used for window membership and day normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Anything carrying the instant it happened at
///
/// Window counting and calendar-day normalization only need this instant, so
/// every record type implements it and the counting code stays generic.
pub trait Dated {
    /// Instant the record refers to
    fn timestamp(&self) -> DateTime<Utc>;
}

impl Dated for DateTime<Utc> {
    fn timestamp(&self) -> DateTime<Utc> {
        *self
    }
}

/// Kind of activity that marks a day as active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// A completed workout session
    WorkoutSession,
    /// A body-weight entry
    WeightLog,
    /// A body-measurement entry
    MeasurementLog,
    /// An uploaded progress photo
    ProgressPhoto,
}

/// A record whose presence means activity happened that day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Record identifier
    pub id: Uuid,
    /// Client the record belongs to
    pub owner_id: Uuid,
    /// What kind of activity this was
    pub kind: ActivityKind,
    /// When it happened
    pub occurred_at: DateTime<Utc>,
}

impl ActivityRecord {
    /// Create a record with a fresh identifier
    #[must_use]
    pub fn new(owner_id: Uuid, kind: ActivityKind, occurred_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            kind,
            occurred_at,
        }
    }
}

impl Dated for ActivityRecord {
    fn timestamp(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

/// A unit of expected activity inside a period (e.g. an assigned routine)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    /// Record identifier
    pub id: Uuid,
    /// Client the routine was assigned to
    pub owner_id: Uuid,
    /// Routine reference, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routine_id: Option<Uuid>,
    /// When the routine was assigned
    pub assigned_at: DateTime<Utc>,
}

impl AssignmentRecord {
    /// Create an assignment with a fresh identifier
    #[must_use]
    pub fn new(owner_id: Uuid, routine_id: Option<Uuid>, assigned_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            routine_id,
            assigned_at,
        }
    }
}

impl Dated for AssignmentRecord {
    fn timestamp(&self) -> DateTime<Utc> {
        self.assigned_at
    }
}

/// A unit of realized activity inside a period
///
/// Completions are matched to assignments only by window membership. The
/// `routine_id` is never joined against `AssignmentRecord::routine_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Record identifier
    pub id: Uuid,
    /// Client who completed the routine
    pub owner_id: Uuid,
    /// Routine reference, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routine_id: Option<Uuid>,
    /// When the routine was completed
    pub completed_at: DateTime<Utc>,
}

impl CompletionRecord {
    /// Create a completion with a fresh identifier
    #[must_use]
    pub fn new(owner_id: Uuid, routine_id: Option<Uuid>, completed_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            routine_id,
            completed_at,
        }
    }
}

impl Dated for CompletionRecord {
    fn timestamp(&self) -> DateTime<Utc> {
        self.completed_at
    }
}
