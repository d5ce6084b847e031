// ABOUTME: Period completion rate from assignment and completion counts
// ABOUTME: Rounds to an integer percentage, returns zero without assignments, optionally clamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

use crate::config::CompletionConfig;
use coachtrack_core::constants::completion::{CLAMP_CEILING_PERCENT, PERCENT_SCALE};
use coachtrack_core::models::{AssignmentRecord, CompletionRecord};
use coachtrack_core::time::TimeWindow;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// What to do with rates above 100%
///
/// Completions are matched to assignments by window only, so a client who
/// finishes last month's routine this month can exceed 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatePolicy {
    /// Report the raw percentage, flagging values above 100
    #[default]
    Unclamped,
    /// Cap the percentage at 100
    ClampAtHundred,
}

/// `round(100 * completed / assigned)`, or 0 when nothing was assigned
///
/// Rounds half away from zero using integer arithmetic.
///
/// ```rust
/// use coachtrack_intelligence::completion::{compute_completion_rate, RatePolicy};
///
/// assert_eq!(compute_completion_rate(10, 7, RatePolicy::Unclamped), 70);
/// assert_eq!(compute_completion_rate(3, 4, RatePolicy::Unclamped), 133);
/// assert_eq!(compute_completion_rate(3, 4, RatePolicy::ClampAtHundred), 100);
/// assert_eq!(compute_completion_rate(0, 5, RatePolicy::Unclamped), 0);
/// ```
#[must_use]
pub fn compute_completion_rate(assigned: u64, completed: u64, policy: RatePolicy) -> u32 {
    if assigned == 0 {
        return 0;
    }

    let scale = u128::from(PERCENT_SCALE);
    let numerator = 2 * scale * u128::from(completed) + u128::from(assigned);
    let rate = u32::try_from(numerator / (2 * u128::from(assigned))).unwrap_or(u32::MAX);

    match policy {
        RatePolicy::Unclamped => rate,
        RatePolicy::ClampAtHundred => rate.min(CLAMP_CEILING_PERCENT),
    }
}

/// Completion figures for one period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSummary {
    /// Assignments inside the window
    pub assigned: u64,
    /// Completions inside the window
    pub completed: u64,
    /// Integer percentage under the configured policy
    pub rate_percent: u32,
    /// More completions than assignments were counted
    pub exceeds_assigned: bool,
}

/// Completion-rate calculator bound to a clamping policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompletionRateCalculator {
    policy: RatePolicy,
}

impl CompletionRateCalculator {
    /// Create a calculator
    #[must_use]
    pub const fn new(policy: RatePolicy) -> Self {
        Self { policy }
    }

    /// Create a calculator from configuration
    #[must_use]
    pub const fn from_config(config: &CompletionConfig) -> Self {
        Self::new(config.policy)
    }

    /// Summarize already-counted totals
    #[must_use]
    pub fn summarize(&self, assigned: u64, completed: u64) -> CompletionSummary {
        let exceeds_assigned = assigned > 0 && completed > assigned;
        if exceeds_assigned {
            warn!(
                assigned,
                completed,
                policy = ?self.policy,
                "Completions exceed assignments for the period"
            );
        }

        CompletionSummary {
            assigned,
            completed,
            rate_percent: compute_completion_rate(assigned, completed, self.policy),
            exceeds_assigned,
        }
    }

    /// Count both collections against the same window and summarize
    #[must_use]
    pub fn for_window(
        &self,
        window: &TimeWindow,
        assignments: &[AssignmentRecord],
        completions: &[CompletionRecord],
    ) -> CompletionSummary {
        let assigned = window.count_within(assignments);
        let completed = window.count_within(completions);
        debug!(
            window.start = %window.start(),
            window.end = %window.end(),
            assigned,
            completed,
            "Counted completion window"
        );
        self.summarize(assigned, completed)
    }
}
