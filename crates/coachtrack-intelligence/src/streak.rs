// ABOUTME: Consecutive-day streak calculation over dated activity records
// ABOUTME: Normalizes timestamps to distinct calendar days and walks back from a reference day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

//! Streak calculation.
//!
//! One parameterized implementation replaces the per-widget copies that
//! disagreed about whether yesterday still counts. The boundary rule is an
//! explicit [`StreakPolicy`].

use crate::config::StreakConfig;
use coachtrack_core::constants::streak::TOLERATED_GAP_DAYS;
use coachtrack_core::models::Dated;
use chrono::{DateTime, Utc};
use coachtrack_core::time::{CalendarDay, DayBoundary};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::Bound;
use tracing::{debug, warn};

/// How far the most recent active day may sit from the reference day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakPolicy {
    /// The run must include the reference day itself
    Strict,
    /// The run may end on the reference day or the day before
    #[default]
    Tolerant,
}

impl StreakPolicy {
    /// Largest allowed gap between the reference day and the latest active day
    #[must_use]
    pub const fn max_start_gap_days(self) -> i64 {
        match self {
            Self::Strict => 0,
            Self::Tolerant => TOLERATED_GAP_DAYS,
        }
    }
}

/// Collapse record timestamps into distinct calendar days
///
/// With `lookback_records = Some(n)` only the `n` most recent records are
/// considered. A streak longer than the span those records cover is then
/// undercounted; that matches the capped dashboard queries.
#[must_use]
pub fn distinct_days<T: Dated>(
    records: &[T],
    boundary: DayBoundary,
    lookback_records: Option<usize>,
) -> BTreeSet<CalendarDay> {
    collapse_days(records.iter().map(Dated::timestamp), boundary, lookback_records)
}

fn collapse_days(
    instants: impl Iterator<Item = DateTime<Utc>>,
    boundary: DayBoundary,
    lookback_records: Option<usize>,
) -> BTreeSet<CalendarDay> {
    match lookback_records {
        None => instants.map(|instant| boundary.day_of(instant)).collect(),
        Some(limit) => {
            let mut instants: Vec<_> = instants.collect();
            instants.sort_unstable_by(|a, b| b.cmp(a));
            instants
                .into_iter()
                .take(limit)
                .map(|instant| boundary.day_of(instant))
                .collect()
        }
    }
}

/// Length of the current run of consecutive active days
///
/// Days after `reference` are ignored. Returns 0 when the latest active day
/// is further from `reference` than `policy` allows.
///
/// ```rust
/// use coachtrack_core::time::CalendarDay;
/// use coachtrack_intelligence::streak::{compute_streak, StreakPolicy};
/// use std::collections::BTreeSet;
///
/// let today = CalendarDay::parse("2025-06-10").unwrap();
/// let days: BTreeSet<_> = ["2025-06-09", "2025-06-08"]
///     .iter()
///     .map(|d| CalendarDay::parse(d).unwrap())
///     .collect();
///
/// assert_eq!(compute_streak(&days, today, StreakPolicy::Tolerant), 2);
/// assert_eq!(compute_streak(&days, today, StreakPolicy::Strict), 0);
/// ```
#[must_use]
pub fn compute_streak(
    days: &BTreeSet<CalendarDay>,
    reference: CalendarDay,
    policy: StreakPolicy,
) -> u32 {
    let future_days = days
        .range((Bound::Excluded(reference), Bound::Unbounded))
        .count();
    if future_days > 0 {
        warn!(
            reference = %reference,
            future_days,
            "Ignoring activity days after the reference day"
        );
    }

    let mut recent = days.range(..=reference).rev();
    let Some(&latest) = recent.next() else {
        return 0;
    };

    if reference.days_since(latest) > policy.max_start_gap_days() {
        return 0;
    }

    let mut streak = 1_u32;
    let mut cursor = latest.pred();
    for &day in recent {
        if Some(day) != cursor {
            break;
        }
        streak += 1;
        cursor = day.pred();
    }
    streak
}

/// Longest run of consecutive active days anywhere in `days`
#[must_use]
pub fn longest_streak(days: &BTreeSet<CalendarDay>) -> u32 {
    let mut longest = 0_u32;
    let mut run = 0_u32;
    let mut previous: Option<CalendarDay> = None;

    for &day in days {
        run = match previous {
            Some(prev) if prev.succ() == Some(day) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }
    longest
}

/// Streak figures shown on a client's dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Current run ending at (or, if tolerated, just before) the reference day
    pub current: u32,
    /// Longest run on or before the reference day
    pub longest: u32,
    /// Distinct active days on or before the reference day
    pub active_days: u32,
    /// Most recent active day on or before the reference day
    pub last_active_day: Option<CalendarDay>,
}

/// Streak calculator bound to a policy, lookback cap, and day boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakCalculator {
    policy: StreakPolicy,
    lookback_records: Option<usize>,
    boundary: DayBoundary,
}

impl StreakCalculator {
    /// Create a calculator
    #[must_use]
    pub const fn new(
        policy: StreakPolicy,
        lookback_records: Option<usize>,
        boundary: DayBoundary,
    ) -> Self {
        Self {
            policy,
            lookback_records,
            boundary,
        }
    }

    /// Create a calculator from configuration
    #[must_use]
    pub const fn from_config(config: &StreakConfig, boundary: DayBoundary) -> Self {
        Self::new(config.policy, config.lookback_records, boundary)
    }

    /// Configured policy
    #[must_use]
    pub const fn policy(&self) -> StreakPolicy {
        self.policy
    }

    /// Current streak for `records` as of `reference`
    ///
    /// Records after `reference` are dropped before the lookback cap is
    /// applied, so they never displace the records the streak is built from.
    #[must_use]
    pub fn current<T: Dated>(&self, records: &[T], reference: CalendarDay) -> u32 {
        let boundary = self.boundary;
        let (past, future): (Vec<_>, Vec<_>) = records
            .iter()
            .map(Dated::timestamp)
            .partition(|instant| boundary.day_of(*instant) <= reference);
        if !future.is_empty() {
            warn!(
                reference = %reference,
                future_records = future.len(),
                "Ignoring activity records after the reference day"
            );
        }

        let days = collapse_days(past.into_iter(), boundary, self.lookback_records);
        compute_streak(&days, reference, self.policy)
    }

    /// Current and longest streak plus activity totals
    ///
    /// The lookback cap only applies to the current streak; longest streak and
    /// active-day totals use the full history.
    #[must_use]
    pub fn summarize<T: Dated>(&self, records: &[T], reference: CalendarDay) -> StreakSummary {
        let current = self.current(records, reference);

        let mut history = distinct_days(records, self.boundary, None);
        history.retain(|day| *day <= reference);

        let summary = StreakSummary {
            current,
            longest: longest_streak(&history).max(current),
            active_days: u32::try_from(history.len()).unwrap_or(u32::MAX),
            last_active_day: history.last().copied(),
        };

        debug!(
            reference = %reference,
            policy = ?self.policy,
            current = summary.current,
            longest = summary.longest,
            active_days = summary.active_days,
            "Computed streak summary"
        );
        summary
    }
}
