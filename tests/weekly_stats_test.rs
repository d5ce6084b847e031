// ABOUTME: Integration tests for weekly activity and completion statistics
// ABOUTME: Covers per-weekday counts, active days, and week edges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use coachtrack::intelligence::completion::{CompletionRateCalculator, RatePolicy};
use coachtrack::intelligence::weekly::WeeklyStatsAggregator;
use coachtrack::time::DayBoundary;
use common::{assignments, completions, day, workouts};
use uuid::Uuid;

#[test]
fn test_weekly_counts() {
    let owner = Uuid::new_v4();
    let activities = workouts(
        owner,
        &[
            "2025-06-08", // previous Sunday
            "2025-06-09",
            "2025-06-09",
            "2025-06-11",
            "2025-06-15",
            "2025-06-16", // next Monday
        ],
    );
    let assigned = assignments(owner, &["2025-06-09", "2025-06-11", "2025-06-13", "2025-06-16"]);
    let done = completions(owner, &["2025-06-09", "2025-06-11"]);

    let aggregator = WeeklyStatsAggregator::new(DayBoundary::utc(), CompletionRateCalculator::default());
    let stats = aggregator
        .aggregate(day("2025-06-12"), &activities, &assigned, &done)
        .unwrap();

    assert_eq!(stats.week_start, day("2025-06-09"));
    assert_eq!(stats.daily_activity, [2, 0, 1, 0, 0, 0, 1]);
    assert_eq!(stats.active_days, 3);
    assert_eq!(stats.completion.assigned, 3);
    assert_eq!(stats.workouts_completed(), 2);
    assert_eq!(stats.completion.rate_percent, 67);
}

#[test]
fn test_empty_week() {
    let aggregator = WeeklyStatsAggregator::new(DayBoundary::utc(), CompletionRateCalculator::default());
    let stats = aggregator.aggregate(day("2025-06-12"), &[], &[], &[]).unwrap();
    assert_eq!(stats.active_days, 0);
    assert_eq!(stats.daily_activity, [0; 7]);
    assert_eq!(stats.completion.rate_percent, 0);
}

#[test]
fn test_weekly_rate_follows_policy() {
    let owner = Uuid::new_v4();
    let assigned = assignments(owner, &["2025-06-09"]);
    let done = completions(owner, &["2025-06-09", "2025-06-10"]);

    let clamped = WeeklyStatsAggregator::new(
        DayBoundary::utc(),
        CompletionRateCalculator::new(RatePolicy::ClampAtHundred),
    );
    let stats = clamped
        .aggregate(day("2025-06-10"), &[], &assigned, &done)
        .unwrap();
    assert_eq!(stats.completion.rate_percent, 100);
    assert!(stats.completion.exceeds_assigned);
}
