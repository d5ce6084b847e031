// ABOUTME: Weekly activity and completion statistics for a Monday-to-Sunday week
// ABOUTME: Counts per-weekday activity, active days, and the week's completion rate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

use crate::completion::{CompletionRateCalculator, CompletionSummary};
use coachtrack_core::errors::AppResult;
use coachtrack_core::models::{ActivityRecord, AssignmentRecord, CompletionRecord};
use coachtrack_core::time::{CalendarDay, DayBoundary, TimeWindow};
use serde::{Deserialize, Serialize};

/// One week of client activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyStats {
    /// Monday of the week
    pub week_start: CalendarDay,
    /// Window the counts were taken over
    pub window: TimeWindow,
    /// Assignments and completions inside the week
    pub completion: CompletionSummary,
    /// Days with at least one activity record
    pub active_days: u32,
    /// Activity records per weekday, Monday first
    pub daily_activity: [u32; 7],
}

impl WeeklyStats {
    /// Completed workouts this week
    #[must_use]
    pub const fn workouts_completed(&self) -> u64 {
        self.completion.completed
    }
}

/// Weekly statistics aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyStatsAggregator {
    boundary: DayBoundary,
    completion: CompletionRateCalculator,
}

impl WeeklyStatsAggregator {
    /// Create an aggregator
    #[must_use]
    pub const fn new(boundary: DayBoundary, completion: CompletionRateCalculator) -> Self {
        Self {
            boundary,
            completion,
        }
    }

    /// Statistics for the week containing `day`
    ///
    /// # Errors
    ///
    /// Returns an error if the week cannot be represented
    pub fn aggregate(
        &self,
        day: CalendarDay,
        activities: &[ActivityRecord],
        assignments: &[AssignmentRecord],
        completions: &[CompletionRecord],
    ) -> AppResult<WeeklyStats> {
        let window = TimeWindow::calendar_week(day, self.boundary)?;

        let mut daily_activity = [0_u32; 7];
        for activity in window.filter(activities) {
            let weekday = self.boundary.day_of(activity.occurred_at).weekday();
            let slot = weekday.num_days_from_monday() as usize;
            daily_activity[slot] = daily_activity[slot].saturating_add(1);
        }

        let active_days = daily_activity.iter().filter(|count| **count > 0).count();

        Ok(WeeklyStats {
            week_start: self.boundary.day_of(window.start()),
            window,
            completion: self.completion.for_window(&window, assignments, completions),
            active_days: u32::try_from(active_days).unwrap_or(u32::MAX),
            daily_activity,
        })
    }
}
