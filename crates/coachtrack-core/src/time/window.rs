// ABOUTME: Half-open time window shared by every count taken for one period
// ABOUTME: Builds calendar-month, calendar-week, and rolling-day windows under a day boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

use super::{CalendarDay, DayBoundary};
use crate::constants::windows::DAYS_PER_WEEK;
use crate::errors::{AppError, AppResult};
use crate::models::Dated;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// `[start, end)` in UTC
///
/// Build one window per period and hand the same value to every query that
/// counts against that period. Assigned and completed counts then cannot
/// drift apart because their boundaries were recomputed separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// Window between two instants
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` unless `start < end`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> AppResult<Self> {
        if start >= end {
            return Err(AppError::invalid_input(format!(
                "window start {start} must be before end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Whole calendar days `[first, last]` under `boundary`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `last` precedes `first`, or
    /// `ValueOutOfRange` at the edges of the representable calendar
    pub fn from_days(first: CalendarDay, last: CalendarDay, boundary: DayBoundary) -> AppResult<Self> {
        if last < first {
            return Err(AppError::invalid_input(format!(
                "window last day {last} precedes first day {first}"
            )));
        }
        let after_last = last
            .succ()
            .ok_or_else(|| AppError::value_out_of_range(format!("no day after {last}")))?;
        Self::new(day_start(first, boundary)?, day_start(after_last, boundary)?)
    }

    /// The calendar month `year-month`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a month outside 1-12
    pub fn calendar_month(year: i32, month: u32, boundary: DayBoundary) -> AppResult<Self> {
        let first = CalendarDay::from_ymd(year, month, 1)?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let next_first = CalendarDay::from_ymd(next_year, next_month, 1)?;
        Self::new(day_start(first, boundary)?, day_start(next_first, boundary)?)
    }

    /// The calendar month containing `day`
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` at the edges of the representable calendar
    pub fn month_of(day: CalendarDay, boundary: DayBoundary) -> AppResult<Self> {
        Self::calendar_month(day.date().year(), day.date().month(), boundary)
    }

    /// Monday-to-Sunday week containing `day`
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` at the edges of the representable calendar
    pub fn calendar_week(day: CalendarDay, boundary: DayBoundary) -> AppResult<Self> {
        let monday = day
            .week_start()
            .ok_or_else(|| AppError::value_out_of_range(format!("week of {day} underflows")))?;
        let sunday = monday
            .plus_days(DAYS_PER_WEEK.unsigned_abs() - 1)
            .ok_or_else(|| AppError::value_out_of_range(format!("week of {day} overflows")))?;
        Self::from_days(monday, sunday, boundary)
    }

    /// The `days` calendar days ending with (and including) `reference`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `days` is zero
    pub fn rolling_days(reference: CalendarDay, days: u32, boundary: DayBoundary) -> AppResult<Self> {
        if days == 0 {
            return Err(AppError::invalid_input("rolling window must span at least one day"));
        }
        let first = reference
            .minus_days(u64::from(days - 1))
            .ok_or_else(|| AppError::value_out_of_range(format!("{days} days before {reference}")))?;
        Self::from_days(first, reference, boundary)
    }

    /// Inclusive start
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Exclusive end
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Smallest window covering both `self` and `other`
    ///
    /// Used to fetch one superset of rows for several overlapping periods.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Whether `instant` falls inside the window
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Records whose timestamp falls inside the window
    pub fn filter<'a, T: Dated>(&self, records: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        let window = *self;
        records
            .iter()
            .filter(move |record| window.contains(record.timestamp()))
    }

    /// Number of records inside the window
    #[must_use]
    pub fn count_within<T: Dated>(&self, records: &[T]) -> u64 {
        self.filter(records).count() as u64
    }

    /// Calendar days touched by the window under `boundary`, in order
    #[must_use]
    pub fn days(&self, boundary: DayBoundary) -> Vec<CalendarDay> {
        let mut days = Vec::new();
        let mut cursor = Some(boundary.day_of(self.start));
        while let Some(day) = cursor {
            match day.start_instant(boundary) {
                Some(start) if start < self.end => days.push(day),
                _ => break,
            }
            cursor = day.succ();
        }
        days
    }
}

fn day_start(day: CalendarDay, boundary: DayBoundary) -> AppResult<DateTime<Utc>> {
    day.start_instant(boundary)
        .ok_or_else(|| AppError::value_out_of_range(format!("start of {day} is not representable")))
}
