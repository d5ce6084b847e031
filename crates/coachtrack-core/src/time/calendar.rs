// ABOUTME: Calendar day value type and the fixed-offset day boundary policy
// ABOUTME: Normalizes instants to days and parses dates and timestamps with strict validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

use crate::constants::windows::{CALENDAR_DAY_FORMAT, MAX_UTC_OFFSET_MINUTES};
use crate::errors::{AppError, AppResult};
use chrono::{
    DateTime, Datelike, Days, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Utc, Weekday,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A date with time-of-day discarded
///
/// Serialized as `YYYY-MM-DD`.
///
/// ```rust
/// use coachtrack_core::time::CalendarDay;
///
/// let day = CalendarDay::parse("2025-03-14").unwrap();
/// assert_eq!(day.to_string(), "2025-03-14");
/// assert!(CalendarDay::parse("14/03/2025").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    /// Wrap a date
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build from year, month, and day
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the components do not form a real date
    pub fn from_ymd(year: i32, month: u32, day: u32) -> AppResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                AppError::invalid_input(format!("{year:04}-{month:02}-{day:02} is not a valid date"))
            })
    }

    /// Parse a `YYYY-MM-DD` string
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for anything that is not a real `YYYY-MM-DD` date
    pub fn parse(value: &str) -> AppResult<Self> {
        NaiveDate::parse_from_str(value.trim(), CALENDAR_DAY_FORMAT)
            .map(Self)
            .map_err(|e| {
                AppError::invalid_format(format!(
                    "invalid calendar day '{value}', expected YYYY-MM-DD"
                ))
                .with_source(e)
            })
    }

    /// Underlying date
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// The day before, if representable
    #[must_use]
    pub fn pred(self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }

    /// The day after, if representable
    #[must_use]
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// This day moved back `days` days
    #[must_use]
    pub fn minus_days(self, days: u64) -> Option<Self> {
        self.0.checked_sub_days(Days::new(days)).map(Self)
    }

    /// This day moved forward `days` days
    #[must_use]
    pub fn plus_days(self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Self)
    }

    /// Whole days from `earlier` to `self` (negative when `earlier` is later)
    #[must_use]
    pub fn days_since(self, earlier: Self) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }

    /// Day of the week
    #[must_use]
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Monday of the week containing this day, if representable
    #[must_use]
    pub fn week_start(self) -> Option<Self> {
        let offset = u64::from(self.0.weekday().num_days_from_monday());
        self.minus_days(offset)
    }

    /// First day of the month containing this day, if representable
    #[must_use]
    pub fn month_start(self) -> Option<Self> {
        self.0.with_day(1).map(Self)
    }

    /// Instant this day begins at under `boundary`
    ///
    /// `None` only at the extreme ends of the representable range.
    #[must_use]
    pub fn start_instant(self, boundary: DayBoundary) -> Option<DateTime<Utc>> {
        boundary
            .offset()
            .from_local_datetime(&self.0.and_time(NaiveTime::MIN))
            .single()
            .map(|local| local.with_timezone(&Utc))
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CALENDAR_DAY_FORMAT))
    }
}

impl FromStr for CalendarDay {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// Where one calendar day ends and the next begins
///
/// Stored as the client's preferred UTC offset in minutes. Defaults to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct DayBoundary {
    utc_offset_minutes: i32,
}

impl DayBoundary {
    /// Days split at UTC midnight
    #[must_use]
    pub const fn utc() -> Self {
        Self {
            utc_offset_minutes: 0,
        }
    }

    /// Days split at local midnight for a fixed offset east of UTC
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the offset exceeds 18 hours in either direction
    pub fn from_offset_minutes(utc_offset_minutes: i32) -> AppResult<Self> {
        if utc_offset_minutes.unsigned_abs() > MAX_UTC_OFFSET_MINUTES.unsigned_abs() {
            return Err(AppError::value_out_of_range(format!(
                "UTC offset of {utc_offset_minutes} minutes exceeds +/-{MAX_UTC_OFFSET_MINUTES}"
            )));
        }
        Ok(Self { utc_offset_minutes })
    }

    /// Configured offset in minutes east of UTC
    #[must_use]
    pub const fn utc_offset_minutes(self) -> i32 {
        self.utc_offset_minutes
    }

    /// Offset as a chrono time zone
    #[must_use]
    pub fn offset(self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
    }

    /// Calendar day an instant falls on
    #[must_use]
    pub fn day_of(self, instant: DateTime<Utc>) -> CalendarDay {
        CalendarDay(instant.with_timezone(&self.offset()).date_naive())
    }
}

impl TryFrom<i32> for DayBoundary {
    type Error = AppError;

    fn try_from(utc_offset_minutes: i32) -> Result<Self, Self::Error> {
        Self::from_offset_minutes(utc_offset_minutes)
    }
}

impl From<DayBoundary> for i32 {
    fn from(boundary: DayBoundary) -> Self {
        boundary.utc_offset_minutes
    }
}

/// Parse an RFC 3339 timestamp into UTC
///
/// # Errors
///
/// Returns `InvalidFormat` naming the offending value instead of coercing it
pub fn parse_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| {
            AppError::invalid_format(format!("invalid RFC 3339 timestamp '{value}'"))
                .with_source(e)
        })
}
