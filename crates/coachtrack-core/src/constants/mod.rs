// ABOUTME: Application constants for streaks, completion rates, trends, and windows
// ABOUTME: Centralizes the defaults that call sites previously re-derived inline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

/// Streak bookkeeping defaults
pub mod streak {
    /// Most-recent record cap used by the dashboard widgets
    pub const DASHBOARD_LOOKBACK_RECORDS: usize = 30;

    /// Largest gap (in days) between the reference day and the latest active
    /// day that still counts as a current streak under the tolerant policy
    pub const TOLERATED_GAP_DAYS: i64 = 1;
}

/// Completion-rate arithmetic
pub mod completion {
    /// Percentage scale
    pub const PERCENT_SCALE: u64 = 100;

    /// Upper bound applied by the clamping policy
    pub const CLAMP_CEILING_PERCENT: u32 = 100;
}

/// Trend dead-zones per measurement unit
pub mod trend {
    /// Body weight in kilograms
    pub const KILOGRAMS_THRESHOLD: f64 = 0.5;

    /// Body weight in pounds (roughly the kilogram dead-zone)
    pub const POUNDS_THRESHOLD: f64 = 1.0;

    /// Circumference measurements in centimeters
    pub const CENTIMETERS_THRESHOLD: f64 = 0.5;

    /// Circumference measurements in inches
    pub const INCHES_THRESHOLD: f64 = 0.25;

    /// Body-fat and other percentages
    pub const PERCENT_THRESHOLD: f64 = 0.5;

    /// Counts and scores compare strictly
    pub const UNITLESS_THRESHOLD: f64 = 0.0;

    /// Samples a trend is computed from
    pub const SAMPLES_PER_TREND: usize = 2;
}

/// Personal-record reporting
pub mod records {
    /// Personal records achieved within this many days count as recent
    pub const RECENT_WINDOW_DAYS: u32 = 30;
}

/// Calendar and window sizes
pub mod windows {
    /// Days in a week
    pub const DAYS_PER_WEEK: i64 = 7;

    /// Largest accepted UTC offset magnitude, in minutes (18 hours)
    pub const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

    /// Wire format for calendar days
    pub const CALENDAR_DAY_FORMAT: &str = "%Y-%m-%d";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Default service name
    pub const COACHTRACK: &str = "coachtrack";
}
