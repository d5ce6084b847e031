// ABOUTME: Calendar-day normalization, day boundaries, time windows, and clocks
// ABOUTME: Shared date helpers that every streak, rate, and weekly aggregation relies on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

//! # Time Handling
//!
//! Calendar days are computed against an explicit [`DayBoundary`] (the
//! client's stored UTC offset), never the ambient machine time zone, so a
//! streak reads the same on every device. "Now" comes from an injected
//! [`Clock`].

mod calendar;
mod clock;
mod window;

pub use calendar::{parse_timestamp, CalendarDay, DayBoundary};
pub use clock::{Clock, FixedClock, SystemClock};
pub use window::TimeWindow;
