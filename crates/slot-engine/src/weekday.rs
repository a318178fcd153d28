//! Weekday resolution and the two weekday index conventions.
//!
//! Branch operating hours are keyed Sunday-first (`0 = Sunday .. 6 =
//! Saturday`); recurring breaks carry a Monday-first activity set
//! (`0 = Monday .. 6 = Sunday`). Internally the crate uses
//! [`chrono::Weekday`] as the one canonical weekday type and translates
//! at the edges through the functions below — the two integer
//! conventions never travel through the pipeline.
//!
//! Dates are parsed as [`NaiveDate`], i.e. plain calendar dates with no
//! timezone attached. This is what keeps the resolver immune to the
//! classic bug where a `YYYY-MM-DD` string is interpreted as UTC
//! midnight and shifts to the previous local day.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{ResolveError, Result};

/// Parse a `YYYY-MM-DD` string into a timezone-free calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| ResolveError::InvalidDate(s.to_string()))
}

/// The weekday of a calendar date.
pub fn resolve_weekday(date: NaiveDate) -> Weekday {
    date.weekday()
}

/// Branch-hours convention: `0 = Sunday .. 6 = Saturday`.
pub fn branch_day_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

/// Inverse of [`branch_day_index`]. Returns `None` for indices past 6.
pub fn weekday_from_branch_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Recurring-break convention: `0 = Monday .. 6 = Sunday`. Indexes the
/// break's 7-element activity set.
pub fn break_day_index(weekday: Weekday) -> usize {
    weekday.num_days_from_monday() as usize
}
